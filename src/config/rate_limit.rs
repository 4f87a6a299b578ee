use tower_governor::governor::{GovernorConfig, GovernorConfigBuilder};
use tower_governor::key_extractor::PeerIpKeyExtractor;

/// Rate limit configuration for the API, keyed by peer IP.
#[derive(Clone, Debug)]
pub struct RateLimitConfig {
    /// Replenish rate in requests per second
    pub per_second: u64,
    /// Burst size before requests are rejected
    pub burst_size: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            per_second: 2,
            burst_size: 30,
        }
    }
}

impl RateLimitConfig {
    pub fn from_env() -> Self {
        Self {
            per_second: std::env::var("RATE_LIMIT_PER_SECOND")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(2),
            burst_size: std::env::var("RATE_LIMIT_BURST_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        }
    }

    /// Create the GovernorConfig applied in front of the router.
    pub fn governor_config(
        &self,
    ) -> GovernorConfig<PeerIpKeyExtractor, ::governor::middleware::NoOpMiddleware> {
        GovernorConfigBuilder::default()
            .per_second(self.per_second)
            .burst_size(self.burst_size)
            .key_extractor(PeerIpKeyExtractor)
            .finish()
            .expect("Failed to build rate limiter config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RateLimitConfig::default();
        assert_eq!(config.per_second, 2);
        assert_eq!(config.burst_size, 30);
    }

    #[test]
    fn test_governor_config_builds() {
        let config = RateLimitConfig::default();
        let _ = config.governor_config();
    }

    #[test]
    fn test_governor_layer_constructs() {
        let config = RateLimitConfig::default();
        let _: tower_governor::GovernorLayer<_, _, axum::body::Body> =
            tower_governor::GovernorLayer::new(config.governor_config());
    }
}
