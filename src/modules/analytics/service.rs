use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use uuid::Uuid;

use crate::modules::analytics::model::OverviewResponse;
use crate::modules::tokens::model::TokenStatus;
use crate::modules::tokens::service::TokenService;

/// Tracks per-token view counts and derives launchpad-wide summaries
/// from the token store.
#[derive(Clone, Debug, Default)]
pub struct AnalyticsService {
    views: Arc<RwLock<HashMap<Uuid, u64>>>,
}

impl AnalyticsService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a view and return the updated total.
    pub fn record_view(&self, token_id: Uuid) -> u64 {
        let mut views = self.views.write().expect("view counter lock poisoned");
        let count = views.entry(token_id).or_insert(0);
        *count += 1;
        *count
    }

    pub fn overview(&self, tokens: &TokenService, viewer: Option<String>) -> OverviewResponse {
        OverviewResponse {
            total_tokens: tokens.count(),
            active_tokens: tokens.count_with_status(TokenStatus::Active),
            flagged_tokens: tokens.count_with_status(TokenStatus::Flagged),
            total_market_cap: tokens.total_market_cap(),
            personalized: viewer.is_some(),
            viewer_address: viewer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_view_increments() {
        let service = AnalyticsService::new();
        let id = Uuid::new_v4();
        assert_eq!(service.record_view(id), 1);
        assert_eq!(service.record_view(id), 2);
    }

    #[test]
    fn test_overview_personalization() {
        let service = AnalyticsService::new();
        let tokens = TokenService::new();

        let anonymous = service.overview(&tokens, None);
        assert!(!anonymous.personalized);
        assert_eq!(anonymous.viewer_address, None);

        let personal = service.overview(&tokens, Some("0xabc".to_string()));
        assert!(personal.personalized);
        assert_eq!(personal.viewer_address.as_deref(), Some("0xabc"));
    }
}
