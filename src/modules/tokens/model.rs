//! Launchpad token models and DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Lifecycle status of a launched token.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TokenStatus {
    Pending,
    Active,
    Flagged,
    Delisted,
}

/// A token listed on the launchpad.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct LaunchToken {
    pub id: Uuid,
    /// On-chain contract address, unique across the launchpad
    pub address: String,
    pub name: String,
    pub symbol: String,
    pub description: Option<String>,
    /// Wallet address of the creator
    pub creator: String,
    pub status: TokenStatus,
    pub market_cap: f64,
    pub holders: u64,
    pub created_at: DateTime<Utc>,
}

/// DTO for listing a new token.
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct CreateTokenDto {
    #[validate(length(min = 1, max = 64))]
    pub name: String,
    #[validate(length(min = 2, max = 12))]
    pub symbol: String,
    /// Contract address of the deployed token
    #[validate(length(min = 4, max = 64))]
    pub address: String,
    #[validate(length(max = 500))]
    pub description: Option<String>,
}
