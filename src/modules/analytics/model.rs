use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::tokens::model::TokenStatus;

/// Launchpad-wide activity summary. When the caller presented a valid
/// session token the response is marked personalized and echoes the
/// viewer's address.
#[derive(Serialize, Debug, Clone, ToSchema)]
pub struct OverviewResponse {
    pub total_tokens: usize,
    pub active_tokens: usize,
    pub flagged_tokens: usize,
    pub total_market_cap: f64,
    pub personalized: bool,
    pub viewer_address: Option<String>,
}

#[derive(Serialize, Debug, Clone, ToSchema)]
pub struct TokenStatsResponse {
    pub id: Uuid,
    pub address: String,
    pub status: TokenStatus,
    pub market_cap: f64,
    pub holders: u64,
    pub views: u64,
}
