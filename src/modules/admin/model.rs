use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::modules::tokens::model::TokenStatus;

#[derive(Serialize, Debug, Clone, ToSchema)]
pub struct AdminStatsResponse {
    pub total_tokens: usize,
    pub total_users: usize,
    pub pending_tokens: usize,
    pub flagged_tokens: usize,
}

#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct UpdateTokenStatusDto {
    pub status: TokenStatus,
}

#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct FlagTokenDto {
    #[validate(length(max = 280))]
    pub reason: Option<String>,
}
