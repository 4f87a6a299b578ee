use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::modules::users::model::User;

/// JWT claims for session access tokens.
///
/// These claims carry the full verified identity, so authenticated
/// requests never need a store lookup.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    /// User ID (subject claim)
    pub sub: String,
    /// Wallet address of the authenticated user
    pub address: String,
    /// System role name ("user", "moderator", "admin")
    pub role: String,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: usize,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: usize,
}

/// DTO for opening a session with a signed wallet challenge.
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct SessionRequest {
    #[validate(length(min = 4, max = 64))]
    pub address: String,
    #[validate(length(min = 1))]
    pub signature: String,
}

#[derive(Serialize, Debug, Clone, ToSchema)]
pub struct SessionResponse {
    pub access_token: String,
    pub user: User,
}

#[derive(Serialize, Debug, Clone, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}
