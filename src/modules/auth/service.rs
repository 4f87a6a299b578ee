use crate::config::jwt::JwtConfig;
use crate::modules::auth::model::{SessionRequest, SessionResponse};
use crate::modules::users::service::UserService;
use crate::utils::errors::AppError;
use crate::utils::jwt::create_access_token;

pub struct AuthService;

impl AuthService {
    /// Exchange a signed wallet challenge for a session token. First-time
    /// addresses get a user record with the default role.
    pub fn create_session(
        users: &UserService,
        dto: SessionRequest,
        jwt_config: &JwtConfig,
    ) -> Result<SessionResponse, AppError> {
        verify_wallet_signature(&dto.address, &dto.signature)?;

        let user = users.ensure(&dto.address);
        let access_token = create_access_token(user.id, &user.address, &user.role, jwt_config)?;

        Ok(SessionResponse { access_token, user })
    }
}

/// Shape check on the signed challenge. Verifying the signature against
/// the chain is the wallet collaborator's job; this service only rejects
/// requests that cannot possibly carry a valid one.
fn verify_wallet_signature(address: &str, signature: &str) -> Result<(), AppError> {
    if !address.starts_with("0x") {
        return Err(AppError::validation("Address must be 0x-prefixed"));
    }
    if signature.trim().is_empty() {
        return Err(AppError::validation("Signature is required"));
    }
    Ok(())
}
