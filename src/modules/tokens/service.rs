use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::Utc;
use uuid::Uuid;

use crate::modules::tokens::model::{CreateTokenDto, LaunchToken, TokenStatus};
use crate::utils::errors::AppError;

/// In-memory token listing store, constructed once and shared through
/// [`crate::state::AppState`]. Persistence is handled by collaborators
/// outside this service.
#[derive(Clone, Debug, Default)]
pub struct TokenService {
    inner: Arc<RwLock<HashMap<Uuid, LaunchToken>>>,
}

impl TokenService {
    pub fn new() -> Self {
        Self::default()
    }

    /// List a new token. The contract address is unique; a second listing
    /// with the same address is a duplicate-field conflict.
    pub fn create(&self, dto: CreateTokenDto, creator: &str) -> Result<LaunchToken, AppError> {
        let mut tokens = self.inner.write().expect("token store lock poisoned");

        if tokens.values().any(|t| t.address == dto.address) {
            return Err(AppError::duplicate_field(format!(
                "Token address {} is already registered",
                dto.address
            )));
        }

        let token = LaunchToken {
            id: Uuid::new_v4(),
            address: dto.address,
            name: dto.name,
            symbol: dto.symbol,
            description: dto.description,
            creator: creator.to_string(),
            status: TokenStatus::Pending,
            market_cap: 0.0,
            holders: 0,
            created_at: Utc::now(),
        };

        tokens.insert(token.id, token.clone());
        Ok(token)
    }

    /// All tokens, newest first.
    pub fn list(&self) -> Vec<LaunchToken> {
        let tokens = self.inner.read().expect("token store lock poisoned");
        let mut all: Vec<LaunchToken> = tokens.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        all
    }

    pub fn get(&self, id: Uuid) -> Result<LaunchToken, AppError> {
        let tokens = self.inner.read().expect("token store lock poisoned");
        tokens
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("Token {} not found", id)))
    }

    /// Delete a listing. Only the creator may do so, unless the caller
    /// holds an elevated role.
    pub fn delete(
        &self,
        id: Uuid,
        requester: &str,
        elevated: bool,
    ) -> Result<LaunchToken, AppError> {
        let mut tokens = self.inner.write().expect("token store lock poisoned");

        let token = tokens
            .get(&id)
            .ok_or_else(|| AppError::not_found(format!("Token {} not found", id)))?;

        if !elevated && token.creator != requester {
            return Err(AppError::forbidden("Only the creator can delete a token"));
        }

        Ok(tokens.remove(&id).expect("token present under write lock"))
    }

    pub fn set_status(&self, id: Uuid, status: TokenStatus) -> Result<LaunchToken, AppError> {
        let mut tokens = self.inner.write().expect("token store lock poisoned");
        let token = tokens
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(format!("Token {} not found", id)))?;
        token.status = status;
        Ok(token.clone())
    }

    pub fn count(&self) -> usize {
        self.inner.read().expect("token store lock poisoned").len()
    }

    pub fn count_with_status(&self, status: TokenStatus) -> usize {
        self.inner
            .read()
            .expect("token store lock poisoned")
            .values()
            .filter(|t| t.status == status)
            .count()
    }

    pub fn total_market_cap(&self) -> f64 {
        self.inner
            .read()
            .expect("token store lock poisoned")
            .values()
            .map(|t| t.market_cap)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_dto(address: &str) -> CreateTokenDto {
        CreateTokenDto {
            name: "Dogewife".to_string(),
            symbol: "DWIF".to_string(),
            address: address.to_string(),
            description: None,
        }
    }

    #[test]
    fn test_create_and_get() {
        let service = TokenService::new();
        let token = service.create(create_dto("0xabc"), "0xcreator").unwrap();
        assert_eq!(token.status, TokenStatus::Pending);
        assert_eq!(service.get(token.id).unwrap().address, "0xabc");
    }

    #[test]
    fn test_duplicate_address_rejected() {
        let service = TokenService::new();
        service.create(create_dto("0xabc"), "0xcreator").unwrap();
        let result = service.create(create_dto("0xabc"), "0xother");
        assert!(matches!(result, Err(AppError::DuplicateField(_))));
    }

    #[test]
    fn test_get_unknown_is_not_found() {
        let service = TokenService::new();
        assert!(matches!(
            service.get(Uuid::new_v4()),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_delete_requires_creator() {
        let service = TokenService::new();
        let token = service.create(create_dto("0xabc"), "0xcreator").unwrap();

        let result = service.delete(token.id, "0xsomeone", false);
        assert!(matches!(result, Err(AppError::Forbidden(_))));

        assert!(service.delete(token.id, "0xcreator", false).is_ok());
    }

    #[test]
    fn test_delete_elevated_bypasses_ownership() {
        let service = TokenService::new();
        let token = service.create(create_dto("0xabc"), "0xcreator").unwrap();
        assert!(service.delete(token.id, "0xmod", true).is_ok());
        assert_eq!(service.count(), 0);
    }

    #[test]
    fn test_status_counts() {
        let service = TokenService::new();
        let a = service.create(create_dto("0xa"), "0xcreator").unwrap();
        service.create(create_dto("0xb"), "0xcreator").unwrap();
        service.set_status(a.id, TokenStatus::Flagged).unwrap();

        assert_eq!(service.count_with_status(TokenStatus::Flagged), 1);
        assert_eq!(service.count_with_status(TokenStatus::Pending), 1);
    }
}
