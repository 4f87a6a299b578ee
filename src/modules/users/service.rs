use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::Utc;
use uuid::Uuid;

use crate::modules::users::model::{UpdateProfileDto, User, UserRole};
use crate::utils::errors::AppError;

/// In-memory user store keyed by wallet address.
#[derive(Clone, Debug, Default)]
pub struct UserService {
    inner: Arc<RwLock<HashMap<String, User>>>,
}

impl UserService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the user for an address, creating a default-role record the
    /// first time the address is seen.
    pub fn ensure(&self, address: &str) -> User {
        let mut users = self.inner.write().expect("user store lock poisoned");
        users
            .entry(address.to_string())
            .or_insert_with(|| User {
                id: Uuid::new_v4(),
                address: address.to_string(),
                username: None,
                bio: None,
                role: UserRole::User,
                created_at: Utc::now(),
            })
            .clone()
    }

    pub fn get_by_address(&self, address: &str) -> Result<User, AppError> {
        let users = self.inner.read().expect("user store lock poisoned");
        users
            .get(address)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("User {} not found", address)))
    }

    pub fn update_profile(
        &self,
        address: &str,
        dto: UpdateProfileDto,
    ) -> Result<User, AppError> {
        let mut users = self.inner.write().expect("user store lock poisoned");
        let user = users
            .get_mut(address)
            .ok_or_else(|| AppError::not_found(format!("User {} not found", address)))?;

        if let Some(username) = dto.username {
            user.username = Some(username);
        }
        if let Some(bio) = dto.bio {
            user.bio = Some(bio);
        }

        Ok(user.clone())
    }

    pub fn list(&self) -> Vec<User> {
        let users = self.inner.read().expect("user store lock poisoned");
        let mut all: Vec<User> = users.values().cloned().collect();
        all.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        all
    }

    pub fn count(&self) -> usize {
        self.inner.read().expect("user store lock poisoned").len()
    }
}
