use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::RepositoryError;

/// Process-local user store keyed by email.
///
/// Behaves like the Postgres adapter: it assigns `id` and `created_at`, and
/// the uniqueness check and insert happen under one write lock.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, RepositoryError> {
        let mut users = self.users.write().await;

        if users.contains_key(&user.email) {
            return Err(RepositoryError::Duplicate(user.email));
        }

        let stored = User {
            id: UserId(Uuid::new_v4()),
            email: user.email,
            password_hash: user.password_hash,
            details: user.details,
            created_at: Utc::now(),
        };
        users.insert(stored.email.clone(), stored.clone());

        Ok(stored)
    }

    async fn get_by_id(&self, id: &UserId) -> Result<User, RepositoryError> {
        self.users
            .read()
            .await
            .values()
            .find(|user| user.id == *id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn get_by_credentials(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<User, RepositoryError> {
        match self.users.read().await.get(email) {
            Some(user) if user.password_hash == password_hash => Ok(user.clone()),
            _ => Err(RepositoryError::NotFound),
        }
    }
}
