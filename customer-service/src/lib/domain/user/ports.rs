use std::time::Duration;

use async_trait::async_trait;

use crate::domain::user::models::NewUser;
use crate::domain::user::models::SignInCommand;
use crate::domain::user::models::SignUpCommand;
use crate::domain::user::models::Token;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::PasswordError;
use crate::user::errors::RepositoryError;
use crate::user::errors::TokenError;
use crate::user::errors::UserError;

/// Port for the authentication service.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new user.
    ///
    /// # Arguments
    /// * `command` - Raw sign-up input
    ///
    /// # Errors
    /// * `FailedValidation` - One or more input checks failed
    /// * `Duplicate` - Email is already registered
    /// * `Password` / `Repository` - Infrastructure failure
    async fn sign_up(&self, command: SignUpCommand) -> Result<(), UserError>;

    /// Authenticate a user and issue a session token.
    ///
    /// # Arguments
    /// * `command` - Email and plaintext password
    ///
    /// # Returns
    /// Freshly issued bearer token
    ///
    /// # Errors
    /// * `WrongCredentials` - No user matches the email/password pair
    /// * `Password` / `Token` / `Repository` - Infrastructure failure
    async fn sign_in(&self, command: SignInCommand) -> Result<Token, UserError>;
}

/// Persistence operations for the user aggregate.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user; the store assigns `id` and `created_at`.
    ///
    /// # Errors
    /// * `Duplicate` - Email is already registered
    /// * `Database` - Any other storage failure
    async fn create(&self, user: NewUser) -> Result<User, RepositoryError>;

    /// Retrieve user by identifier.
    ///
    /// # Errors
    /// * `NotFound` - No user with this id
    /// * `Database` - Any other storage failure
    async fn get_by_id(&self, id: &UserId) -> Result<User, RepositoryError>;

    /// Retrieve the user whose email and credential hash both match exactly.
    ///
    /// # Errors
    /// * `NotFound` - No user matches both fields
    /// * `Database` - Any other storage failure
    async fn get_by_credentials(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<User, RepositoryError>;
}

/// Deterministic one-way transform of a plaintext credential.
pub trait CredentialHasher: Send + Sync + 'static {
    fn hash(&self, plaintext: &str) -> Result<String, PasswordError>;
}

/// Issues opaque bearer tokens. The service never looks inside them.
pub trait TokenIssuer: Send + Sync + 'static {
    fn issue(&self, user_id: &UserId, ttl: Duration) -> Result<String, TokenError>;
}
