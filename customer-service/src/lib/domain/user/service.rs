use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::user::models::NewUser;
use crate::domain::user::models::SignInCommand;
use crate::domain::user::models::SignUpCommand;
use crate::domain::user::models::Token;
use crate::domain::user::models::UserDetails;
use crate::domain::user::validation::validate_new_user;
use crate::domain::user::validation::validate_password;
use crate::domain::user::validation::Validation;
use crate::user::errors::PasswordError;
use crate::user::errors::RepositoryError;
use crate::user::errors::UserError;
use crate::user::ports::CredentialHasher;
use crate::user::ports::TokenIssuer;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Validity of a session token issued on sign-in.
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(12 * 60 * 60);

/// Domain service implementation for sign-up and sign-in.
///
/// Concrete implementation of UserServicePort with dependency injection.
pub struct UserService<UR, H, TI>
where
    UR: UserRepository,
    H: CredentialHasher,
    TI: TokenIssuer,
{
    repository: Arc<UR>,
    hasher: Arc<H>,
    token_issuer: Arc<TI>,
    token_ttl: Duration,
}

impl<UR, H, TI> UserService<UR, H, TI>
where
    UR: UserRepository,
    H: CredentialHasher,
    TI: TokenIssuer,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `hasher` - Credential hashing implementation
    /// * `token_issuer` - Session token implementation
    ///
    /// # Returns
    /// Service issuing tokens valid for [`DEFAULT_TOKEN_TTL`]
    pub fn new(repository: Arc<UR>, hasher: Arc<H>, token_issuer: Arc<TI>) -> Self {
        Self {
            repository,
            hasher,
            token_issuer,
            token_ttl: DEFAULT_TOKEN_TTL,
        }
    }

    pub fn with_token_ttl(mut self, token_ttl: Duration) -> Self {
        self.token_ttl = token_ttl;
        self
    }

    // Argon2 is CPU-bound; keep it off the async workers.
    async fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        let hasher = Arc::clone(&self.hasher);
        let password = password.to_owned();

        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))?
    }
}

#[async_trait]
impl<UR, H, TI> UserServicePort for UserService<UR, H, TI>
where
    UR: UserRepository,
    H: CredentialHasher,
    TI: TokenIssuer,
{
    #[tracing::instrument(name = "UserService::sign_up", skip_all, fields(email = %command.email))]
    async fn sign_up(&self, command: SignUpCommand) -> Result<(), UserError> {
        let password_hash = self.hash_password(&command.password).await?;

        let user = NewUser {
            email: command.email,
            password_hash,
            details: UserDetails {
                first_name: command.first_name,
                last_name: command.last_name,
                phone: command.phone,
            },
        };

        let validation = validate_new_user(
            validate_password(Validation::new(), &command.password),
            &user,
        );
        if !validation.is_valid() {
            tracing::debug!(
                fields = ?validation.failed_fields(),
                "Sign-up input failed validation"
            );
            return Err(UserError::FailedValidation);
        }

        let created_user = self.repository.create(user).await.map_err(|e| match e {
            RepositoryError::Duplicate(email) => UserError::Duplicate(email),
            other => UserError::Repository(other),
        })?;

        tracing::info!(user_id = %created_user.id, "User registered");

        Ok(())
    }

    #[tracing::instrument(name = "UserService::sign_in", skip_all, fields(email = %command.email))]
    async fn sign_in(&self, command: SignInCommand) -> Result<Token, UserError> {
        let password_hash = self.hash_password(&command.password).await?;

        let user = self
            .repository
            .get_by_credentials(&command.email, &password_hash)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => UserError::WrongCredentials,
                other => UserError::Repository(other),
            })?;

        let plain_text = self.token_issuer.issue(&user.id, self.token_ttl)?;

        tracing::info!(user_id = %user.id, "User signed in");

        Ok(Token { plain_text })
    }
}
