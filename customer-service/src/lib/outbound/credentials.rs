//! Adapters from the `auth` crate to the credential and token ports.

use std::time::Duration;

use auth::Claims;
use auth::JwtError;
use auth::JwtHandler;
use auth::PasswordHasher;
use chrono::Utc;
use uuid::Uuid;

use crate::config::HashingConfig;
use crate::config::JwtConfig;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::CredentialHasher;
use crate::domain::user::ports::TokenIssuer;
use crate::user::errors::PasswordError;
use crate::user::errors::TokenError;

/// Keyed Argon2id credential hasher.
pub struct ArgonCredentialHasher {
    hasher: PasswordHasher,
}

impl ArgonCredentialHasher {
    pub fn new(hasher: PasswordHasher) -> Self {
        Self { hasher }
    }

    /// Build from configuration.
    ///
    /// # Errors
    /// * `InvalidConfiguration` - Empty secret or out-of-range cost parameters
    pub fn from_config(config: &HashingConfig) -> Result<Self, auth::PasswordError> {
        PasswordHasher::with_cost(
            config.secret.as_bytes(),
            config.memory_kib,
            config.iterations,
            config.parallelism,
        )
        .map(Self::new)
    }
}

impl CredentialHasher for ArgonCredentialHasher {
    fn hash(&self, plaintext: &str) -> Result<String, PasswordError> {
        self.hasher
            .hash(plaintext)
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }
}

/// HS256 session token issuer.
pub struct JwtTokenIssuer {
    handler: JwtHandler,
    issuer: String,
}

impl JwtTokenIssuer {
    /// # Errors
    /// * `InvalidSecret` - Secret is empty
    pub fn new(secret: &[u8], issuer: &str) -> Result<Self, JwtError> {
        Ok(Self {
            handler: JwtHandler::new(secret)?.with_issuer(issuer),
            issuer: issuer.to_string(),
        })
    }

    pub fn from_config(config: &JwtConfig) -> Result<Self, JwtError> {
        Self::new(config.secret.as_bytes(), &config.issuer)
    }

    /// Check a token's signature, issuer and expiry and recover the user it was issued to.
    ///
    /// # Errors
    /// * `TokenExpired` - Token is past its expiry
    /// * `DecodingFailed` - Token is invalid or its subject is not a user id
    pub fn verify(&self, token: &str) -> Result<UserId, JwtError> {
        let claims: Claims = self.handler.decode(token)?;

        Uuid::parse_str(&claims.sub)
            .map(UserId)
            .map_err(|e| JwtError::DecodingFailed(e.to_string()))
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue(&self, user_id: &UserId, ttl: Duration) -> Result<String, TokenError> {
        let ttl = chrono::Duration::from_std(ttl)
            .map_err(|e| TokenError::SigningFailed(e.to_string()))?;
        if Utc::now().checked_add_signed(ttl).is_none() {
            return Err(TokenError::SigningFailed(
                "token validity is out of range".to_string(),
            ));
        }
        let claims = Claims::for_subject(user_id, ttl).with_issuer(&self.issuer);

        self.handler
            .encode(&claims)
            .map_err(|e| TokenError::SigningFailed(e.to_string()))
    }
}
