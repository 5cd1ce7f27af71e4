use thiserror::Error;

/// Error type for password operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Invalid hasher configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
}
