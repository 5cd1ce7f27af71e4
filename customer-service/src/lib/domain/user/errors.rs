use thiserror::Error;

/// Error for password hashing operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
}

/// Error for token issuance
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token signing failed: {0}")]
    SigningFailed(String),
}

/// Error reported by user persistence adapters
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Email already exists: {0}")]
    Duplicate(String),

    #[error("User not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(String),
}

/// Top-level error for sign-up and sign-in
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserError {
    // Client errors
    #[error("Validation failed")]
    FailedValidation,

    #[error("Email already registered: {0}")]
    Duplicate(String),

    #[error("Wrong user credentials")]
    WrongCredentials,

    // Infrastructure errors
    #[error(transparent)]
    Password(#[from] PasswordError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Repository(RepositoryError),
}
