use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

/// User aggregate entity.
///
/// Represents a registered customer. `id` and `created_at` are assigned by
/// the store and never change afterwards.
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub password_hash: String,
    pub details: UserDetails,
    pub created_at: DateTime<Utc>,
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .field("details", &self.details)
            .field("created_at", &self.created_at)
            .finish()
    }
}

/// Descriptive profile fields. Not unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDetails {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

/// Candidate user built during sign-up, before the store assigns identity.
#[derive(Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub details: UserDetails,
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .field("details", &self.details)
            .finish()
    }
}

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to register a new user.
///
/// Carries raw, unvalidated input; validation happens in the service.
#[derive(Clone)]
pub struct SignUpCommand {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

impl SignUpCommand {
    /// Construct a new sign-up command.
    ///
    /// # Arguments
    /// * `email` - Sign-in key, must be unique
    /// * `password` - Plain text password (will be hashed by service)
    /// * `first_name` - Given name
    /// * `last_name` - Family name
    /// * `phone` - Contact phone number
    pub fn new(
        email: String,
        password: String,
        first_name: String,
        last_name: String,
        phone: String,
    ) -> Self {
        Self {
            email,
            password,
            first_name,
            last_name,
            phone,
        }
    }
}

/// Command to authenticate an existing user.
#[derive(Clone)]
pub struct SignInCommand {
    pub email: String,
    pub password: String,
}

impl SignInCommand {
    pub fn new(email: String, password: String) -> Self {
        Self { email, password }
    }
}

/// Bearer token issued on a successful sign-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub plain_text: String,
}
