//! Authentication primitives library
//!
//! Provides the credential and token building blocks used by the customer service:
//! - Deterministic, keyed password hashing (Argon2id)
//! - JWT token generation and validation
//!
//! Services define their own hashing and token traits and adapt these implementations,
//! so nothing here knows about users or storage.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::with_cost(b"pepper", 8, 1, 1).unwrap();
//! let hash = hasher.hash("my_password").unwrap();
//! assert_eq!(hash, hasher.hash("my_password").unwrap());
//! ```
//!
//! ## JWT Tokens
//! ```
//! use auth::{Claims, JwtHandler};
//! use chrono::Duration;
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!").unwrap();
//! let claims = Claims::for_subject("user123", Duration::hours(12));
//! let token = handler.encode(&claims).unwrap();
//! let decoded: Claims = handler.decode(&token).unwrap();
//! assert_eq!(decoded.sub, "user123");
//! ```

pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
