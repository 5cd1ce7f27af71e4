use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::SaltString;
use argon2::Algorithm;
use argon2::Argon2;
use argon2::Params;
use argon2::Version;

use super::errors::PasswordError;

/// Fixed salt shared by every hash. The per-deployment secret is what keys the output.
const SALT: &[u8] = b"customer-credential";

/// Deterministic, keyed password hashing.
///
/// Uses Argon2id with the process-wide secret mixed in as the Argon2 secret
/// input and a fixed salt, so equal passwords always produce equal hashes.
/// This is what allows credentials to be matched with an equality lookup in
/// storage instead of a per-row verify.
pub struct PasswordHasher {
    secret: Vec<u8>,
    salt: SaltString,
    params: Params,
}

impl PasswordHasher {
    /// Create a hasher with the default Argon2 cost parameters.
    ///
    /// # Arguments
    /// * `secret` - Process-wide hashing secret (must not be empty)
    ///
    /// # Errors
    /// * `InvalidConfiguration` - Secret is empty
    pub fn new(secret: &[u8]) -> Result<Self, PasswordError> {
        Self::with_params(secret, Params::default())
    }

    /// Create a hasher with explicit cost parameters.
    ///
    /// # Arguments
    /// * `secret` - Process-wide hashing secret (must not be empty)
    /// * `memory_kib` - Memory cost in KiB
    /// * `iterations` - Number of passes
    /// * `parallelism` - Degree of parallelism
    ///
    /// # Errors
    /// * `InvalidConfiguration` - Secret is empty or parameters are out of range
    pub fn with_cost(
        secret: &[u8],
        memory_kib: u32,
        iterations: u32,
        parallelism: u32,
    ) -> Result<Self, PasswordError> {
        let params = Params::new(memory_kib, iterations, parallelism, None)
            .map_err(|e| PasswordError::InvalidConfiguration(e.to_string()))?;
        Self::with_params(secret, params)
    }

    fn with_params(secret: &[u8], params: Params) -> Result<Self, PasswordError> {
        if secret.is_empty() {
            return Err(PasswordError::InvalidConfiguration(
                "hashing secret must not be empty".to_string(),
            ));
        }

        let salt = SaltString::encode_b64(SALT)
            .map_err(|e| PasswordError::InvalidConfiguration(e.to_string()))?;

        // Fail at construction rather than on the first hash.
        Argon2::new_with_secret(secret, Algorithm::Argon2id, Version::V0x13, params.clone())
            .map_err(|e| PasswordError::InvalidConfiguration(e.to_string()))?;

        Ok(Self {
            secret: secret.to_vec(),
            salt,
            params,
        })
    }

    /// Hash a plaintext password.
    ///
    /// # Returns
    /// PHC string format hash (`$argon2id$v=19$...`)
    ///
    /// # Errors
    /// * `HashingFailed` - Argon2 rejected the input
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let argon2 = Argon2::new_with_secret(
            &self.secret,
            Algorithm::Argon2id,
            Version::V0x13,
            self.params.clone(),
        )
        .map_err(|e| PasswordError::HashingFailed(e.to_string()))?;

        argon2
            .hash_password(password.as_bytes(), &self.salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn cheap_hasher(secret: &[u8]) -> PasswordHasher {
        PasswordHasher::with_cost(secret, 8, 1, 1).expect("Failed to build hasher")
    }

    #[test]
    fn test_hash_is_deterministic() {
        let hasher = cheap_hasher(b"pepper");

        let first = hasher.hash("password123").expect("Failed to hash password");
        let second = hasher.hash("password123").expect("Failed to hash password");

        assert_eq!(first, second);
        assert!(first.starts_with("$argon2id$"));
    }

    #[test]
    fn test_different_passwords_differ() {
        let hasher = cheap_hasher(b"pepper");

        let first = hasher.hash("password123").unwrap();
        let second = hasher.hash("password124").unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_secret_keys_the_output() {
        let first = cheap_hasher(b"pepper-one").hash("password123").unwrap();
        let second = cheap_hasher(b"pepper-two").hash("password123").unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_hash_never_contains_plaintext() {
        let hash = cheap_hasher(b"pepper").hash("plaintext-password").unwrap();
        assert!(!hash.contains("plaintext-password"));
    }

    #[test]
    fn test_empty_secret_rejected() {
        let result = PasswordHasher::new(b"");
        assert!(matches!(
            result,
            Err(PasswordError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_invalid_cost_rejected() {
        let result = PasswordHasher::with_cost(b"pepper", 0, 0, 0);
        assert!(matches!(
            result,
            Err(PasswordError::InvalidConfiguration(_))
        ));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_hash_deterministic_for_valid_lengths(password in "[ -~]{8,72}") {
            let hasher = cheap_hasher(b"pepper");
            prop_assert_eq!(hasher.hash(&password).unwrap(), hasher.hash(&password).unwrap());
        }
    }
}
