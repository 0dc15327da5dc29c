/// Password hashing and verification using Argon2id
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::ServiceError;

/// Hashing seam between the profile service and the KDF.
pub trait SecretHasher: Send + Sync {
    /// Hash a plaintext secret into a storable digest.
    fn hash(&self, secret: &str) -> Result<String, ServiceError>;

    /// Verify a plaintext secret against a stored digest.
    fn verify(&self, secret: &str, digest: &str) -> Result<bool, ServiceError>;
}

/// Argon2id with a random 16-byte salt per secret.
///
/// Produces PHC-formatted hash strings safe for database storage. Wrong
/// passwords verify to `false`; a malformed stored digest is an error, not a
/// mismatch.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2Hasher;

impl SecretHasher for Argon2Hasher {
    fn hash(&self, secret: &str) -> Result<String, ServiceError> {
        let salt = SaltString::generate(&mut OsRng);
        let digest = Argon2::default()
            .hash_password(secret.as_bytes(), &salt)
            .map_err(|e| ServiceError::Internal(format!("Password hashing failed: {}", e)))?
            .to_string();

        Ok(digest)
    }

    fn verify(&self, secret: &str, digest: &str) -> Result<bool, ServiceError> {
        let parsed_hash = PasswordHash::new(digest)
            .map_err(|e| ServiceError::Internal(format!("Invalid password hash format: {}", e)))?;

        match Argon2::default().verify_password(secret.as_bytes(), &parsed_hash) {
            Ok(_) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(ServiceError::Internal(format!(
                "Password verification failed: {}",
                e
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_valid_password() {
        let hasher = Argon2Hasher;
        let hash = hasher.hash("hunter22").expect("should hash password");
        assert!(hasher.verify("hunter22", &hash).expect("should verify"));
    }

    #[test]
    fn test_verify_wrong_password() {
        let hasher = Argon2Hasher;
        let hash = hasher.hash("hunter22").expect("should hash password");
        assert!(!hasher.verify("wrong-password", &hash).expect("should verify"));
    }

    #[test]
    fn test_malformed_digest_is_an_error() {
        let hasher = Argon2Hasher;
        let result = hasher.verify("hunter22", "not-a-phc-string");
        assert!(matches!(result, Err(ServiceError::Internal(_))));
    }

    #[test]
    fn test_different_hashes_for_same_password() {
        let hasher = Argon2Hasher;
        let hash1 = hasher.hash("hunter22").expect("should hash");
        let hash2 = hasher.hash("hunter22").expect("should hash");
        // Different salts should produce different hashes
        assert_ne!(hash1, hash2);
    }
}
