use std::error::Error;

use aula_core::error::ServiceError;

/// Hashes a plaintext password with bcrypt at the default cost.
pub fn hash_password(password: &str) -> Result<String, ServiceError> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST)
        .inspect_err(|error| tracing::error!(error = error as &dyn Error, "Failed to hash password"))
        .map_err(|_| ServiceError::Validation("could not hash password".to_owned()))
}

/// Checks a plaintext password against a stored bcrypt hash.
pub fn verify_password(password: &str, hash: &str) -> bool {
    bcrypt::verify(password, hash)
        .inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, "Failed to verify password")
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_password() {
        let hash = hash_password("hunter2").unwrap();

        assert_ne!(hash, "hunter2");
        assert!(verify_password("hunter2", &hash));
        assert!(!verify_password("hunter3", &hash));
    }

    #[test]
    fn test_verify_password_rejects_malformed_hash() {
        assert!(!verify_password("hunter2", "not-a-bcrypt-hash"));
    }
}
