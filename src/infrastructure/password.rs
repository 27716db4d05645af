use crate::domain::password::PasswordHashingService;
use anyhow::Result;
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

/// Argon2 password hashing behind the domain seam.
#[derive(Clone, Default)]
pub struct PasswordService;

impl PasswordService {
    pub fn new() -> Self {
        Self
    }
}

impl PasswordHashingService for PasswordService {
    fn hash_password(&self, password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| anyhow::anyhow!("failed to hash password: {e}"))?;

        Ok(hash.to_string())
    }

    fn verify_password(&self, password: &str, hash: &str) -> Result<bool> {
        let parsed = PasswordHash::new(hash)
            .map_err(|e| anyhow::anyhow!("invalid password hash: {e}"))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashes_verify_and_are_salted() {
        let service = PasswordService::new();
        let first = service.hash_password("senha123").unwrap();
        let second = service.hash_password("senha123").unwrap();

        assert!(first.starts_with("$argon2"));
        assert_ne!(first, second);
        assert!(service.verify_password("senha123", &first).unwrap());
        assert!(service.verify_password("senha123", &second).unwrap());
    }

    #[test]
    fn wrong_password_fails_verification() {
        let service = PasswordService::new();
        let hash = service.hash_password("senha123").unwrap();

        assert!(!service.verify_password("senha456", &hash).unwrap());
    }

    #[test]
    fn garbage_hash_is_an_error() {
        let service = PasswordService::new();
        assert!(service.verify_password("senha123", "not-a-hash").is_err());
    }
}
