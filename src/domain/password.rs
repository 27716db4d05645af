use anyhow::Result;

/// Seam for credential hashing so use cases stay independent of the
/// concrete algorithm.
pub trait PasswordHashingService: Send + Sync {
    fn hash_password(&self, password: &str) -> Result<String>;
    fn verify_password(&self, password: &str, hash: &str) -> Result<bool>;
}
