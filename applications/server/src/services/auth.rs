/// Authentication service - password hashing
use crate::error::{Result, ServerError};

#[derive(Debug, Clone)]
pub struct AuthService {
    cost: u32,
}

impl AuthService {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a password using bcrypt
    pub fn hash_password(&self, password: &str) -> Result<String> {
        bcrypt::hash(password, self.cost).map_err(ServerError::from)
    }

    /// Verify a password against a hash
    pub fn verify_password(&self, password: &str, hash: &str) -> Result<bool> {
        bcrypt::verify(password, hash).map_err(ServerError::from)
    }

    /// [`Self::hash_password`] on the blocking thread pool
    pub async fn hash_password_async(&self, password: String) -> Result<String> {
        let auth = self.clone();
        tokio::task::spawn_blocking(move || auth.hash_password(&password)).await?
    }

    /// [`Self::verify_password`] on the blocking thread pool
    pub async fn verify_password_async(&self, password: String, hash: String) -> Result<bool> {
        let auth = self.clone();
        tokio::task::spawn_blocking(move || auth.verify_password(&password, &hash)).await?
    }
}

impl Default for AuthService {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hashing() {
        let auth = AuthService::new(4);
        let password = "MySecurePassword1";

        let hash = auth.hash_password(password).unwrap();
        assert_ne!(hash, password);
        assert!(auth.verify_password(password, &hash).unwrap());
        assert!(!auth.verify_password("WrongPassword1", &hash).unwrap());
    }

    #[tokio::test]
    async fn test_async_hash_and_verify() {
        let auth = AuthService::new(4);

        let hash = auth
            .hash_password_async("MySecurePassword1".to_string())
            .await
            .unwrap();
        assert!(auth
            .verify_password_async("MySecurePassword1".to_string(), hash.clone())
            .await
            .unwrap());
        assert!(!auth
            .verify_password_async("WrongPassword1".to_string(), hash)
            .await
            .unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let auth = AuthService::new(4);

        let first = auth.hash_password("Password1").unwrap();
        let second = auth.hash_password("Password1").unwrap();
        assert_ne!(first, second);
    }
}
