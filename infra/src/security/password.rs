//! Bcrypt implementation of the credential hasher seam

use async_trait::async_trait;

use sp_core::services::registration::PasswordHasher;
use sp_shared::config::HashingConfig;

/// Bcrypt password hasher with configurable cost
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    pub fn new(config: &HashingConfig) -> Self {
        Self {
            cost: config.bcrypt_cost,
        }
    }

    /// Construct with an explicit cost factor
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }
}

#[async_trait]
impl PasswordHasher for BcryptPasswordHasher {
    async fn hash(&self, plain: &str) -> Result<String, String> {
        let plain = plain.to_string();
        let cost = self.cost;

        // Bcrypt is CPU-bound; keep it off the request task
        tokio::task::spawn_blocking(move || bcrypt::hash(plain, cost))
            .await
            .map_err(|e| format!("Hashing task failed: {}", e))?
            .map_err(|e| format!("Bcrypt failure: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // `bcrypt::MIN_COST` is private in bcrypt 0.15; mirror its value locally.
    const MIN_COST: u32 = 4;

    #[tokio::test]
    async fn test_hash_verifies_against_plaintext() {
        let hasher = BcryptPasswordHasher::with_cost(MIN_COST);

        let digest = hasher.hash("hunter22").await.unwrap();

        assert!(bcrypt::verify("hunter22", &digest).unwrap());
        assert!(!bcrypt::verify("wrong-password", &digest).unwrap());
    }

    #[tokio::test]
    async fn test_digest_embeds_cost() {
        let hasher = BcryptPasswordHasher::with_cost(MIN_COST);

        let digest = hasher.hash("hunter22").await.unwrap();

        // Modular crypt format: $2b$<cost>$...
        assert!(digest.starts_with("$2"));
        assert!(digest.contains(&format!("${:02}$", MIN_COST)));
    }
}
