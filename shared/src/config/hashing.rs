//! Password hashing configuration module

use serde::{Deserialize, Serialize};

/// Bcrypt hashing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HashingConfig {
    /// Bcrypt cost factor
    #[serde(default = "default_cost")]
    pub bcrypt_cost: u32,
}

impl Default for HashingConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: default_cost(),
        }
    }
}

impl HashingConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let bcrypt_cost = std::env::var("BCRYPT_COST")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .unwrap_or(10);

        Self { bcrypt_cost }
    }
}

fn default_cost() -> u32 {
    10
}
