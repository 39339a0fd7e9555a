//! Mock credential hasher for registration tests
//!
//! Store and email mocks are shared with the OTP tests
//! (`crate::services::otp::tests::mocks`).

use async_trait::async_trait;

use crate::services::registration::traits::PasswordHasher;

/// Mock hasher producing a recognizable, deterministic digest
pub struct MockPasswordHasher {
    pub should_fail: bool,
}

impl MockPasswordHasher {
    pub fn new(should_fail: bool) -> Self {
        Self { should_fail }
    }
}

#[async_trait]
impl PasswordHasher for MockPasswordHasher {
    async fn hash(&self, plain: &str) -> Result<String, String> {
        if self.should_fail {
            return Err("hashing backend unavailable".to_string());
        }
        Ok(format!("hashed::{}", plain))
    }
}
