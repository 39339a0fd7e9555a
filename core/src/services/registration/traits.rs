//! Seam trait for credential hashing.

use async_trait::async_trait;

/// Trait for the adaptive password hasher
///
/// Hashing cost lives in the implementation; async so implementations can
/// move the work off the request task.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext credential into a storable digest
    async fn hash(&self, plain: &str) -> Result<String, String>;
}
