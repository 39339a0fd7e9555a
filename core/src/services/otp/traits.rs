//! Seam traits for the key-value store and email transport.

use async_trait::async_trait;
use std::collections::HashMap;

/// Trait for the shared TTL-capable key-value store
///
/// The store is the only shared mutable resource in the OTP workflow; every
/// key expires on its own schedule and the backend's native expiry owns
/// cleanup.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Get a value, `None` when absent or expired
    async fn get(&self, key: &str) -> Result<Option<String>, String>;

    /// Set a value with a TTL in seconds
    ///
    /// With `if_absent` the write only happens when the key does not exist
    /// yet; an already-present key is left untouched and the call still
    /// succeeds.
    async fn set(
        &self,
        key: &str,
        value: &str,
        ttl_seconds: u64,
        if_absent: bool,
    ) -> Result<(), String>;

    /// Delete the given keys; missing keys are not an error
    async fn delete(&self, keys: &[&str]) -> Result<(), String>;

    /// Atomically increment a counter, returning the new value
    ///
    /// The TTL is applied only when the increment creates the key, so the
    /// counter keeps a fixed window from its first write.
    async fn increment(&self, key: &str, ttl_seconds_on_create: u64) -> Result<i64, String>;
}

/// Trait for the email transport
#[async_trait]
pub trait EmailService: Send + Sync {
    /// Send a templated email, returning a provider message id
    async fn send(
        &self,
        to: &str,
        subject: &str,
        template_id: &str,
        variables: HashMap<String, String>,
    ) -> Result<String, String>;
}
