//! Cache module for Redis-based OTP state
//!
//! Provides the Redis client backing the core `KeyValueStore` seam,
//! including connection management and retry logic.

pub mod redis_client;

pub use redis_client::RedisClient;

// Re-export commonly used types
pub use sp_shared::config::CacheConfig;
