//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `cache` - Redis connection configuration
//! - `database` - Database connection and pool configuration
//! - `email` - SMTP transport configuration
//! - `hashing` - Password hashing configuration
//! - `otp` - OTP issuance and lockout policy
//! - `server` - HTTP server configuration

pub mod cache;
pub mod database;
pub mod email;
pub mod hashing;
pub mod otp;
pub mod server;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use cache::CacheConfig;
pub use database::DatabaseConfig;
pub use email::EmailConfig;
pub use hashing::HashingConfig;
pub use otp::OtpConfig;
pub use server::ServerConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// HTTP server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Redis cache configuration
    pub cache: CacheConfig,

    /// OTP policy configuration
    #[serde(default)]
    pub otp: OtpConfig,

    /// Email transport configuration
    pub email: EmailConfig,

    /// Password hashing configuration
    #[serde(default)]
    pub hashing: HashingConfig,
}

impl AppConfig {
    /// Build the full configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            cache: CacheConfig::from_env(),
            otp: OtpConfig::default(),
            email: EmailConfig::from_env(),
            hashing: HashingConfig::from_env(),
        }
    }
}
