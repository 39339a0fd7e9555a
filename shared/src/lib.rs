//! Shared utilities and common types for the Shoply server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Common response structures
//! - Utility functions (email validation, log masking)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, CacheConfig, DatabaseConfig, EmailConfig, HashingConfig, OtpConfig, ServerConfig,
};
pub use types::ApiResponse;
pub use utils::validation;
