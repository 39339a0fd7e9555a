//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the Shoply backend.
//! It provides the concrete implementations behind the core seams:
//!
//! - **Cache**: Redis key-value store backing the OTP workflow
//! - **Database**: MySQL user repository using SQLx
//! - **Email**: SMTP transport (lettre) plus a console mock
//! - **Security**: bcrypt credential hashing

pub mod cache;
pub mod database;
pub mod email;
pub mod security;

use thiserror::Error;

// Re-export commonly used implementations
pub use cache::RedisClient;
pub use database::{create_pool, MySqlUserRepository};
pub use email::{create_email_service, EmailProvider, MockEmailService, SmtpEmailService};
pub use security::BcryptPasswordHasher;

/// Infrastructure-level errors
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Email error: {0}")]
    Email(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
