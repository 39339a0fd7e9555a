//! Email transport configuration module

use serde::{Deserialize, Serialize};

/// SMTP email transport configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmailConfig {
    /// Email provider ("smtp" or "mock")
    pub provider: String,

    /// SMTP relay host
    pub smtp_host: String,

    /// SMTP username
    pub smtp_user: String,

    /// SMTP password
    pub smtp_password: String,

    /// From address used for outgoing mail
    pub from_address: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            provider: String::from("mock"),
            smtp_host: String::from("smtp.localhost"),
            smtp_user: String::new(),
            smtp_password: String::new(),
            from_address: String::from("no-reply@shoply.io"),
        }
    }
}

impl EmailConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let provider = std::env::var("EMAIL_PROVIDER").unwrap_or_else(|_| "mock".to_string());
        let smtp_host =
            std::env::var("SMTP_HOST").unwrap_or_else(|_| "smtp.localhost".to_string());
        let smtp_user = std::env::var("SMTP_USER").unwrap_or_default();
        let smtp_password = std::env::var("SMTP_PASSWORD").unwrap_or_default();
        let from_address =
            std::env::var("SMTP_FROM").unwrap_or_else(|_| "no-reply@shoply.io".to_string());

        Self {
            provider,
            smtp_host,
            smtp_user,
            smtp_password,
            from_address,
        }
    }
}
