//! OTP policy configuration module
//!
//! All durations are seconds. Every restriction (cooldown, spam lock,
//! failed-attempt lock) expires independently through the store's native
//! key TTLs; there is no cleanup pass.

use serde::{Deserialize, Serialize};

/// OTP issuance and lockout policy
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OtpConfig {
    /// Lifetime of a stored OTP code
    #[serde(default = "default_code_ttl")]
    pub code_ttl_seconds: u64,

    /// Minimum spacing between two OTP issuances for one email
    #[serde(default = "default_cooldown")]
    pub cooldown_seconds: u64,

    /// Window over which issuance requests are counted
    #[serde(default = "default_request_window")]
    pub request_window_seconds: u64,

    /// Requests allowed inside the window before the spam lock triggers
    #[serde(default = "default_max_requests")]
    pub max_requests_per_window: u32,

    /// Duration of the spam lock once triggered
    #[serde(default = "default_spam_lock")]
    pub spam_lock_seconds: u64,

    /// Failed verification attempts allowed before the hard lock triggers
    #[serde(default = "default_max_attempts")]
    pub max_failed_attempts: u32,

    /// Duration of the hard lock once triggered
    #[serde(default = "default_lock")]
    pub lock_seconds: u64,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            code_ttl_seconds: default_code_ttl(),
            cooldown_seconds: default_cooldown(),
            request_window_seconds: default_request_window(),
            max_requests_per_window: default_max_requests(),
            spam_lock_seconds: default_spam_lock(),
            max_failed_attempts: default_max_attempts(),
            lock_seconds: default_lock(),
        }
    }
}

fn default_code_ttl() -> u64 {
    300 // 5 minutes
}

fn default_cooldown() -> u64 {
    60
}

fn default_request_window() -> u64 {
    3600 // 1 hour
}

fn default_max_requests() -> u32 {
    2
}

fn default_spam_lock() -> u64 {
    3600 // 1 hour
}

fn default_max_attempts() -> u32 {
    2
}

fn default_lock() -> u64 {
    1800 // 30 minutes
}
