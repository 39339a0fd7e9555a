//! Types for OTP service results

use chrono::{DateTime, Utc};

/// Result of issuing an OTP
#[derive(Debug, Clone)]
pub struct SendOtpResult {
    /// The transport message id from the email provider
    pub message_id: String,
    /// When the user can request another code
    pub next_resend_at: DateTime<Utc>,
}
