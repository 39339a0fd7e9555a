//! Typed builder for the per-email store keys used by the OTP workflow.
//!
//! Issuance and verification both go through this enum, so the two code
//! paths cannot drift apart on key naming.

/// Purpose of a store key within the OTP workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtpKey {
    /// Active OTP code awaiting verification
    Code,
    /// Minimum-spacing sentinel between issuances
    Cooldown,
    /// Rolling count of issuance requests in the current window
    RequestCount,
    /// Hard block on issuance after the request count is exceeded
    SpamLock,
    /// Count of failed verification attempts for the current code
    Attempts,
    /// Hard block on issuance and verification after repeated failures
    Lock,
}

impl OtpKey {
    fn prefix(self) -> &'static str {
        match self {
            OtpKey::Code => "otp",
            OtpKey::Cooldown => "otp_cooldown",
            OtpKey::RequestCount => "otp_request_count",
            OtpKey::SpamLock => "otp_spam_lock",
            OtpKey::Attempts => "otp_attempts",
            OtpKey::Lock => "otp_lock",
        }
    }

    /// Build the store key for an email address
    pub fn for_email(self, email: &str) -> String {
        format!("{}:{}", self.prefix(), email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_formats() {
        let email = "alice@example.com";
        assert_eq!(OtpKey::Code.for_email(email), "otp:alice@example.com");
        assert_eq!(
            OtpKey::Cooldown.for_email(email),
            "otp_cooldown:alice@example.com"
        );
        assert_eq!(
            OtpKey::RequestCount.for_email(email),
            "otp_request_count:alice@example.com"
        );
        assert_eq!(
            OtpKey::SpamLock.for_email(email),
            "otp_spam_lock:alice@example.com"
        );
        assert_eq!(
            OtpKey::Attempts.for_email(email),
            "otp_attempts:alice@example.com"
        );
        assert_eq!(OtpKey::Lock.for_email(email), "otp_lock:alice@example.com");
    }
}
