//! OTP lifecycle service: generation, delivery, storage and verification.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use rand::{rngs::OsRng, Rng};

use sp_shared::config::OtpConfig;
use sp_shared::utils::validation::mask_email;

use crate::errors::{AuthError, DomainResult};

use super::guard::{store_error, OtpGuard};
use super::keys::OtpKey;
use super::traits::{EmailService, KeyValueStore};
use super::types::SendOtpResult;

/// Email template used for account-activation codes
pub const ACTIVATION_TEMPLATE: &str = "user-activation-mail";

/// Subject line for verification emails
const VERIFICATION_SUBJECT: &str = "Verify your email";

/// OTP lifecycle service over a key-value store and an email transport
///
/// Per identity the lifecycle is `NoOtp -> Issued -> {Verified, Expired,
/// Locked}`; re-issuance overwrites the stored code, and a lock expires by
/// its own TTL back to `NoOtp`.
pub struct OtpService<S: KeyValueStore, E: EmailService> {
    store: Arc<S>,
    email: Arc<E>,
    guard: OtpGuard<S>,
    policy: OtpConfig,
}

impl<S: KeyValueStore, E: EmailService> OtpService<S, E> {
    pub fn new(store: Arc<S>, email: Arc<E>, policy: OtpConfig) -> Self {
        let guard = OtpGuard::new(store.clone(), policy.clone());
        Self {
            store,
            email,
            guard,
            policy,
        }
    }

    /// Issue an OTP to an email address
    ///
    /// The caller is expected to have consulted
    /// [`OtpGuard::check_restrictions`] and [`OtpGuard::track_request`]
    /// first. The code is stored before the transport call, so a delivery
    /// failure leaves a stored code behind; it ages out on the code TTL.
    ///
    /// # Arguments
    ///
    /// * `name` - Display name interpolated into the email template
    /// * `email` - Recipient address, also the identity the code is keyed by
    pub async fn send_otp(&self, name: &str, email: &str) -> DomainResult<SendOtpResult> {
        let code = Self::generate_code();

        tracing::info!(
            email = %mask_email(email),
            event = "otp_generated",
            "generated verification code"
        );

        // Overwrites any previous code and resets its TTL
        self.store
            .set(
                &OtpKey::Code.for_email(email),
                &code,
                self.policy.code_ttl_seconds,
                false,
            )
            .await
            .map_err(store_error)?;

        // Conditional create keeps a shorter remaining cooldown intact under
        // concurrent issuance attempts
        self.store
            .set(
                &OtpKey::Cooldown.for_email(email),
                "true",
                self.policy.cooldown_seconds,
                true,
            )
            .await
            .map_err(store_error)?;

        let mut variables = HashMap::new();
        variables.insert("name".to_string(), name.to_string());
        variables.insert("otp".to_string(), code.clone());

        let message_id = self
            .email
            .send(email, VERIFICATION_SUBJECT, ACTIVATION_TEMPLATE, variables)
            .await
            .map_err(|reason| {
                tracing::error!(
                    email = %mask_email(email),
                    error = %reason,
                    event = "otp_delivery_failed",
                    "failed to deliver verification code"
                );
                AuthError::EmailDeliveryFailure { reason }
            })?;

        tracing::info!(
            email = %mask_email(email),
            message_id = %message_id,
            event = "otp_sent",
            "verification code sent"
        );

        Ok(SendOtpResult {
            message_id,
            next_resend_at: Utc::now() + chrono::Duration::seconds(self.policy.cooldown_seconds as i64),
        })
    }

    /// Verify a submitted code for an email address
    ///
    /// While the hard lock is present every attempt reports the lock,
    /// regardless of the submitted code. An absent (expired or never
    /// issued) code reports a generic invalid-or-expired error. Stored and
    /// submitted values are trimmed before an exact string comparison; a
    /// mismatch is recorded against the attempt counter and a match clears
    /// the code and counter together.
    pub async fn verify_otp(&self, email: &str, submitted: &str) -> DomainResult<()> {
        if self.guard.is_locked(email).await? {
            return Err(AuthError::AccountLocked.into());
        }

        let stored = self
            .store
            .get(&OtpKey::Code.for_email(email))
            .await
            .map_err(store_error)?;

        let stored = match stored {
            Some(code) => code,
            None => return Err(AuthError::OtpExpiredOrInvalid.into()),
        };

        if stored.trim() != submitted.trim() {
            tracing::warn!(
                email = %mask_email(email),
                event = "otp_mismatch",
                "verification code mismatch"
            );
            return Err(self.guard.record_failed_attempt(email).await);
        }

        self.guard.clear(email).await?;

        tracing::info!(
            email = %mask_email(email),
            event = "otp_verified",
            "verification code accepted"
        );

        Ok(())
    }

    /// Generate a 4-digit code, uniformly distributed over [1000, 9999]
    ///
    /// Uses the OS CSPRNG; `gen_range` on an inclusive range samples
    /// without modulo bias.
    pub fn generate_code() -> String {
        OsRng.gen_range(1000..=9999u32).to_string()
    }
}
