//! Issuance and verification restrictions for the OTP workflow.
//!
//! Three restriction classes gate the workflow, each with its own cause and
//! recovery path: the hard lock (repeated verification failures), the spam
//! lock (too many issuance requests in the window) and the cooldown
//! (minimum spacing between issuances). Every restriction is a store key
//! that expires on its own TTL.

use std::sync::Arc;

use sp_shared::config::OtpConfig;
use sp_shared::utils::validation::mask_email;

use crate::errors::{AuthError, DomainError, DomainResult};

use super::keys::OtpKey;
use super::traits::KeyValueStore;

/// Restriction bookkeeping over the shared key-value store
///
/// The guard holds no state of its own; all decisions are read from the
/// store, which keeps the service free to scale horizontally.
pub struct OtpGuard<S: KeyValueStore> {
    store: Arc<S>,
    policy: OtpConfig,
}

impl<S: KeyValueStore> OtpGuard<S> {
    pub fn new(store: Arc<S>, policy: OtpConfig) -> Self {
        Self { store, policy }
    }

    /// Check whether issuance is currently allowed for an email
    ///
    /// Restrictions are checked in order: hard lock, spam lock, cooldown.
    /// The first match wins and short-circuits the remaining checks.
    pub async fn check_restrictions(&self, email: &str) -> DomainResult<()> {
        if self.key_present(OtpKey::Lock, email).await? {
            return Err(AuthError::AccountLocked.into());
        }
        if self.key_present(OtpKey::SpamLock, email).await? {
            return Err(AuthError::OtpSpamLimit.into());
        }
        if self.key_present(OtpKey::Cooldown, email).await? {
            return Err(AuthError::OtpCooldown.into());
        }
        Ok(())
    }

    /// Record an issuance request against the rolling window
    ///
    /// Once the window already holds the allowed number of requests, the
    /// spam lock is set and the request denied; the counter itself is not
    /// incremented past that point. Otherwise the counter is bumped, with
    /// its window TTL applied only when the counter is first created.
    pub async fn track_request(&self, email: &str) -> DomainResult<()> {
        let requests = self.read_counter(OtpKey::RequestCount, email).await?;

        if requests >= i64::from(self.policy.max_requests_per_window) {
            self.store
                .set(
                    &OtpKey::SpamLock.for_email(email),
                    "locked",
                    self.policy.spam_lock_seconds,
                    false,
                )
                .await
                .map_err(store_error)?;

            tracing::warn!(
                email = %mask_email(email),
                requests = requests,
                event = "otp_spam_lock",
                "OTP request count exceeded, spam lock set"
            );
            return Err(AuthError::OtpSpamLimit.into());
        }

        self.store
            .increment(
                &OtpKey::RequestCount.for_email(email),
                self.policy.request_window_seconds,
            )
            .await
            .map_err(store_error)?;

        Ok(())
    }

    /// Record a failed verification attempt and return the error to surface
    ///
    /// The third failure sets the hard lock, deletes the stored code and the
    /// attempt counter, and reports the lock; earlier failures bump the
    /// counter (TTL applied on creation) and report how many attempts are
    /// left.
    pub async fn record_failed_attempt(&self, email: &str) -> DomainError {
        let failed = match self.read_counter(OtpKey::Attempts, email).await {
            Ok(count) => count,
            Err(err) => return err,
        };

        let allowed = i64::from(self.policy.max_failed_attempts);
        if failed >= allowed {
            if let Err(err) = self
                .store
                .set(
                    &OtpKey::Lock.for_email(email),
                    "locked",
                    self.policy.lock_seconds,
                    false,
                )
                .await
                .map_err(store_error)
            {
                return err;
            }
            if let Err(err) = self.clear(email).await {
                return err;
            }

            tracing::warn!(
                email = %mask_email(email),
                event = "otp_account_locked",
                "verification attempts exhausted, account locked"
            );
            return AuthError::AccountLocked.into();
        }

        if let Err(err) = self
            .store
            .increment(
                &OtpKey::Attempts.for_email(email),
                self.policy.code_ttl_seconds,
            )
            .await
            .map_err(store_error)
        {
            return err;
        }

        AuthError::OtpMismatch {
            remaining: (allowed - failed) as u32,
        }
        .into()
    }

    /// Delete the stored code and attempt counter together
    pub async fn clear(&self, email: &str) -> DomainResult<()> {
        let code_key = OtpKey::Code.for_email(email);
        let attempts_key = OtpKey::Attempts.for_email(email);
        self.store
            .delete(&[&code_key, &attempts_key])
            .await
            .map_err(store_error)
    }

    /// Check whether the hard lock is present
    pub async fn is_locked(&self, email: &str) -> DomainResult<bool> {
        self.key_present(OtpKey::Lock, email).await
    }

    async fn key_present(&self, key: OtpKey, email: &str) -> DomainResult<bool> {
        let value = self
            .store
            .get(&key.for_email(email))
            .await
            .map_err(store_error)?;
        Ok(value.is_some())
    }

    async fn read_counter(&self, key: OtpKey, email: &str) -> DomainResult<i64> {
        let value = self
            .store
            .get(&key.for_email(email))
            .await
            .map_err(store_error)?;
        Ok(value.and_then(|v| v.parse().ok()).unwrap_or(0))
    }
}

pub(super) fn store_error(message: String) -> DomainError {
    DomainError::Store { message }
}
