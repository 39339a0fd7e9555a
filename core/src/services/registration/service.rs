//! Registration service orchestrating the sign-up and verification flow.

use std::sync::Arc;

use sp_shared::config::OtpConfig;
use sp_shared::utils::validation::mask_email;

use crate::domain::entities::user::{User, UserRole};
use crate::errors::{AuthError, DomainError, DomainResult, ValidationError};
use crate::repositories::UserRepository;
use crate::services::otp::{EmailService, KeyValueStore, OtpGuard, OtpService, SendOtpResult};

use super::traits::PasswordHasher;
use super::types::{RegistrationData, VerificationData};
use super::validation::validate_registration_data;

/// Orchestrates registration: validation, restriction checks, OTP issuance
/// and the final verified-user creation.
///
/// The service is stateless; every decision is read from the injected
/// collaborators, so instances can be cloned per worker or shared behind an
/// `Arc`.
pub struct RegistrationService<U, S, E, H>
where
    U: UserRepository,
    S: KeyValueStore,
    E: EmailService,
    H: PasswordHasher,
{
    users: Arc<U>,
    guard: OtpGuard<S>,
    otp: OtpService<S, E>,
    hasher: Arc<H>,
}

impl<U, S, E, H> RegistrationService<U, S, E, H>
where
    U: UserRepository,
    S: KeyValueStore,
    E: EmailService,
    H: PasswordHasher,
{
    pub fn new(users: Arc<U>, store: Arc<S>, email: Arc<E>, hasher: Arc<H>, policy: OtpConfig) -> Self {
        let guard = OtpGuard::new(store.clone(), policy.clone());
        let otp = OtpService::new(store, email, policy);
        Self {
            users,
            guard,
            otp,
            hasher,
        }
    }

    /// Begin registration: validate the payload, refuse duplicate emails,
    /// consult the issuance restrictions and send an OTP.
    pub async fn register(
        &self,
        data: RegistrationData,
        role: UserRole,
    ) -> DomainResult<SendOtpResult> {
        validate_registration_data(&data, role)?;

        if self.users.find_by_email(&data.email).await?.is_some() {
            return Err(AuthError::UserAlreadyExists.into());
        }

        self.guard.check_restrictions(&data.email).await?;
        self.guard.track_request(&data.email).await?;

        let result = self.otp.send_otp(&data.name, &data.email).await?;

        tracing::info!(
            email = %mask_email(&data.email),
            role = ?role,
            event = "registration_started",
            "registration OTP issued"
        );

        Ok(result)
    }

    /// Complete registration: verify the OTP, hash the credential and
    /// persist the verified user.
    pub async fn verify(&self, data: VerificationData, role: UserRole) -> DomainResult<User> {
        let required = [&data.name, &data.email, &data.password, &data.otp];
        if required.iter().any(|field| field.trim().is_empty()) {
            return Err(ValidationError::MissingRequiredFields.into());
        }

        if self.users.find_by_email(&data.email).await?.is_some() {
            return Err(AuthError::UserAlreadyExists.into());
        }

        self.otp.verify_otp(&data.email, &data.otp).await?;

        let digest = self
            .hasher
            .hash(&data.password)
            .await
            .map_err(|message| DomainError::Internal { message })?;

        let mut user = User::new(data.name, data.email, digest, role);
        if let (Some(phone), Some(country)) = (data.phone_number, data.country) {
            user = user.with_seller_contact(phone, country);
        }
        user.verify();

        let created = self.users.create(user).await?;

        tracing::info!(
            email = %mask_email(&created.email),
            user_id = %created.id,
            event = "registration_completed",
            "verified user created"
        );

        Ok(created)
    }
}
