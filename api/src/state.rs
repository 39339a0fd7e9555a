//! Application state shared across request handlers

use std::sync::Arc;

use sp_core::repositories::UserRepository;
use sp_core::services::otp::{EmailService, KeyValueStore};
use sp_core::services::registration::{PasswordHasher, RegistrationService};

/// Shared services injected into handlers
pub struct AppState<U, S, E, H>
where
    U: UserRepository,
    S: KeyValueStore,
    E: EmailService,
    H: PasswordHasher,
{
    pub registration: Arc<RegistrationService<U, S, E, H>>,
}
