//! Email transport module
//!
//! Provides the implementations behind the core `EmailService` seam:
//!
//! - **SMTP**: production delivery via lettre
//! - **Mock**: console output for development and tests
//!
//! Templates are embedded HTML with `{{variable}}` placeholders.

pub mod mock_email;
pub mod smtp;
pub mod template;

use std::collections::HashMap;

use async_trait::async_trait;

use sp_core::services::otp::EmailService;
use sp_shared::config::EmailConfig;

use crate::InfrastructureError;

pub use mock_email::MockEmailService;
pub use smtp::SmtpEmailService;

/// Email transport selected from configuration
pub enum EmailProvider {
    Smtp(SmtpEmailService),
    Mock(MockEmailService),
}

#[async_trait]
impl EmailService for EmailProvider {
    async fn send(
        &self,
        to: &str,
        subject: &str,
        template_id: &str,
        variables: HashMap<String, String>,
    ) -> Result<String, String> {
        match self {
            EmailProvider::Smtp(service) => service.send(to, subject, template_id, variables).await,
            EmailProvider::Mock(service) => service.send(to, subject, template_id, variables).await,
        }
    }
}

/// Create an email transport based on configuration
///
/// Unknown providers fall back to the mock transport with a warning rather
/// than failing startup.
pub fn create_email_service(config: &EmailConfig) -> Result<EmailProvider, InfrastructureError> {
    match config.provider.as_str() {
        "smtp" => {
            let service = SmtpEmailService::new(config)?;
            Ok(EmailProvider::Smtp(service))
        }
        "mock" => Ok(EmailProvider::Mock(MockEmailService::new())),
        other => {
            tracing::warn!(
                provider = other,
                "Unknown email provider, falling back to mock transport"
            );
            Ok(EmailProvider::Mock(MockEmailService::new()))
        }
    }
}
