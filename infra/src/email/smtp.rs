//! SMTP email transport using lettre

use std::collections::HashMap;

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{error, info};
use uuid::Uuid;

use sp_core::services::otp::EmailService;
use sp_shared::config::EmailConfig;
use sp_shared::utils::validation::mask_email;

use crate::email::template;
use crate::InfrastructureError;

/// SMTP transport for templated verification emails
pub struct SmtpEmailService {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    from_address: String,
}

impl SmtpEmailService {
    /// Create a new SMTP transport from configuration
    pub fn new(config: &EmailConfig) -> Result<Self, InfrastructureError> {
        let credentials =
            Credentials::new(config.smtp_user.clone(), config.smtp_password.clone());

        let mailer = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)
            .map_err(|e| {
                InfrastructureError::Config(format!("Invalid SMTP relay '{}': {}", config.smtp_host, e))
            })?
            .credentials(credentials)
            .build();

        Ok(Self {
            mailer,
            from_address: config.from_address.clone(),
        })
    }
}

#[async_trait]
impl EmailService for SmtpEmailService {
    async fn send(
        &self,
        to: &str,
        subject: &str,
        template_id: &str,
        variables: HashMap<String, String>,
    ) -> Result<String, String> {
        let body = template::template_body(template_id)
            .ok_or_else(|| format!("Unknown email template: {}", template_id))?;
        let body = template::render(body, &variables);

        let message = Message::builder()
            .from(
                self.from_address
                    .parse()
                    .map_err(|e| format!("Invalid from address: {}", e))?,
            )
            .to(to
                .parse()
                .map_err(|e| format!("Invalid recipient address: {}", e))?)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(body)
            .map_err(|e| format!("Failed to build email: {}", e))?;

        self.mailer.send(message).await.map_err(|e| {
            error!(
                to = %mask_email(to),
                error = %e,
                "SMTP delivery failed"
            );
            format!("SMTP delivery failed: {}", e)
        })?;

        let message_id = Uuid::new_v4().to_string();
        info!(
            to = %mask_email(to),
            template = template_id,
            message_id = %message_id,
            "email accepted by SMTP relay"
        );

        Ok(message_id)
    }
}
