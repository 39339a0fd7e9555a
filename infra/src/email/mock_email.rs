//! Mock email transport
//!
//! Logs messages to the console instead of sending them. Used for
//! development and as the fallback provider.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use sp_core::services::otp::EmailService;
use sp_shared::utils::validation::mask_email;

use crate::email::template;

/// Mock email transport for development and testing
///
/// Renders the real template so development output matches production
/// content, and keeps the last rendered body for inspection.
pub struct MockEmailService {
    /// Counter for the number of messages sent
    message_count: Arc<AtomicU64>,
    /// Last rendered message body
    last_body: Arc<Mutex<Option<String>>>,
    /// Whether to simulate failures (for testing)
    simulate_failure: bool,
}

impl MockEmailService {
    /// Create a new mock transport
    pub fn new() -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            last_body: Arc::new(Mutex::new(None)),
            simulate_failure: false,
        }
    }

    /// Create a mock transport that fails every send
    pub fn failing() -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            last_body: Arc::new(Mutex::new(None)),
            simulate_failure: true,
        }
    }

    /// Total number of messages sent
    pub fn message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// The last rendered message body, if any
    pub fn last_body(&self) -> Option<String> {
        self.last_body.lock().unwrap().clone()
    }
}

impl Default for MockEmailService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmailService for MockEmailService {
    async fn send(
        &self,
        to: &str,
        subject: &str,
        template_id: &str,
        variables: HashMap<String, String>,
    ) -> Result<String, String> {
        if self.simulate_failure {
            warn!(to = %mask_email(to), "mock email transport simulating failure");
            return Err("mock email transport failure".to_string());
        }

        let body = template::template_body(template_id)
            .ok_or_else(|| format!("Unknown email template: {}", template_id))?;
        let body = template::render(body, &variables);

        self.message_count.fetch_add(1, Ordering::SeqCst);
        *self.last_body.lock().unwrap() = Some(body);

        let message_id = format!("mock-{}", Uuid::new_v4());
        info!(
            to = %mask_email(to),
            subject = subject,
            template = template_id,
            message_id = %message_id,
            "mock email sent"
        );

        Ok(message_id)
    }
}
