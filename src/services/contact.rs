//! Contact relay service.
//!
//! DESIGN
//! ======
//! Submissions are validated into a [`ContactMessage`], rendered as a plain
//! text email and handed to a [`MailRelay`]. The relay is a trait object so
//! handlers can be exercised with an in-memory relay.

use async_trait::async_trait;
use client::net::types::ContactRequest;
use resend_rs::Resend;
use resend_rs::types::CreateEmailBaseOptions;

use crate::config::MailConfig;

#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("missing required fields")]
    MissingFields,
    #[error("mail relay not configured")]
    RelayUnavailable,
    #[error("email delivery failed: {0}")]
    Delivery(String),
}

/// A validated submission with surrounding whitespace removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    /// # Errors
    ///
    /// Returns [`ContactError::MissingFields`] if any field is blank.
    pub fn from_request(request: &ContactRequest) -> Result<Self, ContactError> {
        let name = request.name.trim();
        let email = request.email.trim();
        let message = request.message.trim();
        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(ContactError::MissingFields);
        }
        Ok(Self { name: name.to_owned(), email: email.to_owned(), message: message.to_owned() })
    }

    #[must_use]
    pub fn subject(&self) -> String {
        format!("Contact Form Submission from {}", self.name)
    }

    #[must_use]
    pub fn text_body(&self) -> String {
        format!("Name: {}\nEmail: {}\nMessage: {}", self.name, self.email, self.message)
    }
}

/// Outbound mail transport.
#[async_trait]
pub trait MailRelay: Send + Sync {
    async fn send(&self, message: &ContactMessage) -> Result<(), ContactError>;
}

/// [`MailRelay`] backed by the Resend HTTP API.
pub struct ResendRelay {
    client: Resend,
    from: String,
    to: String,
}

impl ResendRelay {
    #[must_use]
    pub fn new(config: &MailConfig) -> Self {
        Self { client: Resend::new(&config.api_key), from: config.from.clone(), to: config.to.clone() }
    }
}

#[async_trait]
impl MailRelay for ResendRelay {
    async fn send(&self, message: &ContactMessage) -> Result<(), ContactError> {
        let to = [self.to.as_str()];
        let email = CreateEmailBaseOptions::new(&self.from, to, message.subject()).with_text(&message.text_body());
        self.client
            .emails
            .send(email)
            .await
            .map_err(|e| ContactError::Delivery(e.to_string()))?;
        Ok(())
    }
}

/// Validate and relay one submission.
///
/// # Errors
///
/// Returns [`ContactError::MissingFields`] for blank input,
/// [`ContactError::RelayUnavailable`] when no relay is configured, or the
/// relay's delivery error.
pub async fn submit(relay: Option<&dyn MailRelay>, request: &ContactRequest) -> Result<(), ContactError> {
    let message = ContactMessage::from_request(request)?;
    let relay = relay.ok_or(ContactError::RelayUnavailable)?;
    relay.send(&message).await?;
    tracing::info!(name = %message.name, email = %message.email, "contact message relayed");
    Ok(())
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
