//! Contact form state.
//!
//! The form owns its field values and a submit status. Network I/O lives in
//! `net::api`; this module only decides when a submission may start and how
//! its outcome is shown.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use crate::net::types::ContactRequest;

/// Message shown for any failed submission.
pub const FAILED_MESSAGE: &str = "Failed to send message.";

/// Message shown when a field is blank.
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in every field.";

/// Where the current submission stands.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed(String),
}

/// Editable form field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub status: SubmitStatus,
}

impl ContactForm {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    #[must_use]
    pub fn is_sending(&self) -> bool {
        self.status == SubmitStatus::Sending
    }

    #[must_use]
    pub fn button_label(&self) -> &'static str {
        if self.is_sending() { "Sending..." } else { "Send" }
    }

    /// Start a submission. Returns the request to send, or `None` when one is
    /// already in flight or a field is blank.
    pub fn begin_submit(&mut self) -> Option<ContactRequest> {
        if self.is_sending() {
            return None;
        }
        let request = ContactRequest {
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            message: self.message.trim().to_owned(),
        };
        if request.name.is_empty() || request.email.is_empty() || request.message.is_empty() {
            self.status = SubmitStatus::Failed(MISSING_FIELDS_MESSAGE.to_owned());
            return None;
        }
        self.status = SubmitStatus::Sending;
        Some(request)
    }

    /// Record the outcome. Success clears the fields.
    pub fn finish(&mut self, result: Result<(), String>) {
        match result {
            Ok(()) => {
                self.name.clear();
                self.email.clear();
                self.message.clear();
                self.status = SubmitStatus::Sent;
            }
            Err(_) => self.status = SubmitStatus::Failed(FAILED_MESSAGE.to_owned()),
        }
    }
}
