//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! only shared resource is the optional mail relay; without one the contact
//! endpoint still validates input but reports delivery failure.

use std::sync::Arc;

use crate::services::contact::MailRelay;

/// Clone is required by Axum; the relay is Arc-wrapped.
#[derive(Clone, Default)]
pub struct AppState {
    pub mail: Option<Arc<dyn MailRelay>>,
}

impl AppState {
    #[must_use]
    pub fn new(mail: Option<Arc<dyn MailRelay>>) -> Self {
        Self { mail }
    }

    /// Borrow the relay for one request.
    #[must_use]
    pub fn relay(&self) -> Option<&dyn MailRelay> {
        self.mail.as_deref()
    }
}
