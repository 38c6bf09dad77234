//! Contact form endpoint.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use client::net::types::{ContactRequest, ContactResponse};

use crate::services::contact::{self, ContactError};
use crate::state::AppState;

pub const SENT_MESSAGE: &str = "Message sent successfully";
pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields";
pub const FAILED_MESSAGE: &str = "Failed to send message";
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Method not allowed";

/// Map a service error to its HTTP status and public message.
pub(crate) fn contact_error_to_status(err: &ContactError) -> (StatusCode, &'static str) {
    match err {
        ContactError::MissingFields => (StatusCode::BAD_REQUEST, MISSING_FIELDS_MESSAGE),
        ContactError::RelayUnavailable | ContactError::Delivery(_) => (StatusCode::INTERNAL_SERVER_ERROR, FAILED_MESSAGE),
    }
}

/// `POST /api/contact`
///
/// A body that is not a JSON object counts as missing fields.
pub async fn submit_contact(
    State(state): State<AppState>,
    body: Result<Json<ContactRequest>, JsonRejection>,
) -> (StatusCode, Json<ContactResponse>) {
    let Ok(Json(request)) = body else {
        return (StatusCode::BAD_REQUEST, Json(ContactResponse::new(MISSING_FIELDS_MESSAGE)));
    };
    match contact::submit(state.relay(), &request).await {
        Ok(()) => (StatusCode::OK, Json(ContactResponse::new(SENT_MESSAGE))),
        Err(e) => {
            let (status, message) = contact_error_to_status(&e);
            if status.is_server_error() {
                tracing::error!(error = %e, "contact relay failed");
            } else {
                tracing::debug!(error = %e, "contact submission rejected");
            }
            (status, Json(ContactResponse::new(message)))
        }
    }
}

/// JSON 405 for any other method on the contact route.
pub async fn method_not_allowed() -> (StatusCode, Json<ContactResponse>) {
    (StatusCode::METHOD_NOT_ALLOWED, Json(ContactResponse::new(METHOD_NOT_ALLOWED_MESSAGE)))
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
