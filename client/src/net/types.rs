//! JSON bodies for the contact endpoint.
//!
//! DESIGN
//! ======
//! The server deserializes the same structs, so a field rename here is a wire
//! change. Missing fields default to empty strings and are rejected by the
//! server's validation instead of by serde.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// `POST /api/contact` request body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Body of every `/api/contact` response, success or failure.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    pub message: String,
}

impl ContactResponse {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}
