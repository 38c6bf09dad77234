//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints are
//! only meaningful in the browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::ContactRequest;

/// Contact relay endpoint.
pub const CONTACT_ENDPOINT: &str = "/api/contact";

#[cfg(any(test, feature = "hydrate"))]
fn contact_failed_message(status: u16, body: Option<&str>) -> String {
    match body {
        Some(message) if !message.is_empty() => format!("contact request failed: {status} ({message})"),
        _ => format!("contact request failed: {status}"),
    }
}

/// Submit the contact form via `POST /api/contact`.
///
/// # Errors
///
/// Returns an error string if the request cannot be sent or the server
/// responds with a non-OK status.
pub async fn submit_contact(request: &ContactRequest) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(CONTACT_ENDPOINT)
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if resp.ok() {
            return Ok(());
        }
        let status = resp.status();
        let body = resp.json::<super::types::ContactResponse>().await.map(|b| b.message);
        Err(contact_failed_message(status, body.as_deref().ok()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err("not available on server".to_owned())
    }
}
