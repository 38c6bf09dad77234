//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls and `types` defines the JSON bodies shared with
//! the server.

pub mod api;
pub mod types;
