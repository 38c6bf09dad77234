//! Server configuration parsed from environment variables.
//!
//! `main` loads an optional `.env` file first, so values may come from either
//! source. Parsing goes through a lookup function so tests never touch the
//! process environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is not set")]
    Missing { var: &'static str },
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
}

/// Credentials and addresses for the contact relay.
#[derive(Clone, PartialEq, Eq)]
pub struct MailConfig {
    pub api_key: String,
    /// Sender address (must be verified with the provider).
    pub from: String,
    /// Mailbox receiving contact submissions.
    pub to: String,
}

// Keep the key out of logs.
impl std::fmt::Debug for MailConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailConfig")
            .field("api_key", &"<redacted>")
            .field("from", &self.from)
            .field("to", &self.to)
            .finish()
    }
}

impl MailConfig {
    /// Required: `RESEND_API_KEY`, `CONTACT_FROM`. Optional: `CONTACT_TO`
    /// (defaults to `CONTACT_FROM`).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] naming the first absent variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = required(&lookup, "RESEND_API_KEY")?;
        let from = required(&lookup, "CONTACT_FROM")?;
        let to = non_empty(&lookup, "CONTACT_TO").unwrap_or_else(|| from.clone());
        Ok(Self { api_key, from, to })
    }

    /// # Errors
    ///
    /// See [`MailConfig::from_lookup`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }
}

/// Listen port from `PORT`, defaulting to [`DEFAULT_PORT`].
///
/// # Errors
///
/// Returns [`ConfigError::InvalidPort`] when `PORT` is set but not a port number.
pub fn port_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<u16, ConfigError> {
    match non_empty(&lookup, "PORT") {
        None => Ok(DEFAULT_PORT),
        Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw)),
    }
}

/// # Errors
///
/// See [`port_from_lookup`].
pub fn port_from_env() -> Result<u16, ConfigError> {
    port_from_lookup(env_lookup)
}

fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn non_empty(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

fn required(lookup: &impl Fn(&str) -> Option<String>, var: &'static str) -> Result<String, ConfigError> {
    non_empty(lookup, var).ok_or(ConfigError::Missing { var })
}
