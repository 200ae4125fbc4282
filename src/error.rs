//! Error types for nowfetch.
//!
//! This module defines `NowError`, the unified error type used by the
//! library. The binary wraps it in `anyhow` for reporting.
//!
//! # Security
//!
//! Error messages built from external text should pass through
//! `sanitize_message()` so the ServiceNow password never shows up in
//! logs or on the terminal.

use thiserror::Error;

/// Unified error type for all nowfetch operations.
#[derive(Error, Debug)]
pub enum NowError {
    /// Configuration error - missing or invalid environment variables.
    #[error("configuration error: {0}")]
    Config(String),

    /// HTTP client initialization failed.
    #[error("HTTP client error: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// HTTP request failed during transmission (DNS, connect, body read).
    #[error("HTTP request failed: {0}")]
    Http(#[source] reqwest::Error),

    /// Response body was not valid JSON.
    #[error("failed to parse response body as JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Input validation failed.
    #[error("validation error: {0}")]
    Validation(String),
}

impl NowError {
    /// Creates a configuration error for a missing environment variable.
    pub fn missing_env(var_name: &str) -> Self {
        NowError::Config(format!(
            "missing required environment variable: {}",
            var_name
        ))
    }

    /// Creates a configuration error for an invalid value.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        NowError::Config(message.into())
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        NowError::Validation(message.into())
    }

    /// Returns true if the server answered but the body could not be parsed.
    #[must_use]
    pub fn is_parse(&self) -> bool {
        matches!(self, NowError::Parse(_))
    }

    /// Replaces every occurrence of `secret` in `message` with `[REDACTED]`.
    ///
    /// An empty secret leaves the message untouched.
    #[must_use]
    pub fn sanitize_message(message: &str, secret: &str) -> String {
        if secret.is_empty() {
            return message.to_string();
        }
        message.replace(secret, "[REDACTED]")
    }

    /// Display message with `secret` redacted.
    #[must_use]
    pub fn sanitized_display(&self, secret: &str) -> String {
        Self::sanitize_message(&self.to_string(), secret)
    }
}
