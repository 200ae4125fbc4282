//! Configuration management for nowfetch.
//!
//! This module loads the ServiceNow instance and credentials from
//! environment variables, with validation to ensure all required values
//! are present.

use std::env;
use std::fmt;

use url::Url;

use crate::error::NowError;
use crate::models::Table;
use crate::output::OutputFormat;

/// Configuration for connecting to a ServiceNow instance.
///
/// The password is stored but never logged; `Debug` redacts it.
#[derive(Clone)]
pub struct Config {
    /// Instance identifier, the `{instance}` in `https://{instance}.service-now.com`.
    pub instance: String,

    /// Basic auth username.
    pub username: String,

    /// Basic auth password.
    /// This value must never be logged or included in error messages.
    password: String,

    /// Table to read from.
    pub table: Table,

    /// Overrides the base URL derived from `instance`.
    pub base_url_override: Option<String>,

    /// How records are printed.
    pub output: OutputFormat,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("instance", &self.instance)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("table", &self.table)
            .field("base_url_override", &self.base_url_override)
            .field("output", &self.output)
            .finish()
    }
}

impl Config {
    /// Builds a configuration for the `incident` table.
    ///
    /// # Errors
    ///
    /// Returns `NowError::Config` if the instance identifier is malformed
    /// or the password looks like a placeholder.
    pub fn new(
        instance: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, NowError> {
        let instance = Self::validate_instance(instance.into())?;
        let password = password.into();
        Self::validate_password(&password)?;

        Ok(Config {
            instance,
            username: username.into(),
            password,
            table: Table::default(),
            base_url_override: None,
            output: OutputFormat::default(),
        })
    }

    /// Loads configuration from environment variables.
    ///
    /// # Required Environment Variables
    ///
    /// - `SERVICENOW_INSTANCE`: instance identifier (e.g. `dev12345`)
    /// - `SERVICENOW_USER`: username for Basic auth
    /// - `SERVICENOW_PASS`: password for Basic auth
    ///
    /// # Optional Environment Variables
    ///
    /// - `SERVICENOW_TABLE`: table to read, defaults to `incident`
    /// - `SERVICENOW_BASE_URL`: replaces `https://{instance}.service-now.com`
    /// - `SERVICENOW_OUTPUT`: `raw` (default) or `summary`
    ///
    /// # Errors
    ///
    /// Returns `NowError::Config` if any required variable is missing
    /// or if values fail validation.
    pub fn from_env() -> Result<Self, NowError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds configuration from `lookup`, which maps a variable name to
    /// its value. Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Same as [`Config::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, NowError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let required = |name: &str| get(name).ok_or_else(|| NowError::missing_env(name));

        let instance = required("SERVICENOW_INSTANCE")?;
        let username = required("SERVICENOW_USER")?;
        let password = required("SERVICENOW_PASS")?;

        let mut config = Self::new(instance, username, password)?;

        if let Some(table) = get("SERVICENOW_TABLE") {
            config.table = table
                .parse::<Table>()
                .map_err(|e| NowError::invalid_config(format!("SERVICENOW_TABLE: {}", e)))?;
        }

        if let Some(output) = get("SERVICENOW_OUTPUT") {
            config.output = output
                .parse::<OutputFormat>()
                .map_err(|e| NowError::invalid_config(format!("SERVICENOW_OUTPUT: {}", e)))?;
        }

        if let Some(base_url) = get("SERVICENOW_BASE_URL") {
            config = config.with_base_url(base_url)?;
        }

        Ok(config)
    }

    /// Points the client at `base_url` instead of the instance host.
    ///
    /// # Errors
    ///
    /// Returns `NowError::Config` if the URL is not absolute http(s).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Result<Self, NowError> {
        self.base_url_override = Some(Self::validate_base_url(base_url.into())?);
        Ok(self)
    }

    /// Returns the Basic auth password.
    ///
    /// Only for building the Authorization header and redacting errors.
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Base URL of the instance, without trailing slash.
    pub fn base_url(&self) -> String {
        match &self.base_url_override {
            Some(url) => url.clone(),
            None => format!("https://{}.service-now.com", self.instance),
        }
    }

    /// Validates the instance identifier is a bare host label.
    ///
    /// The identifier is interpolated into a hostname, so anything other
    /// than ASCII letters, digits and inner hyphens is rejected.
    fn validate_instance(instance: String) -> Result<String, NowError> {
        let instance = instance.trim().to_string();

        let valid = !instance.is_empty()
            && instance.len() <= 63
            && instance
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-')
            && !instance.starts_with('-')
            && !instance.ends_with('-');

        if !valid {
            return Err(NowError::invalid_config(format!(
                "SERVICENOW_INSTANCE must be a host label like \"dev12345\", got: {:?}",
                instance.chars().take(50).collect::<String>()
            )));
        }

        Ok(instance)
    }

    /// Validates and normalizes a base URL override.
    fn validate_base_url(url: String) -> Result<String, NowError> {
        let url = url.trim().trim_end_matches('/').to_string();

        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(NowError::invalid_config(
                "SERVICENOW_BASE_URL must start with http:// or https://",
            ));
        }

        Url::parse(&url).map_err(|e| {
            NowError::invalid_config(format!("SERVICENOW_BASE_URL is not a valid URL: {}", e))
        })?;

        Ok(url)
    }

    /// Rejects obvious placeholder passwords.
    fn validate_password(password: &str) -> Result<(), NowError> {
        let lower = password.to_lowercase();
        let placeholder_patterns = ["your_password", "your-password", "placeholder", "changeme"];

        if placeholder_patterns.iter().any(|p| lower.contains(p)) {
            return Err(NowError::invalid_config(
                "SERVICENOW_PASS appears to be a placeholder value",
            ));
        }

        Ok(())
    }
}
