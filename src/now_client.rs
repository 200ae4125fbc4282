//! HTTP client for the ServiceNow Table API.
//!
//! This module provides the `NowClient` struct for making Basic-authenticated
//! GET requests against `/api/now/table/{table}`.
//!
//! # Failure handling
//!
//! There is no retry and no timeout. HTTP status codes are not inspected
//! for control flow: whatever JSON the server sends back is classified
//! by [`TableResponse::from_value`]. Transport failures and non-JSON
//! bodies are returned as errors.
//!
//! # Security
//!
//! The password is never logged. Transport error messages are sanitized
//! before logging.

use reqwest::Client;

use crate::config::Config;
use crate::error::NowError;
use crate::models::{Table, TableQuery, TableResponse};

/// The Accept header value for the Table API.
const ACCEPT_JSON: &str = "application/json";

/// Path prefix for Table API endpoints.
const TABLE_API_PATH: &str = "/api/now/table";

/// HTTP client for a single ServiceNow instance.
///
/// # Example
///
/// ```ignore
/// let config = Config::from_env()?;
/// let client = NowClient::new(&config)?;
///
/// let response = client.fetch_incidents().await?;
/// ```
#[derive(Clone)]
pub struct NowClient {
    /// The underlying HTTP client (cloning is cheap).
    http: Client,

    /// Instance base URL, e.g. `https://dev12345.service-now.com`.
    base_url: String,

    /// Basic auth username.
    username: String,

    /// Basic auth password.
    /// SECURITY: Never log this value!
    password: String,
}

impl NowClient {
    /// Creates a new client from configuration.
    ///
    /// # Errors
    ///
    /// Returns `NowError::HttpClient` if the HTTP client fails to initialize.
    pub fn new(config: &Config) -> Result<Self, NowError> {
        // No timeout: a slow instance is waited on indefinitely.
        let http = Client::builder().build().map_err(NowError::HttpClient)?;

        Ok(Self {
            http,
            base_url: config.base_url(),
            username: config.username.clone(),
            password: config.password().to_string(),
        })
    }

    /// Returns the full endpoint URL for `table`.
    pub fn table_url(&self, table: Table) -> String {
        format!("{}{}/{}", self.base_url, TABLE_API_PATH, table.as_str())
    }

    /// Fetches one page of the `incident` table with the default projection.
    ///
    /// # Errors
    ///
    /// See [`NowClient::fetch`].
    pub async fn fetch_incidents(&self) -> Result<TableResponse, NowError> {
        self.fetch(&TableQuery::default()).await
    }

    /// Issues one GET for `query` and classifies the body.
    ///
    /// # Errors
    ///
    /// - `NowError::Http` if the request cannot be sent or the body read
    /// - `NowError::Parse` if the body is not JSON
    pub async fn fetch(&self, query: &TableQuery) -> Result<TableResponse, NowError> {
        let url = self.table_url(query.table);

        tracing::debug!(
            table = %query.table,
            limit = query.limit,
            fields = %query.fields.join(","),
            "Making Table API request"
        );

        let response = self
            .http
            .get(&url)
            .basic_auth(&self.username, Some(&self.password))
            .header(reqwest::header::ACCEPT, ACCEPT_JSON)
            .query(&query.to_query_pairs())
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = %status, "Table API returned non-success status");
        }

        let body = response.text().await.map_err(|e| self.transport_error(e))?;

        tracing::trace!(body = %body, "Table API response");

        let parsed = TableResponse::from_body(&body).inspect_err(|e| {
            tracing::error!(status = %status, error = %e, "Table API response is not JSON");
        })?;

        match &parsed {
            TableResponse::Records(records) => {
                tracing::debug!(count = records.len(), "Received records");
            }
            TableResponse::Unexpected(_) => {
                tracing::warn!(status = %status, "Response has no result list");
            }
        }

        Ok(parsed)
    }

    /// Logs a transport failure with the password redacted.
    fn transport_error(&self, e: reqwest::Error) -> NowError {
        tracing::error!(
            error = %NowError::sanitize_message(&e.to_string(), &self.password),
            "Table API request failed"
        );
        NowError::Http(e)
    }
}
