//! # nowfetch
//!
//! nowfetch reads one page of records from a ServiceNow table and prints
//! them, one per line.
//!
//! ## Architecture
//!
//! - [`config`] - Instance and credential loading from environment variables
//! - [`error`] - Error type with credential redaction
//! - [`now_client`] - HTTP client for the Table API
//! - [`models`] - Table/query descriptors and the classified response body
//! - [`output`] - Line-oriented rendering of a response
//!
//! ## Configuration
//!
//! Required:
//!
//! - `SERVICENOW_INSTANCE`: instance identifier (`{instance}.service-now.com`)
//! - `SERVICENOW_USER`: Basic auth username
//! - `SERVICENOW_PASS`: Basic auth password
//!
//! Optional:
//! - `SERVICENOW_TABLE`: `incident` (default), `problem`, `change_request`, `sc_task`
//! - `SERVICENOW_BASE_URL`: replaces the instance URL, e.g. for a proxy
//! - `RUST_LOG`: Log level (e.g., `nowfetch=debug`)
//!
//! ## Example
//!
//! ```ignore
//! use nowfetch::config::Config;
//! use nowfetch::now_client::NowClient;
//!
//! async fn example() -> Result<(), nowfetch::error::NowError> {
//!     let config = Config::from_env()?;
//!     let client = NowClient::new(&config)?;
//!
//!     let response = client.fetch_incidents().await?;
//!     for ticket in response.summaries() {
//!         println!("{}: {} ({})", ticket.name, ticket.summary, ticket.priority.label());
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod models;
pub mod now_client;
pub mod output;
