//! nowfetch - print one page of ServiceNow records
//!
//! # Configuration
//!
//! Set the following environment variables (or use a `.env` file):
//!
//! - `SERVICENOW_INSTANCE`: instance identifier
//! - `SERVICENOW_USER`: Basic auth username
//! - `SERVICENOW_PASS`: Basic auth password
//!
//! # Usage
//!
//! ```bash
//! SERVICENOW_INSTANCE=dev12345 SERVICENOW_USER=admin SERVICENOW_PASS=xxx ./nowfetch
//! ```

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::{fmt, EnvFilter};

use nowfetch::models::TableQuery;
use nowfetch::{config, now_client, output};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file if present (ignore errors if not found)
    dotenvy::dotenv().ok();

    // Logs go to stderr; stdout carries the records
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("nowfetch=info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    tracing::debug!("Starting nowfetch v{}", env!("CARGO_PKG_VERSION"));

    let config = config::Config::from_env().context("Failed to load configuration")?;

    tracing::debug!(
        base_url = %config.base_url(),
        table = %config.table,
        output = %config.output,
        "Configuration loaded"
    );

    let client = now_client::NowClient::new(&config).context("Failed to create HTTP client")?;

    let query = TableQuery::new().with_table(config.table);
    let response = client.fetch(&query).await.map_err(|e| {
        anyhow!(
            "Failed to fetch {} records: {}",
            query.table,
            e.sanitized_display(config.password())
        )
    })?;

    let stdout = std::io::stdout();
    output::render_as(&response, config.output, &mut stdout.lock())
        .context("Failed to write output")?;

    Ok(())
}
