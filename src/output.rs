//! Console rendering of a Table API response.
//!
//! Records are written one per line as compact JSON, untouched, or as
//! normalized ticket summaries. An unexpected body becomes a single
//! diagnostic line in either format.

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use serde::Serialize;

use crate::error::NowError;
use crate::models::TableResponse;

/// Prefix of the line written for an unexpected response body.
pub const UNEXPECTED_PREFIX: &str = "Unexpected response:";

/// How records are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Each `result` element as the server sent it.
    #[default]
    Raw,
    /// One [`TicketSummary`](crate::models::TicketSummary) per object element.
    Summary,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Raw => f.write_str("raw"),
            OutputFormat::Summary => f.write_str("summary"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = NowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "raw" => Ok(OutputFormat::Raw),
            "summary" => Ok(OutputFormat::Summary),
            other => Err(NowError::validation(format!(
                "unknown output format {:?}, expected raw or summary",
                other.chars().take(50).collect::<String>()
            ))),
        }
    }
}

/// Writes `response` to `out` in `format`.
///
/// # Errors
///
/// Returns any I/O error from `out`.
pub fn render_as<W: Write>(
    response: &TableResponse,
    format: OutputFormat,
    out: &mut W,
) -> io::Result<()> {
    match (response, format) {
        (TableResponse::Records(_), OutputFormat::Summary) => {
            write_lines(&response.summaries(), out)
        }
        _ => render(response, out),
    }
}

/// Writes `response` to `out` in raw format.
///
/// # Errors
///
/// Returns any I/O error from `out`.
pub fn render<W: Write>(response: &TableResponse, out: &mut W) -> io::Result<()> {
    match response {
        TableResponse::Records(records) => write_lines(records, out),
        TableResponse::Unexpected(body) => {
            writeln!(out, "{} {}", UNEXPECTED_PREFIX, body)?;
            out.flush()
        }
    }
}

fn write_lines<T: Serialize, W: Write>(items: &[T], out: &mut W) -> io::Result<()> {
    for item in items {
        serde_json::to_writer(&mut *out, item)?;
        writeln!(out)?;
    }
    out.flush()
}
