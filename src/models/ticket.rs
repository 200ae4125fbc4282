//! Normalized ticket view over a raw Table API record.

use serde::{Serialize, Serializer};
use serde_json::Value;

use super::Record;

/// ServiceNow priority, 1 (highest) to 5.
///
/// Serializes as its label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Priority {
    /// `1`
    Critical,
    /// `2`
    High,
    /// `3`
    Moderate,
    /// `4`
    Low,
    /// `5`
    Planning,
    /// Unrecognized value, kept verbatim.
    Unknown(String),
}

impl Priority {
    /// Parses a numeric code or label.
    ///
    /// ServiceNow returns `"3"` by default and `"3 - Moderate"` when
    /// display values are requested, so the leading token is matched too.
    pub fn parse(raw: &str) -> Self {
        let value = raw.trim();
        let head = value
            .split(|c: char| c == '-' || c.is_whitespace())
            .next()
            .unwrap_or_default();

        for candidate in [value, head] {
            match candidate.to_ascii_lowercase().as_str() {
                "1" | "critical" => return Priority::Critical,
                "2" | "high" => return Priority::High,
                "3" | "moderate" => return Priority::Moderate,
                "4" | "low" => return Priority::Low,
                "5" | "planning" => return Priority::Planning,
                _ => {}
            }
        }

        Priority::Unknown(value.to_string())
    }

    /// Human-readable label.
    pub fn label(&self) -> &str {
        match self {
            Priority::Critical => "Critical",
            Priority::High => "High",
            Priority::Moderate => "Moderate",
            Priority::Low => "Low",
            Priority::Planning => "Planning",
            Priority::Unknown(raw) => raw,
        }
    }
}

impl Serialize for Priority {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Flattened ticket fields with fallbacks applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TicketSummary {
    /// `sys_id`, empty if not projected.
    pub id: String,
    /// `number`, falling back to `name`.
    pub name: String,
    /// `short_description`, then `name`, then `number`, then "No summary".
    pub summary: String,
    /// `description`.
    pub description: String,
    /// `state`.
    pub status: String,
    /// `priority`.
    pub priority: Priority,
}

impl TicketSummary {
    /// Builds a summary from a raw record.
    pub fn from_record(record: &Record) -> Self {
        let field = |name: &str| field_text(record, name);

        let name = field("number").or_else(|| field("name")).unwrap_or_default();
        let summary = field("short_description")
            .or_else(|| field("name"))
            .or_else(|| field("number"))
            .unwrap_or_else(|| "No summary".to_string());

        Self {
            id: field("sys_id").unwrap_or_default(),
            name,
            summary,
            description: field("description").unwrap_or_default(),
            status: field("state").unwrap_or_default(),
            priority: Priority::parse(&field("priority").unwrap_or_default()),
        }
    }
}

/// Text of a field, `None` when missing, null or empty.
fn field_text(record: &Record, name: &str) -> Option<String> {
    let text = match record.get(name)? {
        Value::Null => return None,
        Value::String(s) => s.clone(),
        // Reference fields come back as {"link": ..., "value": ...}
        Value::Object(obj) => obj.get("value")?.as_str()?.to_string(),
        other => other.to_string(),
    };

    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
