//! Response model for the ServiceNow Table API.
//!
//! The body is accepted as untyped JSON and classified into one of two
//! shapes: a list of records under `result`, or anything else.

use serde_json::{Map, Value};

use crate::error::NowError;

use super::TicketSummary;

/// One row returned by the Table API.
///
/// Fields keep the order the server sent them in.
pub type Record = Map<String, Value>;

/// Classified Table API response body.
#[derive(Debug, Clone, PartialEq)]
pub enum TableResponse {
    /// `result` held an array; its elements in server order, untouched.
    Records(Vec<Value>),

    /// Any other shape; holds the whole parsed body.
    Unexpected(Value),
}

impl TableResponse {
    /// Parses a raw body and classifies it.
    ///
    /// # Errors
    ///
    /// Returns `NowError::Parse` if the body is not valid JSON.
    pub fn from_body(body: &str) -> Result<Self, NowError> {
        let value: Value = serde_json::from_str(body)?;
        Ok(Self::from_value(value))
    }

    /// Classifies an already-parsed body.
    ///
    /// Any array under `result` is a record list, whatever its elements
    /// are. A missing or non-array `result` is unexpected.
    pub fn from_value(value: Value) -> Self {
        if let Some(Value::Array(items)) = value.get("result") {
            return TableResponse::Records(items.clone());
        }
        TableResponse::Unexpected(value)
    }

    /// Returns the `result` elements, or an empty slice for an unexpected body.
    pub fn records(&self) -> &[Value] {
        match self {
            TableResponse::Records(records) => records,
            TableResponse::Unexpected(_) => &[],
        }
    }

    /// Normalized summaries of the object elements, in server order.
    ///
    /// Elements that are not objects have no fields to summarize and are
    /// skipped.
    pub fn summaries(&self) -> Vec<TicketSummary> {
        self.records()
            .iter()
            .filter_map(Value::as_object)
            .map(TicketSummary::from_record)
            .collect()
    }
}
