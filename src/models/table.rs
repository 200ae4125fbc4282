//! Table selection and query parameters for the ServiceNow Table API.

use std::fmt;
use std::str::FromStr;

use crate::error::NowError;

/// Default page size sent as `sysparm_limit`.
pub const DEFAULT_LIMIT: u32 = 5;

/// Default field projection sent as `sysparm_fields`.
pub const DEFAULT_FIELDS: [&str; 5] = [
    "number",
    "short_description",
    "description",
    "state",
    "priority",
];

/// A ServiceNow table that holds ticket-like records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Table {
    /// `incident`
    #[default]
    Incident,
    /// `problem`
    Problem,
    /// `change_request`
    ChangeRequest,
    /// `sc_task` (catalog task)
    ScTask,
}

impl Table {
    /// Every supported table.
    pub const ALL: [Table; 4] = [
        Table::Incident,
        Table::Problem,
        Table::ChangeRequest,
        Table::ScTask,
    ];

    /// The table name as it appears in the API path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Table::Incident => "incident",
            Table::Problem => "problem",
            Table::ChangeRequest => "change_request",
            Table::ScTask => "sc_task",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Table {
    type Err = NowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Table::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| {
                NowError::validation(format!(
                    "unknown table {:?}, expected one of: incident, problem, change_request, sc_task",
                    name.chars().take(50).collect::<String>()
                ))
            })
    }
}

/// Query sent to `/api/now/table/{table}`.
///
/// The limit is passed through as-is; the client does not cap or page
/// the records the server returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableQuery {
    /// Table to read.
    pub table: Table,

    /// Page size (`sysparm_limit`).
    pub limit: u32,

    /// Field projection (`sysparm_fields`).
    pub fields: Vec<String>,
}

impl Default for TableQuery {
    fn default() -> Self {
        Self {
            table: Table::default(),
            limit: DEFAULT_LIMIT,
            fields: DEFAULT_FIELDS.iter().map(|f| f.to_string()).collect(),
        }
    }
}

impl TableQuery {
    /// Creates the default incident query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads from `table` instead.
    pub fn with_table(mut self, table: Table) -> Self {
        self.table = table;
        self
    }

    /// Query string pairs in the order they are sent.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("sysparm_limit", self.limit.to_string()),
            ("sysparm_fields", self.fields.join(",")),
        ]
    }
}
