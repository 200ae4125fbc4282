//! Data models for the ServiceNow Table API.
//!
//! This module contains the table and query descriptors, the classified
//! response body, and the normalized ticket view.

mod response;
mod table;
mod ticket;

pub use response::*;
pub use table::*;
pub use ticket::*;
