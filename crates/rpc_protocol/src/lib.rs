//! Request/response definitions for the FinanceFlow HTTP API.
//!
//! Every endpoint takes and returns JSON. Field names are camelCase, matching
//! the stored records.

mod error;
pub mod requests;
pub mod responses;

pub use error::*;
