//! Shared domain types for the visit-confirmation ledger
//!
//! - [`models`] — member roster records, visit history, evidence fingerprints
//! - [`error`] — unified error codes and types
//! - [`util`] — visit-date parsing and formatting

pub mod error;
pub mod models;
pub mod util;
