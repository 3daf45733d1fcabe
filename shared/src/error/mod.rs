//! Unified error system for the visit ledger
//!
//! This module provides:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes and messages
//! - [`LineError`]: Per-line batch rejection, collected rather than propagated
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Submission errors
//! - 2xxx: Ledger errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! // Create a simple error
//! let err = AppError::new(ErrorCode::MemberNotFound);
//!
//! // Create an error with a custom message
//! let err = AppError::member_not_found("A3");
//! assert_eq!(err.code, ErrorCode::MemberNotFound);
//! ```

pub mod codes;
pub mod types;

pub use codes::{ErrorCategory, ErrorCode};
pub use types::{AppError, AppResult, LineError, LineErrorKind};
