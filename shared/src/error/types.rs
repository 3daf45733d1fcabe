//! Error types and batch reporting structures

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application error with structured error code
///
/// This is the primary error type for the visit ledger, providing:
/// - Standardized error codes via [`ErrorCode`]
/// - Human-readable messages
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
}

/// Result alias used across the workspace
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create an invalid format error
    pub fn invalid_format(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidFormat, msg)
    }

    /// Create an empty-caption error
    pub fn empty_caption() -> Self {
        Self::new(ErrorCode::EmptyCaption)
    }

    /// Create a no-ID-lines error
    pub fn no_id_lines() -> Self {
        Self::new(ErrorCode::NoIdLines)
    }

    /// Create a duplicate-evidence error
    pub fn duplicate_evidence() -> Self {
        Self::new(ErrorCode::DuplicateEvidence)
    }

    /// Create a member-not-found error
    pub fn member_not_found(id: impl Into<String>) -> Self {
        let id = id.into();
        Self::with_message(ErrorCode::MemberNotFound, format!("Member {} not found", id))
    }

    /// Create a persistence error
    pub fn persistence(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::PersistenceFailed, msg)
    }

    /// Create a data corruption error
    pub fn data_corrupted(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::DataCorrupted, msg)
    }
}

/// Why a single ID line within a batch was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(rename_all = "snake_case")]
pub enum LineErrorKind {
    /// Line is not exactly `<id> <payment>`
    #[error("invalid line format")]
    BadFormat,
    /// Payment token is not a non-negative integer
    #[error("invalid payment amount")]
    BadAmount,
    /// ID does not exist in the roster
    #[error("member not found")]
    UnknownId,
}

/// One rejected ID line within an otherwise-valid batch
///
/// Line errors never abort the batch. They are collected and reported
/// alongside the count of successful updates in the same response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{kind}: {line}")]
pub struct LineError {
    /// The offending line (or ID token for unknown IDs), verbatim
    pub line: String,
    pub kind: LineErrorKind,
}

impl LineError {
    pub fn new(line: impl Into<String>, kind: LineErrorKind) -> Self {
        Self {
            line: line.into(),
            kind,
        }
    }
}
