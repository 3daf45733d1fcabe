//! Unified error codes for the visit ledger
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Submission errors (caption/evidence)
//! - 2xxx: Ledger errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and stable reporting across adapter boundaries (chat transport, exports).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid format
    InvalidFormat = 5,

    // ==================== 1xxx: Submission ====================
    /// Caption accompanying the evidence is empty
    EmptyCaption = 1001,
    /// Caption contains no ID lines (for example a date-only caption)
    NoIdLines = 1002,
    /// Evidence bytes match a fingerprint already stored in some history
    DuplicateEvidence = 1003,

    // ==================== 2xxx: Ledger ====================
    /// Member ID does not exist in the roster
    MemberNotFound = 2001,

    // ==================== 9xxx: System ====================
    /// Durable write of the ledger failed
    PersistenceFailed = 9001,
    /// Durable ledger contents could not be decoded
    DataCorrupted = 9002,
}

impl ErrorCode {
    /// Get the default human-readable message for this error code
    pub fn message(&self) -> &'static str {
        match self {
            ErrorCode::Unknown => "Unknown error",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::EmptyCaption => "Caption is empty",
            ErrorCode::NoIdLines => "No ID lines found in caption",
            ErrorCode::DuplicateEvidence => "Evidence already used by a previous visit",
            ErrorCode::MemberNotFound => "Member not found",
            ErrorCode::PersistenceFailed => "Failed to persist ledger",
            ErrorCode::DataCorrupted => "Ledger data is corrupted",
        }
    }

    /// Get the category this error code belongs to
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(*self as u16)
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> u16 {
        code as u16
    }
}

impl TryFrom<u16> for ErrorCode {
    type Error = String;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidFormat),
            1001 => Ok(ErrorCode::EmptyCaption),
            1002 => Ok(ErrorCode::NoIdLines),
            1003 => Ok(ErrorCode::DuplicateEvidence),
            2001 => Ok(ErrorCode::MemberNotFound),
            9001 => Ok(ErrorCode::PersistenceFailed),
            9002 => Ok(ErrorCode::DataCorrupted),
            _ => Err(format!("Unknown error code: {}", value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({})", self, *self as u16)
    }
}

/// Classification of errors by domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    General,
    Submission,
    Ledger,
    System,
}

impl ErrorCategory {
    /// Derive the category from a raw code value by its numeric range
    pub fn from_code(code: u16) -> Self {
        match code {
            1000..=1999 => ErrorCategory::Submission,
            2000..=2999 => ErrorCategory::Ledger,
            9000..=9999 => ErrorCategory::System,
            _ => ErrorCategory::General,
        }
    }
}
