//! Caption parsing — hybrid date detection plus ID/payment lines
//!
//! A caption accompanying evidence is one optional `dd-mm-yyyy` line followed
//! by one `<id> <payment>` line per member. When the first line is not a
//! date, the visit date defaults to `today` and the first line is treated as
//! an ID line like any other.

use chrono::NaiveDate;
use shared::error::{AppError, AppResult, LineError, LineErrorKind};
use shared::util::parse_visit_date;

/// One validated `<id> <payment>` caption line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitLine {
    pub id: String,
    /// Payment amount in the smallest currency unit
    pub payment: u64,
}

/// Outcome of parsing one caption
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCaption {
    pub visit_date: NaiveDate,
    /// Lines that passed validation, in caption order
    pub entries: Vec<VisitLine>,
    /// Lines rejected with a reason; never abort the batch
    pub line_errors: Vec<LineError>,
}

/// Parse a caption into a visit date and its ID lines.
///
/// `today` is the processing-time calendar date, used when the caption
/// carries no leading date line.
///
/// Errors:
/// - [`ErrorCode::EmptyCaption`](shared::error::ErrorCode::EmptyCaption) for
///   a blank caption (rejected before any ledger access)
/// - [`ErrorCode::NoIdLines`](shared::error::ErrorCode::NoIdLines) for a
///   date-only caption
pub fn parse_caption(caption: &str, today: NaiveDate) -> AppResult<ParsedCaption> {
    let trimmed = caption.trim();
    if trimmed.is_empty() {
        return Err(AppError::empty_caption());
    }

    let lines: Vec<&str> = trimmed.lines().collect();

    // Two-outcome date probe on the first line decides the branch
    let (visit_date, rest) = match parse_visit_date(lines[0]) {
        Some(date) => (date, &lines[1..]),
        None => (today, &lines[..]),
    };

    let id_lines: Vec<&str> = rest
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect();

    if id_lines.is_empty() {
        return Err(AppError::no_id_lines());
    }

    let mut entries = Vec::new();
    let mut line_errors = Vec::new();
    for line in id_lines {
        match parse_id_line(line) {
            Ok(entry) => entries.push(entry),
            Err(err) => line_errors.push(err),
        }
    }

    Ok(ParsedCaption {
        visit_date,
        entries,
        line_errors,
    })
}

/// Parse one `<id> <payment>` line: exactly two whitespace-separated tokens,
/// the second a non-negative integer.
fn parse_id_line(line: &str) -> Result<VisitLine, LineError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 2 {
        return Err(LineError::new(line, LineErrorKind::BadFormat));
    }

    let payment = tokens[1]
        .parse::<u64>()
        .map_err(|_| LineError::new(line, LineErrorKind::BadAmount))?;

    Ok(VisitLine {
        id: tokens[0].to_string(),
        payment,
    })
}
