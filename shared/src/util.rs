//! Date utilities — visit-date format shared by every text interface
//!
//! Captions, recap queries and replies all speak `dd-mm-yyyy`. Parsing is a
//! two-outcome function (`Some`/`None`), never error-driven control flow:
//! the caption parser branches on the outcome to decide whether the first
//! line is a date or an ID line.

use chrono::NaiveDate;

/// Wire format for visit dates
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Parse a `dd-mm-yyyy` date token. `None` when the token is not a date.
pub fn parse_visit_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
}

/// Render a date in the `dd-mm-yyyy` wire format
pub fn format_visit_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Current calendar date in local time
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
