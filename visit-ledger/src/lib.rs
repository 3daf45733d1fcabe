//! Visit-confirmation ledger core
//!
//! Tracks field-visit confirmations for a roster of members. Each visit is
//! evidenced by a photo and recorded against one or more member IDs with a
//! payment amount; the roster keeps per-member visited status plus an
//! append-only payment history.
//!
//! - [`caption`] — caption text into a visit date and `<id> <payment>` lines
//! - [`gate`] — content-hash duplicate detection for evidence
//! - [`store`] — authoritative ledger with injected persistence port
//! - [`recap`] — per-staff and global totals over a date range
//! - [`roster`] — additive spreadsheet-row import and not-visited export
//! - [`submission`] — one photo confirmation orchestrated end to end
//!
//! Transport (chat commands, spreadsheet cells, photo blob storage) is the
//! embedder's concern; this crate only consumes decoded captions, evidence
//! bytes and roster rows.

pub mod caption;
pub mod gate;
pub mod recap;
pub mod roster;
pub mod store;
pub mod submission;

pub use caption::{ParsedCaption, VisitLine, parse_caption};
pub use recap::{RecapReport, StaffRecap, recap};
pub use roster::{ExportRow, RosterRow, export_not_visited, import_roster};
pub use store::{BatchOutcome, JsonFileLedger, LedgerPersistence, LedgerStore, MemoryLedger};
pub use submission::{SubmissionReport, SubmissionService};
