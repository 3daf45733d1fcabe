//! Domain models shared across the visit ledger

pub mod fingerprint;
pub mod member;

pub use fingerprint::Fingerprint;
pub use member::{HistoryEntry, Member, VisitStatus};
