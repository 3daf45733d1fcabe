//! Ledger persistence port
//!
//! The store owns the in-memory roster; durability goes through an injected
//! port. The durable format is one JSON document holding the full array of
//! member records, loaded wholesale and rewritten wholesale on every
//! mutation — no append log, no partial writes.

use parking_lot::Mutex;
use serde_json::Value;
use shared::error::{AppError, AppResult};
use shared::models::Member;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Durable storage port for the ledger
///
/// `load` returns the raw JSON document (or `None` when no ledger exists
/// yet) so the store can run its versioned-load healing before decoding into
/// typed records.
pub trait LedgerPersistence: Send + Sync {
    fn load(&self) -> AppResult<Option<Value>>;
    fn save(&self, members: &[Member]) -> AppResult<()>;
}

/// JSON-file implementation of the persistence port
pub struct JsonFileLedger {
    path: PathBuf,
}

impl JsonFileLedger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LedgerPersistence for JsonFileLedger {
    fn load(&self) -> AppResult<Option<Value>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| AppError::persistence(format!("Failed to read ledger file: {e}")))?;
        let raw = serde_json::from_str(&content)
            .map_err(|e| AppError::data_corrupted(format!("Invalid ledger JSON: {e}")))?;
        Ok(Some(raw))
    }

    fn save(&self, members: &[Member]) -> AppResult<()> {
        let content = serde_json::to_string_pretty(members)
            .map_err(|e| AppError::persistence(format!("Failed to encode ledger: {e}")))?;
        std::fs::write(&self.path, content)
            .map_err(|e| AppError::persistence(format!("Failed to write ledger file: {e}")))?;
        tracing::debug!(path = %self.path.display(), count = members.len(), "Ledger persisted");
        Ok(())
    }
}

/// In-memory implementation of the persistence port
///
/// Backs unit tests and embedders that manage durability elsewhere. Counts
/// `save` calls so tests can assert the one-persist-per-batch contract.
#[derive(Default)]
pub struct MemoryLedger {
    data: Mutex<Option<Value>>,
    saves: AtomicUsize,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a raw JSON document, as if a ledger file already existed
    pub fn seeded(raw: Value) -> Self {
        Self {
            data: Mutex::new(Some(raw)),
            saves: AtomicUsize::new(0),
        }
    }

    /// Number of `save` calls observed
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

impl LedgerPersistence for MemoryLedger {
    fn load(&self) -> AppResult<Option<Value>> {
        Ok(self.data.lock().clone())
    }

    fn save(&self, members: &[Member]) -> AppResult<()> {
        let raw = serde_json::to_value(members)
            .map_err(|e| AppError::persistence(format!("Failed to encode ledger: {e}")))?;
        *self.data.lock() = Some(raw);
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::VisitStatus;

    fn member(id: &str) -> Member {
        Member {
            seq: 1,
            group: "G1".to_string(),
            id: id.to_string(),
            name: format!("Member {}", id),
            schedule: "W1".to_string(),
            staff: "Staff A".to_string(),
            status: VisitStatus::NotVisited,
            photo: None,
            visit_date: None,
            history: vec![],
        }
    }

    #[test]
    fn test_json_file_missing_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let port = JsonFileLedger::new(dir.path().join("ledger.json"));
        assert!(port.load().unwrap().is_none());
    }

    #[test]
    fn test_json_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let port = JsonFileLedger::new(dir.path().join("ledger.json"));

        port.save(&[member("A1"), member("A2")]).unwrap();

        let raw = port.load().unwrap().unwrap();
        let members: Vec<Member> = serde_json::from_value(raw).unwrap();
        assert_eq!(members.len(), 2);
        assert_eq!(members[0].id, "A1");
        assert_eq!(members[1].id, "A2");
    }

    #[test]
    fn test_json_file_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.json");
        std::fs::write(&path, "not json at all").unwrap();

        let err = JsonFileLedger::new(path).load().unwrap_err();
        assert_eq!(err.code, shared::error::ErrorCode::DataCorrupted);
    }

    #[test]
    fn test_memory_ledger_counts_saves() {
        let port = MemoryLedger::new();
        assert_eq!(port.save_count(), 0);
        port.save(&[member("A1")]).unwrap();
        port.save(&[member("A1")]).unwrap();
        assert_eq!(port.save_count(), 2);
    }
}
