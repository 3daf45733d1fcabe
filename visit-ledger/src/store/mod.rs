//! Ledger store — authoritative roster plus injected persistence port
//!
//! The store owns the full in-memory roster behind one mutex; every mutating
//! operation is a serialized load-mutate-persist cycle, so there are no lost
//! updates and the single `save` per operation is the sole durability
//! boundary. Reads hand out consistent snapshots taken under the same lock.

mod migrate;
mod persistence;

pub use persistence::{JsonFileLedger, LedgerPersistence, MemoryLedger};

use chrono::NaiveDate;
use parking_lot::Mutex;
use std::sync::Arc;
use shared::error::{AppError, AppResult, LineError, LineErrorKind};
use shared::models::{Fingerprint, HistoryEntry, Member, VisitStatus};

use crate::caption::VisitLine;
use crate::gate;

/// Result of applying one submission batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOutcome {
    /// Members whose record gained a history entry
    pub updated: usize,
    /// Unknown-ID lines, collected without aborting the batch
    pub errors: Vec<LineError>,
}

/// Authoritative collection of member records and their histories
pub struct LedgerStore {
    members: Mutex<Vec<Member>>,
    port: Arc<dyn LedgerPersistence>,
}

impl LedgerStore {
    /// Load the ledger through the persistence port.
    ///
    /// A missing ledger starts empty. Records written before the history
    /// feature are healed with an empty history and the healed document is
    /// re-persisted (self-healing schema, idempotent).
    pub fn open(port: Arc<dyn LedgerPersistence>) -> AppResult<Self> {
        let members = match port.load()? {
            None => Vec::new(),
            Some(mut raw) => {
                let healed = migrate::heal_missing_history(&mut raw);
                let members: Vec<Member> = serde_json::from_value(raw)
                    .map_err(|e| AppError::data_corrupted(format!("Invalid ledger record: {e}")))?;
                if healed > 0 {
                    port.save(&members)?;
                    tracing::info!(healed, "Added history structure to older ledger records");
                }
                members
            }
        };
        tracing::debug!(count = members.len(), "Ledger loaded");
        Ok(Self {
            members: Mutex::new(members),
            port,
        })
    }

    /// Apply one submission batch: every entry shares the same visit date,
    /// evidence reference and fingerprint.
    ///
    /// Unknown IDs become [`LineErrorKind::UnknownId`] line errors and the
    /// batch continues. The ledger is persisted exactly once, after all
    /// entries are processed.
    pub fn batch_apply(
        &self,
        date: NaiveDate,
        entries: &[VisitLine],
        photo: &str,
        fingerprint: &Fingerprint,
    ) -> AppResult<BatchOutcome> {
        let mut members = self.members.lock();

        let mut updated = 0;
        let mut errors = Vec::new();
        for entry in entries {
            match members.iter_mut().find(|m| m.id == entry.id) {
                Some(member) => {
                    member.record_visit(date, entry.payment, photo, fingerprint);
                    updated += 1;
                }
                None => {
                    tracing::warn!(id = %entry.id, "Submission references unknown member");
                    errors.push(LineError::new(&entry.id, LineErrorKind::UnknownId));
                }
            }
        }

        self.port.save(&members)?;
        tracing::info!(updated, rejected = errors.len(), date = %date, "Visit batch applied");
        Ok(BatchOutcome { updated, errors })
    }

    /// Reset a member's current visit: status, evidence reference and visit
    /// date are cleared, history stays intact.
    ///
    /// Returns `false` without persisting when the ID is unknown.
    pub fn reset(&self, id: &str) -> AppResult<bool> {
        let mut members = self.members.lock();
        let Some(member) = members.iter_mut().find(|m| m.id == id) else {
            return Ok(false);
        };
        member.clear_visit();
        self.port.save(&members)?;
        tracing::info!(id = %id, "Visit reset, history preserved");
        Ok(true)
    }

    pub fn find_by_id(&self, id: &str) -> Option<Member> {
        self.members.lock().iter().find(|m| m.id == id).cloned()
    }

    /// Members with the given status, import order preserved
    pub fn with_status(&self, status: VisitStatus) -> Vec<Member> {
        self.members
            .lock()
            .iter()
            .filter(|m| m.status == status)
            .cloned()
            .collect()
    }

    /// Payment history of one member, chronologically sorted by visit date
    pub fn history_of(&self, id: &str) -> AppResult<Vec<HistoryEntry>> {
        let members = self.members.lock();
        let member = members
            .iter()
            .find(|m| m.id == id)
            .ok_or_else(|| AppError::member_not_found(id))?;
        let mut history = member.history.clone();
        history.sort_by_key(|entry| entry.date);
        Ok(history)
    }

    /// Duplicate-gate scan: the ID of the member already owning this
    /// fingerprint, if any.
    pub fn find_evidence_owner(&self, fingerprint: &Fingerprint) -> Option<String> {
        let members = self.members.lock();
        gate::find_owner(&members, fingerprint).map(|m| m.id.clone())
    }

    /// Consistent snapshot of the full roster, for recap and export
    pub fn snapshot(&self) -> Vec<Member> {
        self.members.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.members.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.lock().is_empty()
    }

    /// Run a roster mutation under the store lock and persist once.
    ///
    /// Used by the import reconciler; the closure returns the number of
    /// records it appended.
    pub(crate) fn update_roster(
        &self,
        mutate: impl FnOnce(&mut Vec<Member>) -> usize,
    ) -> AppResult<usize> {
        let mut members = self.members.lock();
        let appended = mutate(&mut members);
        self.port.save(&members)?;
        Ok(appended)
    }
}
