//! Submission service — one photo confirmation, end to end
//!
//! Orchestrates caption parsing, the duplicate-evidence gate and the batch
//! apply. The gate runs before any ledger mutation: a duplicate rejects the
//! whole submission and the caller discards the evidence bytes.

use chrono::NaiveDate;
use shared::error::{AppError, AppResult, LineError};
use shared::models::Fingerprint;
use std::sync::Arc;

use crate::caption;
use crate::store::LedgerStore;

/// Outcome of one accepted submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReport {
    pub visit_date: NaiveDate,
    /// Members whose record gained a history entry
    pub updated: usize,
    /// Caption-level and unknown-ID line errors, caption order first
    pub line_errors: Vec<LineError>,
    /// Fingerprint shared by every history entry this submission created
    pub fingerprint: Fingerprint,
}

pub struct SubmissionService {
    store: Arc<LedgerStore>,
}

impl SubmissionService {
    pub fn new(store: Arc<LedgerStore>) -> Self {
        Self { store }
    }

    /// Process a photo confirmation using the current calendar date for
    /// captions without a leading date line.
    pub fn submit(
        &self,
        caption: &str,
        evidence: &[u8],
        photo_ref: &str,
    ) -> AppResult<SubmissionReport> {
        self.submit_at(caption, evidence, photo_ref, shared::util::today())
    }

    /// Process a photo confirmation with an explicit processing date.
    pub fn submit_at(
        &self,
        caption: &str,
        evidence: &[u8],
        photo_ref: &str,
        today: NaiveDate,
    ) -> AppResult<SubmissionReport> {
        let parsed = caption::parse_caption(caption, today)?;

        let fingerprint = Fingerprint::of(evidence);
        if let Some(owner) = self.store.find_evidence_owner(&fingerprint) {
            tracing::warn!(
                fingerprint = %fingerprint,
                owner = %owner,
                "Evidence already used, submission rejected"
            );
            return Err(AppError::duplicate_evidence());
        }

        let outcome =
            self.store
                .batch_apply(parsed.visit_date, &parsed.entries, photo_ref, &fingerprint)?;

        let mut line_errors = parsed.line_errors;
        line_errors.extend(outcome.errors);

        tracing::info!(
            updated = outcome.updated,
            rejected = line_errors.len(),
            date = %parsed.visit_date,
            "Submission recorded"
        );

        Ok(SubmissionReport {
            visit_date: parsed.visit_date,
            updated: outcome.updated,
            line_errors,
            fingerprint,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::{RosterRow, import_roster};
    use crate::store::MemoryLedger;
    use shared::error::{ErrorCode, LineErrorKind};
    use shared::models::VisitStatus;

    fn service_with(ids: &[&str]) -> (SubmissionService, Arc<LedgerStore>) {
        let store = Arc::new(LedgerStore::open(Arc::new(MemoryLedger::new())).unwrap());
        let rows: Vec<RosterRow> = ids
            .iter()
            .map(|id| RosterRow {
                seq_hint: None,
                group: Some("G1".to_string()),
                id: Some(id.to_string()),
                name: Some(format!("Member {}", id)),
                schedule: Some("W1".to_string()),
                staff_raw: Some("01 - Staff A".to_string()),
            })
            .collect();
        import_roster(&store, &rows).unwrap();
        (SubmissionService::new(store.clone()), store)
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn test_dated_batch_updates_both_members() {
        let (service, store) = service_with(&["A1", "A2"]);

        let report = service
            .submit_at("15-03-2024\nA1 50000\nA2 75000", b"photo bytes", "photos/1.jpg", today())
            .unwrap();

        assert_eq!(report.updated, 2);
        assert!(report.line_errors.is_empty());
        assert_eq!(
            report.visit_date,
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
        );

        let a1 = store.find_by_id("A1").unwrap();
        let a2 = store.find_by_id("A2").unwrap();
        assert_eq!(a1.history[0].payment, 50_000);
        assert_eq!(a2.history[0].payment, 75_000);
        // Both entries share the submission fingerprint
        assert_eq!(a1.history[0].fingerprint, report.fingerprint);
        assert_eq!(a2.history[0].fingerprint, report.fingerprint);
    }

    #[test]
    fn test_undated_batch_uses_today_and_reports_unknown_id() {
        let (service, store) = service_with(&["A1"]);

        let report = service
            .submit_at("A1 50000\nA3 30000", b"photo bytes", "photos/1.jpg", today())
            .unwrap();

        assert_eq!(report.updated, 1);
        assert_eq!(report.visit_date, today());
        assert_eq!(report.line_errors.len(), 1);
        assert_eq!(report.line_errors[0].kind, LineErrorKind::UnknownId);
        assert_eq!(report.line_errors[0].line, "A3");
        assert_eq!(store.find_by_id("A1").unwrap().history[0].date, today());
    }

    #[test]
    fn test_duplicate_evidence_rejected_in_full() {
        let (service, store) = service_with(&["A1", "A2"]);
        service
            .submit_at("A1 50000", b"same photo", "photos/1.jpg", today())
            .unwrap();

        // Any caption, different member: still rejected, nothing recorded
        let err = service
            .submit_at("A2 99999", b"same photo", "photos/2.jpg", today())
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::DuplicateEvidence);
        assert_eq!(store.find_by_id("A1").unwrap().history.len(), 1);
        assert!(store.find_by_id("A2").unwrap().history.is_empty());
        assert_eq!(store.find_by_id("A2").unwrap().status, VisitStatus::NotVisited);
    }

    #[test]
    fn test_caption_and_batch_line_errors_merged() {
        let (service, _store) = service_with(&["A1"]);

        let report = service
            .submit_at("A1 50000\nbroken line here\nA9 10", b"photo", "photos/1.jpg", today())
            .unwrap();

        assert_eq!(report.updated, 1);
        assert_eq!(report.line_errors.len(), 2);
        assert_eq!(report.line_errors[0].kind, LineErrorKind::BadFormat);
        assert_eq!(report.line_errors[1].kind, LineErrorKind::UnknownId);
    }

    #[test]
    fn test_format_errors_reject_before_ledger_access() {
        let (service, store) = service_with(&["A1"]);

        let err = service
            .submit_at("", b"photo", "photos/1.jpg", today())
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::EmptyCaption);

        let err = service
            .submit_at("15-03-2024", b"photo", "photos/1.jpg", today())
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::NoIdLines);

        // The evidence was never recorded, so the same bytes are still usable
        let report = service
            .submit_at("A1 1000", b"photo", "photos/1.jpg", today())
            .unwrap();
        assert_eq!(report.updated, 1);
        assert_eq!(store.find_by_id("A1").unwrap().history.len(), 1);
    }
}
