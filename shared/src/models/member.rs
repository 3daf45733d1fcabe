//! Member Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::fingerprint::Fingerprint;

/// Current visit status of a member
///
/// Reflects only the outcome of the *last* submission: a reset returns the
/// member to [`VisitStatus::NotVisited`] without touching history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisitStatus {
    NotVisited,
    Visited,
}

impl Default for VisitStatus {
    fn default() -> Self {
        VisitStatus::NotVisited
    }
}

/// One recorded visit, immutable once appended
///
/// History entries are never deleted or mutated. They form the durable audit
/// trail even when a member's current status is reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Visit date (calendar date, no time component)
    pub date: NaiveDate,
    /// Payment amount in the smallest currency unit
    pub payment: u64,
    /// Evidence reference for this visit
    pub photo: String,
    /// Fingerprint of the evidence bytes
    pub fingerprint: Fingerprint,
}

/// Member entity, one per roster entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Sequence number assigned at import time, monotonically increasing
    pub seq: u32,
    /// Group/category label
    pub group: String,
    /// Unique roster key, immutable once created
    pub id: String,
    /// Display name
    pub name: String,
    /// Schedule label
    pub schedule: String,
    /// Assigned staff name (cleaned at import time)
    pub staff: String,
    pub status: VisitStatus,
    /// Evidence reference of the most recent successful submission
    pub photo: Option<String>,
    /// Date of the most recent successful submission
    pub visit_date: Option<NaiveDate>,
    /// Append-only visit history. Defaults to empty so ledgers written
    /// before the history feature still deserialize.
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

impl Member {
    /// Record a successful visit: update the current-status fields and
    /// append to history.
    pub fn record_visit(&mut self, date: NaiveDate, payment: u64, photo: &str, fingerprint: &Fingerprint) {
        self.status = VisitStatus::Visited;
        self.photo = Some(photo.to_string());
        self.visit_date = Some(date);
        self.history.push(HistoryEntry {
            date,
            payment,
            photo: photo.to_string(),
            fingerprint: fingerprint.clone(),
        });
    }

    /// Reset the current-status fields. History stays intact.
    pub fn clear_visit(&mut self) {
        self.status = VisitStatus::NotVisited;
        self.photo = None;
        self.visit_date = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_member() -> Member {
        Member {
            seq: 1,
            group: "G1".to_string(),
            id: "A1".to_string(),
            name: "Member One".to_string(),
            schedule: "W1".to_string(),
            staff: "Staff A".to_string(),
            status: VisitStatus::NotVisited,
            photo: None,
            visit_date: None,
            history: vec![],
        }
    }

    #[test]
    fn test_record_visit_updates_status_and_history() {
        let mut m = test_member();
        let fp = Fingerprint::of(b"photo");
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();

        m.record_visit(date, 50_000, "photos/1.jpg", &fp);

        assert_eq!(m.status, VisitStatus::Visited);
        assert_eq!(m.photo.as_deref(), Some("photos/1.jpg"));
        assert_eq!(m.visit_date, Some(date));
        assert_eq!(m.history.len(), 1);
        assert_eq!(m.history[0].payment, 50_000);
        assert_eq!(m.history[0].fingerprint, fp);
    }

    #[test]
    fn test_clear_visit_keeps_history() {
        let mut m = test_member();
        let fp = Fingerprint::of(b"photo");
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        m.record_visit(date, 50_000, "photos/1.jpg", &fp);

        let history_before = m.history.len();
        m.clear_visit();

        assert_eq!(m.status, VisitStatus::NotVisited);
        assert_eq!(m.photo, None);
        assert_eq!(m.visit_date, None);
        assert_eq!(m.history.len(), history_before);
    }

    #[test]
    fn test_history_defaults_when_missing() {
        // Ledger files written before the history feature lack the field
        let json = r#"{
            "seq": 1,
            "group": "G1",
            "id": "A1",
            "name": "Member One",
            "schedule": "W1",
            "staff": "Staff A",
            "status": "NotVisited",
            "photo": null,
            "visit_date": null
        }"#;
        let m: Member = serde_json::from_str(json).unwrap();
        assert!(m.history.is_empty());
    }
}
