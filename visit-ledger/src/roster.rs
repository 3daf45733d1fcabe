//! Roster reconciliation — additive import and not-visited export
//!
//! Import never overwrites: rows whose ID already exists in the ledger are
//! skipped, so re-importing the same spreadsheet is harmless. Cell decoding
//! is the adapter's job; this module consumes already-decoded rows.

use serde::{Deserialize, Serialize};
use shared::error::AppResult;
use shared::models::{Member, VisitStatus};

use crate::store::LedgerStore;

/// One decoded roster row: `[seq, group, id, name, schedule, staff]`
///
/// The sequence cell is a hint only; imported members get a fresh sequence
/// number continuing from the current record count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterRow {
    pub seq_hint: Option<u32>,
    pub group: Option<String>,
    pub id: Option<String>,
    pub name: Option<String>,
    pub schedule: Option<String>,
    pub staff_raw: Option<String>,
}

/// Strip a leading `"<code> - "` prefix from a raw staff cell.
///
/// Without a separator the trimmed raw value is used as-is.
pub fn clean_staff_name(raw: &str) -> String {
    match raw.split_once('-') {
        Some((_code, name)) => name.trim().to_string(),
        None => raw.trim().to_string(),
    }
}

/// Merge roster rows into the ledger.
///
/// Rows missing `id` or `name` are skipped, as are rows whose ID already
/// exists. Returns the number of rows actually imported; the ledger is
/// persisted once after processing all rows.
pub fn import_roster(store: &LedgerStore, rows: &[RosterRow]) -> AppResult<usize> {
    let imported = store.update_roster(|members| {
        let mut next_seq = members.len() as u32 + 1;
        let mut imported = 0;

        for row in rows {
            let (Some(id), Some(name)) = (blank_to_none(&row.id), blank_to_none(&row.name)) else {
                continue;
            };
            if members.iter().any(|m| m.id == id) {
                continue;
            }

            members.push(Member {
                seq: next_seq,
                group: row.group.as_deref().unwrap_or("").trim().to_string(),
                id,
                name,
                schedule: row.schedule.as_deref().unwrap_or("").trim().to_string(),
                staff: clean_staff_name(row.staff_raw.as_deref().unwrap_or("")),
                status: VisitStatus::NotVisited,
                photo: None,
                visit_date: None,
                history: Vec::new(),
            });
            next_seq += 1;
            imported += 1;
        }
        imported
    })?;

    tracing::info!(imported, total = store.len(), "Roster import finished");
    Ok(imported)
}

fn blank_to_none(cell: &Option<String>) -> Option<String> {
    cell.as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// One exported roster row: `[seq, group, id, name, schedule, staff, status]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRow {
    pub seq: u32,
    pub group: String,
    pub id: String,
    pub name: String,
    pub schedule: String,
    pub staff: String,
    pub status: VisitStatus,
}

/// Export rows for every member still [`VisitStatus::NotVisited`], roster
/// order preserved.
pub fn export_not_visited(members: &[Member]) -> Vec<ExportRow> {
    members
        .iter()
        .filter(|m| m.status == VisitStatus::NotVisited)
        .map(|m| ExportRow {
            seq: m.seq,
            group: m.group.clone(),
            id: m.id.clone(),
            name: m.name.clone(),
            schedule: m.schedule.clone(),
            staff: m.staff.clone(),
            status: m.status,
        })
        .collect()
}
