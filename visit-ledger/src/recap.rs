//! Recap engine — per-staff and global totals over a date range
//!
//! Reconstructs the report purely from member histories. Iteration is
//! "every member, then every history entry", so every staff owning at least
//! one member gets a bucket even with zero matching history, and staff
//! appear in first-seen roster order rather than sorted.

use chrono::NaiveDate;
use shared::models::Member;
use std::collections::{HashMap, HashSet};

/// Accumulated totals for one staff member
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaffRecap {
    pub staff: String,
    groups: HashSet<String>,
    /// History entries attributed to this staff in range
    pub visits: u64,
    /// Sum of payments attributed to this staff in range
    pub payments: u64,
}

impl StaffRecap {
    fn new(staff: &str) -> Self {
        Self {
            staff: staff.to_string(),
            groups: HashSet::new(),
            visits: 0,
            payments: 0,
        }
    }

    /// Distinct group labels seen across attributed entries.
    ///
    /// A repeat visit to the same group does not inflate this count.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }
}

/// Recap over an inclusive date range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecapReport {
    pub from: NaiveDate,
    pub to: NaiveDate,
    /// Per-staff rows, first-seen roster order
    pub staff: Vec<StaffRecap>,
    pub total_groups: usize,
    pub total_visits: u64,
    pub total_payments: u64,
}

/// Scan all members' histories and aggregate entries dated within
/// `[from, to]` (inclusive, calendar dates; `from` may equal `to`).
pub fn recap(members: &[Member], from: NaiveDate, to: NaiveDate) -> RecapReport {
    let mut rows: Vec<StaffRecap> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for member in members {
        let i = *index.entry(member.staff.clone()).or_insert_with(|| {
            rows.push(StaffRecap::new(&member.staff));
            rows.len() - 1
        });
        let row = &mut rows[i];

        for entry in &member.history {
            if entry.date >= from && entry.date <= to {
                row.groups.insert(member.group.clone());
                row.visits += 1;
                row.payments += entry.payment;
            }
        }
    }

    let total_groups = rows.iter().map(StaffRecap::group_count).sum();
    let total_visits = rows.iter().map(|r| r.visits).sum();
    let total_payments = rows.iter().map(|r| r.payments).sum();

    RecapReport {
        from,
        to,
        staff: rows,
        total_groups,
        total_visits,
        total_payments,
    }
}
