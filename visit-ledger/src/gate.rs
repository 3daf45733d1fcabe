//! Duplicate-evidence gate
//!
//! Evidence reuse (the same photo resubmitted, accidentally or to mark a
//! different member visited) must be caught before any ledger mutation. The
//! stored fingerprint is the sole identity criterion; the scan is linear in
//! total history size, which is fine at visit-confirmation write rates.

use shared::models::{Fingerprint, Member};

/// Find the member owning a history entry with the given fingerprint.
///
/// `None` means the evidence has never been used and the submission may
/// proceed.
pub fn find_owner<'a>(members: &'a [Member], fingerprint: &Fingerprint) -> Option<&'a Member> {
    members.iter().find(|member| {
        member
            .history
            .iter()
            .any(|entry| entry.fingerprint == *fingerprint)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
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
    fn test_finds_owner_across_members() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let fp_a = Fingerprint::of(b"photo a");
        let fp_b = Fingerprint::of(b"photo b");

        let mut first = member("A1");
        first.record_visit(date, 1000, "photos/a.jpg", &fp_a);
        let mut second = member("A2");
        second.record_visit(date, 2000, "photos/b.jpg", &fp_b);
        let members = vec![first, second];

        let owner = find_owner(&members, &fp_b).unwrap();
        assert_eq!(owner.id, "A2");
    }

    #[test]
    fn test_unseen_fingerprint_passes() {
        let members = vec![member("A1")];
        assert!(find_owner(&members, &Fingerprint::of(b"new photo")).is_none());
    }

    #[test]
    fn test_scans_whole_history_not_just_latest() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let old_fp = Fingerprint::of(b"old photo");
        let new_fp = Fingerprint::of(b"new photo");

        let mut m = member("A1");
        m.record_visit(date, 1000, "photos/old.jpg", &old_fp);
        m.record_visit(date, 2000, "photos/new.jpg", &new_fp);
        let members = vec![m];

        // The earlier entry still blocks reuse
        assert!(find_owner(&members, &old_fp).is_some());
    }
}
