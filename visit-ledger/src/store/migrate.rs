//! Versioned-load healing for older ledger files
//!
//! Ledgers written before the payment-history feature carry member objects
//! without a `history` field. Healing inserts an empty array so every record
//! decodes with the current schema; the store re-persists only when
//! something actually changed, keeping the step idempotent.

use serde_json::Value;

/// Insert an empty `history` array into every record missing one.
///
/// Returns the number of records healed; `0` means the document was already
/// current.
pub(crate) fn heal_missing_history(raw: &mut Value) -> usize {
    let Value::Array(records) = raw else {
        return 0;
    };

    let mut healed = 0;
    for record in records {
        if let Value::Object(fields) = record
            && !fields.contains_key("history")
        {
            fields.insert("history".to_string(), Value::Array(Vec::new()));
            healed += 1;
        }
    }
    healed
}
