//! Tabular view of questionnaire submissions.

use serde::Serialize;

use crate::domain::foundation::Role;
use crate::domain::identification::StakeholderEntry;
use crate::domain::session::SessionStore;

/// Column headers are cut to this many characters.
pub const QUESTION_WIDTH: usize = 30;

/// Cell values are cut to this many characters.
pub const ANSWER_WIDTH: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCell {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentificationRow {
    pub role: Role,
    pub timestamp: String,
    pub cells: Vec<TableCell>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentificationTable {
    pub rows: Vec<IdentificationRow>,
}

impl IdentificationTable {
    pub fn from_store(store: &SessionStore) -> Self {
        let rows = store
            .identification()
            .stakeholders
            .iter()
            .map(row_for)
            .collect();
        Self { rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn row_for(entry: &StakeholderEntry) -> IdentificationRow {
    IdentificationRow {
        role: entry.role,
        timestamp: entry.timestamp.display(),
        cells: entry
            .ordered_responses()
            .into_iter()
            .map(|(q, a)| TableCell {
                question: truncate_chars(q, QUESTION_WIDTH),
                answer: truncate_chars(a, ANSWER_WIDTH),
            })
            .collect(),
    }
}

/// Keeps at most `max` characters, never splitting a code point.
fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{SessionId, Timestamp};
    use chrono::{TimeZone, Utc};
    use std::collections::BTreeMap;

    #[test]
    fn rows_follow_submission_order_with_truncated_text() {
        let mut store = SessionStore::new(SessionId::new());
        let long_answer = "a".repeat(80);
        let responses: BTreeMap<String, String> = [(
            "What are their payment terms and conditions?".to_string(),
            long_answer,
        )]
        .into_iter()
        .collect();
        let at = Timestamp::from_datetime(Utc.with_ymd_and_hms(2024, 3, 5, 9, 30, 0).unwrap());
        store.record_stakeholder_entry(StakeholderEntry::with_timestamp(
            Role::Buyer,
            responses,
            at,
        ));
        store.record_stakeholder_entry(StakeholderEntry::new(Role::Supplier, BTreeMap::new()));

        let table = IdentificationTable::from_store(&store);

        assert_eq!(table.rows.len(), 2);
        let first = &table.rows[0];
        assert_eq!(first.role, Role::Buyer);
        assert_eq!(first.timestamp, "2024-03-05 09:30:00");
        assert_eq!(first.cells[0].question, "What are their payment terms a");
        assert_eq!(first.cells[0].answer.chars().count(), ANSWER_WIDTH);
        assert!(table.rows[1].cells.is_empty());
    }

    #[test]
    fn truncation_respects_multibyte_characters() {
        assert_eq!(truncate_chars("ধন্যবাদ", 3).chars().count(), 3);
        assert_eq!(truncate_chars("short", 30), "short");
    }

    #[test]
    fn empty_store_has_no_rows() {
        let store = SessionStore::new(SessionId::new());
        assert!(IdentificationTable::from_store(&store).is_empty());
    }
}
