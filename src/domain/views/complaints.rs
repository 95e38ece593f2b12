//! Complaint log aggregation.

use serde::Serialize;

use crate::domain::market::{Complaint, ComplaintCategory, Severity};
use crate::domain::session::SessionStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCount {
    pub category: ComplaintCategory,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeverityCount {
    pub severity: Severity,
    pub count: usize,
}

/// Complaint counts by category and by severity.
///
/// Categories only appear once they have a complaint; severities always
/// list the full Low to Critical range. Both breakdowns sum to `total`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintSummary {
    pub total: usize,
    pub open: usize,
    pub by_category: Vec<CategoryCount>,
    pub by_severity: Vec<SeverityCount>,
}

impl ComplaintSummary {
    pub fn from_store(store: &SessionStore) -> Self {
        Self::from_complaints(&store.market().complaints)
    }

    pub fn from_complaints(complaints: &[Complaint]) -> Self {
        let by_category = ComplaintCategory::all()
            .iter()
            .map(|&category| CategoryCount {
                category,
                count: complaints.iter().filter(|c| c.category == category).count(),
            })
            .filter(|c| c.count > 0)
            .collect();

        let by_severity = Severity::all()
            .iter()
            .map(|&severity| SeverityCount {
                severity,
                count: complaints.iter().filter(|c| c.severity == severity).count(),
            })
            .collect();

        Self {
            total: complaints.len(),
            open: complaints.iter().filter(|c| c.status.is_open()).count(),
            by_category,
            by_severity,
        }
    }
}
