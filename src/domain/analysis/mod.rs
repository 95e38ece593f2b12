//! Stakeholder Analysis (SAT) records.
//!
//! # Components
//!
//! - `RelationshipRating` - power/interest/legitimacy/urgency matrix input
//! - `ConflictEntry` - cooperativeness/competitiveness assessment
//! - `StakeholderGroup` - the four management quadrants
//! - `KnowledgeEntry` - knowledge and responsibilities per group
//! - `ValueMap` - value exchange map per actor

mod group;
mod rating;
mod value_map;

pub use group::StakeholderGroup;
pub use rating::{ConflictEntry, RelationshipRating};
pub use value_map::{KnowledgeEntry, ValueMap, ValueMapContent};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Everything collected by the analysis toolkit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisData {
    #[serde(default)]
    pub relationship_data: Vec<RelationshipRating>,

    #[serde(default)]
    pub conflict_data: Vec<ConflictEntry>,

    /// Last write per group wins.
    #[serde(default)]
    pub knowledge_data: BTreeMap<StakeholderGroup, KnowledgeEntry>,

    #[serde(default)]
    pub value_map: Vec<ValueMap>,
}

impl AnalysisData {
    /// Ratings with power and interest both above the midline.
    pub fn key_stakeholder_count(&self) -> usize {
        self.relationship_data
            .iter()
            .filter(|r| r.is_key_stakeholder())
            .count()
    }
}
