//! Conflict resolution matrix (competitiveness on x, cooperativeness on y).

use serde::Serialize;
use std::fmt;

use crate::domain::foundation::{ActorId, Score, MIDLINE};
use crate::domain::session::SessionStore;

/// Distance from the midline that still counts as moderate.
const MODERATE_BAND: u8 = 1;

/// Resolution approach suggested by a conflict assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ConflictStrategy {
    Accommodation,
    Collaboration,
    Avoidance,
    Competition,
    Compromise,
}

impl ConflictStrategy {
    pub fn all() -> &'static [ConflictStrategy] {
        &[
            ConflictStrategy::Accommodation,
            ConflictStrategy::Collaboration,
            ConflictStrategy::Avoidance,
            ConflictStrategy::Competition,
            ConflictStrategy::Compromise,
        ]
    }

    /// Compromise wins when both scores are moderate (4 to 6); otherwise
    /// each axis is split at the midline.
    pub fn classify(cooperativeness: Score, competitiveness: Score) -> Self {
        if cooperativeness.is_near_midline(MODERATE_BAND)
            && competitiveness.is_near_midline(MODERATE_BAND)
        {
            return ConflictStrategy::Compromise;
        }
        match (cooperativeness.is_high(), competitiveness.is_high()) {
            (true, false) => ConflictStrategy::Accommodation,
            (true, true) => ConflictStrategy::Collaboration,
            (false, false) => ConflictStrategy::Avoidance,
            (false, true) => ConflictStrategy::Competition,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ConflictStrategy::Accommodation => "Accommodation",
            ConflictStrategy::Collaboration => "Collaboration",
            ConflictStrategy::Avoidance => "Avoidance",
            ConflictStrategy::Competition => "Competition",
            ConflictStrategy::Compromise => "Compromise",
        }
    }

    /// Legend text for the matrix.
    pub fn condition(&self) -> &'static str {
        match self {
            ConflictStrategy::Accommodation => "High Cooperativeness, Low Competition",
            ConflictStrategy::Collaboration => "High Cooperativeness, High Competition",
            ConflictStrategy::Avoidance => "Low Cooperativeness, Low Competition",
            ConflictStrategy::Competition => "Low Cooperativeness, High Competition",
            ConflictStrategy::Compromise => "Moderate Both",
        }
    }
}

impl fmt::Display for ConflictStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictPoint {
    pub stakeholder: ActorId,
    pub label: String,
    /// Competitiveness.
    pub x: u8,
    /// Cooperativeness.
    pub y: u8,
    pub strategy: ConflictStrategy,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyCount {
    pub strategy: ConflictStrategy,
    pub condition: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictMatrix {
    pub title: &'static str,
    pub midline: u8,
    pub points: Vec<ConflictPoint>,
    pub counts: Vec<StrategyCount>,
}

impl ConflictMatrix {
    pub fn from_store(store: &SessionStore) -> Self {
        let points: Vec<ConflictPoint> = store
            .analysis()
            .conflict_data
            .iter()
            .map(|c| ConflictPoint {
                stakeholder: c.stakeholder,
                label: store.stakeholder_label(&c.stakeholder),
                x: c.competitiveness.value(),
                y: c.cooperativeness.value(),
                strategy: ConflictStrategy::classify(c.cooperativeness, c.competitiveness),
                description: c.description.clone(),
            })
            .collect();

        let counts = ConflictStrategy::all()
            .iter()
            .map(|&strategy| StrategyCount {
                strategy,
                condition: strategy.condition(),
                count: points.iter().filter(|p| p.strategy == strategy).count(),
            })
            .collect();

        Self {
            title: "Conflict Resolution Matrix",
            midline: MIDLINE,
            points,
            counts,
        }
    }

    pub fn count(&self, strategy: ConflictStrategy) -> usize {
        self.counts
            .iter()
            .find(|c| c.strategy == strategy)
            .map(|c| c.count)
            .unwrap_or(0)
    }
}
