//! Power matrices: relationship ratings placed on a 2x2 grid.
//!
//! Power is always the x axis; the y axis is interest, legitimacy or
//! urgency. Every rating lands in exactly one quadrant.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::domain::analysis::{RelationshipRating, StakeholderGroup};
use crate::domain::foundation::{ActorId, Score, ValidationError, MIDLINE};
use crate::domain::session::SessionStore;

/// Axis paired with power on a quadrant chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuadrantAxis {
    Interest,
    Legitimacy,
    Urgency,
}

impl QuadrantAxis {
    pub fn all() -> &'static [QuadrantAxis] {
        &[
            QuadrantAxis::Interest,
            QuadrantAxis::Legitimacy,
            QuadrantAxis::Urgency,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            QuadrantAxis::Interest => "Interest",
            QuadrantAxis::Legitimacy => "Legitimacy",
            QuadrantAxis::Urgency => "Urgency",
        }
    }

    /// Chart title, e.g. `Power vs Interest Matrix`.
    pub fn title(&self) -> String {
        format!("Power vs {} Matrix", self.display_name())
    }

    /// Reads this axis' score from a rating.
    pub fn score_of(&self, rating: &RelationshipRating) -> Score {
        match self {
            QuadrantAxis::Interest => rating.interest,
            QuadrantAxis::Legitimacy => rating.legitimacy,
            QuadrantAxis::Urgency => rating.urgency,
        }
    }
}

impl fmt::Display for QuadrantAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for QuadrantAxis {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "interest" => Ok(QuadrantAxis::Interest),
            "legitimacy" => Ok(QuadrantAxis::Legitimacy),
            "urgency" => Ok(QuadrantAxis::Urgency),
            _ => Err(ValidationError::invalid_format(
                "axis",
                format!("unknown axis '{}', expected interest, legitimacy or urgency", s),
            )),
        }
    }
}

/// One rating plotted on the chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuadrantPoint {
    pub stakeholder: ActorId,
    pub label: String,
    pub x: u8,
    pub y: u8,
    pub group: StakeholderGroup,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupCount {
    pub group: StakeholderGroup,
    pub strategy: &'static str,
    pub guidance: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuadrantView {
    pub axis: QuadrantAxis,
    pub title: String,
    /// Position of the dashed divider lines on both axes.
    pub midline: u8,
    pub points: Vec<QuadrantPoint>,
    /// All four groups in display order, including empty ones.
    pub counts: Vec<GroupCount>,
}

impl QuadrantView {
    pub fn from_store(store: &SessionStore, axis: QuadrantAxis) -> Self {
        let points: Vec<QuadrantPoint> = store
            .analysis()
            .relationship_data
            .iter()
            .map(|rating| {
                let y = axis.score_of(rating);
                QuadrantPoint {
                    stakeholder: rating.stakeholder,
                    label: store.stakeholder_label(&rating.stakeholder),
                    x: rating.power.value(),
                    y: y.value(),
                    group: StakeholderGroup::classify(rating.power, y),
                }
            })
            .collect();

        let counts = StakeholderGroup::all()
            .iter()
            .map(|&group| GroupCount {
                group,
                strategy: group.strategy(),
                guidance: group.guidance(),
                count: points.iter().filter(|p| p.group == group).count(),
            })
            .collect();

        Self {
            axis,
            title: axis.title(),
            midline: MIDLINE,
            points,
            counts,
        }
    }

    pub fn count(&self, group: StakeholderGroup) -> usize {
        self.counts
            .iter()
            .find(|c| c.group == group)
            .map(|c| c.count)
            .unwrap_or(0)
    }
}

#[cfg(test)]
#[path = "quadrants_test.rs"]
mod quadrants_test;
