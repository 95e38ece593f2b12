//! Record shapes for the market analysis tools other than complaints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::domain::foundation::{Score, Timestamp};

/// Political, economic, social, technological, environmental and legal
/// factors shaping the craft market.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pestel {
    #[serde(default)]
    pub political: String,
    #[serde(default)]
    pub economic: String,
    #[serde(default)]
    pub social: String,
    #[serde(default)]
    pub technological: String,
    #[serde(default)]
    pub environmental: String,
    #[serde(default)]
    pub legal: String,
    #[serde(default)]
    pub timestamp: Timestamp,
}

/// Current versus desired market position and the plan between them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GapAnalysis {
    #[serde(default)]
    pub current_state: String,
    #[serde(default)]
    pub current_strengths: String,
    #[serde(default)]
    pub current_weaknesses: String,
    #[serde(default)]
    pub desired_state: String,
    #[serde(default)]
    pub opportunities: String,
    #[serde(default)]
    pub threats: String,
    #[serde(default)]
    pub action_plan: String,
    #[serde(default)]
    pub timestamp: Timestamp,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BehavioralSegment {
    pub name: String,
    #[serde(default)]
    pub purchase_behavior: String,
    #[serde(default)]
    pub usage_rate: String,
    #[serde(default)]
    pub benefits_sought: String,
    #[serde(default)]
    pub loyalty_status: String,
    #[serde(default)]
    pub occasion: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Persona {
    pub name: String,
    #[serde(default)]
    pub age_range: String,
    #[serde(default)]
    pub occupation: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub income_level: String,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub family_status: String,
    #[serde(default)]
    pub lifestyle: String,
    #[serde(default)]
    pub goals: String,
    #[serde(default)]
    pub pain_points: String,
    #[serde(default)]
    pub shopping_habits: String,
}

/// Stages of the customer journey, in the order a customer moves through them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum JourneyStage {
    Awareness,
    Consideration,
    Purchase,
    Usage,
    Loyalty,
}

impl JourneyStage {
    pub fn all() -> &'static [JourneyStage] {
        &[
            JourneyStage::Awareness,
            JourneyStage::Consideration,
            JourneyStage::Purchase,
            JourneyStage::Usage,
            JourneyStage::Loyalty,
        ]
    }
}

impl fmt::Display for JourneyStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JourneyStageNotes {
    #[serde(default)]
    pub touchpoints: String,
    #[serde(default)]
    pub actions: String,
    #[serde(default)]
    pub emotions: String,
    #[serde(default)]
    pub pain_points: String,
    #[serde(default)]
    pub opportunities: String,
}

/// Customer journey map; stages left out of a submission stay absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerJourney {
    pub stages: BTreeMap<JourneyStage, JourneyStageNotes>,
}

impl CustomerJourney {
    pub fn stage(&self, stage: JourneyStage) -> Option<&JourneyStageNotes> {
        self.stages.get(&stage)
    }
}

/// One mystery shopping visit, scored on six service dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MysteryShoppingReport {
    #[serde(default)]
    pub location: String,
    #[serde(rename = "date")]
    pub visit_date: NaiveDate,
    #[serde(default)]
    pub ambiance: Score,
    #[serde(default)]
    pub accessibility: Score,
    #[serde(default)]
    pub product_display: Score,
    #[serde(default)]
    pub staff_behavior: Score,
    #[serde(default)]
    pub product_knowledge: Score,
    #[serde(default)]
    pub response_time: Score,
    #[serde(default)]
    pub observations: String,
    #[serde(default)]
    pub recommendations: String,
}

impl MysteryShoppingReport {
    /// Mean of the six dimension scores.
    pub fn average_score(&self) -> f64 {
        let scores = [
            self.ambiance,
            self.accessibility,
            self.product_display,
            self.staff_behavior,
            self.product_knowledge,
            self.response_time,
        ];
        let total: u32 = scores.iter().map(|s| s.value() as u32).sum();
        total as f64 / scores.len() as f64
    }
}

/// Brand identity statements and perception scores.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandAudit {
    #[serde(default)]
    pub brand_mission: String,
    #[serde(default)]
    pub brand_vision: String,
    #[serde(default)]
    pub brand_values: String,
    #[serde(default)]
    pub usp: String,
    #[serde(default)]
    pub personality: String,
    #[serde(default)]
    pub promise: String,
    #[serde(default)]
    pub awareness: Score,
    #[serde(default)]
    pub recognition: Score,
    #[serde(default)]
    pub loyalty: Score,
    #[serde(default)]
    pub satisfaction: Score,
    #[serde(default)]
    pub position: Score,
    #[serde(default)]
    pub consistency: Score,
    #[serde(default)]
    pub strengths: String,
    #[serde(default)]
    pub weaknesses: String,
    #[serde(default)]
    pub recommendations: String,
    #[serde(default)]
    pub timestamp: Timestamp,
}
