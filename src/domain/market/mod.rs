//! Market Analysis (MAT) records.
//!
//! Each of the eight tools has its own record type. `MarketRecord` is the
//! tagged union accepted on submission; `MarketData` keeps what has been
//! saved, replacing single-instance tools and appending to list tools.

mod complaint;
mod records;
mod tool;

pub use complaint::{Complaint, ComplaintCategory, ResolutionStatus, Severity};
pub use records::{
    BehavioralSegment, BrandAudit, CustomerJourney, GapAnalysis, JourneyStage, JourneyStageNotes,
    MysteryShoppingReport, Persona, Pestel,
};
pub use tool::MarketTool;

use serde::{Deserialize, Serialize};

/// A single submission from one of the market analysis tools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "tool", content = "record", rename_all = "snake_case")]
pub enum MarketRecord {
    Pestel(Pestel),
    GapAnalysis(GapAnalysis),
    BehavioralSegment(BehavioralSegment),
    Persona(Persona),
    CustomerJourney(CustomerJourney),
    MysteryShopping(MysteryShoppingReport),
    Complaint(Complaint),
    BrandAudit(BrandAudit),
}

impl MarketRecord {
    /// The tool that produced this record.
    pub fn tool(&self) -> MarketTool {
        match self {
            MarketRecord::Pestel(_) => MarketTool::Pestel,
            MarketRecord::GapAnalysis(_) => MarketTool::GapAnalysis,
            MarketRecord::BehavioralSegment(_) => MarketTool::BehavioralSegmentation,
            MarketRecord::Persona(_) => MarketTool::UserPersona,
            MarketRecord::CustomerJourney(_) => MarketTool::CustomerJourney,
            MarketRecord::MysteryShopping(_) => MarketTool::MysteryShopping,
            MarketRecord::Complaint(_) => MarketTool::ComplaintAnalysis,
            MarketRecord::BrandAudit(_) => MarketTool::BrandAudit,
        }
    }
}

/// Saved market analysis data, one slot per tool.
///
/// Empty slots are omitted when serialized, so the serialized object only
/// carries keys for tools that have been completed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pestel: Option<Pestel>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gap: Option<GapAnalysis>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub behavioral_segments: Vec<BehavioralSegment>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub personas: Vec<Persona>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_journey: Option<CustomerJourney>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mystery_shopping: Vec<MysteryShoppingReport>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub complaints: Vec<Complaint>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_audit: Option<BrandAudit>,
}

impl MarketData {
    /// Stores a record: single-instance tools are replaced, list tools grow.
    pub fn apply(&mut self, record: MarketRecord) {
        match record {
            MarketRecord::Pestel(r) => self.pestel = Some(r),
            MarketRecord::GapAnalysis(r) => self.gap = Some(r),
            MarketRecord::BehavioralSegment(r) => self.behavioral_segments.push(r),
            MarketRecord::Persona(r) => self.personas.push(r),
            MarketRecord::CustomerJourney(r) => self.customer_journey = Some(r),
            MarketRecord::MysteryShopping(r) => self.mystery_shopping.push(r),
            MarketRecord::Complaint(r) => self.complaints.push(r),
            MarketRecord::BrandAudit(r) => self.brand_audit = Some(r),
        }
    }

    /// True once the tool has at least one saved record.
    pub fn is_completed(&self, tool: MarketTool) -> bool {
        match tool {
            MarketTool::Pestel => self.pestel.is_some(),
            MarketTool::GapAnalysis => self.gap.is_some(),
            MarketTool::BehavioralSegmentation => !self.behavioral_segments.is_empty(),
            MarketTool::UserPersona => !self.personas.is_empty(),
            MarketTool::CustomerJourney => self.customer_journey.is_some(),
            MarketTool::MysteryShopping => !self.mystery_shopping.is_empty(),
            MarketTool::ComplaintAnalysis => !self.complaints.is_empty(),
            MarketTool::BrandAudit => self.brand_audit.is_some(),
        }
    }

    /// Tools with saved data, in menu order.
    pub fn completed_tools(&self) -> Vec<MarketTool> {
        MarketTool::all()
            .iter()
            .copied()
            .filter(|t| self.is_completed(*t))
            .collect()
    }

    pub fn completed_count(&self) -> usize {
        self.completed_tools().len()
    }
}
