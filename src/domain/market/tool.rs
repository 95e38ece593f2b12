//! MarketTool enum - the eight market analysis tools.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The eight tools of the market analysis toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketTool {
    Pestel,
    GapAnalysis,
    BehavioralSegmentation,
    UserPersona,
    CustomerJourney,
    MysteryShopping,
    ComplaintAnalysis,
    BrandAudit,
}

impl MarketTool {
    /// Returns all tools in menu order.
    pub fn all() -> &'static [MarketTool] {
        &[
            MarketTool::Pestel,
            MarketTool::GapAnalysis,
            MarketTool::BehavioralSegmentation,
            MarketTool::UserPersona,
            MarketTool::CustomerJourney,
            MarketTool::MysteryShopping,
            MarketTool::ComplaintAnalysis,
            MarketTool::BrandAudit,
        ]
    }

    /// Key under which the tool's data is stored and exported.
    pub fn key(&self) -> &'static str {
        match self {
            MarketTool::Pestel => "pestel",
            MarketTool::GapAnalysis => "gap",
            MarketTool::BehavioralSegmentation => "behavioral_segments",
            MarketTool::UserPersona => "personas",
            MarketTool::CustomerJourney => "customer_journey",
            MarketTool::MysteryShopping => "mystery_shopping",
            MarketTool::ComplaintAnalysis => "complaints",
            MarketTool::BrandAudit => "brand_audit",
        }
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            MarketTool::Pestel => "PESTEL Analysis",
            MarketTool::GapAnalysis => "Gap Analysis",
            MarketTool::BehavioralSegmentation => "Behavioral Segmentation",
            MarketTool::UserPersona => "User Persona",
            MarketTool::CustomerJourney => "Customer Journey Map",
            MarketTool::MysteryShopping => "Mystery Shopping",
            MarketTool::ComplaintAnalysis => "Complaint Data Analysis",
            MarketTool::BrandAudit => "Brand Audit",
        }
    }

    /// True for tools that accumulate a list of records; the rest keep a
    /// single record that each save replaces.
    pub fn is_multi_entry(&self) -> bool {
        matches!(
            self,
            MarketTool::BehavioralSegmentation
                | MarketTool::UserPersona
                | MarketTool::MysteryShopping
                | MarketTool::ComplaintAnalysis
        )
    }

    /// Looks a tool up by its storage key.
    pub fn from_key(key: &str) -> Option<MarketTool> {
        Self::all().iter().find(|t| t.key() == key).copied()
    }
}

impl fmt::Display for MarketTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
