//! Customer complaint log entries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What a complaint is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ComplaintCategory {
    #[serde(rename = "Product Quality")]
    ProductQuality,
    Service,
    Delivery,
    Pricing,
    Communication,
    Other,
}

impl ComplaintCategory {
    pub fn all() -> &'static [ComplaintCategory] {
        &[
            ComplaintCategory::ProductQuality,
            ComplaintCategory::Service,
            ComplaintCategory::Delivery,
            ComplaintCategory::Pricing,
            ComplaintCategory::Communication,
            ComplaintCategory::Other,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ComplaintCategory::ProductQuality => "Product Quality",
            ComplaintCategory::Service => "Service",
            ComplaintCategory::Delivery => "Delivery",
            ComplaintCategory::Pricing => "Pricing",
            ComplaintCategory::Communication => "Communication",
            ComplaintCategory::Other => "Other",
        }
    }
}

impl fmt::Display for ComplaintCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Complaint severity, ordered from least to most severe.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    #[default]
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn all() -> &'static [Severity] {
        &[
            Severity::Low,
            Severity::Medium,
            Severity::High,
            Severity::Critical,
        ]
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Critical => "Critical",
        };
        write!(f, "{}", s)
    }
}

/// Where a complaint stands in its resolution workflow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResolutionStatus {
    #[default]
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Resolved,
    Closed,
}

impl ResolutionStatus {
    /// Resolved and closed complaints need no further action.
    pub fn is_open(&self) -> bool {
        matches!(self, ResolutionStatus::Pending | ResolutionStatus::InProgress)
    }
}

/// A single logged complaint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Complaint {
    #[serde(default)]
    pub source: String,
    #[serde(rename = "date")]
    pub received_on: NaiveDate,
    pub category: ComplaintCategory,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub severity: Severity,
    #[serde(default)]
    pub status: ResolutionStatus,
    #[serde(default)]
    pub resolution: String,
}

impl Complaint {
    pub fn new(received_on: NaiveDate, category: ComplaintCategory, severity: Severity) -> Self {
        Self {
            source: String::new(),
            received_on,
            category,
            description: String::new(),
            severity,
            status: ResolutionStatus::Pending,
            resolution: String::new(),
        }
    }
}
