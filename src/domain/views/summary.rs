//! Session progress summary and cross-tool training recommendations.

use serde::Serialize;

use crate::domain::market::MarketTool;
use crate::domain::session::SessionStore;

use super::role_distribution::{RoleCount, RoleDistribution};

/// Headline counts across the three toolkits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub stakeholder_entries: usize,
    pub total_actors: usize,
    pub relationship_ratings: usize,
    pub conflict_entries: usize,
    pub value_maps: usize,
    pub market_tools_completed: usize,
    pub market_tools_total: usize,
}

impl SessionSummary {
    pub fn from_store(store: &SessionStore) -> Self {
        let analysis = store.analysis();
        Self {
            stakeholder_entries: store.identification().stakeholders.len(),
            total_actors: store.identification().actor_count(),
            relationship_ratings: analysis.relationship_data.len(),
            conflict_entries: analysis.conflict_data.len(),
            value_maps: analysis.value_map.len(),
            market_tools_completed: store.market().completed_count(),
            market_tools_total: MarketTool::all().len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusArea {
    pub title: &'static str,
    pub points: &'static [&'static str],
}

/// Training focus areas recommended for every program.
pub const TRAINING_FOCUS_AREAS: &[FocusArea] = &[
    FocusArea {
        title: "Technical Skills Development",
        points: &[
            "Based on identified gaps in producer capabilities",
            "Focus on quality improvement and efficiency",
        ],
    },
    FocusArea {
        title: "Business & Entrepreneurship",
        points: &[
            "Market understanding and customer engagement",
            "Pricing strategies and financial management",
        ],
    },
    FocusArea {
        title: "Digital Literacy",
        points: &[
            "E-commerce platform usage",
            "Social media marketing",
            "Digital payment systems",
        ],
    },
    FocusArea {
        title: "Stakeholder Collaboration",
        points: &[
            "Building effective supplier relationships",
            "Customer relationship management",
            "Networking with marketers and buyers",
        ],
    },
    FocusArea {
        title: "Design & Innovation",
        points: &[
            "Contemporary market trends",
            "Product diversification",
            "Maintaining cultural authenticity while innovating",
        ],
    },
];

/// Findings pulled from all three toolkits plus the focus areas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationSummary {
    /// Roles that have at least one actor.
    pub role_counts: Vec<RoleCount>,
    /// Ratings with power and interest both above the midline.
    pub key_stakeholders: usize,
    pub market_tools_completed: usize,
    pub completed_tools: Vec<&'static str>,
    pub focus_areas: &'static [FocusArea],
}

impl RecommendationSummary {
    pub fn from_store(store: &SessionStore) -> Self {
        let role_counts = RoleDistribution::from_store(store)
            .counts
            .into_iter()
            .filter(|c| c.count > 0)
            .collect();
        let completed = store.market().completed_tools();

        Self {
            role_counts,
            key_stakeholders: store.analysis().key_stakeholder_count(),
            market_tools_completed: completed.len(),
            completed_tools: completed.iter().map(MarketTool::display_name).collect(),
            focus_areas: TRAINING_FOCUS_AREAS,
        }
    }

    /// Bullet lines for the findings section, e.g. `Producer: 2 actors identified`.
    pub fn findings(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .role_counts
            .iter()
            .map(|c| format!("{}: {} actors identified", c.role, c.count))
            .collect();
        lines.push(format!(
            "{} key stakeholders requiring close management",
            self.key_stakeholders
        ));
        lines.push(format!(
            "{} market analysis tools completed",
            self.market_tools_completed
        ));
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::RelationshipRating;
    use crate::domain::foundation::{Role, Score, SessionId};
    use crate::domain::identification::Actor;
    use crate::domain::market::MarketRecord;

    fn score(v: u8) -> Score {
        Score::try_new(v).unwrap()
    }

    fn populated_store() -> SessionStore {
        let mut store = SessionStore::new(SessionId::new());
        let raju = store
            .add_actor(Actor::new("Raju", Role::Producer).unwrap())
            .unwrap();
        store
            .add_actor(Actor::new("Lina", Role::Buyer).unwrap())
            .unwrap();
        store
            .record_rating(RelationshipRating::new(raju, score(8), score(9), score(5), score(5)))
            .unwrap();
        store
            .record_rating(RelationshipRating::new(raju, score(3), score(2), score(5), score(5)))
            .unwrap();
        store.set_market_record(MarketRecord::Pestel(Default::default()));
        store
    }

    #[test]
    fn recommendations_count_one_key_stakeholder() {
        let summary = RecommendationSummary::from_store(&populated_store());

        assert_eq!(summary.key_stakeholders, 1);
        assert_eq!(summary.market_tools_completed, 1);
        assert_eq!(summary.completed_tools, vec!["PESTEL Analysis"]);
        assert_eq!(summary.role_counts.len(), 2);
        assert_eq!(summary.focus_areas.len(), 5);
    }

    #[test]
    fn findings_read_as_sentences() {
        let findings = RecommendationSummary::from_store(&populated_store()).findings();
        assert_eq!(findings[0], "Producer: 1 actors identified");
        assert_eq!(findings[1], "Buyer: 1 actors identified");
        assert_eq!(findings[2], "1 key stakeholders requiring close management");
        assert_eq!(findings[3], "1 market analysis tools completed");
    }

    #[test]
    fn session_summary_counts_everything() {
        let summary = SessionSummary::from_store(&populated_store());
        assert_eq!(summary.total_actors, 2);
        assert_eq!(summary.relationship_ratings, 2);
        assert_eq!(summary.stakeholder_entries, 0);
        assert_eq!(summary.market_tools_completed, 1);
        assert_eq!(summary.market_tools_total, 8);
    }
}
