//! Role-based views: distribution counts, the value chain role map, and
//! role cards.

use serde::Serialize;

use crate::domain::foundation::{ActorId, Role};
use crate::domain::session::SessionStore;

/// Base marker size of a role node in the flow view.
pub const BASE_MARKER_SIZE: u32 = 40;

/// Marker growth per actor in the role.
pub const MARKER_SIZE_PER_ACTOR: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleCount {
    pub role: Role,
    pub count: usize,
}

/// Actor count per role, always listing all five roles in chain order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleDistribution {
    pub counts: Vec<RoleCount>,
    pub total: usize,
}

impl RoleDistribution {
    pub fn from_store(store: &SessionStore) -> Self {
        let identification = store.identification();
        let counts: Vec<RoleCount> = Role::all()
            .iter()
            .map(|&role| RoleCount {
                role,
                count: identification.actors_for(role).len(),
            })
            .collect();
        let total = counts.iter().map(|c| c.count).sum();
        Self { counts, total }
    }

    pub fn count(&self, role: Role) -> usize {
        self.counts
            .iter()
            .find(|c| c.role == role)
            .map(|c| c.count)
            .unwrap_or(0)
    }
}

/// One role node on the value chain flow diagram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleNode {
    pub role: Role,
    /// Horizontal position, 0 for Supplier.
    pub position: usize,
    pub actor_count: usize,
    pub marker_size: u32,
    pub label: String,
}

/// Directed link between adjacent roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowEdge {
    pub from: Role,
    pub to: Role,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowIndicator {
    pub name: &'static str,
    pub symbol: &'static str,
    pub description: &'static str,
}

/// The supply chain drawn as a row of role nodes joined by arrows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleMap {
    pub nodes: Vec<RoleNode>,
    pub edges: Vec<FlowEdge>,
    pub flows: Vec<FlowIndicator>,
}

impl RoleMap {
    pub fn from_store(store: &SessionStore) -> Self {
        Self::from_distribution(&RoleDistribution::from_store(store))
    }

    pub fn from_distribution(distribution: &RoleDistribution) -> Self {
        let nodes = distribution
            .counts
            .iter()
            .map(|c| RoleNode {
                role: c.role,
                position: c.role.order_index(),
                actor_count: c.count,
                marker_size: BASE_MARKER_SIZE + MARKER_SIZE_PER_ACTOR * c.count as u32,
                label: format!("{} ({})", c.role, c.count),
            })
            .collect();

        let edges = Role::all()
            .iter()
            .filter_map(|&from| from.next().map(|to| FlowEdge { from, to }))
            .collect();

        Self {
            nodes,
            edges,
            flows: flow_indicators(),
        }
    }
}

fn flow_indicators() -> Vec<FlowIndicator> {
    vec![
        FlowIndicator {
            name: "Product Flow",
            symbol: "→",
            description: "Supplier to Buyer",
        },
        FlowIndicator {
            name: "Money Flow",
            symbol: "←",
            description: "Buyer to Supplier",
        },
        FlowIndicator {
            name: "Information Flow",
            symbol: "↔",
            description: "Bidirectional",
        },
    ]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActorCard {
    pub id: ActorId,
    /// 1-based position within the role.
    pub number: usize,
    pub name: String,
    pub location: String,
    pub contact: String,
    pub details: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleCard {
    pub role: Role,
    pub actor_count: usize,
    pub actors: Vec<ActorCard>,
}

/// Actors clustered by role; roles without actors are omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleCards {
    pub cards: Vec<RoleCard>,
}

impl RoleCards {
    pub fn from_store(store: &SessionStore) -> Self {
        let cards = store
            .identification()
            .roles
            .iter()
            .filter(|(_, actors)| !actors.is_empty())
            .map(|(&role, actors)| RoleCard {
                role,
                actor_count: actors.len(),
                actors: actors
                    .iter()
                    .enumerate()
                    .map(|(i, a)| ActorCard {
                        id: a.id,
                        number: i + 1,
                        name: a.name.clone(),
                        location: a.location.clone(),
                        contact: a.contact.clone(),
                        details: a.details.clone(),
                    })
                    .collect(),
            })
            .collect();
        Self { cards }
    }
}
