//! Integration tests for a full training session.
//!
//! These tests drive the application handlers over the in-memory
//! repository the way the HTTP layer does:
//! 1. Identification data feeds the role views
//! 2. Ratings classify stakeholders into quadrants
//! 3. Exports carry the whole store
//! 4. Rejected input leaves the store unchanged

use std::collections::BTreeMap;
use std::sync::Arc;

use siama_toolbox::adapters::export::ExportDocument;
use siama_toolbox::adapters::{InMemorySessionRepository, JsonExporter, XlsxExporter};
use siama_toolbox::application::{
    AddActorCommand, AddActorHandler, ExportSessionHandler, ExportSessionQuery, ExportSettings,
    GetSessionViewHandler, GetSessionViewQuery, RecordMarketEntryCommand,
    RecordMarketEntryHandler, RecordRatingCommand, RecordRatingHandler,
    RecordStakeholderEntryCommand, RecordStakeholderEntryHandler, ResetSessionCommand,
    ResetSessionHandler, SessionView, StartSessionHandler, ViewKind,
};
use siama_toolbox::domain::analysis::StakeholderGroup;
use siama_toolbox::domain::foundation::{ActorId, Role, SessionId};
use siama_toolbox::domain::market::{MarketRecord, Pestel};
use siama_toolbox::domain::session::SessionError;
use siama_toolbox::domain::views::QuadrantAxis;
use siama_toolbox::ports::{ExportFormat, SessionStoreRepository, StoreExporter};

// =============================================================================
// Test Infrastructure
// =============================================================================

struct Harness {
    repository: Arc<dyn SessionStoreRepository>,
    session_id: SessionId,
}

impl Harness {
    async fn start() -> Self {
        let repository: Arc<dyn SessionStoreRepository> =
            Arc::new(InMemorySessionRepository::new());
        let started = StartSessionHandler::new(repository.clone())
            .handle()
            .await
            .unwrap();
        Self {
            repository,
            session_id: started.session_id,
        }
    }

    async fn add_actor(&self, name: &str, role: Role) -> Result<ActorId, SessionError> {
        AddActorHandler::new(self.repository.clone())
            .handle(AddActorCommand {
                session_id: self.session_id,
                role,
                name: name.to_string(),
                location: String::new(),
                contact: String::new(),
                details: String::new(),
            })
            .await
    }

    async fn rate(&self, stakeholder: ActorId, power: u8, interest: u8) -> StakeholderGroup {
        RecordRatingHandler::new(self.repository.clone())
            .handle(RecordRatingCommand {
                session_id: self.session_id,
                stakeholder,
                power,
                interest,
                legitimacy: 5,
                urgency: 5,
                interactions: String::new(),
                tasks: String::new(),
                knowledge: String::new(),
            })
            .await
            .unwrap()
            .group
    }

    async fn view(&self, view: ViewKind) -> SessionView {
        GetSessionViewHandler::new(self.repository.clone())
            .handle(GetSessionViewQuery {
                session_id: self.session_id,
                view,
            })
            .await
            .unwrap()
    }

    fn exporter(&self) -> ExportSessionHandler {
        let exporters: Vec<Arc<dyn StoreExporter>> =
            vec![Arc::new(JsonExporter::new()), Arc::new(XlsxExporter::new())];
        ExportSessionHandler::new(
            self.repository.clone(),
            exporters,
            ExportSettings::default(),
        )
    }
}

// =============================================================================
// Stakeholder identification
// =============================================================================

#[tokio::test]
async fn actors_are_counted_per_role() {
    let harness = Harness::start().await;
    harness.add_actor("Raju", Role::Producer).await.unwrap();
    harness.add_actor("Lina", Role::Buyer).await.unwrap();

    let SessionView::RoleDistribution(distribution) =
        harness.view(ViewKind::RoleDistribution).await
    else {
        panic!("expected role distribution");
    };

    assert_eq!(distribution.count(Role::Producer), 1);
    assert_eq!(distribution.count(Role::Buyer), 1);
    assert_eq!(distribution.count(Role::Supplier), 0);
    assert_eq!(distribution.count(Role::Marketer), 0);
    assert_eq!(distribution.count(Role::Refiner), 0);
    assert_eq!(distribution.total, 2);
}

#[tokio::test]
async fn blank_actor_name_is_rejected_without_changes() {
    let harness = Harness::start().await;
    harness.add_actor("Raju", Role::Producer).await.unwrap();

    let result = harness.add_actor("  ", Role::Producer).await;
    assert!(matches!(result, Err(SessionError::ValidationFailed { .. })));

    let SessionView::RoleDistribution(distribution) =
        harness.view(ViewKind::RoleDistribution).await
    else {
        panic!("expected role distribution");
    };
    assert_eq!(distribution.count(Role::Producer), 1);
    assert_eq!(distribution.total, 1);
}

#[tokio::test]
async fn questionnaire_answers_appear_in_table() {
    let harness = Harness::start().await;
    let mut responses = BTreeMap::new();
    responses.insert("Who are your main buyers?".to_string(), "Guwahati traders".to_string());

    let total = RecordStakeholderEntryHandler::new(harness.repository.clone())
        .handle(RecordStakeholderEntryCommand {
            session_id: harness.session_id,
            role: Role::Producer,
            responses,
        })
        .await
        .unwrap();
    assert_eq!(total, 1);

    let SessionView::IdentificationTable(table) =
        harness.view(ViewKind::IdentificationTable).await
    else {
        panic!("expected identification table");
    };
    assert_eq!(table.rows.len(), 1);
    assert_eq!(table.rows[0].role, Role::Producer);
}

// =============================================================================
// Stakeholder analysis
// =============================================================================

#[tokio::test]
async fn only_high_power_high_interest_is_key_stakeholder() {
    let harness = Harness::start().await;
    let raju = harness.add_actor("Raju", Role::Producer).await.unwrap();
    let lina = harness.add_actor("Lina", Role::Buyer).await.unwrap();

    assert_eq!(harness.rate(raju, 8, 9).await, StakeholderGroup::KeyPlayers);
    assert_eq!(harness.rate(lina, 3, 2).await, StakeholderGroup::Monitor);

    let SessionView::Recommendations(summary) = harness.view(ViewKind::Recommendations).await
    else {
        panic!("expected recommendations");
    };
    assert_eq!(summary.key_stakeholders, 1);
    assert!(summary
        .findings()
        .contains(&"1 key stakeholders requiring close management".to_string()));
}

#[tokio::test]
async fn midline_power_with_high_interest_is_keep_informed() {
    let harness = Harness::start().await;
    let raju = harness.add_actor("Raju", Role::Producer).await.unwrap();

    assert_eq!(harness.rate(raju, 5, 7).await, StakeholderGroup::KeepInformed);

    let SessionView::Quadrants(view) =
        harness.view(ViewKind::Quadrants(QuadrantAxis::Interest)).await
    else {
        panic!("expected quadrant view");
    };
    assert_eq!(view.count(StakeholderGroup::KeepInformed), 1);
    assert_eq!(view.points[0].label, "Raju (Producer)");
}

#[tokio::test]
async fn rating_an_unknown_actor_is_rejected() {
    let harness = Harness::start().await;

    let result = RecordRatingHandler::new(harness.repository.clone())
        .handle(RecordRatingCommand {
            session_id: harness.session_id,
            stakeholder: ActorId::new(),
            power: 5,
            interest: 5,
            legitimacy: 5,
            urgency: 5,
            interactions: String::new(),
            tasks: String::new(),
            knowledge: String::new(),
        })
        .await;

    assert!(matches!(result, Err(SessionError::ActorNotFound(_))));
}

// =============================================================================
// Export and reset
// =============================================================================

#[tokio::test]
async fn json_export_round_trips_store() {
    let harness = Harness::start().await;
    let raju = harness.add_actor("Raju", Role::Producer).await.unwrap();
    harness.rate(raju, 8, 9).await;
    RecordMarketEntryHandler::new(harness.repository.clone())
        .handle(RecordMarketEntryCommand {
            session_id: harness.session_id,
            record: MarketRecord::Pestel(Pestel {
                social: "younger weavers leaving".to_string(),
                ..Default::default()
            }),
        })
        .await
        .unwrap();

    let file = harness
        .exporter()
        .handle(ExportSessionQuery {
            session_id: harness.session_id,
            format: ExportFormat::Json,
        })
        .await
        .unwrap();
    let document: ExportDocument = serde_json::from_slice(&file.content).unwrap();

    let store = harness
        .repository
        .find(&harness.session_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(&document.sit_data, store.identification());
    assert_eq!(&document.sat_data, store.analysis());
    assert_eq!(&document.mat_data, store.market());
    assert!(file.filename.starts_with("siama_data_"));
}

#[tokio::test]
async fn spreadsheet_export_is_a_workbook() {
    let harness = Harness::start().await;
    harness.add_actor("Lina", Role::Buyer).await.unwrap();

    let file = harness
        .exporter()
        .handle(ExportSessionQuery {
            session_id: harness.session_id,
            format: ExportFormat::Xlsx,
        })
        .await
        .unwrap();

    assert_eq!(&file.content[..2], b"PK");
    assert!(file.filename.ends_with(".xlsx"));
}

#[tokio::test]
async fn reset_clears_every_toolkit() {
    let harness = Harness::start().await;
    let raju = harness.add_actor("Raju", Role::Producer).await.unwrap();
    harness.rate(raju, 8, 9).await;

    ResetSessionHandler::new(harness.repository.clone())
        .handle(ResetSessionCommand {
            session_id: harness.session_id,
        })
        .await
        .unwrap();

    let SessionView::Summary(summary) = harness.view(ViewKind::Summary).await else {
        panic!("expected summary");
    };
    assert_eq!(summary.total_actors, 0);
    assert_eq!(summary.relationship_ratings, 0);
    assert_eq!(summary.market_tools_completed, 0);
}
