//! HTTP handlers for toolkit submissions.
//!
//! Each handler converts the request into an application command; the
//! store only changes when the command succeeds.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::{
    AddActorCommand, RecordConflictCommand, RecordMarketEntryCommand, RecordRatingCommand,
    RecordStakeholderEntryCommand, RecordValueMapCommand, SetKnowledgeCommand,
};
use crate::domain::analysis::{KnowledgeEntry, StakeholderGroup};
use crate::domain::market::MarketRecord;

use super::super::error::{parse_session_id, session_error_response, ErrorResponse};
use super::super::state::AppState;
use super::dto::{
    ActorAddedResponse, AddActorRequest, ConflictRecordedResponse, ConflictRequest,
    EntryRecordedResponse, KnowledgeSavedResponse, MarketRecordSavedResponse, MessageResponse,
    RatingRecordedResponse, RatingRequest, StakeholderEntryRequest, ValueMapRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Stakeholder identification
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/sessions/:id/sit/entries - Record a role questionnaire
pub async fn record_stakeholder_entry(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(req): Json<StakeholderEntryRequest>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let cmd = RecordStakeholderEntryCommand {
        session_id,
        role: req.role,
        responses: req.responses,
    };

    match state.record_entry.handle(cmd).await {
        Ok(total_entries) => {
            let response = EntryRecordedResponse {
                total_entries,
                message: format!("{} information saved", req.role),
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => session_error_response(e),
    }
}

/// POST /api/sessions/:id/sit/actors - Add an actor to a role
pub async fn add_actor(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(req): Json<AddActorRequest>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let name = req.name.trim().to_string();
    let cmd = AddActorCommand {
        session_id,
        role: req.role,
        name: req.name,
        location: req.location,
        contact: req.contact,
        details: req.details,
    };

    match state.add_actor.handle(cmd).await {
        Ok(actor_id) => {
            let response = ActorAddedResponse {
                actor_id: actor_id.to_string(),
                message: format!("Added {} as {}", name, req.role),
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => session_error_response(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Stakeholder analysis
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/sessions/:id/sat/ratings - Rate an actor
pub async fn record_rating(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(req): Json<RatingRequest>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let cmd = RecordRatingCommand {
        session_id,
        stakeholder: req.stakeholder,
        power: req.power,
        interest: req.interest,
        legitimacy: req.legitimacy,
        urgency: req.urgency,
        interactions: req.interactions,
        tasks: req.tasks,
        knowledge: req.knowledge,
    };

    match state.record_rating.handle(cmd).await {
        Ok(result) => {
            let response = RatingRecordedResponse {
                group: result.group,
                strategy: result.group.strategy().to_string(),
                total_ratings: result.total_ratings,
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => session_error_response(e),
    }
}

/// POST /api/sessions/:id/sat/conflicts - Assess a conflict
pub async fn record_conflict(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(req): Json<ConflictRequest>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let cmd = RecordConflictCommand {
        session_id,
        stakeholder: req.stakeholder,
        cooperativeness: req.cooperativeness,
        competitiveness: req.competitiveness,
        description: req.description,
    };

    match state.record_conflict.handle(cmd).await {
        Ok(strategy) => {
            let response = ConflictRecordedResponse {
                strategy,
                message: "Conflict strategy added".to_string(),
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => session_error_response(e),
    }
}

/// PUT /api/sessions/:id/sat/knowledge/:group - Save a group's knowledge chart
pub async fn set_knowledge(
    State(state): State<AppState>,
    Path((session_id, group)): Path<(String, String)>,
    Json(entry): Json<KnowledgeEntry>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let group = match group.parse::<StakeholderGroup>() {
        Ok(group) => group,
        Err(e) => {
            return ErrorResponse::bad_request(e.to_string())
                .into_response_with(StatusCode::BAD_REQUEST)
        }
    };

    let cmd = SetKnowledgeCommand {
        session_id,
        group,
        entry,
    };

    match state.set_knowledge.handle(cmd).await {
        Ok(replaced) => {
            (StatusCode::OK, Json(KnowledgeSavedResponse { group, replaced })).into_response()
        }
        Err(e) => session_error_response(e),
    }
}

/// POST /api/sessions/:id/sat/value-maps - Save a value proposition map
pub async fn record_value_map(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(req): Json<ValueMapRequest>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let cmd = RecordValueMapCommand {
        session_id,
        stakeholder: req.stakeholder,
        content: req.content,
    };

    match state.record_value_map.handle(cmd).await {
        Ok(()) => {
            let response = MessageResponse {
                message: "Value map saved".to_string(),
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => session_error_response(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Market analysis
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/sessions/:id/mat/records - Save a market analysis tool record
pub async fn record_market_entry(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(record): Json<MarketRecord>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let cmd = RecordMarketEntryCommand { session_id, record };

    match state.record_market_entry.handle(cmd).await {
        Ok(result) => {
            let response = MarketRecordSavedResponse {
                tool: result.tool.key().to_string(),
                tool_name: result.tool.display_name().to_string(),
                entries: result.entries,
                tools_completed: result.tools_completed,
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => session_error_response(e),
    }
}
