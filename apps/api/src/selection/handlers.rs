//! Axum route handlers for the Selection API.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::{AiAnalysis, JobPosting};
use crate::selection::SelectionTicket;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SelectRequest {
    pub posting_id: String,
}

#[derive(Debug, Serialize)]
pub struct SelectionResponse {
    pub generation: u64,
    pub posting: Option<JobPosting>,
    pub analysis: Option<AiAnalysis>,
    pub is_analyzing: bool,
}

/// PUT /api/v1/selection
///
/// Selects a posting and starts summarizing it in the background. The result
/// lands on the board only if no newer selection has happened meanwhile.
pub async fn handle_select(
    State(state): State<AppState>,
    Json(request): Json<SelectRequest>,
) -> Result<Json<SelectionTicket>, AppError> {
    let content = state
        .catalog
        .get(&request.posting_id)
        .map(|p| p.content.clone())
        .ok_or_else(|| AppError::NotFound(format!("Posting {} not found", request.posting_id)))?;

    let ticket = state.selection.select(&request.posting_id);
    info!(
        "Selected posting {} (generation {})",
        ticket.posting_id, ticket.generation
    );

    let assistant = state.assistant.clone();
    let board = state.selection.clone();
    let task_ticket = ticket.clone();
    tokio::spawn(async move {
        let analysis = assistant.summarize(&content).await;
        board.publish(&task_ticket, analysis);
    });

    Ok(Json(ticket))
}

/// GET /api/v1/selection
pub async fn handle_get_selection(State(state): State<AppState>) -> Json<SelectionResponse> {
    let snapshot = state.selection.snapshot();
    let posting = snapshot
        .posting_id
        .as_deref()
        .and_then(|id| state.catalog.get(id))
        .cloned();

    Json(SelectionResponse {
        generation: snapshot.generation,
        posting,
        analysis: snapshot.analysis,
        is_analyzing: snapshot.is_analyzing,
    })
}

/// DELETE /api/v1/selection
pub async fn handle_clear_selection(State(state): State<AppState>) -> StatusCode {
    state.selection.clear();
    StatusCode::NO_CONTENT
}
