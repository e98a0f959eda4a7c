//! Axum route handlers for the AI drafting tools.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct JobPostingDraftRequest {
    pub requirements: String,
}

#[derive(Debug, Deserialize)]
pub struct SelfIntroductionDraftRequest {
    pub info: String,
}

#[derive(Debug, Serialize)]
pub struct DraftResponse {
    pub text: String,
}

/// POST /api/v1/assistant/job-posting
///
/// Drafts a posting for a recruiter. AI failures return the fixed error text
/// with status 200.
pub async fn handle_draft_job_posting(
    State(state): State<AppState>,
    Json(request): Json<JobPostingDraftRequest>,
) -> Result<Json<DraftResponse>, AppError> {
    if request.requirements.trim().is_empty() {
        return Err(AppError::Validation(
            "requirements cannot be empty".to_string(),
        ));
    }

    let text = state.assistant.draft_posting(&request.requirements).await;
    Ok(Json(DraftResponse { text }))
}

/// POST /api/v1/assistant/self-introduction
pub async fn handle_draft_self_introduction(
    State(state): State<AppState>,
    Json(request): Json<SelfIntroductionDraftRequest>,
) -> Result<Json<DraftResponse>, AppError> {
    if request.info.trim().is_empty() {
        return Err(AppError::Validation("info cannot be empty".to_string()));
    }

    let text = state.assistant.draft_self_introduction(&request.info).await;
    Ok(Json(DraftResponse { text }))
}
