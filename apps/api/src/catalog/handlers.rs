//! Axum route handlers for the Postings API.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::catalog::{filter_options, FilterOptions};
use crate::errors::AppError;
use crate::filter::{filter_postings, parse_sort, sort_postings, FilterCriteria, PostingQuery};
use crate::models::{AiAnalysis, JobPosting};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct PostingListResponse {
    pub total: usize,
    pub filters_active: bool,
    pub postings: Vec<JobPosting>,
}

/// GET /api/v1/postings
///
/// Filtered (and optionally sorted) posting list.
pub async fn handle_list_postings(
    State(state): State<AppState>,
    Query(query): Query<PostingQuery>,
) -> Result<Json<PostingListResponse>, AppError> {
    let criteria = FilterCriteria::try_from(&query)?;
    let sort = parse_sort(query.sort.as_deref())?;

    let mut postings = filter_postings(state.catalog.postings(), &criteria);
    if let Some(order) = sort {
        sort_postings(&mut postings, order);
    }

    Ok(Json(PostingListResponse {
        total: postings.len(),
        filters_active: criteria.is_active(),
        postings: postings.into_iter().cloned().collect(),
    }))
}

/// GET /api/v1/postings/options
pub async fn handle_filter_options() -> Json<FilterOptions> {
    Json(filter_options())
}

/// GET /api/v1/postings/:id
pub async fn handle_get_posting(
    State(state): State<AppState>,
    Path(posting_id): Path<String>,
) -> Result<Json<JobPosting>, AppError> {
    state
        .catalog
        .get(&posting_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Posting {posting_id} not found")))
}

/// POST /api/v1/postings/:id/summary
///
/// Summarizes one posting synchronously. Always 200 for a known posting:
/// AI failures come back as the fallback analysis.
pub async fn handle_summarize_posting(
    State(state): State<AppState>,
    Path(posting_id): Path<String>,
) -> Result<Json<AiAnalysis>, AppError> {
    let posting = state
        .catalog
        .get(&posting_id)
        .ok_or_else(|| AppError::NotFound(format!("Posting {posting_id} not found")))?;

    info!("Summarizing posting {posting_id}");
    let analysis = state.assistant.summarize(&posting.content).await;
    Ok(Json(analysis))
}
