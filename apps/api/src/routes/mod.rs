pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::assistant::handlers as assistant;
use crate::catalog::handlers as postings;
use crate::selection::handlers as selection;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Postings
        .route("/api/v1/postings", get(postings::handle_list_postings))
        .route(
            "/api/v1/postings/options",
            get(postings::handle_filter_options),
        )
        .route("/api/v1/postings/:id", get(postings::handle_get_posting))
        .route(
            "/api/v1/postings/:id/summary",
            post(postings::handle_summarize_posting),
        )
        // Selection (detail view + background analysis)
        .route(
            "/api/v1/selection",
            put(selection::handle_select)
                .get(selection::handle_get_selection)
                .delete(selection::handle_clear_selection),
        )
        // Assistant
        .route(
            "/api/v1/assistant/job-posting",
            post(assistant::handle_draft_job_posting),
        )
        .route(
            "/api/v1/assistant/self-introduction",
            post(assistant::handle_draft_self_introduction),
        )
        .with_state(state)
}
