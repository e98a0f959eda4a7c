use std::sync::Arc;

use crate::assistant::Assistant;
use crate::catalog::Catalog;
use crate::selection::SelectionBoard;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Postings loaded at startup; read-only afterwards.
    pub catalog: Arc<Catalog>,
    pub assistant: Assistant,
    pub selection: Arc<SelectionBoard>,
}

impl AppState {
    pub fn new(catalog: Catalog, assistant: Assistant) -> Self {
        Self {
            catalog: Arc::new(catalog),
            assistant,
            selection: Arc::new(SelectionBoard::new()),
        }
    }
}
