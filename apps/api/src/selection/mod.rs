//! Selection Board — the "selected posting" and "displayed analysis" slots.
//!
//! Each selection hands out a ticket carrying a generation number. A summary
//! result is only published when its ticket still matches the current
//! generation, so a slow request for an earlier selection can never overwrite
//! the analysis of a later one.

pub mod handlers;

use std::sync::Mutex;

use serde::Serialize;
use tracing::debug;

use crate::models::AiAnalysis;

/// Proof of a specific selection; required to publish its analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionTicket {
    pub generation: u64,
    pub posting_id: String,
}

/// Point-in-time view of the board.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionSnapshot {
    pub generation: u64,
    pub posting_id: Option<String>,
    pub analysis: Option<AiAnalysis>,
    pub is_analyzing: bool,
}

#[derive(Debug, Default)]
struct BoardState {
    generation: u64,
    posting_id: Option<String>,
    analysis: Option<AiAnalysis>,
    is_analyzing: bool,
}

/// One board for the whole process, shared via `Arc` in `AppState`: every
/// client sees and replaces the same selection, and the latest select wins.
/// The mutex is never held across an await.
#[derive(Debug, Default)]
pub struct SelectionBoard {
    state: Mutex<BoardState>,
}

impl SelectionBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects a posting: clears the displayed analysis, marks analysis in
    /// progress, and supersedes every earlier ticket.
    pub fn select(&self, posting_id: &str) -> SelectionTicket {
        let mut state = self.lock();
        state.generation += 1;
        state.posting_id = Some(posting_id.to_string());
        state.analysis = None;
        state.is_analyzing = true;

        SelectionTicket {
            generation: state.generation,
            posting_id: posting_id.to_string(),
        }
    }

    /// Stores `analysis` if `ticket` is still current. Returns whether it was stored.
    pub fn publish(&self, ticket: &SelectionTicket, analysis: AiAnalysis) -> bool {
        let mut state = self.lock();
        if state.generation != ticket.generation {
            debug!(
                "Dropping stale analysis for posting {} (generation {} < {})",
                ticket.posting_id, ticket.generation, state.generation
            );
            return false;
        }
        state.analysis = Some(analysis);
        state.is_analyzing = false;
        true
    }

    /// Closes the detail view. In-flight results for earlier tickets are discarded.
    pub fn clear(&self) {
        let mut state = self.lock();
        state.generation += 1;
        state.posting_id = None;
        state.analysis = None;
        state.is_analyzing = false;
    }

    pub fn snapshot(&self) -> SelectionSnapshot {
        let state = self.lock();
        SelectionSnapshot {
            generation: state.generation,
            posting_id: state.posting_id.clone(),
            analysis: state.analysis.clone(),
            is_analyzing: state.is_analyzing,
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BoardState> {
        // every write leaves BoardState consistent, so poisoning is ignored
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}
