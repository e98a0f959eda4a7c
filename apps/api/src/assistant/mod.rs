//! Assistant — the three AI operations offered to the front-end.
//!
//! Every operation is one completion request. Any failure (transport, API
//! status, malformed JSON, empty output) is logged and replaced with a fixed
//! fallback value, so callers always get a usable result.

use std::sync::Arc;

use tracing::{error, info};

use crate::llm_client::{generate_json, CompletionRequest, CompletionService};
use crate::models::AiAnalysis;

pub mod handlers;
pub mod prompts;

use prompts::{
    summary_response_schema, JOB_POSTING_FALLBACK, JOB_POSTING_PROMPT_TEMPLATE,
    JOB_POSTING_SYSTEM, SELF_INTRO_FALLBACK, SELF_INTRO_PROMPT_TEMPLATE, SELF_INTRO_SYSTEM,
    SUMMARY_FALLBACK, SUMMARY_FALLBACK_PRO, SUMMARY_FALLBACK_TIP, SUMMARY_PROMPT_TEMPLATE,
};

/// The analysis returned when summarization fails for any reason.
pub fn fallback_analysis() -> AiAnalysis {
    AiAnalysis {
        summary: SUMMARY_FALLBACK.to_string(),
        pros: vec![SUMMARY_FALLBACK_PRO.to_string()],
        tips: vec![SUMMARY_FALLBACK_TIP.to_string()],
    }
}

/// AI client adapter. Cheap to clone; the completion backend is shared.
#[derive(Clone)]
pub struct Assistant {
    llm: Arc<dyn CompletionService>,
}

impl Assistant {
    pub fn new(llm: Arc<dyn CompletionService>) -> Self {
        Self { llm }
    }

    pub fn model(&self) -> &str {
        self.llm.model()
    }

    /// Summarizes a posting body into `{summary, pros, tips}`.
    pub async fn summarize(&self, content: &str) -> AiAnalysis {
        let request = CompletionRequest::new(SUMMARY_PROMPT_TEMPLATE.replace("{content}", content))
            .with_response_schema(summary_response_schema());

        match generate_json::<AiAnalysis>(self.llm.as_ref(), &request).await {
            Ok(analysis) => {
                info!(
                    "Posting summarized: {} pros, {} tips",
                    analysis.pros.len(),
                    analysis.tips.len()
                );
                analysis
            }
            Err(e) => {
                error!("Posting summary failed: {e}");
                fallback_analysis()
            }
        }
    }

    /// Drafts a job posting from the recruiter's requirements.
    pub async fn draft_posting(&self, requirements: &str) -> String {
        let request = CompletionRequest::new(
            JOB_POSTING_PROMPT_TEMPLATE.replace("{requirements}", requirements),
        )
        .with_system_instruction(JOB_POSTING_SYSTEM);

        self.generate_text(&request, "Job posting draft", JOB_POSTING_FALLBACK)
            .await
    }

    /// Drafts the core paragraph of an applicant's self-introduction.
    pub async fn draft_self_introduction(&self, info: &str) -> String {
        let request = CompletionRequest::new(SELF_INTRO_PROMPT_TEMPLATE.replace("{info}", info))
            .with_system_instruction(SELF_INTRO_SYSTEM);

        self.generate_text(&request, "Self-introduction draft", SELF_INTRO_FALLBACK)
            .await
    }

    async fn generate_text(
        &self,
        request: &CompletionRequest,
        operation: &str,
        fallback: &str,
    ) -> String {
        match self.llm.generate(request).await {
            Ok(text) => text,
            Err(e) => {
                error!("{operation} failed: {e}");
                fallback.to_string()
            }
        }
    }
}
