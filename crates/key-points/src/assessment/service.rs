use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use super::points::{generate_point, PointError, PointNumber};
use super::record::{render_markdown, AssessmentRecord, PointPreview};
use super::sentences::GenerationMode;
use super::store::{AssessmentStore, StoreError};

pub const SUBMISSION_ACCEPTED: &str = "Assessment submitted successfully!";

/// Service composing the sentence generator with the injected storage collaborator.
pub struct AssessmentService<S> {
    store: Arc<S>,
}

impl<S> AssessmentService<S>
where
    S: AssessmentStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Enrich the record with strict-mode sentences and hand it to storage once.
    pub async fn submit(&self, record: AssessmentRecord) -> SubmissionOutcome {
        let output = record.enrich();
        let generated = output.outputs().iter().filter(|text| text.is_some()).count();

        match self.store.store(&output).await {
            Ok(()) => {
                info!(generated, "assessment stored");
                SubmissionOutcome::Stored
            }
            Err(err) => {
                warn!(error = %err, "assessment could not be stored");
                SubmissionOutcome::Failed(err)
            }
        }
    }

    /// Strict generation for a single point, as served by the per-point endpoints.
    pub fn generate(
        &self,
        point: PointNumber,
        payload: Value,
    ) -> Result<Option<String>, PointError> {
        generate_point(point, payload, GenerationMode::Strict)
    }

    /// Interactive rendering of every point for a live preview.
    pub fn preview(&self, record: &AssessmentRecord) -> AssessmentPreview {
        let points = record.preview();
        let markdown = render_markdown(record.applicant_name.as_deref(), &points);
        AssessmentPreview { points, markdown }
    }
}

/// Result of handing a submission to storage. Failures are reported, never retried.
#[derive(Debug)]
pub enum SubmissionOutcome {
    Stored,
    Failed(StoreError),
}

impl SubmissionOutcome {
    pub fn is_stored(&self) -> bool {
        matches!(self, Self::Stored)
    }

    /// User-facing status line.
    pub fn message(&self) -> String {
        match self {
            Self::Stored => SUBMISSION_ACCEPTED.to_string(),
            Self::Failed(err) => format!("Error saving to database: {err}"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AssessmentPreview {
    pub points: Vec<PointPreview>,
    pub markdown: String,
}
