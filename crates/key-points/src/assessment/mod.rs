//! 10 Key Points assessment: sentence generation, record enrichment, persistence and HTTP
//! routes.
//!
//! The ten sentence functions are shared by every caller. Callers choose strict or
//! interactive handling of missing fields through [`GenerationMode`]; storage is injected
//! through the [`AssessmentStore`] trait.

pub mod import;
pub mod points;
pub mod record;
pub mod router;
pub mod sentences;
pub mod service;
pub mod store;
pub mod supabase;

#[cfg(test)]
mod tests;

pub use import::{read_records, ImportError};
pub use points::{generate_point, PointError, PointInput, PointNumber};
pub use record::{render_markdown, AssessmentOutput, AssessmentRecord, PointPreview};
pub use router::assessment_router;
pub use sentences::GenerationMode;
pub use service::{AssessmentPreview, AssessmentService, SubmissionOutcome};
pub use store::{AssessmentStore, StoreError};
pub use supabase::SupabaseStore;
