use async_trait::async_trait;

use super::record::AssessmentOutput;

/// Storage abstraction so the service can be exercised without a database.
#[async_trait]
pub trait AssessmentStore: Send + Sync {
    /// Persist one enriched assessment. Called exactly once per submission.
    async fn store(&self, output: &AssessmentOutput) -> Result<(), StoreError>;
}

/// Error enumeration for storage failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("insert rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}
