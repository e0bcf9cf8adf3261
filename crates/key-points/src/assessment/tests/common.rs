use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::response::Response;
use serde_json::Value;

use crate::assessment::record::{AssessmentOutput, AssessmentRecord};
use crate::assessment::service::AssessmentService;
use crate::assessment::store::{AssessmentStore, StoreError};
use crate::assessment::{assessment_router, GenerationMode};

#[derive(Default, Clone)]
pub(super) struct MemoryStore {
    pub(super) rows: Arc<Mutex<Vec<AssessmentOutput>>>,
}

impl MemoryStore {
    pub(super) fn rows(&self) -> Vec<AssessmentOutput> {
        self.rows.lock().expect("store mutex poisoned").clone()
    }
}

#[async_trait]
impl AssessmentStore for MemoryStore {
    async fn store(&self, output: &AssessmentOutput) -> Result<(), StoreError> {
        self.rows
            .lock()
            .expect("store mutex poisoned")
            .push(output.clone());
        Ok(())
    }
}

/// Counts calls and always fails, so tests can assert there is no retry.
#[derive(Default)]
pub(super) struct UnavailableStore {
    pub(super) attempts: Mutex<usize>,
}

impl UnavailableStore {
    pub(super) fn attempts(&self) -> usize {
        *self.attempts.lock().expect("attempt mutex poisoned")
    }
}

#[async_trait]
impl AssessmentStore for UnavailableStore {
    async fn store(&self, _output: &AssessmentOutput) -> Result<(), StoreError> {
        *self.attempts.lock().expect("attempt mutex poisoned") += 1;
        Err(StoreError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn build_service() -> (AssessmentService<MemoryStore>, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    (AssessmentService::new(store.clone()), store)
}

pub(super) fn router_with_service(service: AssessmentService<MemoryStore>) -> axum::Router {
    assessment_router(Arc::new(service))
}

pub(super) fn sample_record() -> AssessmentRecord {
    AssessmentRecord::sample()
}

pub(super) fn both_modes() -> [GenerationMode; 2] {
    [GenerationMode::Strict, GenerationMode::Interactive]
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
