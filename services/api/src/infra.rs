use async_trait::async_trait;
use key_points::assessment::{AssessmentOutput, AssessmentStore, StoreError, SupabaseStore};
use key_points::config::StorageConfig;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Keeps submissions in process memory when no database is configured.
#[derive(Debug, Default, Clone)]
pub(crate) struct InMemoryAssessmentStore {
    rows: Arc<Mutex<Vec<AssessmentOutput>>>,
}

impl InMemoryAssessmentStore {
    #[cfg(test)]
    pub(crate) fn rows(&self) -> Vec<AssessmentOutput> {
        self.rows.lock().map(|rows| rows.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl AssessmentStore for InMemoryAssessmentStore {
    async fn store(&self, output: &AssessmentOutput) -> Result<(), StoreError> {
        let mut guard = self
            .rows
            .lock()
            .map_err(|_| StoreError::Unavailable("in-memory store poisoned".to_string()))?;
        guard.push(output.clone());
        Ok(())
    }
}

/// Store selected once at startup from configuration.
#[derive(Debug)]
pub(crate) enum ConfiguredStore {
    Supabase(SupabaseStore),
    Memory(InMemoryAssessmentStore),
}

impl ConfiguredStore {
    pub(crate) fn from_config(storage: Option<&StorageConfig>) -> Result<Self, StoreError> {
        match storage {
            Some(config) => Ok(Self::Supabase(SupabaseStore::new(config)?)),
            None => Ok(Self::Memory(InMemoryAssessmentStore::default())),
        }
    }

    pub(crate) fn label(&self) -> &'static str {
        match self {
            Self::Supabase(_) => "supabase",
            Self::Memory(_) => "in-memory",
        }
    }
}

#[async_trait]
impl AssessmentStore for ConfiguredStore {
    async fn store(&self, output: &AssessmentOutput) -> Result<(), StoreError> {
        match self {
            Self::Supabase(store) => store.store(output).await,
            Self::Memory(store) => store.store(output).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use key_points::assessment::AssessmentRecord;

    #[test]
    fn missing_storage_config_selects_memory_store() {
        let store = ConfiguredStore::from_config(None).expect("store builds");
        assert_eq!(store.label(), "in-memory");
    }

    #[test]
    fn storage_config_selects_supabase() {
        let config = StorageConfig {
            url: "https://demo.supabase.co".to_string(),
            api_key: "anon".to_string(),
            table: "assessments".to_string(),
            timeout_secs: 5,
        };
        let store = ConfiguredStore::from_config(Some(&config)).expect("store builds");
        assert_eq!(store.label(), "supabase");
    }

    #[tokio::test]
    async fn memory_store_keeps_rows() {
        let memory = InMemoryAssessmentStore::default();
        let store = ConfiguredStore::Memory(memory.clone());
        store
            .store(&AssessmentRecord::sample().enrich())
            .await
            .expect("stored");
        assert_eq!(memory.rows().len(), 1);
    }
}
