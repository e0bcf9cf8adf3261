//! Supabase (PostgREST) backed assessment store.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;

use super::record::AssessmentOutput;
use super::store::{AssessmentStore, StoreError};
use crate::config::StorageConfig;

const API_KEY_HEADER: &str = "apikey";
const PREFER_HEADER: &str = "prefer";

/// Inserts enriched assessments as rows of a Supabase table.
#[derive(Clone)]
pub struct SupabaseStore {
    endpoint: String,
    client: Client,
}

impl fmt::Debug for SupabaseStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SupabaseStore")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl SupabaseStore {
    pub fn new(config: &StorageConfig) -> Result<Self, StoreError> {
        let mut headers = HeaderMap::new();
        let api_key = HeaderValue::from_str(&config.api_key)
            .map_err(|_| StoreError::Unavailable("SUPABASE_KEY is not a valid header".into()))?;
        let bearer = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|_| StoreError::Unavailable("SUPABASE_KEY is not a valid header".into()))?;
        headers.insert(API_KEY_HEADER, api_key);
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(PREFER_HEADER, HeaderValue::from_static("return=minimal"));

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()
            .map_err(|err| StoreError::Unavailable(format!("failed to build HTTP client: {err}")))?;

        Ok(Self {
            endpoint: format!(
                "{}/rest/v1/{}",
                config.url.trim_end_matches('/'),
                config.table
            ),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl AssessmentStore for SupabaseStore {
    async fn store(&self, output: &AssessmentOutput) -> Result<(), StoreError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(output)
            .send()
            .await
            .map_err(|err| StoreError::Transport(err.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let message = response.text().await.unwrap_or_default();
        Err(StoreError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}
