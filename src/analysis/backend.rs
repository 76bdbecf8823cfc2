// HTTP client for the HateShield classification service

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

use super::error::BackendError;
use super::types::{
    AnalysisResult, AnalyzeRequest, AnalyzeResponse, BulkAnalyzeRequest, BulkAnalyzeResponse,
    BulkItemResult,
};
use crate::config::BackendConfig;

/// The remote classification capability. Implemented over HTTP in
/// production; tests substitute fakes.
#[async_trait]
pub trait ClassifierBackend: Send + Sync {
    /// Classify a single text
    async fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalysisResult, BackendError>;

    /// Classify a batch of texts in one round trip
    async fn analyze_bulk(
        &self,
        request: &BulkAnalyzeRequest,
    ) -> Result<Vec<BulkItemResult>, BackendError>;
}

/// reqwest-backed client for a running HateShield backend
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(config: &BackendConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.endpoint.trim_end_matches('/').to_string(),
        }
    }

    /// Liveness probe against the backend root route
    pub async fn ping(&self) -> Result<String, BackendError> {
        #[derive(Deserialize)]
        struct Greeting {
            message: String,
        }

        let response = self
            .client
            .get(format!("{}/", self.base_url))
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(BackendError::Status(response.status().as_u16()));
        }

        let greeting: Greeting = response
            .json()
            .await
            .map_err(|e| BackendError::Malformed(e.to_string()))?;

        Ok(greeting.message)
    }
}

#[async_trait]
impl ClassifierBackend for HttpBackend {
    async fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalysisResult, BackendError> {
        let response = self
            .client
            .post(format!("{}/analyze", self.base_url))
            .json(request)
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(BackendError::Status(response.status().as_u16()));
        }

        // A 2xx body without a well-formed `result` field is as much of a
        // failure as a transport error
        let payload: AnalyzeResponse = response
            .json()
            .await
            .map_err(|e| BackendError::Malformed(e.to_string()))?;

        Ok(payload.result)
    }

    async fn analyze_bulk(
        &self,
        request: &BulkAnalyzeRequest,
    ) -> Result<Vec<BulkItemResult>, BackendError> {
        let response = self
            .client
            .post(format!("{}/analyze/bulk", self.base_url))
            .json(request)
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(BackendError::Status(response.status().as_u16()));
        }

        let payload: BulkAnalyzeResponse = response
            .json()
            .await
            .map_err(|e| BackendError::Malformed(e.to_string()))?;

        Ok(payload.results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_trailing_slash_is_normalized() {
        let config = BackendConfig {
            endpoint: "http://127.0.0.1:8000/".to_string(),
            ..BackendConfig::default()
        };
        let backend = HttpBackend::new(&config);
        assert_eq!(backend.base_url, "http://127.0.0.1:8000");
    }
}
