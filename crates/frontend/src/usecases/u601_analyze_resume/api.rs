use super::traits::Analyzer;
use crate::shared::api_utils::api_url;
use async_trait::async_trait;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u601_analyze_resume::{AnalysisRequest, AnalyzeResume, AnalyzerError};
use gloo_net::http::Request;

/// Настройки виджета загрузки резюме
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploaderConfig {
    /// Relative paths are resolved against the API base
    pub analyze_endpoint: String,
}

impl Default for UploaderConfig {
    fn default() -> Self {
        Self {
            analyze_endpoint: AnalyzeResume::api_path("analyze"),
        }
    }
}

/// Error for a non-2xx reply: the analyzer's own error body when it sent one.
pub fn error_from_reply(status: u16, body: &str) -> AnalyzerError {
    match serde_json::from_str::<AnalyzerError>(body) {
        Ok(err) => err,
        Err(_) => {
            let err = AnalyzerError::transport(format!("HTTP error: {}", status));
            if body.trim().is_empty() {
                err
            } else {
                err.with_details(body.trim())
            }
        }
    }
}

/// API клиент анализатора резюме
#[derive(Debug, Clone)]
pub struct HttpAnalyzer {
    endpoint: String,
}

impl HttpAnalyzer {
    pub fn new(config: &UploaderConfig) -> Self {
        Self {
            endpoint: api_url(&config.analyze_endpoint),
        }
    }
}

#[async_trait(?Send)]
impl Analyzer for HttpAnalyzer {
    async fn analyze(&self, request: AnalysisRequest) -> Result<(), AnalyzerError> {
        let response = Request::post(&self.endpoint)
            .json(&request)
            .map_err(|e| AnalyzerError::internal(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| AnalyzerError::transport(format!("Request failed: {}", e)))?;

        if !response.ok() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(error_from_reply(status, &body));
        }

        Ok(())
    }
}
