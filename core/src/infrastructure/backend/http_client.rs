use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use crate::domain::{
    analysis::{
        entities::{AnalysisResult, IngredientExtraction},
        ports::RecipeBackend,
    },
    common::entities::app_errors::CoreError,
};

/// HTTP client for the analysis backend, speaking both of its contracts.
#[derive(Debug, Clone)]
pub struct HttpRecipeBackend {
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct AnalyzeRequest {
    video_url: String,
    pantry: Vec<String>,
}

#[derive(Debug, Serialize)]
struct ExtractRequest {
    url: String,
}

impl HttpRecipeBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: Client::new(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

impl RecipeBackend for HttpRecipeBackend {
    async fn analyze_video(
        &self,
        video_url: String,
        pantry: Vec<String>,
    ) -> Result<AnalysisResult, CoreError> {
        let response = self
            .client
            .post(self.endpoint("/analyze"))
            .json(&AnalyzeRequest { video_url, pantry })
            .send()
            .await
            .map_err(|e| {
                tracing::error!("analyze request failed: {}", e);
                CoreError::AnalysisFailed
            })?;

        if !response.status().is_success() {
            tracing::error!("analysis backend returned {}", response.status());
            return Err(CoreError::AnalysisFailed);
        }

        let body: Value = response.json().await.map_err(|e| {
            tracing::error!("failed to parse analyze response: {}", e);
            CoreError::AnalysisFailed
        })?;

        // Some backend versions wrap the result, some return it bare.
        let payload = match body.get("result") {
            Some(result) => result.clone(),
            None => body,
        };

        serde_json::from_value(payload).map_err(|e| {
            tracing::error!("analyze response has unexpected shape: {}", e);
            CoreError::AnalysisFailed
        })
    }

    async fn extract_ingredients(
        &self,
        video_url: String,
    ) -> Result<IngredientExtraction, CoreError> {
        let response = self
            .client
            .post(self.endpoint("/api/main"))
            .json(&ExtractRequest { url: video_url })
            .send()
            .await
            .map_err(|e| {
                tracing::error!("extraction request failed: {}", e);
                CoreError::ExtractionFailed
            })?;

        if !response.status().is_success() {
            tracing::error!("extraction backend returned {}", response.status());
            return Err(CoreError::ExtractionFailed);
        }

        response.json().await.map_err(|e| {
            tracing::error!("failed to parse extraction response: {}", e);
            CoreError::ExtractionFailed
        })
    }
}
