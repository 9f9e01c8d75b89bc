use std::future::Future;

use crate::domain::{
    analysis::{
        entities::{AnalysisResult, IngredientExtraction},
        value_objects::AnalyzeVideoInput,
    },
    common::entities::app_errors::CoreError,
};

/// Client for calling an AI model.
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn complete(
        &self,
        system_prompt: String,
        user_prompt: String,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Client for a remote analysis backend, one method per contract.
#[cfg_attr(test, mockall::automock)]
pub trait RecipeBackend: Send + Sync {
    /// `POST /analyze` passthrough: the backend does the pantry matching.
    fn analyze_video(
        &self,
        video_url: String,
        pantry: Vec<String>,
    ) -> impl Future<Output = Result<AnalysisResult, CoreError>> + Send;

    /// `POST /api/main`: the backend only names the ingredients.
    fn extract_ingredients(
        &self,
        video_url: String,
    ) -> impl Future<Output = Result<IngredientExtraction, CoreError>> + Send;
}

/// Service trait for the inference endpoints.
pub trait AnalysisService: Send + Sync {
    fn analyze_video(
        &self,
        input: AnalyzeVideoInput,
    ) -> impl Future<Output = Result<AnalysisResult, CoreError>> + Send;

    fn extract_ingredients(
        &self,
        video_url: String,
    ) -> impl Future<Output = Result<IngredientExtraction, CoreError>> + Send;
}
