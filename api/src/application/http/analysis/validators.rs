use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct AnalyzeVideoRequest {
    #[validate(length(min = 1, message = "video_url is required"))]
    pub video_url: String,
    /// Ingredients the caller already has. May be empty.
    #[serde(default)]
    pub pantry: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct ExtractIngredientsRequest {
    #[validate(length(min = 1, message = "url is required"))]
    pub url: String,
}
