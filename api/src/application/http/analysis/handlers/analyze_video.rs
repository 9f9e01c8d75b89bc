use axum::extract::State;

use crate::application::http::{
    analysis::validators::AnalyzeVideoRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};
use cookable_core::domain::{
    analysis::{
        entities::AnalysisResult, ports::AnalysisService, value_objects::AnalyzeVideoInput,
    },
    common::generate_uuid_v7,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeVideoResponse {
    pub result: AnalysisResult,
}

#[utoipa::path(
    post,
    path = "/analyze",
    tag = "analysis",
    summary = "Analyze a recipe video against a pantry",
    description = "Determines the dish and splits its ingredients into what the pantry covers and what has to be bought.",
    responses(
        (status = 200, body = AnalyzeVideoResponse),
        (status = 400, description = "video_url missing or body malformed"),
        (status = 500, description = "Model call failed")
    ),
    request_body = AnalyzeVideoRequest
)]
pub async fn analyze_video(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AnalyzeVideoRequest>,
) -> Result<Response<AnalyzeVideoResponse>, ApiError> {
    let analysis_id = generate_uuid_v7();
    tracing::info!(%analysis_id, video_url = %payload.video_url, "analyzing recipe video");

    let result = state
        .service
        .analyze_video(AnalyzeVideoInput {
            video_url: payload.video_url,
            pantry: payload.pantry,
        })
        .await
        .map_err(ApiError::from)?;

    tracing::info!(%analysis_id, dish_name = %result.dish_name, "analysis complete");

    Ok(Response::OK(AnalyzeVideoResponse { result }))
}
