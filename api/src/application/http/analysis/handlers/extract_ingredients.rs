use axum::extract::State;

use crate::application::http::{
    analysis::validators::ExtractIngredientsRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};
use cookable_core::domain::analysis::{entities::IngredientExtraction, ports::AnalysisService};

#[utoipa::path(
    post,
    path = "/api/main",
    tag = "analysis",
    summary = "Extract the ingredient list from a recipe video",
    description = "Names the dish and its ingredients without pantry matching; callers partition the list themselves.",
    responses(
        (status = 200, body = IngredientExtraction),
        (status = 400, description = "url missing or body malformed"),
        (status = 500, description = "Model call failed")
    ),
    request_body = ExtractIngredientsRequest
)]
pub async fn extract_ingredients(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ExtractIngredientsRequest>,
) -> Result<Response<IngredientExtraction>, ApiError> {
    let extraction = state
        .service
        .extract_ingredients(payload.url)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(extraction))
}
