use super::handlers::{
    analyze_video::{__path_analyze_video, analyze_video},
    extract_ingredients::{__path_extract_ingredients, extract_ingredients},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(analyze_video, extract_ingredients))]
pub struct AnalysisApiDoc;

pub fn analysis_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/analyze", state.args.server.root_path),
            post(analyze_video),
        )
        .route(
            &format!("{}/api/main", state.args.server.root_path),
            post(extract_ingredients),
        )
}
