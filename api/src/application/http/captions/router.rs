use super::handlers::get_captions::{__path_get_captions, get_captions};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_captions))]
pub struct CaptionsApiDoc;

pub fn captions_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/api/youtube-captions", state.args.server.root_path),
        get(get_captions),
    )
}
