use axum::extract::{Query, State};

use crate::application::http::{
    captions::validators::CaptionsParams,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};
use cookable_core::domain::captions::{ports::CaptionsService, value_objects::VideoId};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CaptionsResponse {
    pub transcript: String,
}

#[utoipa::path(
    get,
    path = "/api/youtube-captions",
    tag = "captions",
    summary = "Fetch the flattened transcript of a video",
    description = "Proxies the third-party captioning service and joins all caption entries into one string.",
    params(CaptionsParams),
    responses(
        (status = 200, body = CaptionsResponse),
        (status = 400, description = "videoId query parameter missing"),
        (status = 500, description = "Captioning service failed")
    )
)]
pub async fn get_captions(
    State(state): State<AppState>,
    Query(params): Query<CaptionsParams>,
) -> Result<Response<CaptionsResponse>, ApiError> {
    let video_id = params
        .video_id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Missing videoId".to_string()))?;

    let transcript = state
        .service
        .fetch_transcript(VideoId::new(video_id))
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(CaptionsResponse { transcript }))
}
