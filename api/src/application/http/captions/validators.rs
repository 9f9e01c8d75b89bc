use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

#[derive(Debug, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CaptionsParams {
    /// YouTube video identifier, e.g. "dQw4w9WgXcQ".
    #[serde(rename = "videoId")]
    pub video_id: Option<String>,
}
