use reqwest::Client;
use serde::Deserialize;

use crate::domain::{
    captions::{ports::CaptionsProvider, value_objects::VideoId},
    common::entities::app_errors::CoreError,
};

/// Transcript client that goes through the backend's captions proxy
/// instead of hitting the captioning service directly.
#[derive(Debug, Clone)]
pub struct ProxyCaptionsClient {
    base_url: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct CaptionsEnvelope {
    transcript: String,
}

impl ProxyCaptionsClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: Client::new(),
        }
    }
}

impl CaptionsProvider for ProxyCaptionsClient {
    async fn fetch_transcript(&self, video_id: VideoId) -> Result<String, CoreError> {
        let url = format!(
            "{}/api/youtube-captions?videoId={}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(video_id.as_str())
        );

        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::error!("captions proxy request failed: {}", e);
            CoreError::CaptionsUnavailable
        })?;

        if !response.status().is_success() {
            tracing::error!("captions proxy returned {}", response.status());
            return Err(CoreError::CaptionsUnavailable);
        }

        let envelope: CaptionsEnvelope = response.json().await.map_err(|e| {
            tracing::error!("failed to parse captions proxy response: {}", e);
            CoreError::CaptionsUnavailable
        })?;

        Ok(envelope.transcript)
    }
}
