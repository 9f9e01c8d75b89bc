use reqwest::Client;
use serde::Deserialize;

use crate::domain::{
    captions::{ports::CaptionsProvider, value_objects::VideoId},
    common::{CaptionsConfig, entities::app_errors::CoreError},
};

/// Transcript client for the third-party captioning service. The caller
/// only ever sees [`CoreError::CaptionsUnavailable`]; details go to the
/// log.
#[derive(Debug, Clone)]
pub struct RapidApiCaptionsClient {
    api_key: String,
    host: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct TranscriptEntry {
    #[serde(default)]
    text: String,
}

impl RapidApiCaptionsClient {
    pub fn new(config: CaptionsConfig) -> Self {
        Self {
            api_key: config.api_key,
            host: config.host,
            client: Client::new(),
        }
    }
}

impl CaptionsProvider for RapidApiCaptionsClient {
    async fn fetch_transcript(&self, video_id: VideoId) -> Result<String, CoreError> {
        let url = format!(
            "https://{}/?id={}",
            self.host,
            urlencoding::encode(video_id.as_str())
        );

        let response = self
            .client
            .get(&url)
            .header("X-RapidAPI-Key", &self.api_key)
            .header("X-RapidAPI-Host", &self.host)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("transcript request failed: {}", e);
                CoreError::CaptionsUnavailable
            })?;

        if !response.status().is_success() {
            tracing::error!("transcript service returned {}", response.status());
            return Err(CoreError::CaptionsUnavailable);
        }

        let entries: Vec<TranscriptEntry> = response.json().await.map_err(|e| {
            tracing::error!("failed to parse transcript response: {}", e);
            CoreError::CaptionsUnavailable
        })?;

        Ok(entries
            .into_iter()
            .map(|entry| entry.text)
            .collect::<Vec<_>>()
            .join(" "))
    }
}
