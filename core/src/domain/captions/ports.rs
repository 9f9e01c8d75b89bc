use std::future::Future;

use crate::domain::{
    captions::value_objects::VideoId, common::entities::app_errors::CoreError,
};

/// Source of flattened caption text for a video.
#[cfg_attr(test, mockall::automock)]
pub trait CaptionsProvider: Send + Sync {
    fn fetch_transcript(
        &self,
        video_id: VideoId,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait exposed to the HTTP layer for the captions proxy.
pub trait CaptionsService: Send + Sync {
    fn fetch_transcript(
        &self,
        video_id: VideoId,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}
