use crate::domain::{
    analysis::ports::LLMClient,
    captions::{
        ports::{CaptionsProvider, CaptionsService},
        value_objects::VideoId,
    },
    common::{entities::app_errors::CoreError, services::Service},
};

impl<L, C> CaptionsService for Service<L, C>
where
    L: LLMClient,
    C: CaptionsProvider,
{
    async fn fetch_transcript(&self, video_id: VideoId) -> Result<String, CoreError> {
        self.captions_provider.fetch_transcript(video_id).await
    }
}
