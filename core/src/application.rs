use crate::domain::common::{CookableConfig, services::Service};
use crate::infrastructure::{captions::RapidApiCaptionsClient, llm::OpenRouterClient};

pub type CookableService = Service<OpenRouterClient, RapidApiCaptionsClient>;

pub fn create_service(config: CookableConfig) -> CookableService {
    let llm_client = OpenRouterClient::new(config.llm);
    let captions_provider = RapidApiCaptionsClient::new(config.captions);

    Service::new(llm_client, captions_provider)
}
