mod proxy_client;
mod rapidapi_client;

pub use proxy_client::ProxyCaptionsClient;
pub use rapidapi_client::RapidApiCaptionsClient;
