use clap::Parser;
use cookable_core::domain::common::{CaptionsConfig, CookableConfig, LlmConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "cookable-api", about = "Cookable analysis backend and captions proxy")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub captions: CaptionsArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long, env = "COOKABLE_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "COOKABLE_PORT", default_value_t = 5000)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. "/cookable".
    #[arg(long, env = "COOKABLE_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "COOKABLE_ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(long, env = "COOKABLE_LOG_JSON", default_value_t = false)]
    pub log_json: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(long, env = "OPENROUTER_API_KEY", hide_env_values = true)]
    pub openrouter_api_key: String,

    #[arg(long, env = "OPENROUTER_MODEL", default_value = "openai/gpt-4o-mini")]
    pub openrouter_model: String,

    /// Referer header sent to the model gateway.
    #[arg(long, env = "COOKABLE_REFERER", default_value = "https://cookable.onrender.com")]
    pub referer: String,

    #[arg(long, env = "COOKABLE_APP_TITLE", default_value = "Cookable")]
    pub app_title: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct CaptionsArgs {
    #[arg(long, env = "RAPIDAPI_KEY", hide_env_values = true)]
    pub rapidapi_key: String,

    #[arg(
        long,
        env = "RAPIDAPI_HOST",
        default_value = "youtubetranscript.p.rapidapi.com"
    )]
    pub rapidapi_host: String,
}

impl From<Args> for CookableConfig {
    fn from(args: Args) -> Self {
        CookableConfig {
            llm: LlmConfig {
                api_key: args.llm.openrouter_api_key,
                model: args.llm.openrouter_model,
                referer: args.llm.referer,
                app_title: args.llm.app_title,
            },
            captions: CaptionsConfig {
                api_key: args.captions.rapidapi_key,
                host: args.captions.rapidapi_host,
            },
        }
    }
}
