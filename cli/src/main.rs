use clap::{Parser, Subcommand};
use cookable_core::domain::analysis::value_objects::AnalysisStrategy;
use cookable_core::domain::settings::ports::SettingsRepository;
use cookable_core::infrastructure::store::{
    JsonFileStore, JsonPantryRepository, JsonSettingsRepository,
};
use tracing_subscriber::EnvFilter;

mod client;
mod clipboard;
mod pantry_ui;
mod render;

#[derive(Parser)]
#[command(name = "cookable", about = "Find out what you can cook from a recipe video")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose log output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick the ingredients you have at home
    Pantry,

    /// Analyze a recipe video against your pantry
    Analyze {
        video_url: String,

        /// "extraction" or "captions-first" (default from settings)
        #[arg(short, long)]
        strategy: Option<AnalysisStrategy>,

        /// Backend base URL (default from settings)
        #[arg(long, env = "COOKABLE_BACKEND_URL")]
        backend_url: Option<String>,

        /// Skip the clipboard prompt
        #[arg(long)]
        no_copy: bool,
    },

    /// Show or change stored settings
    Config {
        #[arg(long)]
        backend_url: Option<String>,

        #[arg(long)]
        strategy: Option<AnalysisStrategy>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();

    let store = JsonFileStore::new(JsonFileStore::default_dir());
    let pantry_repository = JsonPantryRepository::new(store.clone());
    let settings_repository = JsonSettingsRepository::new(store);

    match cli.command {
        Commands::Pantry => pantry_ui::edit_pantry(&pantry_repository).await,
        Commands::Analyze {
            video_url,
            strategy,
            backend_url,
            no_copy,
        } => {
            client::analyze(
                &pantry_repository,
                &settings_repository,
                client::AnalyzeOptions {
                    video_url,
                    strategy,
                    backend_url,
                    no_copy,
                },
            )
            .await
        }
        Commands::Config {
            backend_url,
            strategy,
        } => configure(&settings_repository, backend_url, strategy).await,
    }
}

async fn configure(
    settings_repository: &JsonSettingsRepository,
    backend_url: Option<String>,
    strategy: Option<AnalysisStrategy>,
) -> anyhow::Result<()> {
    let mut settings = settings_repository.load().await?;

    if backend_url.is_none() && strategy.is_none() {
        println!("{}", serde_json::to_string_pretty(&settings)?);
        return Ok(());
    }

    if let Some(backend_url) = backend_url {
        settings.set(client::BACKEND_URL_KEY, backend_url);
    }
    if let Some(strategy) = strategy {
        settings.set(client::STRATEGY_KEY, strategy.as_str());
    }

    settings_repository.save(settings).await?;
    println!("Settings saved.");
    Ok(())
}
