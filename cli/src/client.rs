use cookable_core::domain::{
    analysis::{
        services::run_video_analysis,
        value_objects::{AnalysisStrategy, AnalyzeVideoInput},
    },
    common::entities::app_errors::CoreError,
    pantry::ports::PantryRepository,
    settings::ports::SettingsRepository,
};
use cookable_core::infrastructure::{
    backend::HttpRecipeBackend,
    captions::ProxyCaptionsClient,
    store::{JsonPantryRepository, JsonSettingsRepository},
};
use dialoguer::{Confirm, theme::ColorfulTheme};

use crate::{clipboard, pantry_ui, render};

pub const BACKEND_URL_KEY: &str = "backend_url";
pub const STRATEGY_KEY: &str = "strategy";

const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";

pub struct AnalyzeOptions {
    pub video_url: String,
    pub strategy: Option<AnalysisStrategy>,
    pub backend_url: Option<String>,
    pub no_copy: bool,
}

/// The analyze flow: load pantry and settings, run the analysis, paint
/// the result. An empty pantry sends the user back to the pantry editor
/// instead of the result screen.
pub async fn analyze(
    pantry_repository: &JsonPantryRepository,
    settings_repository: &JsonSettingsRepository,
    options: AnalyzeOptions,
) -> anyhow::Result<()> {
    let pantry = pantry_repository.load().await?;
    let settings = settings_repository.load().await?;

    let backend_url = options
        .backend_url
        .or_else(|| settings.get_str(BACKEND_URL_KEY).map(str::to_string))
        .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());
    let strategy = options
        .strategy
        .or_else(|| settings.get_str(STRATEGY_KEY)?.parse().ok())
        .unwrap_or_default();

    let backend = HttpRecipeBackend::new(backend_url.clone());
    let captions = ProxyCaptionsClient::new(backend_url);

    tracing::debug!(strategy = %strategy, "starting analysis");
    println!("Analyzing video...");

    let input = AnalyzeVideoInput {
        video_url: options.video_url,
        pantry: pantry.into_items(),
    };

    let result = match run_video_analysis(&backend, &captions, input, strategy).await {
        Ok(result) => result,
        Err(CoreError::EmptyPantry) => {
            eprintln!("Please select your pantry first.");
            return pantry_ui::edit_pantry(pantry_repository).await;
        }
        Err(err) => return Err(err.into()),
    };

    let view = render::ResultView::from(&result);
    render::paint(&view);

    if !options.no_copy && !view.need_to_buy.is_empty() {
        let copy = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Copy the shopping list to the clipboard?")
            .default(false)
            .interact()?;

        if copy {
            clipboard::copy_to_clipboard(&render::format_shopping_list(&view.need_to_buy))?;
            println!("Copied to clipboard!");
        }
    }

    Ok(())
}
