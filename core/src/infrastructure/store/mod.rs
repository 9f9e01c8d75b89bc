mod json_store;
mod repositories;

pub use json_store::JsonFileStore;
pub use repositories::{JsonPantryRepository, JsonSettingsRepository};
