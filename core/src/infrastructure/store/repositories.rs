use crate::domain::{
    common::entities::app_errors::CoreError,
    pantry::{entities::Pantry, ports::PantryRepository},
    settings::{entities::Settings, ports::SettingsRepository},
};
use crate::infrastructure::store::JsonFileStore;

const PANTRY_KEY: &str = "pantry";
const SETTINGS_KEY: &str = "settings";

#[derive(Debug, Clone)]
pub struct JsonPantryRepository {
    store: JsonFileStore,
}

impl JsonPantryRepository {
    pub fn new(store: JsonFileStore) -> Self {
        Self { store }
    }
}

impl PantryRepository for JsonPantryRepository {
    async fn load(&self) -> Result<Pantry, CoreError> {
        Ok(self.store.read(PANTRY_KEY))
    }

    async fn save(&self, pantry: Pantry) -> Result<(), CoreError> {
        self.store.write(PANTRY_KEY, &pantry);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct JsonSettingsRepository {
    store: JsonFileStore,
}

impl JsonSettingsRepository {
    pub fn new(store: JsonFileStore) -> Self {
        Self { store }
    }
}

impl SettingsRepository for JsonSettingsRepository {
    async fn load(&self) -> Result<Settings, CoreError> {
        Ok(self.store.read(SETTINGS_KEY))
    }

    async fn save(&self, settings: Settings) -> Result<(), CoreError> {
        self.store.write(SETTINGS_KEY, &settings);
        Ok(())
    }
}
