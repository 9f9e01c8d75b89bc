use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, settings::entities::Settings};

/// Persistence port for the settings record.
#[cfg_attr(test, mockall::automock)]
pub trait SettingsRepository: Send + Sync {
    fn load(&self) -> impl Future<Output = Result<Settings, CoreError>> + Send;

    fn save(&self, settings: Settings) -> impl Future<Output = Result<(), CoreError>> + Send;
}
