use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, pantry::entities::Pantry};

/// Persistence port for the pantry list.
#[cfg_attr(test, mockall::automock)]
pub trait PantryRepository: Send + Sync {
    fn load(&self) -> impl Future<Output = Result<Pantry, CoreError>> + Send;

    fn save(&self, pantry: Pantry) -> impl Future<Output = Result<(), CoreError>> + Send;
}
