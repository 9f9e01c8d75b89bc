use std::sync::Arc;

use cookable_core::application::CookableService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: CookableService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: CookableService) -> Self {
        Self { args, service }
    }
}
