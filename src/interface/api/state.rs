//! Shared handler state

use crate::application::CallService;
use crate::domain::customer::CustomerDirectory;
use std::sync::Arc;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub directory: CustomerDirectory,
    pub call_service: Arc<CallService>,
}

impl AppState {
    pub fn new(directory: CustomerDirectory, call_service: CallService) -> Self {
        Self {
            directory,
            call_service: Arc::new(call_service),
        }
    }
}
