use std::sync::Arc;
use crate::provider::CompletionProvider;

// app's shared state, read-only after startup

pub struct AppState {
    pub provider: Arc<dyn CompletionProvider>,
}

impl AppState {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self { provider }
    }
}
