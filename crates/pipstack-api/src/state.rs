//! Application state.

use std::sync::Arc;

use pipstack_edit::TemplateStore;

use crate::config::ApiConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub templates: Arc<TemplateStore>,
}

impl AppState {
    /// Create new application state.
    pub fn new(config: ApiConfig) -> Self {
        let templates = Arc::new(TemplateStore::new(&config.template_path));
        Self { config, templates }
    }
}
