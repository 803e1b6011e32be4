use std::sync::Arc;

use crate::config::Config;
use crate::impact::engine::ImpactAnalyzer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable analyzer. Default: the keyword `ImpactEngine`.
    /// Also the source of the catalog and taxonomy listings.
    pub analyzer: Arc<dyn ImpactAnalyzer>,
}

impl AppState {
    pub fn new(config: Config, analyzer: impl ImpactAnalyzer + 'static) -> Self {
        Self {
            config,
            analyzer: Arc::new(analyzer),
        }
    }
}
