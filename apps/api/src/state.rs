use std::sync::Arc;

use crate::ats::engine::AtsEngine;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Built once at startup; read-only afterwards so requests share it freely.
    pub engine: Arc<AtsEngine>,
}

impl AppState {
    pub fn new(config: Config, engine: AtsEngine) -> Self {
        Self {
            config,
            engine: Arc::new(engine),
        }
    }
}
