//! Application state for the HTTP server.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::geocoding::{CachingProvider, LocationProvider, StaticGazetteer};
use crate::services::timing::TimingEngine;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Timing engine instance (owns the solar sample cache)
    pub engine: Arc<TimingEngine>,
    /// Location resolver for the geocoding endpoint
    pub geocoder: Arc<dyn LocationProvider>,
}

impl AppState {
    /// Create a new application state with the given engine and resolver.
    pub fn new(engine: Arc<TimingEngine>, geocoder: Arc<dyn LocationProvider>) -> Self {
        Self { engine, geocoder }
    }

    /// State wired from configuration: production noise source and the
    /// built-in gazetteer behind a bounded cache.
    pub fn from_config(config: &AppConfig) -> Self {
        let engine = Arc::new(TimingEngine::new(&config.engine));
        let geocoder = Arc::new(CachingProvider::new(
            StaticGazetteer,
            config.engine.geocode_cache_capacity,
        ));
        Self::new(engine, geocoder)
    }
}
