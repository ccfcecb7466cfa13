//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the API router with versioned endpoints
    let api_v1 = Router::new()
        // Timing analysis
        .route("/timing/analyze", post(handlers::analyze_timing))
        .route("/timing/range", get(handlers::get_timing_range))
        .route("/timing/report", post(handlers::generate_report))
        // Model endpoints
        .route("/solar/activity", get(handlers::get_solar_activity))
        .route("/seasonal/risk", get(handlers::get_seasonal_risk))
        // Geocoding
        .route("/geocode", get(handlers::geocode));

    // Combine all routes
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn test_router_creation() {
        let state = AppState::from_config(&AppConfig::default());
        let _router = create_router(state);
        // If we got here, router was created successfully
    }
}
