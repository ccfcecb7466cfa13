//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the engine
//! or the geocoding provider. CPU-heavy range sweeps run on the blocking
//! pool so the async executor stays responsive.

use axum::{
    extract::{Query, State},
    Json,
};

use super::dto::{
    AnalyzeRequest, GeocodeQuery, HealthResponse, RangeQuery, SeasonalQuery, SolarQuery,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::{
    LocationData, OptimalityReport, OptimalTimingResult, SeasonalRiskData, SolarActivityData,
    TimingAnalysis,
};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running.
pub async fn health_check() -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

// =============================================================================
// Timing Analysis
// =============================================================================

/// POST /v1/timing/analyze
///
/// Score a single (location, date) pair.
pub async fn analyze_timing(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> HandlerResult<OptimalTimingResult> {
    let location = request.location.into_location()?;
    let result = state.engine.calculate_optimal_timing(&location, request.date);
    Ok(Json(result))
}

/// GET /v1/timing/range
///
/// Sweep candidate months around a center date. O(range) evaluations, so the
/// work runs on the blocking pool.
pub async fn get_timing_range(
    State(state): State<AppState>,
    Query(query): Query<RangeQuery>,
) -> HandlerResult<TimingAnalysis> {
    let mut location = LocationData::new(query.lat, query.lon)?;
    if let Some(city) = query.city {
        location = location.with_city(city);
    }
    if let Some(country) = query.country {
        location = location.with_country(country);
    }

    let engine = state.engine.clone();
    let date = query.date;
    let range_months = query.range_months;

    let analysis = tokio::task::spawn_blocking(move || match range_months {
        Some(months) => engine.analyze_timing_range(&location, date, months),
        None => engine.analyze_default_range(&location, date),
    })
    .await
    .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))?;

    Ok(Json(analysis))
}

/// POST /v1/timing/report
///
/// Full export report: analysis, alternatives, summary and citations.
pub async fn generate_report(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> HandlerResult<OptimalityReport> {
    let location = request.location.into_location()?;
    let engine = state.engine.clone();
    let date = request.date;

    let report = tokio::task::spawn_blocking(move || {
        engine.generate_optimality_report(&location, date)
    })
    .await
    .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))?;

    Ok(Json(report))
}

// =============================================================================
// Model Endpoints
// =============================================================================

/// GET /v1/solar/activity
///
/// Memoized solar activity sample for a date.
pub async fn get_solar_activity(
    State(state): State<AppState>,
    Query(query): Query<SolarQuery>,
) -> HandlerResult<SolarActivityData> {
    Ok(Json(state.engine.solar_activity(query.date)))
}

/// GET /v1/seasonal/risk
///
/// Seasonal risk profile for a (location, date) pair.
pub async fn get_seasonal_risk(
    State(state): State<AppState>,
    Query(query): Query<SeasonalQuery>,
) -> HandlerResult<SeasonalRiskData> {
    let mut location = LocationData::new(query.lat, query.lon)?;
    if let Some(country) = query.country {
        location = location.with_country(country);
    }
    Ok(Json(state.engine.seasonal_risk(&location, query.date)))
}

// =============================================================================
// Geocoding
// =============================================================================

/// GET /v1/geocode
///
/// Resolve a free-text place query via the configured provider.
pub async fn geocode(
    State(state): State<AppState>,
    Query(query): Query<GeocodeQuery>,
) -> HandlerResult<LocationData> {
    let location = state.geocoder.resolve(&query.q).await?;
    Ok(Json(location))
}
