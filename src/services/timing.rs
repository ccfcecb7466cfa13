//! Timing engine orchestration.
//!
//! Single entry point turning a validated (location, date) pair into the
//! scored analysis aggregate. The engine owns the solar model (and with it
//! the noise source and sample cache); seasonal computation is stateless.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::api::{ConfidenceLevel, LocationData};
use crate::config::EngineConfig;
use crate::seasonal::{calculate_seasonal_risk, SeasonalRiskData};
use crate::services::recommendations::{
    generate_recommendations, render, RecommendationContext,
};
use crate::services::risk_factors::{generate_risk_factors, FactorContext, RiskFactor};
use crate::solar::{NoiseSource, SolarActivityData, SolarModel, ThreadRngNoise};

/// Category weights for the composite score.
pub const WEIGHT_SOLAR: f64 = 0.40;
pub const WEIGHT_SEASONAL: f64 = 0.35;
pub const WEIGHT_GEOGRAPHIC: f64 = 0.15;
pub const WEIGHT_ENVIRONMENTAL: f64 = 0.10;

/// Placeholder environmental sub-score; no per-location environmental data
/// source is wired in.
pub const ENVIRONMENTAL_SUB_SCORE: f64 = 75.0;

/// Complete analysis for one (location, date) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimalTimingResult {
    pub birth_date: NaiveDate,
    /// Composite optimality, 0-100
    pub overall_score: u8,
    /// Estimated lifespan delta in years (from the solar sample)
    pub life_expectancy_delta: f64,
    pub confidence_level: ConfidenceLevel,
    pub risk_factors: Vec<RiskFactor>,
    /// Deduplicated, priority-ordered advisory strings
    pub recommendations: Vec<String>,
    pub solar_data: SolarActivityData,
    pub seasonal_data: SeasonalRiskData,
}

/// Orchestrator for timing analysis.
pub struct TimingEngine {
    solar: SolarModel,
    default_range_months: u32,
}

impl TimingEngine {
    /// Engine with a production noise source.
    pub fn new(config: &EngineConfig) -> Self {
        Self::with_noise(config, Box::new(ThreadRngNoise))
    }

    /// Engine with an injected noise source (seeded or zero for tests and
    /// reproducible runs).
    pub fn with_noise(config: &EngineConfig, noise: Box<dyn NoiseSource>) -> Self {
        Self {
            solar: SolarModel::new(config.solar_cache_capacity, noise),
            default_range_months: config.default_range_months,
        }
    }

    pub(crate) fn default_range_months(&self) -> u32 {
        self.default_range_months
    }

    /// Memoized solar activity sample for a date.
    pub fn solar_activity(&self, date: NaiveDate) -> SolarActivityData {
        self.solar.sample(date)
    }

    /// Seasonal risk profile for a (location, date) pair.
    pub fn seasonal_risk(&self, location: &LocationData, date: NaiveDate) -> SeasonalRiskData {
        calculate_seasonal_risk(location, date)
    }

    /// Score one candidate birth window.
    ///
    /// Total over validated inputs: every branch below is defined for any
    /// in-range location and any date.
    pub fn calculate_optimal_timing(
        &self,
        location: &LocationData,
        target_date: NaiveDate,
    ) -> OptimalTimingResult {
        let solar_data = self.solar.sample(target_date);
        let seasonal_data = calculate_seasonal_risk(location, target_date);

        let risk_factors = generate_risk_factors(&FactorContext {
            solar: &solar_data,
            seasonal: &seasonal_data,
            location,
        });

        let overall_score = overall_score(
            solar_data.lifespan_impact,
            seasonal_data.overall_seasonal_score,
            location.latitude,
        );

        let recommendations = render(&generate_recommendations(&RecommendationContext {
            solar: &solar_data,
            seasonal: &seasonal_data,
            location,
            overall_score,
        }));

        log::debug!(
            "timing analysis for ({:.4}, {:.4}) on {}: score {}",
            location.latitude,
            location.longitude,
            target_date,
            overall_score
        );

        OptimalTimingResult {
            birth_date: target_date,
            overall_score,
            life_expectancy_delta: solar_data.lifespan_impact,
            confidence_level: ConfidenceLevel::from_score(overall_score),
            risk_factors,
            recommendations,
            solar_data,
            seasonal_data,
        }
    }
}

/// Solar category sub-score, floored at zero.
pub fn solar_sub_score(lifespan_impact: f64) -> f64 {
    (100.0 - 15.0 * lifespan_impact.abs()).max(0.0)
}

/// Geographic category sub-score, floored at zero.
pub fn geographic_sub_score(latitude: f64) -> f64 {
    (100.0 - latitude.abs()).max(0.0)
}

/// Weighted composite of the four category sub-scores, as an integer 0-100.
pub fn overall_score(lifespan_impact: f64, seasonal_score: f64, latitude: f64) -> u8 {
    let weighted = solar_sub_score(lifespan_impact) * WEIGHT_SOLAR
        + seasonal_score * WEIGHT_SEASONAL
        + geographic_sub_score(latitude) * WEIGHT_GEOGRAPHIC
        + ENVIRONMENTAL_SUB_SCORE * WEIGHT_ENVIRONMENTAL;
    weighted.round().clamp(0.0, 100.0) as u8
}
