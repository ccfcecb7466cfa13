//! Public API surface for the Rust backend.
//!
//! This file consolidates the DTO types produced and consumed by the timing
//! engine. All types derive Serialize/Deserialize for JSON serialization.

pub use crate::seasonal::{DiseaseRiskProfile, SeasonalRiskData};
pub use crate::services::geocoding::GeocodingError;
pub use crate::services::range::TimingAnalysis;
pub use crate::services::report::OptimalityReport;
pub use crate::services::risk_factors::RiskFactor;
pub use crate::services::timing::OptimalTimingResult;
pub use crate::solar::{SolarActivityData, SolarCycleRecord};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation error raised at the input boundary.
///
/// The engine itself is total over constructed values; malformed coordinates
/// are rejected here, never partway through the scoring pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInputError {
    #[error("latitude {0} out of range [-90, 90]")]
    Latitude(f64),
    #[error("longitude {0} out of range [-180, 180]")]
    Longitude(f64),
    #[error("{0} must be a finite number")]
    NonFinite(&'static str),
}

/// Geographic location resolved by the geocoding collaborator.
///
/// Immutable once constructed. Identity is value equality; the engine never
/// persists these.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocationData {
    /// Latitude in decimal degrees (-90 to 90)
    pub latitude: f64,
    /// Longitude in decimal degrees (-180 to 180)
    pub longitude: f64,
    /// Resolved city name, if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Resolved country name, if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// IANA timezone identifier, if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    /// Resolution accuracy in meters, if reported by the resolver
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<f64>,
}

impl LocationData {
    /// Construct a validated location from raw coordinates.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InvalidInputError> {
        if !latitude.is_finite() {
            return Err(InvalidInputError::NonFinite("latitude"));
        }
        if !longitude.is_finite() {
            return Err(InvalidInputError::NonFinite("longitude"));
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(InvalidInputError::Latitude(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(InvalidInputError::Longitude(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
            city: None,
            country: None,
            timezone: None,
            accuracy: None,
        })
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = Some(timezone.into());
        self
    }

    pub fn with_accuracy(mut self, accuracy: f64) -> Self {
        self.accuracy = Some(accuracy);
        self
    }
}

/// Phase of an 11-year solar cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CyclePhase {
    Minimum,
    Ascending,
    Maximum,
    Descending,
}

impl std::fmt::Display for CyclePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CyclePhase::Minimum => "minimum",
            CyclePhase::Ascending => "ascending",
            CyclePhase::Maximum => "maximum",
            CyclePhase::Descending => "descending",
        };
        write!(f, "{}", s)
    }
}

/// Coarse risk tier.
///
/// For seasonal scores the naming is inverted on purpose: a higher composite
/// score maps to a *lower* risk level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// Severity tag attached to an individual risk factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// Category of a risk factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FactorCategory {
    Solar,
    Seasonal,
    Geographic,
    Environmental,
}

/// Confidence tier attached to an analysis result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ConfidenceLevel {
    Low,
    Medium,
    High,
}

impl ConfidenceLevel {
    /// Derive confidence from the overall score.
    ///
    /// Note this is driven directly off the score rather than off any
    /// independent uncertainty measure; the mapping is kept as-is for
    /// compatibility with the original scoring contract.
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            ConfidenceLevel::High
        } else if score >= 60 {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        }
    }
}

/// Direction of the score trend across a range analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Improving,
    Stable,
    Declining,
}
