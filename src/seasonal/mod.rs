//! Seasonal risk model.
//!
//! Deterministic function of (date, latitude, country): vitamin-D synthesis
//! potential, normalized disease risks from the monthly multiplier table,
//! the relative school-age effect, and their weighted composite.

pub mod tables;

pub use self::tables::DiseaseRiskProfile;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::api::{LocationData, RiskLevel};
use crate::models::geo::uv_intensity_by_latitude;
use crate::models::Season;
use self::tables::{table_month, NORTHERN_MONTHLY_MULTIPLIERS};

/// Composite weights. Vitamin D dominates, then infection avoidance.
pub const WEIGHT_VITAMIN_D: f64 = 0.30;
pub const WEIGHT_INFECTIOUS: f64 = 0.25;
pub const WEIGHT_RELATIVE_AGE: f64 = 0.15;
pub const WEIGHT_CARDIOVASCULAR: f64 = 0.15;
pub const WEIGHT_MENTAL_HEALTH: f64 = 0.10;
pub const WEIGHT_AUTOIMMUNE: f64 = 0.05;

/// Per-month advantage decrement of the relative-age score.
const RELATIVE_AGE_STEP: f64 = 8.33;

/// Seasonal risk profile for one (date, location) pair.
///
/// Disease fields are normalized to 0-100; the raw hemisphere-adjusted
/// multipliers remain available through [`disease_risk_profile`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalRiskData {
    /// Birth month, 1-12
    pub birth_month: u32,
    /// Vitamin-D synthesis potential over the first six months of life, 0-100
    pub vitamin_d_score: f64,
    /// Normalized infectious exposure at birth, 0-100
    pub infectious_risk: f64,
    /// Relative school-age advantage, 0-100
    pub relative_age_advantage: f64,
    /// Normalized cardiovascular risk, 0-100
    pub cardiovascular_risk: f64,
    /// Normalized mental-health risk, 0-100
    pub mental_health_risk: f64,
    /// Normalized autoimmune risk, 0-100
    pub auto_immune_risk: f64,
    /// Weighted composite, 0-100; higher is better
    pub overall_seasonal_score: f64,
    /// Inverted naming kept from the scoring contract: a high composite
    /// score maps to LOW risk.
    pub risk_level: RiskLevel,
}

/// Raw hemisphere-adjusted disease multipliers for a calendar month.
pub fn disease_risk_profile(month: u32, latitude: f64) -> DiseaseRiskProfile {
    let index = table_month(month, latitude) as usize - 1;
    NORTHERN_MONTHLY_MULTIPLIERS[index]
}

/// Vitamin-D synthesis potential: mean UV intensity over the birth month and
/// the five following months (the infant's first six calendar months),
/// scaled x10 and clamped to [0, 100].
pub fn vitamin_d_synthesis(location: &LocationData, date: NaiveDate) -> f64 {
    let birth_month = date.month();
    let total: f64 = (0..6)
        .map(|offset| {
            let month = ((birth_month - 1 + offset) % 12) + 1;
            uv_intensity_by_latitude(location.latitude, month)
        })
        .sum();
    (total / 6.0 * 10.0).clamp(0.0, 100.0)
}

/// School-year cutoff month for a country; births just after the cutoff are
/// the oldest in their cohort.
pub fn school_cutoff_month(country: Option<&str>) -> u32 {
    let normalized = country.map(|c| c.trim().to_ascii_lowercase());
    match normalized.as_deref() {
        Some("australia") => 1,
        Some("germany") => 6,
        Some("japan") => 4,
        // US, UK, Canada, France and the default all cut off in September.
        _ => 9,
    }
}

/// Relative-age advantage: 100 for the month right at the cutoff, dropping
/// ~8.33 points per month after it, floored at 0.
pub fn relative_age_effect(date: NaiveDate, country: Option<&str>) -> f64 {
    let cutoff = school_cutoff_month(country);
    let months_after = (date.month() as i64 - cutoff as i64).rem_euclid(12);
    (100.0 - RELATIVE_AGE_STEP * months_after as f64).max(0.0)
}

/// Rescale a raw multiplier deviation onto 0-100.
fn normalize(multiplier: f64, baseline: f64, scale: f64) -> f64 {
    ((multiplier - baseline) * scale).clamp(0.0, 100.0)
}

fn normalize_infectious(multiplier: f64) -> f64 {
    normalize(multiplier, 0.8, 500.0)
}

fn normalize_cardiovascular(multiplier: f64) -> f64 {
    normalize(multiplier, 0.9, 500.0)
}

fn normalize_mental_health(multiplier: f64) -> f64 {
    normalize(multiplier, 0.85, 400.0)
}

fn normalize_autoimmune(multiplier: f64) -> f64 {
    ((multiplier - 1.0).abs() * 1000.0).clamp(0.0, 100.0)
}

/// Risk tier for a composite seasonal score. Naming is inverted on purpose:
/// a higher score means lower risk.
pub fn risk_level_for_score(score: f64) -> RiskLevel {
    if score >= 70.0 {
        RiskLevel::Low
    } else if score >= 50.0 {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    }
}

/// Full seasonal risk computation for a (location, date) pair.
pub fn calculate_seasonal_risk(location: &LocationData, date: NaiveDate) -> SeasonalRiskData {
    let birth_month = date.month();
    let profile = disease_risk_profile(birth_month, location.latitude);

    let vitamin_d_score = vitamin_d_synthesis(location, date);
    let infectious_risk = normalize_infectious(profile.infectious);
    let relative_age_advantage = relative_age_effect(date, location.country.as_deref());
    let cardiovascular_risk = normalize_cardiovascular(profile.cardiovascular);
    let mental_health_risk = normalize_mental_health(profile.mental_health);
    let auto_immune_risk = normalize_autoimmune(profile.autoimmune);

    let overall_seasonal_score = (vitamin_d_score * WEIGHT_VITAMIN_D
        + (100.0 - infectious_risk) * WEIGHT_INFECTIOUS
        + relative_age_advantage * WEIGHT_RELATIVE_AGE
        + (100.0 - cardiovascular_risk) * WEIGHT_CARDIOVASCULAR
        + (100.0 - mental_health_risk) * WEIGHT_MENTAL_HEALTH
        + (100.0 - auto_immune_risk) * WEIGHT_AUTOIMMUNE)
        .clamp(0.0, 100.0);

    SeasonalRiskData {
        birth_month,
        vitamin_d_score,
        infectious_risk,
        relative_age_advantage,
        cardiovascular_risk,
        mental_health_risk,
        auto_immune_risk,
        overall_seasonal_score,
        risk_level: risk_level_for_score(overall_seasonal_score),
    }
}

/// Season-specific advisory strings consumed by the recommendation rules.
pub fn seasonal_advisories(month: u32) -> &'static [&'static str] {
    match Season::from_month(month) {
        Season::Spring => {
            &["Spring birth: monitor early pollen exposure during the first weeks."]
        }
        Season::Summer => &["Summer birth: protect the newborn from peak UV and heat."],
        Season::Fall => {
            &["Fall birth: schedule vaccinations ahead of the winter infection season."]
        }
        Season::Winter => {
            &["Winter birth: plan respiratory illness precautions for the newborn period."]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn loc(lat: f64) -> LocationData {
        LocationData::new(lat, 0.0).unwrap()
    }

    #[test]
    fn test_southern_lookup_is_northern_with_offset() {
        for month in 1..=12 {
            let south = disease_risk_profile(month, -40.0);
            let mirrored_month = ((month + 5) % 12) + 1;
            let north = disease_risk_profile(mirrored_month, 40.0);
            assert_eq!(south, north, "month {}", month);
        }
    }

    #[test]
    fn test_vitamin_d_in_range_and_latitude_ordering() {
        for month in 1..=12 {
            let d = date(2024, month, 15);
            let tropics = vitamin_d_synthesis(&loc(5.0), d);
            let arctic = vitamin_d_synthesis(&loc(70.0), d);
            assert!((0.0..=100.0).contains(&tropics));
            assert!((0.0..=100.0).contains(&arctic));
            assert!(tropics > arctic);
        }
    }

    #[test]
    fn test_school_cutoff_months() {
        assert_eq!(school_cutoff_month(Some("United States")), 9);
        assert_eq!(school_cutoff_month(Some("united kingdom")), 9);
        assert_eq!(school_cutoff_month(Some("Canada")), 9);
        assert_eq!(school_cutoff_month(Some("France")), 9);
        assert_eq!(school_cutoff_month(Some("Australia")), 1);
        assert_eq!(school_cutoff_month(Some("Germany")), 6);
        assert_eq!(school_cutoff_month(Some("Japan")), 4);
        assert_eq!(school_cutoff_month(Some("Brazil")), 9);
        assert_eq!(school_cutoff_month(None), 9);
    }

    #[test]
    fn test_relative_age_peaks_at_cutoff() {
        // September birth in the US: right at the cutoff, oldest in cohort.
        assert_eq!(relative_age_effect(date(2024, 9, 1), Some("United States")), 100.0);
        // August birth: 11 months after the previous cutoff, youngest.
        let august = relative_age_effect(date(2024, 8, 1), Some("United States"));
        assert!((august - (100.0 - 8.33 * 11.0)).abs() < 1e-9);
        // Japanese cutoff is April.
        assert_eq!(relative_age_effect(date(2024, 4, 1), Some("Japan")), 100.0);
    }

    #[test]
    fn test_relative_age_never_negative() {
        for month in 1..=12 {
            for country in [None, Some("Australia"), Some("Japan")] {
                let score = relative_age_effect(date(2024, month, 1), country);
                assert!((0.0..=100.0).contains(&score));
            }
        }
    }

    #[test]
    fn test_normalization_scales() {
        // Infectious 0.8 is the baseline, 1.0 maps to 100.
        assert_eq!(normalize_infectious(0.8), 0.0);
        assert_eq!(normalize_infectious(1.0), 100.0);
        assert_eq!(normalize_infectious(1.3), 100.0);
        assert_eq!(normalize_cardiovascular(0.9), 0.0);
        assert_eq!(normalize_mental_health(0.85), 0.0);
        assert_eq!(normalize_autoimmune(1.0), 0.0);
        assert_eq!(normalize_autoimmune(1.05), 50.0);
        assert_eq!(normalize_autoimmune(0.95), 50.0);
    }

    #[test]
    fn test_composite_matches_weighted_formula() {
        let location = loc(40.7128).with_country("United States");
        let data = calculate_seasonal_risk(&location, date(2024, 7, 15));
        let expected = data.vitamin_d_score * WEIGHT_VITAMIN_D
            + (100.0 - data.infectious_risk) * WEIGHT_INFECTIOUS
            + data.relative_age_advantage * WEIGHT_RELATIVE_AGE
            + (100.0 - data.cardiovascular_risk) * WEIGHT_CARDIOVASCULAR
            + (100.0 - data.mental_health_risk) * WEIGHT_MENTAL_HEALTH
            + (100.0 - data.auto_immune_risk) * WEIGHT_AUTOIMMUNE;
        assert!((data.overall_seasonal_score - expected.clamp(0.0, 100.0)).abs() < 1e-9);
    }

    #[test]
    fn test_seasonal_risk_is_deterministic() {
        let location = loc(-33.87).with_country("Australia");
        let d = date(2025, 2, 10);
        assert_eq!(
            calculate_seasonal_risk(&location, d),
            calculate_seasonal_risk(&location, d)
        );
    }

    #[test]
    fn test_risk_level_thresholds() {
        assert_eq!(risk_level_for_score(70.0), RiskLevel::Low);
        assert_eq!(risk_level_for_score(69.9), RiskLevel::Medium);
        assert_eq!(risk_level_for_score(50.0), RiskLevel::Medium);
        assert_eq!(risk_level_for_score(49.9), RiskLevel::High);
    }

    #[test]
    fn test_advisories_cover_all_months() {
        for month in 1..=12 {
            assert!(!seasonal_advisories(month).is_empty());
        }
    }
}
