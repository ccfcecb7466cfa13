//! Synthetic solar activity sampling.
//!
//! Simulation-only: there is no upstream data feed. Every sample is derived
//! from the cycle table and a phase-based waveform, with a bounded uniform
//! noise term drawn from the injected [`NoiseSource`].

use std::f64::consts::TAU;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::cache::ActivityCache;
use super::noise::NoiseSource;
use super::{cycle_for_year, cycle_progress, phase_at_progress};
use crate::api::{CyclePhase, RiskLevel};

/// Half-width of the uniform noise band applied to the sunspot waveform.
pub const SUNSPOT_NOISE_HALF_WIDTH: f64 = 10.0;

/// Per-date solar activity sample with derived health-model metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolarActivityData {
    pub date: NaiveDate,
    /// Synthetic sunspot number, always >= 0
    pub sunspot_number: u32,
    /// F10.7cm radio flux proxy in solar flux units
    pub solar_flux_index: f64,
    /// Planetary K-index proxy, 0-9
    pub geomagnetic_index: u8,
    /// Relative cosmic ray intensity, 0-100 (anticorrelated with activity)
    pub cosmic_ray_intensity: f64,
    pub cycle_phase: CyclePhase,
    pub solar_risk: RiskLevel,
    /// 1.3 during elevated activity, 1.0 otherwise
    pub mental_health_multiplier: f64,
    /// Estimated lifespan delta in years (signed)
    pub lifespan_impact: f64,
    /// UV index contribution attributable to solar activity, 0-11
    pub uv_radiation_level: f64,
}

/// Synthetic solar model: waveform sampling plus a bounded memoization cache.
///
/// Samples are stochastic across fresh draws; the cache guarantees repeated
/// queries for one date within a session return the same draw.
pub struct SolarModel {
    cache: ActivityCache,
    noise: Box<dyn NoiseSource>,
}

impl SolarModel {
    pub fn new(cache_capacity: usize, noise: Box<dyn NoiseSource>) -> Self {
        Self {
            cache: ActivityCache::new(cache_capacity),
            noise,
        }
    }

    /// Memoized activity sample for a date.
    pub fn sample(&self, date: NaiveDate) -> SolarActivityData {
        if let Some(hit) = self.cache.get(date) {
            return hit;
        }
        let fresh = self.compute(date);
        self.cache.insert(date, fresh.clone());
        fresh
    }

    /// Fresh (uncached, re-randomized) activity sample for a date.
    pub fn compute(&self, date: NaiveDate) -> SolarActivityData {
        let year = date.year();
        let month = date.month();
        let cycle = cycle_for_year(year);
        let progress = cycle_progress(&cycle, year, month);

        let sunspots = sunspot_number(cycle.max_sunspots, progress, self.noise.as_ref());

        SolarActivityData {
            date,
            sunspot_number: sunspots,
            solar_flux_index: solar_flux_index(sunspots),
            geomagnetic_index: geomagnetic_index(sunspots),
            cosmic_ray_intensity: cosmic_ray_intensity(sunspots),
            cycle_phase: phase_at_progress(progress),
            solar_risk: solar_risk(sunspots),
            mental_health_multiplier: mental_health_multiplier(sunspots),
            lifespan_impact: lifespan_impact(sunspots, month),
            uv_radiation_level: uv_radiation_level(sunspots),
        }
    }

    /// Number of samples currently memoized.
    pub fn cached_samples(&self) -> usize {
        self.cache.len()
    }
}

/// Phase-based sunspot waveform: a sine carrier with a Gaussian bump placing
/// the activity peak at ~36% into the cycle, scaled by the cycle amplitude,
/// plus uniform noise. Clamped at zero and rounded to the nearest integer.
pub fn sunspot_number(max_sunspots: f64, progress: f64, noise: &dyn NoiseSource) -> u32 {
    let base_activity = (TAU * progress).sin();
    let peak_adjustment = (-8.0 * (progress - 0.36).powi(2)).exp();
    let raw = (0.7 * base_activity + 0.8 * peak_adjustment) * max_sunspots
        + noise.sample(SUNSPOT_NOISE_HALF_WIDTH);
    raw.max(0.0).round() as u32
}

/// Risk tier from the sunspot number.
pub fn solar_risk(sunspots: u32) -> RiskLevel {
    if sunspots < 50 {
        RiskLevel::Low
    } else if sunspots < 100 {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    }
}

/// Mood-sensitivity multiplier applied during elevated activity.
pub fn mental_health_multiplier(sunspots: u32) -> f64 {
    if sunspots > 90 {
        1.3
    } else {
        1.0
    }
}

/// Estimated lifespan delta in years for a sunspot number and birth month.
///
/// Three linear segments over the sunspot number clamped to [0, 200]:
/// mildly positive below 30, a steep negative ramp to 120, and a steeper
/// ramp above, plus a small month-of-year perturbation. One decimal.
pub fn lifespan_impact(sunspots: u32, month: u32) -> f64 {
    let s = (sunspots as f64).clamp(0.0, 200.0);
    let segment = if s < 30.0 {
        0.5 - (s / 30.0) * 0.8
    } else if s <= 120.0 {
        -0.3 - ((s - 30.0) / 90.0) * 4.5
    } else {
        -4.8 - ((s - 120.0) / 80.0) * 1.8
    };
    let month_term = (month as f64 - 6.0) * 0.1;
    round1(segment + month_term)
}

/// UV index contribution attributable to solar activity.
pub fn uv_radiation_level(sunspots: u32) -> f64 {
    (5.0 * (1.0 + sunspots as f64 / 200.0 * 0.3)).min(11.0)
}

/// F10.7cm flux proxy via the standard quadratic sunspot relation.
pub fn solar_flux_index(sunspots: u32) -> f64 {
    let s = sunspots as f64;
    round1(63.7 + 0.728 * s + 0.00089 * s * s)
}

/// Planetary K-index proxy, 0-9.
pub fn geomagnetic_index(sunspots: u32) -> u8 {
    ((sunspots as f64 / 30.0).round() as u8).min(9)
}

/// Relative cosmic ray intensity; galactic flux drops as activity rises.
pub fn cosmic_ray_intensity(sunspots: u32) -> f64 {
    round1((100.0 - 0.15 * sunspots as f64).clamp(0.0, 100.0))
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}
