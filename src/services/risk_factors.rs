//! Risk factor generation.
//!
//! An ordered table of rules, each mapping the analysis context to at most
//! one factor. Rules run in sequence, so the factor list order is stable and
//! new rules can be added and tested in isolation.

use serde::{Deserialize, Serialize};

use crate::api::{FactorCategory, LocationData, Severity};
use crate::models::Season;
use crate::seasonal::SeasonalRiskData;
use crate::solar::SolarActivityData;

/// One named, severity-tagged contribution to the analysis.
///
/// `impact` is signed: positive values are beneficial. Factors form an
/// ordered sequence, not a set; duplicates by name across categories are
/// possible and intentionally not filtered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFactor {
    pub category: FactorCategory,
    pub name: String,
    /// Signed impact in [-100, 100]; positive is beneficial
    pub impact: i32,
    pub severity: Severity,
    pub description: String,
}

/// Inputs shared by every factor rule.
pub(crate) struct FactorContext<'a> {
    pub solar: &'a SolarActivityData,
    pub seasonal: &'a SeasonalRiskData,
    pub location: &'a LocationData,
}

type FactorRule = fn(&FactorContext) -> Option<RiskFactor>;

/// Rule order fixes the factor order in every result.
const FACTOR_RULES: &[FactorRule] = &[
    solar_activity_factor,
    uv_availability_factor,
    vitamin_d_factor,
    infection_factor,
    school_age_factor,
    geographic_factor,
    environmental_factor,
];

/// Evaluate every rule in order, collecting the factors that apply.
pub(crate) fn generate_risk_factors(ctx: &FactorContext) -> Vec<RiskFactor> {
    FACTOR_RULES.iter().filter_map(|rule| rule(ctx)).collect()
}

fn clamp_impact(raw: f64) -> i32 {
    (raw.round() as i32).clamp(-100, 100)
}

/// Baseline severity ladder shared by most rules.
fn severity_default(impact: i32) -> Severity {
    if impact.abs() > 15 {
        Severity::Medium
    } else {
        Severity::Low
    }
}

/// Ladder with a HIGH tier, used where the impact range warrants it.
fn severity_with_high(impact: i32) -> Severity {
    if impact.abs() > 18 {
        Severity::High
    } else if impact.abs() > 10 {
        Severity::Medium
    } else {
        Severity::Low
    }
}

/// Always present: one solar factor selected by the lifespan delta.
fn solar_activity_factor(ctx: &FactorContext) -> Option<RiskFactor> {
    let delta = ctx.solar.lifespan_impact;
    let impact = clamp_impact(delta * 10.0);
    let (name, description) = if delta < -1.0 {
        (
            "Solar Activity Risk",
            format!(
                "Elevated solar activity in this window carries an estimated lifespan impact of {:.1} years.",
                delta
            ),
        )
    } else if delta > 0.5 {
        (
            "Solar Minimum Benefit",
            format!(
                "Quiet solar conditions are associated with a small longevity benefit ({:+.1} years).",
                delta
            ),
        )
    } else {
        (
            "Solar Activity Neutral",
            "Solar activity in this window carries no strong expected health signal.".to_string(),
        )
    };
    Some(RiskFactor {
        category: FactorCategory::Solar,
        name: name.to_string(),
        impact,
        severity: severity_with_high(impact),
        description,
    })
}

/// Present only when UV availability departs clearly from the index midpoint.
fn uv_availability_factor(ctx: &FactorContext) -> Option<RiskFactor> {
    let impact = clamp_impact((ctx.solar.uv_radiation_level - 6.0) * 5.0);
    if impact.abs() <= 2 {
        return None;
    }
    let (name, description) = if impact > 0 {
        (
            "High UV Availability",
            "Above-average UV supports infant vitamin D synthesis; limit direct sun exposure.",
        )
    } else {
        (
            "Low UV Availability",
            "Below-average UV limits vitamin D synthesis in the months after birth.",
        )
    };
    Some(RiskFactor {
        category: FactorCategory::Solar,
        name: name.to_string(),
        impact,
        severity: severity_default(impact),
        description: description.to_string(),
    })
}

/// Always present: vitamin-D direction from the synthesis score.
fn vitamin_d_factor(ctx: &FactorContext) -> Option<RiskFactor> {
    let score = ctx.seasonal.vitamin_d_score;
    let impact = clamp_impact((score - 60.0) * 0.4);
    let (name, description) = if score - 60.0 >= 0.0 {
        (
            "Vitamin D Advantage",
            format!(
                "Vitamin D synthesis potential of {:.0}/100 over the first six months of life.",
                score
            ),
        )
    } else {
        (
            "Vitamin D Deficit Risk",
            format!(
                "Low vitamin D synthesis potential ({:.0}/100); supplementation is advisable.",
                score
            ),
        )
    };
    let severity = if impact <= -15 {
        Severity::High
    } else if impact.abs() > 8 {
        Severity::Medium
    } else {
        Severity::Low
    };
    Some(RiskFactor {
        category: FactorCategory::Seasonal,
        name: name.to_string(),
        impact,
        severity,
        description,
    })
}

/// Present only when the birth month departs from the infection midline.
fn infection_factor(ctx: &FactorContext) -> Option<RiskFactor> {
    let impact = clamp_impact((50.0 - ctx.seasonal.infectious_risk) * 0.3);
    if impact.abs() <= 3 {
        return None;
    }
    let (name, description) = if impact > 0 {
        (
            "Low Infection Season",
            "Birth falls outside the peak season for common infections.",
        )
    } else {
        (
            "Infection Season Risk",
            "Birth falls in or near the peak season for respiratory and other infections.",
        )
    };
    Some(RiskFactor {
        category: FactorCategory::Seasonal,
        name: name.to_string(),
        impact,
        severity: severity_default(impact),
        description: description.to_string(),
    })
}

/// Present only for a clear relative-age advantage.
fn school_age_factor(ctx: &FactorContext) -> Option<RiskFactor> {
    let advantage = ctx.seasonal.relative_age_advantage;
    if advantage <= 60.0 {
        return None;
    }
    let impact = clamp_impact((advantage - 50.0) * 0.3);
    Some(RiskFactor {
        category: FactorCategory::Seasonal,
        name: "School Entry Age Advantage".to_string(),
        impact,
        severity: severity_default(impact),
        description: "Birth shortly after the school-year cutoff makes the child one of the oldest in the cohort.".to_string(),
    })
}

/// Always present: latitude relative to the temperate optimum.
fn geographic_factor(ctx: &FactorContext) -> Option<RiskFactor> {
    let abs_lat = ctx.location.latitude.abs();
    let impact = clamp_impact((35.0 - abs_lat) * 0.6);
    let (name, description) = if impact < 0 {
        (
            "Latitude Challenge",
            format!(
                "Latitude {:.0} degrees brings strong seasonal swings in daylight and UV.",
                abs_lat
            ),
        )
    } else {
        (
            "Favorable Latitude",
            format!(
                "Latitude {:.0} degrees offers balanced daylight and UV exposure year-round.",
                abs_lat
            ),
        )
    };
    Some(RiskFactor {
        category: FactorCategory::Geographic,
        name: name.to_string(),
        impact,
        severity: severity_with_high(impact),
        description,
    })
}

/// Always present: exactly one environmental factor chosen by calendar season.
fn environmental_factor(ctx: &FactorContext) -> Option<RiskFactor> {
    let (name, impact, description) = match Season::from_month(ctx.seasonal.birth_month) {
        Season::Spring => (
            "Spring Allergy Season",
            -12,
            "Pollen load peaks during the first weeks of life.",
        ),
        Season::Summer => (
            "Summer Birth Benefit",
            8,
            "Warm-season birth supports outdoor time and daylight exposure.",
        ),
        Season::Fall => (
            "Fall Birth Advantage",
            5,
            "Mild conditions and immunization timing ahead of winter.",
        ),
        Season::Winter => (
            "Winter Birth Challenges",
            -18,
            "Cold-season birth raises early respiratory and infection exposure.",
        ),
    };
    Some(RiskFactor {
        category: FactorCategory::Environmental,
        name: name.to_string(),
        impact,
        severity: severity_default(impact),
        description: description.to_string(),
    })
}
