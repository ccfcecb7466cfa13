//! Recommendation generation.
//!
//! Rules emit structured `{priority, text}` pairs; ordering comes from the
//! priority field, not from sniffing markers back out of rendered strings.
//! Critical texts still carry the literal warning prefix for display.

use serde::{Deserialize, Serialize};

use crate::api::LocationData;
use crate::seasonal::{seasonal_advisories, SeasonalRiskData};
use crate::solar::SolarActivityData;

/// Display prefix for critical advisories.
pub const CRITICAL_PREFIX: &str = "⚠️ CRITICAL: ";

/// Ordering class of a recommendation. Lower sorts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationPriority {
    /// Urgent advisories, rendered with the warning prefix
    Critical,
    /// Suggestions to move the birth window
    Delay,
    /// Everything else
    Info,
}

/// A prioritized advisory string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub priority: RecommendationPriority,
    pub text: String,
}

impl Recommendation {
    fn critical(text: impl Into<String>) -> Self {
        Self {
            priority: RecommendationPriority::Critical,
            text: format!("{}{}", CRITICAL_PREFIX, text.into()),
        }
    }

    fn delay(text: impl Into<String>) -> Self {
        Self {
            priority: RecommendationPriority::Delay,
            text: text.into(),
        }
    }

    fn info(text: impl Into<String>) -> Self {
        Self {
            priority: RecommendationPriority::Info,
            text: text.into(),
        }
    }
}

/// Inputs for the recommendation rules.
pub(crate) struct RecommendationContext<'a> {
    pub solar: &'a SolarActivityData,
    pub seasonal: &'a SeasonalRiskData,
    pub location: &'a LocationData,
    pub overall_score: u8,
}

/// Evaluate the rule cascade, deduplicate by text, and order by priority
/// (stable within a class).
pub(crate) fn generate_recommendations(ctx: &RecommendationContext) -> Vec<Recommendation> {
    let mut items: Vec<Recommendation> = Vec::new();

    let delta = ctx.solar.lifespan_impact;
    if delta < -2.0 {
        items.push(Recommendation::critical(
            "High solar activity period detected. Consider delaying conception to a calmer solar window.",
        ));
    }
    if delta < -1.0 {
        items.push(Recommendation::delay(
            "Consider delaying birth timing until solar activity declines.",
        ));
    }
    if delta > 0.5 {
        items.push(Recommendation::info(
            "Solar minimum conditions are favorable for birth timing.",
        ));
    }

    let vit_d = ctx.seasonal.vitamin_d_score;
    if vit_d < 30.0 {
        items.push(Recommendation::critical(
            "Very low vitamin D synthesis potential. Infant supplementation will be essential.",
        ));
    }
    if vit_d < 60.0 {
        items.push(Recommendation::info(
            "Plan vitamin D supplementation for the first months of life.",
        ));
    } else if vit_d >= 75.0 {
        items.push(Recommendation::info(
            "Excellent vitamin D synthesis potential in the months after birth.",
        ));
    }

    let infectious = ctx.seasonal.infectious_risk;
    if infectious > 70.0 {
        items.push(Recommendation::delay(
            "Consider delaying birth away from the peak infectious season.",
        ));
    } else if infectious > 55.0 {
        items.push(Recommendation::info(
            "Plan extra infection precautions for the newborn period.",
        ));
    }

    let advantage = ctx.seasonal.relative_age_advantage;
    if advantage > 75.0 {
        items.push(Recommendation::info(
            "Birth timing aligns well with school entry cutoffs; the child will be among the oldest in the cohort.",
        ));
    } else if advantage < 25.0 {
        items.push(Recommendation::info(
            "The child may be among the youngest in the school cohort; plan for enrichment support.",
        ));
    }

    if ctx.location.latitude.abs() > 60.0 {
        items.push(Recommendation::info(
            "Extreme latitude: plan for strong seasonal swings in daylight and supplement vitamin D.",
        ));
    }

    if ctx.solar.mental_health_multiplier > 1.0 {
        items.push(Recommendation::info(
            "Elevated solar activity correlates with mood sensitivity; line up postpartum support.",
        ));
    }

    for advisory in seasonal_advisories(ctx.seasonal.birth_month) {
        items.push(Recommendation::info(*advisory));
    }

    items.push(closing_summary(ctx.overall_score));

    dedup_and_order(items)
}

/// One closing line chosen by score tier.
fn closing_summary(score: u8) -> Recommendation {
    if score >= 80 {
        Recommendation::info("Overall: excellent timing window.")
    } else if score >= 60 {
        Recommendation::info("Overall: good timing with manageable risk factors.")
    } else if score >= 40 {
        Recommendation::info("Overall: moderate timing; review the highlighted risk factors.")
    } else {
        Recommendation::delay(
            "Overall: challenging timing window. Consider delaying to a more favorable period.",
        )
    }
}

fn dedup_and_order(items: Vec<Recommendation>) -> Vec<Recommendation> {
    let mut seen = std::collections::HashSet::new();
    let mut unique: Vec<Recommendation> = items
        .into_iter()
        .filter(|r| seen.insert(r.text.clone()))
        .collect();
    unique.sort_by_key(|r| r.priority);
    unique
}

/// Rendered advisory strings in final display order.
pub(crate) fn render(items: &[Recommendation]) -> Vec<String> {
    items.iter().map(|r| r.text.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{CyclePhase, RiskLevel};
    use chrono::NaiveDate;

    fn solar_with(lifespan: f64, mental: f64) -> SolarActivityData {
        SolarActivityData {
            date: NaiveDate::from_ymd_opt(2024, 7, 15).unwrap(),
            sunspot_number: 80,
            solar_flux_index: 120.0,
            geomagnetic_index: 3,
            cosmic_ray_intensity: 88.0,
            cycle_phase: CyclePhase::Descending,
            solar_risk: RiskLevel::Medium,
            mental_health_multiplier: mental,
            lifespan_impact: lifespan,
            uv_radiation_level: 6.0,
        }
    }

    fn seasonal_with(vit_d: f64, infectious: f64, relative_age: f64) -> SeasonalRiskData {
        SeasonalRiskData {
            birth_month: 7,
            vitamin_d_score: vit_d,
            infectious_risk: infectious,
            relative_age_advantage: relative_age,
            cardiovascular_risk: 20.0,
            mental_health_risk: 15.0,
            auto_immune_risk: 10.0,
            overall_seasonal_score: 70.0,
            risk_level: RiskLevel::Low,
        }
    }

    fn recommendations_for(
        lifespan: f64,
        vit_d: f64,
        infectious: f64,
        score: u8,
    ) -> Vec<Recommendation> {
        let solar = solar_with(lifespan, 1.0);
        let seasonal = seasonal_with(vit_d, infectious, 50.0);
        let location = LocationData::new(40.0, -74.0).unwrap();
        generate_recommendations(&RecommendationContext {
            solar: &solar,
            seasonal: &seasonal,
            location: &location,
            overall_score: score,
        })
    }

    #[test]
    fn test_critical_sorts_first() {
        let recs = recommendations_for(-2.5, 20.0, 80.0, 30);
        assert!(recs.len() >= 3);
        let first_non_critical = recs
            .iter()
            .position(|r| r.priority != RecommendationPriority::Critical)
            .unwrap();
        for (i, rec) in recs.iter().enumerate() {
            if rec.priority == RecommendationPriority::Critical {
                assert!(i < first_non_critical);
                assert!(rec.text.starts_with(CRITICAL_PREFIX));
            }
        }
    }

    #[test]
    fn test_delay_sorts_before_info() {
        let recs = recommendations_for(-1.5, 70.0, 80.0, 70);
        let delay_pos = recs
            .iter()
            .position(|r| r.priority == RecommendationPriority::Delay)
            .unwrap();
        let info_pos = recs
            .iter()
            .position(|r| r.priority == RecommendationPriority::Info)
            .unwrap();
        assert!(delay_pos < info_pos);
    }

    #[test]
    fn test_no_duplicate_texts() {
        let recs = recommendations_for(-2.5, 10.0, 90.0, 20);
        let mut texts: Vec<&str> = recs.iter().map(|r| r.text.as_str()).collect();
        let before = texts.len();
        texts.sort();
        texts.dedup();
        assert_eq!(before, texts.len());
    }

    #[test]
    fn test_closing_summary_tiers() {
        assert!(closing_summary(85).text.contains("excellent"));
        assert!(closing_summary(65).text.contains("good"));
        assert!(closing_summary(45).text.contains("moderate"));
        let low = closing_summary(20);
        assert_eq!(low.priority, RecommendationPriority::Delay);
        assert!(low.text.contains("Consider delaying"));
    }

    #[test]
    fn test_favorable_window_has_no_critical_entries() {
        let recs = recommendations_for(0.8, 80.0, 30.0, 85);
        assert!(recs
            .iter()
            .all(|r| r.priority != RecommendationPriority::Critical));
        assert!(recs
            .iter()
            .any(|r| r.text.contains("Solar minimum conditions are favorable")));
    }

    #[test]
    fn test_seasonal_advisory_included() {
        let recs = recommendations_for(0.0, 60.0, 50.0, 70);
        assert!(recs.iter().any(|r| r.text.contains("Summer birth")));
    }

    #[test]
    fn test_mental_health_rule() {
        let solar = solar_with(0.0, 1.3);
        let seasonal = seasonal_with(60.0, 50.0, 50.0);
        let location = LocationData::new(40.0, -74.0).unwrap();
        let recs = generate_recommendations(&RecommendationContext {
            solar: &solar,
            seasonal: &seasonal,
            location: &location,
            overall_score: 70,
        });
        assert!(recs.iter().any(|r| r.text.contains("mood sensitivity")));
    }

    #[test]
    fn test_extreme_latitude_rule() {
        let solar = solar_with(0.0, 1.0);
        let seasonal = seasonal_with(60.0, 50.0, 50.0);
        let location = LocationData::new(-65.0, 0.0).unwrap();
        let recs = generate_recommendations(&RecommendationContext {
            solar: &solar,
            seasonal: &seasonal,
            location: &location,
            overall_score: 70,
        });
        assert!(recs.iter().any(|r| r.text.contains("Extreme latitude")));
    }

    #[test]
    fn test_render_preserves_order() {
        let recs = recommendations_for(-2.5, 20.0, 80.0, 30);
        let rendered = render(&recs);
        assert_eq!(rendered.len(), recs.len());
        assert_eq!(rendered[0], recs[0].text);
    }
}
