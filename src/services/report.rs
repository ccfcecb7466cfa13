//! Report export.
//!
//! Bundles a timing analysis with alternative windows, a summary paragraph
//! and the citation list into a stable JSON shape for download/export.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::api::LocationData;
use crate::services::timing::{OptimalTimingResult, TimingEngine};

/// Range swept (in months, either side) when collecting alternative windows.
const ALTERNATIVES_RANGE_MONTHS: u32 = 6;

/// Literature underpinning the seasonal and solar models.
pub const SCIENTIFIC_BASIS: [&str; 5] = [
    "Boland MR, Shahn Z, Madigan D, Hripcsak G, Tatonetti NP. Birth month affects lifetime disease risk: a phenome-wide method. J Am Med Inform Assoc. 2015;22(5):1042-53.",
    "Lowell WE, Davis GE. The light of life: evidence that the sun modulates human lifespan. Med Hypotheses. 2008;70(3):501-7.",
    "Holick MF. Vitamin D deficiency. N Engl J Med. 2007;357(3):266-81.",
    "Dowell SF. Seasonal variation in host susceptibility and cycles of certain infectious diseases. Emerg Infect Dis. 2001;7(3):369-74.",
    "Musch J, Grondin S. Unequal competition as an impediment to personal development: a review of the relative age effect in sport. Dev Rev. 2001;21(2):147-67.",
];

/// Stable export shape: summary paragraph, the analysis itself, alternative
/// windows, and the citation list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimalityReport {
    pub summary: String,
    pub analysis: OptimalTimingResult,
    pub alternatives: Vec<OptimalTimingResult>,
    pub scientific_basis: Vec<String>,
}

impl TimingEngine {
    /// Build the export report for a (location, date) pair.
    ///
    /// Alternatives are the optimal windows of a six-month sweep either side
    /// of the target, minus the target month itself.
    pub fn generate_optimality_report(
        &self,
        location: &LocationData,
        target_date: NaiveDate,
    ) -> OptimalityReport {
        let analysis = self.calculate_optimal_timing(location, target_date);
        let range = self.analyze_timing_range(location, target_date, ALTERNATIVES_RANGE_MONTHS);
        let alternatives: Vec<OptimalTimingResult> = range
            .optimal_windows
            .into_iter()
            .filter(|w| w.birth_date != target_date)
            .collect();

        let summary = summarize(location, &analysis, &alternatives);

        OptimalityReport {
            summary,
            analysis,
            alternatives,
            scientific_basis: SCIENTIFIC_BASIS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

fn place_name(location: &LocationData) -> String {
    match (&location.city, &location.country) {
        (Some(city), Some(country)) => format!("{}, {}", city, country),
        (Some(city), None) => city.clone(),
        (None, Some(country)) => country.clone(),
        (None, None) => format!("{:.2}, {:.2}", location.latitude, location.longitude),
    }
}

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        _ => "December",
    }
}

fn summarize(
    location: &LocationData,
    analysis: &OptimalTimingResult,
    alternatives: &[OptimalTimingResult],
) -> String {
    let mut summary = format!(
        "A {} {} birth in {} scores {}/100 for timing optimality ({:?} confidence), with {} contributing factors identified.",
        month_name(analysis.birth_date.month()),
        analysis.birth_date.year(),
        place_name(location),
        analysis.overall_score,
        analysis.confidence_level,
        analysis.risk_factors.len(),
    );
    if let Some(best) = alternatives.first() {
        if best.overall_score > analysis.overall_score {
            summary.push_str(&format!(
                " The strongest nearby window is {} {} at {}/100.",
                month_name(best.birth_date.month()),
                best.birth_date.year(),
                best.overall_score,
            ));
        }
    }
    summary
}
