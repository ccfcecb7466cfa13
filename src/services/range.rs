//! Range aggregation over candidate birth months.
//!
//! Evaluates the engine once per month offset in `[-range, +range]` and
//! summarizes: top-quartile windows, best/worst calendar month, and a coarse
//! year-over-year trend. O(range) solar/seasonal evaluations per call.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::api::{LocationData, TrendDirection};
use crate::services::timing::{OptimalTimingResult, TimingEngine};

/// Score-band width inside which the year-over-year trend counts as stable.
const TREND_BAND: f64 = 5.0;

/// Aggregate over a symmetric range of candidate months.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingAnalysis {
    /// Top 25% of evaluated months by score (ceiling), best first
    pub optimal_windows: Vec<OptimalTimingResult>,
    /// The evaluation at the center date itself
    pub current_timing: OptimalTimingResult,
    /// Calendar month (1-12) of the best-scoring evaluation
    pub best_overall_month: u32,
    /// Calendar month (1-12) of the worst-scoring evaluation
    pub worst_overall_month: u32,
    pub yearly_trend: TrendDirection,
}

/// Shift a date by a signed number of months, clamping the day as needed.
fn shift_months(date: NaiveDate, offset: i32) -> NaiveDate {
    if offset >= 0 {
        date.checked_add_months(Months::new(offset as u32))
            .unwrap_or(date)
    } else {
        date.checked_sub_months(Months::new(offset.unsigned_abs()))
            .unwrap_or(date)
    }
}

impl TimingEngine {
    /// Evaluate `2 * range_months + 1` candidate months around a center date.
    ///
    /// Each month is scored exactly once and the same result objects flow
    /// into the windows and the current-timing slot, so the stochastic solar
    /// sample is held rather than recomputed.
    pub fn analyze_timing_range(
        &self,
        location: &LocationData,
        center_date: NaiveDate,
        range_months: u32,
    ) -> TimingAnalysis {
        let range = range_months as i32;
        let evaluations: Vec<OptimalTimingResult> = (-range..=range)
            .map(|offset| {
                self.calculate_optimal_timing(location, shift_months(center_date, offset))
            })
            .collect();

        let current_timing = evaluations[range_months as usize].clone();

        let mut ranked: Vec<OptimalTimingResult> = evaluations.clone();
        ranked.sort_by(|a, b| b.overall_score.cmp(&a.overall_score));

        let window_count = ((ranked.len() as f64) * 0.25).ceil() as usize;
        let best_overall_month = ranked[0].birth_date.month();
        let worst_overall_month = ranked[ranked.len() - 1].birth_date.month();
        let optimal_windows = ranked.into_iter().take(window_count).collect();

        let yearly_trend = yearly_trend(&evaluations, center_date.year());

        TimingAnalysis {
            optimal_windows,
            current_timing,
            best_overall_month,
            worst_overall_month,
            yearly_trend,
        }
    }

    /// Range analysis using the configured default range.
    pub fn analyze_default_range(
        &self,
        location: &LocationData,
        center_date: NaiveDate,
    ) -> TimingAnalysis {
        self.analyze_timing_range(location, center_date, self.default_range_months())
    }
}

/// Compare mean scores of the center year against the following year.
fn yearly_trend(evaluations: &[OptimalTimingResult], center_year: i32) -> TrendDirection {
    let mean_for = |year: i32| -> Option<f64> {
        let scores: Vec<f64> = evaluations
            .iter()
            .filter(|e| e.birth_date.year() == year)
            .map(|e| e.overall_score as f64)
            .collect();
        if scores.is_empty() {
            None
        } else {
            Some(scores.iter().sum::<f64>() / scores.len() as f64)
        }
    };

    match (mean_for(center_year), mean_for(center_year + 1)) {
        (Some(current), Some(next)) => {
            let diff = next - current;
            if diff >= TREND_BAND {
                TrendDirection::Improving
            } else if diff <= -TREND_BAND {
                TrendDirection::Declining
            } else {
                TrendDirection::Stable
            }
        }
        _ => TrendDirection::Stable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_months_forward_and_back() {
        let d = NaiveDate::from_ymd_opt(2024, 7, 15).unwrap();
        assert_eq!(
            shift_months(d, 3),
            NaiveDate::from_ymd_opt(2024, 10, 15).unwrap()
        );
        assert_eq!(
            shift_months(d, -8),
            NaiveDate::from_ymd_opt(2023, 11, 15).unwrap()
        );
    }

    #[test]
    fn test_shift_months_clamps_day() {
        let d = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        assert_eq!(
            shift_months(d, 1),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
    }
}
