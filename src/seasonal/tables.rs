//! Seasonal disease-risk reference table.
//!
//! Month-of-birth multipliers relative to the annual mean, Northern
//! Hemisphere reference. Values encode literature-derived seasonal risk
//! ratios: winter births carry elevated cardiovascular, respiratory and
//! infectious exposure; spring births skew autoimmune.

use serde::{Deserialize, Serialize};

/// Raw seasonal disease-risk multipliers for one birth month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiseaseRiskProfile {
    pub cardiovascular: f64,
    pub mental_health: f64,
    pub autoimmune: f64,
    pub respiratory: f64,
    pub infectious: f64,
}

/// Northern-Hemisphere reference table, months 1-12.
pub const NORTHERN_MONTHLY_MULTIPLIERS: [DiseaseRiskProfile; 12] = [
    // January
    DiseaseRiskProfile {
        cardiovascular: 1.15,
        mental_health: 1.12,
        autoimmune: 1.02,
        respiratory: 1.25,
        infectious: 1.30,
    },
    // February
    DiseaseRiskProfile {
        cardiovascular: 1.12,
        mental_health: 1.10,
        autoimmune: 1.03,
        respiratory: 1.22,
        infectious: 1.28,
    },
    // March
    DiseaseRiskProfile {
        cardiovascular: 1.05,
        mental_health: 1.05,
        autoimmune: 1.08,
        respiratory: 1.12,
        infectious: 1.15,
    },
    // April
    DiseaseRiskProfile {
        cardiovascular: 0.98,
        mental_health: 1.00,
        autoimmune: 1.10,
        respiratory: 1.02,
        infectious: 1.02,
    },
    // May
    DiseaseRiskProfile {
        cardiovascular: 0.92,
        mental_health: 0.95,
        autoimmune: 1.08,
        respiratory: 0.92,
        infectious: 0.90,
    },
    // June
    DiseaseRiskProfile {
        cardiovascular: 0.88,
        mental_health: 0.90,
        autoimmune: 1.04,
        respiratory: 0.85,
        infectious: 0.82,
    },
    // July
    DiseaseRiskProfile {
        cardiovascular: 0.85,
        mental_health: 0.88,
        autoimmune: 1.00,
        respiratory: 0.82,
        infectious: 0.80,
    },
    // August
    DiseaseRiskProfile {
        cardiovascular: 0.87,
        mental_health: 0.90,
        autoimmune: 0.98,
        respiratory: 0.84,
        infectious: 0.82,
    },
    // September
    DiseaseRiskProfile {
        cardiovascular: 0.92,
        mental_health: 0.94,
        autoimmune: 1.00,
        respiratory: 0.92,
        infectious: 0.95,
    },
    // October
    DiseaseRiskProfile {
        cardiovascular: 1.00,
        mental_health: 1.00,
        autoimmune: 1.02,
        respiratory: 1.05,
        infectious: 1.08,
    },
    // November
    DiseaseRiskProfile {
        cardiovascular: 1.08,
        mental_health: 1.06,
        autoimmune: 1.02,
        respiratory: 1.15,
        infectious: 1.18,
    },
    // December
    DiseaseRiskProfile {
        cardiovascular: 1.14,
        mental_health: 1.10,
        autoimmune: 1.01,
        respiratory: 1.22,
        infectious: 1.26,
    },
];

/// Table month (1-12) to read for a calendar month at a latitude.
///
/// Southern-Hemisphere locations read the Northern table with a 6-month
/// offset to mirror the inverted seasons.
pub fn table_month(month: u32, latitude: f64) -> u32 {
    if crate::models::geo::is_northern_hemisphere(latitude) {
        month
    } else {
        ((month + 5) % 12) + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_twelve_months() {
        assert_eq!(NORTHERN_MONTHLY_MULTIPLIERS.len(), 12);
    }

    #[test]
    fn test_multipliers_are_near_unity() {
        for profile in NORTHERN_MONTHLY_MULTIPLIERS {
            for m in [
                profile.cardiovascular,
                profile.mental_health,
                profile.autoimmune,
                profile.respiratory,
                profile.infectious,
            ] {
                assert!((0.5..=1.5).contains(&m));
            }
        }
    }

    #[test]
    fn test_table_month_northern_is_identity() {
        for month in 1..=12 {
            assert_eq!(table_month(month, 40.0), month);
        }
    }

    #[test]
    fn test_table_month_southern_offset() {
        assert_eq!(table_month(1, -40.0), 7);
        assert_eq!(table_month(6, -40.0), 12);
        assert_eq!(table_month(7, -40.0), 1);
        assert_eq!(table_month(12, -40.0), 6);
    }

    #[test]
    fn test_southern_offset_is_involution() {
        // Applying the offset twice returns the original month.
        for month in 1..=12 {
            let once = table_month(month, -40.0);
            let twice = table_month(once, -40.0);
            assert_eq!(twice, month);
        }
    }
}
