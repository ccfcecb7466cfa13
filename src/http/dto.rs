//! Request and response DTOs specific to the HTTP layer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::api::{InvalidInputError, LocationData};

/// Location fields as supplied by a client. Validated into [`LocationData`]
/// at the handler boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationInput {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
}

impl LocationInput {
    /// Validate into the engine's location type; the single fail-fast point
    /// for malformed coordinates.
    pub fn into_location(self) -> Result<LocationData, InvalidInputError> {
        let mut location = LocationData::new(self.latitude, self.longitude)?;
        if let Some(city) = self.city {
            location = location.with_city(city);
        }
        if let Some(country) = self.country {
            location = location.with_country(country);
        }
        if let Some(timezone) = self.timezone {
            location = location.with_timezone(timezone);
        }
        Ok(location)
    }
}

/// Body for POST /v1/timing/analyze and /v1/timing/report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub location: LocationInput,
    pub date: NaiveDate,
}

/// Query for GET /v1/timing/range.
#[derive(Debug, Clone, Deserialize)]
pub struct RangeQuery {
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    pub date: NaiveDate,
    #[serde(default)]
    pub range_months: Option<u32>,
}

/// Query for GET /v1/solar/activity.
#[derive(Debug, Clone, Deserialize)]
pub struct SolarQuery {
    pub date: NaiveDate,
}

/// Query for GET /v1/seasonal/risk.
#[derive(Debug, Clone, Deserialize)]
pub struct SeasonalQuery {
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub country: Option<String>,
    pub date: NaiveDate,
}

/// Query for GET /v1/geocode.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeQuery {
    pub q: String,
}

/// Response for GET /health.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_input_validation() {
        let input = LocationInput {
            latitude: 40.7,
            longitude: -74.0,
            city: Some("New York".to_string()),
            country: Some("United States".to_string()),
            timezone: None,
        };
        let location = input.into_location().unwrap();
        assert_eq!(location.city.as_deref(), Some("New York"));

        let bad = LocationInput {
            latitude: 120.0,
            longitude: 0.0,
            city: None,
            country: None,
            timezone: None,
        };
        assert!(bad.into_location().is_err());
    }

    #[test]
    fn test_analyze_request_deserializes() {
        let request: AnalyzeRequest = serde_json::from_str(
            r#"{"location": {"latitude": 40.7, "longitude": -74.0}, "date": "2024-07-15"}"#,
        )
        .unwrap();
        assert_eq!(request.date, NaiveDate::from_ymd_opt(2024, 7, 15).unwrap());
        assert!(request.location.city.is_none());
    }
}
