//! Geocoding boundary.
//!
//! The engine consumes `LocationData`; producing it is an external concern.
//! This module defines the async provider contract, a bounded result cache,
//! and a built-in gazetteer used as the default offline resolver.

use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;
use parking_lot::Mutex;
use thiserror::Error;

use crate::api::LocationData;

/// Degrees of great-circle slack within which a reverse lookup snaps to a
/// known place.
const REVERSE_SNAP_DEGREES: f64 = 3.0;

/// Resolution failure. These are upstream concerns: the engine treats a
/// failed resolution as "cannot be called", never as an internal error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeocodingError {
    #[error("no match for query: {0}")]
    NotFound(String),
    #[error("invalid coordinates: {0}")]
    InvalidCoordinates(String),
    #[error("geocoding backend unavailable: {0}")]
    Unavailable(String),
}

/// Async location resolver contract.
///
/// This is the single asynchronous boundary of the system: one suspension
/// point per analysis request, awaited before the engine runs.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// Resolve a free-text place query.
    async fn resolve(&self, query: &str) -> Result<LocationData, GeocodingError>;

    /// Resolve raw coordinates (browser geolocation) to a location record.
    async fn reverse(&self, latitude: f64, longitude: f64)
        -> Result<LocationData, GeocodingError>;
}

struct GazetteerEntry {
    city: &'static str,
    country: &'static str,
    timezone: &'static str,
    latitude: f64,
    longitude: f64,
}

const GAZETTEER: [GazetteerEntry; 12] = [
    GazetteerEntry {
        city: "New York",
        country: "United States",
        timezone: "America/New_York",
        latitude: 40.7128,
        longitude: -74.0060,
    },
    GazetteerEntry {
        city: "London",
        country: "United Kingdom",
        timezone: "Europe/London",
        latitude: 51.5074,
        longitude: -0.1278,
    },
    GazetteerEntry {
        city: "Paris",
        country: "France",
        timezone: "Europe/Paris",
        latitude: 48.8566,
        longitude: 2.3522,
    },
    GazetteerEntry {
        city: "Berlin",
        country: "Germany",
        timezone: "Europe/Berlin",
        latitude: 52.5200,
        longitude: 13.4050,
    },
    GazetteerEntry {
        city: "Toronto",
        country: "Canada",
        timezone: "America/Toronto",
        latitude: 43.6532,
        longitude: -79.3832,
    },
    GazetteerEntry {
        city: "Sydney",
        country: "Australia",
        timezone: "Australia/Sydney",
        latitude: -33.8688,
        longitude: 151.2093,
    },
    GazetteerEntry {
        city: "Tokyo",
        country: "Japan",
        timezone: "Asia/Tokyo",
        latitude: 35.6762,
        longitude: 139.6503,
    },
    GazetteerEntry {
        city: "Singapore",
        country: "Singapore",
        timezone: "Asia/Singapore",
        latitude: 1.3521,
        longitude: 103.8198,
    },
    GazetteerEntry {
        city: "Sao Paulo",
        country: "Brazil",
        timezone: "America/Sao_Paulo",
        latitude: -23.5505,
        longitude: -46.6333,
    },
    GazetteerEntry {
        city: "Reykjavik",
        country: "Iceland",
        timezone: "Atlantic/Reykjavik",
        latitude: 64.1466,
        longitude: -21.9426,
    },
    GazetteerEntry {
        city: "Nairobi",
        country: "Kenya",
        timezone: "Africa/Nairobi",
        latitude: -1.2921,
        longitude: 36.8219,
    },
    GazetteerEntry {
        city: "Mumbai",
        country: "India",
        timezone: "Asia/Kolkata",
        latitude: 19.0760,
        longitude: 72.8777,
    },
];

impl GazetteerEntry {
    fn to_location(&self) -> LocationData {
        // Coordinates in the fixed table are always in range.
        LocationData::new(self.latitude, self.longitude)
            .expect("gazetteer coordinates are valid")
            .with_city(self.city)
            .with_country(self.country)
            .with_timezone(self.timezone)
    }
}

/// Built-in offline resolver over a fixed city table.
///
/// Matching is case- and whitespace-insensitive on the city name, with or
/// without a trailing country part ("new york" or "New York, United States").
#[derive(Debug, Default)]
pub struct StaticGazetteer;

fn normalize(query: &str) -> String {
    query.trim().to_ascii_lowercase()
}

#[async_trait]
impl LocationProvider for StaticGazetteer {
    async fn resolve(&self, query: &str) -> Result<LocationData, GeocodingError> {
        let normalized = normalize(query);
        let city_part = normalized.split(',').next().unwrap_or("").trim().to_string();
        GAZETTEER
            .iter()
            .find(|e| {
                let city = e.city.to_ascii_lowercase();
                city == normalized || city == city_part
            })
            .map(|e| e.to_location())
            .ok_or_else(|| GeocodingError::NotFound(query.to_string()))
    }

    async fn reverse(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<LocationData, GeocodingError> {
        let base = LocationData::new(latitude, longitude)
            .map_err(|e| GeocodingError::InvalidCoordinates(e.to_string()))?;

        let nearest = GAZETTEER.iter().min_by(|a, b| {
            distance_sq(a, latitude, longitude)
                .partial_cmp(&distance_sq(b, latitude, longitude))
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        match nearest {
            Some(entry)
                if distance_sq(entry, latitude, longitude)
                    <= REVERSE_SNAP_DEGREES * REVERSE_SNAP_DEGREES =>
            {
                Ok(LocationData::new(latitude, longitude)
                    .expect("validated above")
                    .with_city(entry.city)
                    .with_country(entry.country)
                    .with_timezone(entry.timezone))
            }
            _ => Ok(base),
        }
    }
}

fn distance_sq(entry: &GazetteerEntry, latitude: f64, longitude: f64) -> f64 {
    let dlat = entry.latitude - latitude;
    let dlon = entry.longitude - longitude;
    dlat * dlat + dlon * dlon
}

struct CacheInner {
    map: HashMap<String, LocationData>,
    order: VecDeque<String>,
}

/// Caching wrapper over any provider: bounded, FIFO-evicting, keyed by the
/// normalized query (or quantized coordinates for reverse lookups).
pub struct CachingProvider<P> {
    inner: P,
    cache: Mutex<CacheInner>,
    capacity: usize,
}

impl<P: LocationProvider> CachingProvider<P> {
    pub fn new(inner: P, capacity: usize) -> Self {
        Self {
            inner,
            cache: Mutex::new(CacheInner {
                map: HashMap::new(),
                order: VecDeque::new(),
            }),
            capacity,
        }
    }

    fn cached(&self, key: &str) -> Option<LocationData> {
        self.cache.lock().map.get(key).cloned()
    }

    fn store(&self, key: String, value: LocationData) {
        if self.capacity == 0 {
            return;
        }
        let mut cache = self.cache.lock();
        if cache.map.contains_key(&key) {
            cache.map.insert(key, value);
            return;
        }
        while cache.map.len() >= self.capacity {
            match cache.order.pop_front() {
                Some(oldest) => {
                    cache.map.remove(&oldest);
                }
                None => break,
            }
        }
        cache.map.insert(key.clone(), value);
        cache.order.push_back(key);
    }

    pub fn cached_entries(&self) -> usize {
        self.cache.lock().map.len()
    }
}

#[async_trait]
impl<P: LocationProvider> LocationProvider for CachingProvider<P> {
    async fn resolve(&self, query: &str) -> Result<LocationData, GeocodingError> {
        let key = normalize(query);
        if let Some(hit) = self.cached(&key) {
            return Ok(hit);
        }
        let resolved = self.inner.resolve(query).await?;
        self.store(key, resolved.clone());
        Ok(resolved)
    }

    async fn reverse(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<LocationData, GeocodingError> {
        let key = format!("rev:{:.4},{:.4}", latitude, longitude);
        if let Some(hit) = self.cached(&key) {
            return Ok(hit);
        }
        let resolved = self.inner.reverse(latitude, longitude).await?;
        self.store(key, resolved.clone());
        Ok(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_resolve_known_city() {
        let provider = StaticGazetteer;
        let loc = provider.resolve("New York").await.unwrap();
        assert_eq!(loc.city.as_deref(), Some("New York"));
        assert_eq!(loc.country.as_deref(), Some("United States"));
        assert!((loc.latitude - 40.7128).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_resolve_is_case_and_whitespace_insensitive() {
        let provider = StaticGazetteer;
        let a = provider.resolve("  new york  ").await.unwrap();
        let b = provider.resolve("NEW YORK, United States").await.unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn test_resolve_unknown_is_not_found() {
        let provider = StaticGazetteer;
        let err = provider.resolve("Atlantis").await.unwrap_err();
        assert_eq!(err, GeocodingError::NotFound("Atlantis".to_string()));
    }

    #[tokio::test]
    async fn test_reverse_snaps_to_nearby_city() {
        let provider = StaticGazetteer;
        let loc = provider.reverse(40.8, -74.1).await.unwrap();
        assert_eq!(loc.city.as_deref(), Some("New York"));
        // Coordinates are kept as supplied, not replaced by the table entry.
        assert!((loc.latitude - 40.8).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_reverse_far_from_table_keeps_coordinates_only() {
        let provider = StaticGazetteer;
        let loc = provider.reverse(-75.0, 100.0).await.unwrap();
        assert!(loc.city.is_none());
        assert_eq!(loc.latitude, -75.0);
    }

    #[tokio::test]
    async fn test_reverse_invalid_coordinates() {
        let provider = StaticGazetteer;
        let err = provider.reverse(95.0, 0.0).await.unwrap_err();
        assert!(matches!(err, GeocodingError::InvalidCoordinates(_)));
    }

    #[tokio::test]
    async fn test_caching_provider_hits_cache() {
        let provider = CachingProvider::new(StaticGazetteer, 8);
        let first = provider.resolve("Tokyo").await.unwrap();
        let second = provider.resolve("tokyo").await.unwrap();
        assert_eq!(first, second);
        assert_eq!(provider.cached_entries(), 1);
    }

    #[tokio::test]
    async fn test_caching_provider_respects_capacity() {
        let provider = CachingProvider::new(StaticGazetteer, 2);
        provider.resolve("Tokyo").await.unwrap();
        provider.resolve("London").await.unwrap();
        provider.resolve("Paris").await.unwrap();
        assert_eq!(provider.cached_entries(), 2);
    }

    #[tokio::test]
    async fn test_caching_provider_does_not_cache_misses() {
        let provider = CachingProvider::new(StaticGazetteer, 8);
        assert!(provider.resolve("Atlantis").await.is_err());
        assert_eq!(provider.cached_entries(), 0);
    }
}
