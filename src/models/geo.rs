//! Pure geographic helpers.
//!
//! All functions here are total over the documented input domain and hold no
//! state. Latitudes are decimal degrees, months are 1-12.

use std::f64::consts::TAU;

/// Absolute distance from the equator in degrees of latitude.
pub fn distance_from_equator(latitude: f64) -> f64 {
    latitude.abs()
}

/// Whether a latitude lies in the Northern Hemisphere.
///
/// The equator itself counts as Southern, matching the seasonal table mirror.
pub fn is_northern_hemisphere(latitude: f64) -> bool {
    latitude > 0.0
}

/// Ground-level UV intensity estimate for a latitude and calendar month.
///
/// Base intensity decays linearly from 10 at the equator to 0 at the poles.
/// A seasonal cosine multiplier (1 +/- 0.3) is applied with its peak anchored
/// to local-hemisphere summer (June in the north, December in the south).
/// The result is clamped to the UV index range [0, 11].
pub fn uv_intensity_by_latitude(latitude: f64, month: u32) -> f64 {
    let base = 10.0 - (latitude.abs() / 90.0) * 10.0;
    let peak_month = if is_northern_hemisphere(latitude) {
        6.0
    } else {
        12.0
    };
    let phase = TAU * (month as f64 - peak_month) / 12.0;
    let seasonal = 1.0 + 0.3 * phase.cos();
    (base * seasonal).clamp(0.0, 11.0)
}
