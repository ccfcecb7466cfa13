//! Service layer for business logic and orchestration.
//!
//! This module contains the timing engine and the components it composes:
//! risk-factor and recommendation rule tables, range aggregation, report
//! export, and the geocoding boundary.

pub mod geocoding;

pub mod range;

pub mod recommendations;

pub mod report;
pub mod risk_factors;

pub mod timing;


pub use self::geocoding::{CachingProvider, LocationProvider, StaticGazetteer};
pub use self::range::TimingAnalysis;
pub use self::report::OptimalityReport;
pub use self::timing::{OptimalTimingResult, TimingEngine};
