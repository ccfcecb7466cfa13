//! # OBT Rust Backend
//!
//! Birth timing analysis engine.
//!
//! This crate provides the Rust backend for the Optimal Birth Timing (OBT)
//! system, turning a geographic location and a calendar month into a single
//! 0-100 optimality score with derived risk factors and prioritized
//! recommendations. The backend can expose a REST API via Axum for frontend
//! integration.
//!
//! ## Features
//!
//! - **Solar Cycle Model**: synthetic sunspot-cycle sampling over the
//!   tabulated cycles 20-25 with deterministic extrapolation beyond the table
//! - **Seasonal Risk Model**: month-of-birth disease-risk multipliers,
//!   vitamin-D synthesis potential, and relative school-age effects
//! - **Timing Engine**: weighted composite scoring, rule-based risk factors
//!   and recommendations, range aggregation and report export
//! - **Geocoding Boundary**: pluggable async location resolution with a
//!   bounded result cache
//! - **HTTP API**: RESTful endpoints for frontend integration
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Data Transfer Objects (DTOs) for analysis results
//! - [`models`]: Leaf value types and pure geographic helpers
//! - [`solar`]: Solar cycle table, activity sampling, noise and caching
//! - [`seasonal`]: Seasonal disease-risk tables and composite scoring
//! - [`services`]: High-level engine orchestration and the geocoding boundary
//! - [`config`]: TOML-backed runtime configuration
//! - `http`: Axum-based HTTP server and request handlers (feature-gated)

pub mod api;

pub mod config;
pub mod models;

pub mod seasonal;
pub mod solar;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
