//! Runtime configuration.
//!
//! Loaded from a TOML file (path via `OBT_CONFIG`, default `obt.toml`);
//! every key is optional and falls back to its default, so a partial file
//! overrides only what it names. `HOST`/`PORT` environment variables win
//! over the file for container deployments.

use std::path::Path;

use serde::Deserialize;

/// Top-level application configuration.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub engine: EngineConfig,
}

/// HTTP server bind settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// Engine cache and sweep policy.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Maximum memoized solar samples
    pub solar_cache_capacity: usize,
    /// Maximum cached geocoding results
    pub geocode_cache_capacity: usize,
    /// Months swept either side of the center date when no range is given
    pub default_range_months: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            solar_cache_capacity: 512,
            geocode_cache_capacity: 256,
            default_range_months: 6,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file, falling back to defaults when
    /// the file does not exist.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            log::info!("no config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        let config = toml::from_str(&raw)?;
        Ok(config)
    }

    /// Load from the `OBT_CONFIG` environment variable or the default path.
    pub fn load_from_env() -> anyhow::Result<Self> {
        let path = std::env::var("OBT_CONFIG").unwrap_or_else(|_| "obt.toml".to_string());
        Self::load(Path::new(&path))
    }
}
