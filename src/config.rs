//! # Configuration Management
//!
//! This module loads chart-shaping parameters from forecast-config.toml.
//! Every knob has a default matching the production chart, so the pipeline
//! works without any config file present.

use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Shaping configuration loaded from forecast-config.toml
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// Chart domain and correlation tuning
    pub chart: ChartConfig,
    /// Wind bucket reduction
    pub buckets: BucketConfig,
}

/// Chart domain and correlation tuning
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ChartConfig {
    /// Padding in feet added below/above the tide envelope for the Y-domain
    pub domain_padding_ft: f32,
    /// Timestamp slack in seconds when matching chart pixel points to
    /// feeding-period windows
    pub pixel_tolerance_secs: i64,
}

/// Wind bucket reduction
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BucketConfig {
    /// Number of buckets the 24-hour wind series is reduced to.
    /// Only 4 carries the fixed "12-6"/"6-noon"/"noon-6"/"6-12" labels.
    pub count: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            chart: ChartConfig {
                domain_padding_ft: crate::tide_bounds::DOMAIN_PADDING_FT,
                pixel_tolerance_secs: crate::solunar::PIXEL_MATCH_TOLERANCE_SECS,
            },
            buckets: BucketConfig { count: 4 },
        }
    }
}

impl Config {
    /// Load configuration from forecast-config.toml in the working
    /// directory. Falls back to defaults if the file is missing or invalid.
    pub fn load() -> Self {
        Self::load_from_path("forecast-config.toml")
    }

    /// Load configuration from the given path, falling back to defaults if
    /// the file is missing or invalid.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Self {
        match fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str::<Config>(&contents) {
                Ok(config) => {
                    info!("loaded shaping config from {}", path.as_ref().display());
                    config
                }
                Err(e) => {
                    warn!("invalid config file format: {e}; using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                info!("no config file found, using defaults");
                Self::default()
            }
        }
    }

    /// Save the configuration to the given path.
    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> Result<(), std::io::Error> {
        let contents =
            toml::to_string_pretty(self).map_err(|e| std::io::Error::other(e.to_string()))?;
        fs::write(path, contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_production_chart_constants() {
        let config = Config::default();
        assert_eq!(config.chart.domain_padding_ft, 0.4);
        assert_eq!(config.chart.pixel_tolerance_secs, 60);
        assert_eq!(config.buckets.count, 4);
    }

    #[test]
    fn toml_roundtrip_preserves_values() {
        let config = Config {
            chart: ChartConfig {
                domain_padding_ft: 0.75,
                pixel_tolerance_secs: 30,
            },
            buckets: BucketConfig { count: 6 },
        };
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = Config::load_from_path("/nonexistent/forecast-config.toml");
        assert_eq!(config, Config::default());
    }
}
