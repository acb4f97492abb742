//! Engine configuration
//!
//! Loaded from JSON with per-field defaults, then optionally overridden by
//! command line flags.

use crate::advisory::DEFAULT_SUGGESTION_MONTHS;
use crate::error::Result;
use crate::projection::{CurveConfig, Horizon, DEFAULT_ANNUAL_RATE, DEFAULT_TERMINAL_YEAR};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Nominal annual return rate for wealth curves (default: 4%)
    #[serde(default = "default_annual_rate")]
    pub annual_rate: f64,

    /// Last projected calendar year when no relative horizon is set (default: 2060)
    #[serde(default = "default_terminal_year")]
    pub terminal_year: i32,

    /// Relative horizon in years; takes precedence over `terminal_year`
    #[serde(default)]
    pub horizon_years: Option<u32>,

    /// Horizon for monthly savings suggestions (default: 24 months)
    #[serde(default = "default_suggestion_months")]
    pub suggestion_months: u32,
}

fn default_annual_rate() -> f64 { DEFAULT_ANNUAL_RATE }
fn default_terminal_year() -> i32 { DEFAULT_TERMINAL_YEAR }
fn default_suggestion_months() -> u32 { DEFAULT_SUGGESTION_MONTHS }

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            annual_rate: default_annual_rate(),
            terminal_year: default_terminal_year(),
            horizon_years: None,
            suggestion_months: default_suggestion_months(),
        }
    }
}

impl EngineConfig {
    /// Load from a JSON file; missing fields take their defaults
    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn horizon(&self) -> Horizon {
        match self.horizon_years {
            Some(years) => Horizon::Years(years),
            None => Horizon::ThroughYear(self.terminal_year),
        }
    }

    pub fn curve_config(&self) -> CurveConfig {
        CurveConfig {
            annual_rate: self.annual_rate,
            horizon: self.horizon(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_gives_defaults() {
        let config = EngineConfig::from_json_str("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.annual_rate, 0.04);
        assert_eq!(config.suggestion_months, 24);
        assert_eq!(config.horizon(), Horizon::ThroughYear(2060));
    }

    #[test]
    fn test_relative_horizon_takes_precedence() {
        let config =
            EngineConfig::from_json_str(r#"{"annual_rate": 0.06, "terminal_year": 2070, "horizon_years": 30}"#)
                .unwrap();
        let curve = config.curve_config();
        assert_eq!(curve.annual_rate, 0.06);
        assert_eq!(curve.horizon, Horizon::Years(30));
    }

    #[test]
    fn test_invalid_json_rejected() {
        assert!(EngineConfig::from_json_str(r#"{"annual_rate": "high"}"#).is_err());
    }
}
