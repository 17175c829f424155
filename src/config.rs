//! Simulation Configuration
//!
//! Defines the simulation parameters, their defaults (the reference run of
//! the verification script), validation, and JSON file IO.
use crate::constants::{
    DEFAULT_COLLAPSE_BASELINE, DEFAULT_COLLAPSE_DURING_PULSE, DEFAULT_PULSE_PROB, DEFAULT_SEED, DEFAULT_TRIALS,
};
use crate::errors::ChoreographyError;
use crate::utils::{validate_positive_int, validate_probability};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_trials() -> usize {
    DEFAULT_TRIALS
}
fn default_pulse_prob() -> f64 {
    DEFAULT_PULSE_PROB
}
fn default_collapse_during_pulse() -> f64 {
    DEFAULT_COLLAPSE_DURING_PULSE
}
fn default_collapse_baseline() -> f64 {
    DEFAULT_COLLAPSE_BASELINE
}
fn default_seed() -> u64 {
    DEFAULT_SEED
}
fn default_log_trials() -> usize {
    0
}

/// Configuration for a `CollapseSimulation`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of synthetic trials to generate.
    #[serde(default = "default_trials")]
    pub trials: usize,
    /// Probability that a trial carries an active semantic pulse.
    #[serde(default = "default_pulse_prob")]
    pub pulse_prob: f64,
    /// Collapse probability while a pulse is active.
    #[serde(default = "default_collapse_during_pulse")]
    pub collapse_during_pulse: f64,
    /// Baseline collapse probability without a pulse.
    #[serde(default = "default_collapse_baseline")]
    pub collapse_baseline: f64,
    /// Seed for random number generation.
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Logging frequency (every N trials, 0 disables progress logging).
    #[serde(default = "default_log_trials")]
    pub log_trials: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            trials: DEFAULT_TRIALS,
            pulse_prob: DEFAULT_PULSE_PROB,
            collapse_during_pulse: DEFAULT_COLLAPSE_DURING_PULSE,
            collapse_baseline: DEFAULT_COLLAPSE_BASELINE,
            seed: DEFAULT_SEED,
            log_trials: 0,
        }
    }
}

impl SimulationConfig {
    /// Check the parameters for validity.
    pub fn validate(&self) -> Result<(), ChoreographyError> {
        validate_positive_int(self.trials, "trials")?;
        validate_probability(self.pulse_prob, "pulse_prob")?;
        validate_probability(self.collapse_during_pulse, "collapse_during_pulse")?;
        validate_probability(self.collapse_baseline, "collapse_baseline")?;
        Ok(())
    }

    /// Ratio of the collapse probability during a pulse to the baseline,
    /// the "x-times more likely" figure of the report. Depends only on the
    /// configured probabilities, never on simulated counts.
    pub fn boost_ratio(&self) -> f64 {
        self.collapse_during_pulse / self.collapse_baseline
    }
}

/// IO
pub trait ConfigIO: Serialize + DeserializeOwned + Sized {
    /// Save a configuration as a json object to a file.
    ///
    /// * `path` - Path to save the configuration.
    fn save_config<P: AsRef<Path>>(&self, path: P) -> Result<(), ChoreographyError> {
        fs::write(path, self.json_dump()?).map_err(|e| ChoreographyError::UnableToWrite(e.to_string()))
    }

    /// Dump a configuration as a json object.
    fn json_dump(&self) -> Result<String, ChoreographyError> {
        serde_json::to_string(self).map_err(|e| ChoreographyError::UnableToWrite(e.to_string()))
    }

    /// Load a configuration from a json string.
    ///
    /// * `json_str` - String object, which can be serialized to json.
    fn from_json(json_str: &str) -> Result<Self, ChoreographyError> {
        serde_json::from_str::<Self>(json_str).map_err(|e| ChoreographyError::UnableToRead(e.to_string()))
    }

    /// Load a configuration from a path to a json configuration object.
    ///
    /// * `path` - Path to load the configuration from.
    fn load_config<P: AsRef<Path>>(path: P) -> Result<Self, ChoreographyError> {
        let json_str = fs::read_to_string(path).map_err(|e| ChoreographyError::UnableToRead(e.to_string()))?;
        Self::from_json(&json_str)
    }
}

impl ConfigIO for SimulationConfig {}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_config_default() {
        let config = SimulationConfig::default();
        assert_eq!(config.trials, 10_000);
        assert_eq!(config.pulse_prob, 0.10);
        assert_eq!(config.collapse_during_pulse, 0.15);
        assert_eq!(config.collapse_baseline, 0.05);
        assert_eq!(config.seed, 42);
        assert_eq!(config.log_trials, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_boost_ratio_from_probabilities() {
        // 0.15 / 0.05 is a hair under 3 in binary floating point; the
        // report rounds it back to 3.0 at one decimal.
        let config = SimulationConfig::default();
        assert!((config.boost_ratio() - 3.0).abs() < 1e-12);

        let equal = SimulationConfig {
            collapse_during_pulse: 0.05,
            ..Default::default()
        };
        assert_eq!(equal.boost_ratio(), 1.0);
    }

    #[test]
    fn test_validate_rejects_bad_parameters() {
        let zero_trials = SimulationConfig {
            trials: 0,
            ..Default::default()
        };
        assert!(zero_trials.validate().is_err());

        let bad_prob = SimulationConfig {
            pulse_prob: 1.5,
            ..Default::default()
        };
        assert!(bad_prob.validate().is_err());

        let nan_prob = SimulationConfig {
            collapse_baseline: f64::NAN,
            ..Default::default()
        };
        assert!(nan_prob.validate().is_err());
    }

    #[test]
    fn test_config_io_json() {
        let config = SimulationConfig::default();
        let json = config.json_dump().unwrap();
        let config2 = SimulationConfig::from_json(&json).unwrap();
        assert_eq!(config, config2);
    }

    #[test]
    fn test_config_io_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("simulation.json");
        let config = SimulationConfig::default();
        config.save_config(&file_path).unwrap();
        let config2 = SimulationConfig::load_config(&file_path).unwrap();
        assert_eq!(config, config2);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let config = SimulationConfig::from_json("{}").unwrap();
        assert_eq!(config, SimulationConfig::default());

        let config = SimulationConfig::from_json(r#"{"seed": 7, "trials": 500}"#).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.trials, 500);
        assert_eq!(config.pulse_prob, 0.10);
    }

    #[test]
    fn test_load_missing_file_errors() {
        let err = SimulationConfig::load_config("/nonexistent/simulation.json").unwrap_err();
        assert!(matches!(err, ChoreographyError::UnableToRead(_)));
    }
}
