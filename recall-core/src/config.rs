//! Configuration for memory-driven agents.
//!
//! Maps directly to `recall.toml`. Every field has a default, so an empty
//! file (or no file at all) yields the standard ACT-R parameter set.

use serde::{Deserialize, Serialize};

use crate::error::{RecallError, Result};

/// Top-level configuration, loadable from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecallConfig {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Declarative memory parameters.
    #[serde(default)]
    pub memory: MemoryParams,
    /// Decision engine timing.
    #[serde(default)]
    pub engine: EngineConfig,
}

impl RecallConfig {
    /// Load configuration from a TOML string and validate it.
    ///
    /// # Errors
    /// Returns `RecallError::Config` if the TOML is invalid, or
    /// `RecallError::InvalidParameter` if a value is out of range.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: Self = toml::from_str(toml_str).map_err(|e| RecallError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Check every numeric parameter against its valid range.
    ///
    /// # Errors
    /// Returns the first offending parameter.
    pub fn validate(&self) -> Result<()> {
        self.memory.validate()?;
        self.engine.validate()
    }
}

// ---------------------------------------------------------------------------
// Sub-configs
// ---------------------------------------------------------------------------

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level or `EnvFilter` directive: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Emit structured JSON log lines instead of human-readable ones.
    #[serde(default)]
    pub json_logs: bool,
    /// Seed for all noise sources. Unset means OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json_logs: false,
            seed: None,
        }
    }
}

/// ACT-R declarative memory parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryParams {
    /// Base-level decay `d`.
    #[serde(default = "default_decay")]
    pub decay: f64,
    /// Activation noise scale `s`. `None` or `0.0` disables noise.
    #[serde(default = "default_activation_noise")]
    pub activation_noise: Option<f64>,
    /// Retrieval threshold `τ`.
    #[serde(default)]
    pub retrieval_threshold: f64,
    /// Latency factor `F`.
    #[serde(default = "default_latency_factor")]
    pub latency_factor: f64,
    /// Latency exponent `f`.
    #[serde(default = "default_one")]
    pub latency_exponent: f64,
    /// When disabled every chunk sits at activation 0.
    #[serde(default = "default_true")]
    pub base_level_learning: bool,
}

impl Default for MemoryParams {
    fn default() -> Self {
        Self {
            decay: default_decay(),
            activation_noise: default_activation_noise(),
            retrieval_threshold: 0.0,
            latency_factor: default_latency_factor(),
            latency_exponent: 1.0,
            base_level_learning: true,
        }
    }
}

impl MemoryParams {
    /// Range-check the memory parameters.
    ///
    /// # Errors
    /// Returns `RecallError::InvalidParameter` naming the first bad value.
    pub fn validate(&self) -> Result<()> {
        if !(self.decay > 0.0 && self.decay <= 1.0) {
            return Err(invalid("memory.decay", self.decay));
        }
        if let Some(s) = self.activation_noise {
            if !(s >= 0.0 && s.is_finite()) {
                return Err(invalid("memory.activation_noise", s));
            }
        }
        if !self.retrieval_threshold.is_finite() {
            return Err(invalid("memory.retrieval_threshold", self.retrieval_threshold));
        }
        non_negative("memory.latency_factor", self.latency_factor)?;
        non_negative("memory.latency_exponent", self.latency_exponent)
    }
}

/// Decision engine timing and opening-move noise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Scale of the noise sample whose sign picks the opening move.
    #[serde(default = "default_one")]
    pub opening_noise: f64,
    /// Simulated seconds charged per decision, before retrieval latency.
    #[serde(default = "default_one")]
    pub decision_time: f64,
    /// Simulated seconds charged for processing the opponent's response.
    #[serde(default = "default_one")]
    pub response_time: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            opening_noise: 1.0,
            decision_time: 1.0,
            response_time: 1.0,
        }
    }
}

impl EngineConfig {
    /// Range-check the engine parameters.
    ///
    /// # Errors
    /// Returns `RecallError::InvalidParameter` naming the first bad value.
    pub fn validate(&self) -> Result<()> {
        if !(self.opening_noise > 0.0 && self.opening_noise.is_finite()) {
            return Err(invalid("engine.opening_noise", self.opening_noise));
        }
        non_negative("engine.decision_time", self.decision_time)?;
        non_negative("engine.response_time", self.response_time)
    }
}

fn invalid(name: &'static str, value: f64) -> RecallError {
    RecallError::InvalidParameter { name, value }
}

fn non_negative(name: &'static str, value: f64) -> Result<()> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(invalid(name, value))
    }
}

// ---------------------------------------------------------------------------
// Serde default helpers
// ---------------------------------------------------------------------------

fn default_log_level() -> String {
    "info".to_string()
}
fn default_decay() -> f64 {
    0.5
}
#[allow(clippy::unnecessary_wraps)]
fn default_activation_noise() -> Option<f64> {
    Some(0.25)
}
fn default_latency_factor() -> f64 {
    0.2
}
fn default_one() -> f64 {
    1.0
}
fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config = RecallConfig::from_toml("").expect("parse");
        assert_eq!(config.general.log_level, "info");
        assert!((config.memory.decay - 0.5).abs() < f64::EPSILON);
        assert_eq!(config.memory.activation_noise, Some(0.25));
        assert!((config.memory.latency_factor - 0.2).abs() < f64::EPSILON);
        assert!(config.memory.base_level_learning);
        assert!((config.engine.decision_time - 1.0).abs() < f64::EPSILON);
        assert!(config.general.seed.is_none());
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = RecallConfig::from_toml(
            r#"
            [general]
            seed = 42

            [memory]
            retrieval_threshold = -1.5
            "#,
        )
        .expect("parse");
        assert_eq!(config.general.seed, Some(42));
        assert!((config.memory.retrieval_threshold + 1.5).abs() < f64::EPSILON);
        assert!((config.memory.decay - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn invalid_toml_is_config_error() {
        let err = RecallConfig::from_toml("[memory\ndecay = ").expect_err("should fail");
        assert!(matches!(err, RecallError::Config(_)));
    }

    #[test]
    fn out_of_range_decay_is_rejected() {
        let err = RecallConfig::from_toml("[memory]\ndecay = 1.5").expect_err("should fail");
        assert!(matches!(
            err,
            RecallError::InvalidParameter { name: "memory.decay", .. }
        ));
    }

    #[test]
    fn negative_latency_factor_is_rejected() {
        let mut config = RecallConfig::default();
        config.memory.latency_factor = -0.1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn negative_timing_is_rejected() {
        let mut config = RecallConfig::default();
        config.engine.response_time = -1.0;
        assert!(matches!(
            config.validate(),
            Err(RecallError::InvalidParameter { name: "engine.response_time", .. })
        ));
    }
}
