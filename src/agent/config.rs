// ABOUTME: AgentLoopConfig - iteration bound, stop policy, and temperature.
// ABOUTME: Builder methods plus TOML loading with validation.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Configuration for an [`AgentLoop`](super::AgentLoop).
///
/// `temperature` is not used by the loop itself; it is carried for the
/// oracle adapter, which can read it through `AgentLoop::config`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentLoopConfig {
    /// Upper bound on think-act-observe cycles per run.
    pub max_iterations: usize,

    /// Finish as soon as a thought's reasoning reads as complete.
    pub stop_on_finish: bool,

    pub temperature: f64,
}

impl Default for AgentLoopConfig {
    fn default() -> Self {
        Self {
            max_iterations: 10,
            stop_on_finish: true,
            temperature: 0.7,
        }
    }
}

impl AgentLoopConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum iterations.
    pub fn max_iterations(mut self, max: usize) -> Self {
        self.max_iterations = max;
        self
    }

    /// Enable or disable the completion-marker stop check.
    pub fn stop_on_finish(mut self, enabled: bool) -> Self {
        self.stop_on_finish = enabled;
        self
    }

    /// Set temperature.
    pub fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_iterations == 0 {
            return Err(ConfigError::InvalidMaxIterations);
        }
        if !self.temperature.is_finite() || self.temperature < 0.0 {
            return Err(ConfigError::InvalidTemperature(self.temperature));
        }
        Ok(())
    }

    /// Parse and validate a TOML document. Missing keys take defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AgentLoopConfig::default();
        assert_eq!(config.max_iterations, 10);
        assert!(config.stop_on_finish);
        assert_eq!(config.temperature, 0.7);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = AgentLoopConfig::new()
            .max_iterations(3)
            .stop_on_finish(false)
            .temperature(0.0);

        assert_eq!(config.max_iterations, 3);
        assert!(!config.stop_on_finish);
        assert_eq!(config.temperature, 0.0);
    }

    #[test]
    fn test_rejects_zero_iterations() {
        let err = AgentLoopConfig::new().max_iterations(0).validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidMaxIterations));
    }

    #[test]
    fn test_rejects_bad_temperature() {
        for t in [-0.1, f64::NAN, f64::INFINITY] {
            let err = AgentLoopConfig::new().temperature(t).validate().unwrap_err();
            assert!(matches!(err, ConfigError::InvalidTemperature(_)));
        }
    }

    #[test]
    fn test_from_toml_partial() {
        let config = AgentLoopConfig::from_toml_str("max_iterations = 4\n").unwrap();
        assert_eq!(config.max_iterations, 4);
        assert!(config.stop_on_finish);
        assert_eq!(config.temperature, 0.7);
    }

    #[test]
    fn test_from_toml_full() {
        let config = AgentLoopConfig::from_toml_str(
            "max_iterations = 2\nstop_on_finish = false\ntemperature = 0.2\n",
        )
        .unwrap();
        let expected = AgentLoopConfig::new()
            .max_iterations(2)
            .stop_on_finish(false)
            .temperature(0.2);
        assert_eq!(config, expected);
    }

    #[test]
    fn test_from_toml_invalid() {
        assert!(matches!(
            AgentLoopConfig::from_toml_str("max_iterations = \"many\""),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            AgentLoopConfig::from_toml_str("max_iterations = 0"),
            Err(ConfigError::InvalidMaxIterations)
        ));
    }

    #[test]
    fn test_config_serialization() {
        let toml_str = toml::to_string(&AgentLoopConfig::default()).unwrap();
        assert!(toml_str.contains("max_iterations"));
        assert!(toml_str.contains("stop_on_finish"));
    }
}
