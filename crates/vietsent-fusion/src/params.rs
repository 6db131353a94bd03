//! Fusion parameters
//!
//! Five tunable scalars, immutable per arbiter instance. The defaults were
//! tuned against the weighted-blend confidence approximation exactly as
//! implemented in [`crate::FusionArbiter`]; changing one usually means
//! re-tuning the others.

use serde::{Deserialize, Serialize};
use tracing::warn;

use vietsent_core::{Error, Result};

/// Tunable thresholds and weights for the fusion arbiter
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FusionParams {
    /// Classifier-confidence upper threshold: at or above this the model
    /// verdict passes through untouched
    #[serde(default = "default_t_high")]
    pub t_high: f32,

    /// Classifier-confidence lower threshold: below this with weak rule
    /// evidence the verdict collapses to neutral
    #[serde(default = "default_t_low")]
    pub t_low: f32,

    /// Rule-score magnitude at which the lexicon engine vetoes the model
    #[serde(default = "default_theta_rule")]
    pub theta_rule: f32,

    /// Model weight in the blend branch
    #[serde(default = "default_w_model")]
    pub w_model: f32,

    /// Rule weight in the blend branch
    #[serde(default = "default_w_rule")]
    pub w_rule: f32,
}

fn default_t_high() -> f32 {
    0.85
}

fn default_t_low() -> f32 {
    0.50
}

fn default_theta_rule() -> f32 {
    2.0
}

fn default_w_model() -> f32 {
    0.15
}

fn default_w_rule() -> f32 {
    0.85
}

impl Default for FusionParams {
    fn default() -> Self {
        Self {
            t_high: default_t_high(),
            t_low: default_t_low(),
            theta_rule: default_theta_rule(),
            w_model: default_w_model(),
            w_rule: default_w_rule(),
        }
    }
}

impl FusionParams {
    /// Load parameters from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load parameters from a file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Validate the parameters; fails fast at construction
    pub fn validate(&self) -> Result<()> {
        let scalars = [
            ("t_high", self.t_high),
            ("t_low", self.t_low),
            ("theta_rule", self.theta_rule),
            ("w_model", self.w_model),
            ("w_rule", self.w_rule),
        ];
        for (name, value) in scalars {
            if !value.is_finite() {
                return Err(Error::config(format!("{name} is not finite")));
            }
        }

        if !(0.0..=1.0).contains(&self.t_low) || !(0.0..=1.0).contains(&self.t_high) {
            return Err(Error::config("confidence thresholds must lie in [0, 1]"));
        }
        if self.t_low > self.t_high {
            return Err(Error::config(format!(
                "t_low ({}) must not exceed t_high ({})",
                self.t_low, self.t_high
            )));
        }
        if self.theta_rule <= 0.0 {
            return Err(Error::config("theta_rule must be positive"));
        }
        if self.w_model < 0.0 || self.w_rule < 0.0 {
            return Err(Error::config("blend weights must be non-negative"));
        }

        let weight_sum = self.w_model + self.w_rule;
        if (weight_sum - 1.0).abs() > 0.05 {
            warn!(weight_sum, "blend weights do not sum to ~1.0");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let params = FusionParams::default();
        params.validate().unwrap();
        assert_eq!(params.t_high, 0.85);
        assert_eq!(params.t_low, 0.50);
        assert_eq!(params.theta_rule, 2.0);
    }

    #[test]
    fn test_yaml_partial_override() {
        let params = FusionParams::from_yaml("theta_rule: 2.5").unwrap();
        assert_eq!(params.theta_rule, 2.5);
        assert_eq!(params.t_high, 0.85);
    }

    #[test]
    fn test_inverted_thresholds_rejected() {
        let params = FusionParams {
            t_low: 0.9,
            t_high: 0.5,
            ..Default::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_non_finite_rejected() {
        let params = FusionParams {
            theta_rule: f32::INFINITY,
            ..Default::default()
        };
        assert!(params.validate().is_err());
    }
}
