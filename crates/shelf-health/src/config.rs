//! Engine configuration
//!
//! Numeric scoring constants for the rule catalog. Every field has a
//! compiled default, so an empty TOML document yields the reference
//! scoring behaviour:
//!
//! ```toml
//! [scoring]
//! initial_score = 85
//! allergen_penalty = 30
//! sugar_baseline = 25
//! fat_penalty = 20
//! sodium_penalty = 15
//! produce_baseline = 95
//! protein_bonus = 10
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{HealthError, Result};

/// Score adjustments applied by the rule catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Score every analysis starts from
    pub initial_score: i32,
    /// Subtracted once per matched allergen
    pub allergen_penalty: i32,
    /// Score forced by the high-sugar family
    pub sugar_baseline: i32,
    pub fat_penalty: i32,
    pub sodium_penalty: i32,
    /// Score forced by the produce family
    pub produce_baseline: i32,
    pub protein_bonus: i32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        ScoringConfig {
            initial_score: 85,
            allergen_penalty: 30,
            sugar_baseline: 25,
            fat_penalty: 20,
            sodium_penalty: 15,
            produce_baseline: 95,
            protein_bonus: 10,
        }
    }
}

/// Top-level engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub scoring: ScoringConfig,
}

impl EngineConfig {
    /// Parse and validate a configuration from TOML text
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        Self::parse(toml_str, "<string>")
    }

    /// Load and validate a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| HealthError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::parse(&text, &path.display().to_string())?;
        info!(path = %path.display(), "engine configuration loaded");
        Ok(config)
    }

    fn parse(text: &str, origin: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(text).map_err(|e| HealthError::ConfigParse {
            path: origin.to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Penalties and bonuses must be non-negative; baselines must be 0..=100
    pub fn validate(&self) -> Result<()> {
        let s = &self.scoring;
        let magnitudes = [
            ("scoring.allergen_penalty", s.allergen_penalty),
            ("scoring.fat_penalty", s.fat_penalty),
            ("scoring.sodium_penalty", s.sodium_penalty),
            ("scoring.protein_bonus", s.protein_bonus),
        ];
        for (field, value) in magnitudes {
            if value < 0 {
                return Err(invalid(field, "must be non-negative"));
            }
        }

        let baselines = [
            ("scoring.initial_score", s.initial_score),
            ("scoring.sugar_baseline", s.sugar_baseline),
            ("scoring.produce_baseline", s.produce_baseline),
        ];
        for (field, value) in baselines {
            if !(0..=100).contains(&value) {
                return Err(invalid(field, "must be between 0 and 100"));
            }
        }

        Ok(())
    }
}

fn invalid(field: &str, message: &str) -> HealthError {
    warn!(field, reason = message, "rejected engine configuration");
    HealthError::ConfigValidation {
        field: field.to_string(),
        message: message.to_string(),
    }
}
