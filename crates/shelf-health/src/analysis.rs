//! Analysis Engine
//!
//! Folds the [`RULE_CATALOG`] left-to-right over an owned accumulator. The
//! engine reads only its explicit inputs, so identical inputs always give
//! identical results and concurrent calls need no coordination.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::compatibility::CompatibilityView;
use crate::config::{EngineConfig, ScoringConfig};
use crate::profile::HealthProfile;
use crate::product::ProductSignal;
use crate::rules::{RuleContext, RULE_CATALOG};

/// Display band for a health score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreBand {
    /// 80 and above
    Good,
    /// 60 to 79
    Fair,
    /// Below 60
    Poor,
}

impl ScoreBand {
    pub fn from_score(score: i32) -> Self {
        if score >= 80 {
            ScoreBand::Good
        } else if score >= 60 {
            ScoreBand::Fair
        } else {
            ScoreBand::Poor
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Good => "good",
            ScoreBand::Fair => "fair",
            ScoreBand::Poor => "poor",
        }
    }
}

/// The engine's assessment of one product for one profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Nominally 0-100 but never clamped; stacking rules may exceed either end
    pub health_score: i32,
    pub is_healthy: bool,
    /// Short labels in rule order; duplicates permitted
    pub tags: Vec<String>,
    pub warnings: Vec<String>,
    pub recommendations: Vec<String>,
    pub allergen_warnings: Vec<String>,
    pub eco_friendly: bool,
    pub suitable_for: Vec<String>,
}

impl AnalysisResult {
    /// The state every analysis starts from
    pub fn initial(scoring: &ScoringConfig) -> Self {
        AnalysisResult {
            health_score: scoring.initial_score,
            is_healthy: true,
            tags: Vec::new(),
            warnings: Vec::new(),
            recommendations: Vec::new(),
            allergen_warnings: Vec::new(),
            eco_friendly: false,
            suitable_for: Vec::new(),
        }
    }

    /// Score clamped to 0..=100 for display
    pub fn display_score(&self) -> u8 {
        self.health_score.clamp(0, 100) as u8
    }

    pub fn score_band(&self) -> ScoreBand {
        ScoreBand::from_score(self.health_score)
    }

    pub fn has_allergen_warnings(&self) -> bool {
        !self.allergen_warnings.is_empty()
    }
}

impl Default for AnalysisResult {
    fn default() -> Self {
        AnalysisResult::initial(&ScoringConfig::default())
    }
}

/// Rule-based health and compatibility analyzer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HealthEngine {
    config: EngineConfig,
}

impl HealthEngine {
    /// Engine with the reference scoring constants
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        HealthEngine { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Evaluate every catalog rule, in order, against `product` and `profile`
    pub fn analyze(&self, product: &ProductSignal, profile: &HealthProfile) -> AnalysisResult {
        let scoring = &self.config.scoring;
        let ctx = RuleContext::new(product, profile, scoring);
        trace!(product = %product.name, score = scoring.initial_score, "analysis started");

        RULE_CATALOG
            .iter()
            .fold(AnalysisResult::initial(scoring), |acc, rule| {
                if !rule.matches(&ctx) {
                    return acc;
                }
                let next = rule.apply(&ctx, acc);
                debug!(
                    rule = rule.name(),
                    product = %product.name,
                    score = next.health_score,
                    "rule matched"
                );
                next
            })
    }

    /// Simplified suitability verdict for `product`
    pub fn compatibility(&self, product: &ProductSignal, profile: &HealthProfile) -> CompatibilityView {
        CompatibilityView::from(self.analyze(product, profile))
    }
}

/// Analyze with the default engine configuration
pub fn analyze(product: &ProductSignal, profile: &HealthProfile) -> AnalysisResult {
    HealthEngine::new().analyze(product, profile)
}
