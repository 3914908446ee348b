//! Rule Catalog
//!
//! A fixed, ordered list of keyword-triggered rules. Each rule is a pure
//! predicate ([`Rule::matches`]) paired with a pure effect ([`Rule::apply`])
//! that takes the running result by value and returns the next one.
//!
//! Order matters: the sugar and produce families force the score to a
//! baseline, overriding whatever earlier rules left behind, while the
//! remaining families add or subtract from the running score.
//!
//! Matching is literal, case-insensitive substring matching on the product
//! name (and on the category for the snack and produce families). There is
//! no stemming or synonym handling, so "Almond Milk" does not match "nuts".

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::analysis::AnalysisResult;
use crate::config::ScoringConfig;
use crate::profile::{AgeGroup, HealthProfile};
use crate::product::ProductSignal;

// ============================================================================
// Vocabularies
// ============================================================================

/// Allergens the engine can cross-match against declared allergies
pub const ALLERGEN_KEYWORDS: [&str; 6] = ["nuts", "dairy", "gluten", "shellfish", "eggs", "soy"];

pub const ECO_KEYWORDS: [&str; 5] = ["organic", "natural", "plant-based", "sustainable", "eco"];

pub const SUGAR_KEYWORDS: [&str; 4] = ["sugar", "candy", "soda", "dessert"];

pub const FAT_KEYWORDS: [&str; 2] = ["oil", "fried"];
pub const FAT_CATEGORY: &str = "snacks";

pub const SODIUM_KEYWORDS: [&str; 3] = ["salt", "chips", "pickle"];

pub const PRODUCE_KEYWORDS: [&str; 3] = ["apple", "fruit", "vegetable"];
pub const PRODUCE_CATEGORY: &str = "produce";

pub const PROTEIN_KEYWORDS: [&str; 3] = ["protein", "chicken", "fish"];

pub const CHILD_KEYWORDS: [&str; 2] = ["milk", "cheese"];

pub const SENIOR_KEYWORDS: [&str; 2] = ["calcium", "vitamin"];

// ============================================================================
// Labels and messages
// ============================================================================

pub const TAG_HIGH_SUGAR: &str = "High Sugar";
pub const TAG_HIGH_FAT: &str = "High Fat";
pub const TAG_HIGH_SODIUM: &str = "High Sodium";
pub const TAG_NATURAL: &str = "Natural";
pub const TAG_HEALTHY: &str = "Healthy";
pub const TAG_HIGH_PROTEIN: &str = "High Protein";

pub const SUITABLE_EVERYONE: &str = "Everyone";
pub const SUITABLE_FITNESS: &str = "✅ Fitness enthusiasts";

pub const WARN_HIGH_SUGAR: &str = "High sugar content";
pub const WARN_DIABETIC: &str = "❌ Not suitable for diabetics";
pub const WARN_HIGH_FAT: &str = "High oil content";
pub const WARN_HEART: &str = "❌ Not recommended for heart patients";
pub const WARN_HIGH_SODIUM: &str = "High sodium content";
pub const WARN_HYPERTENSION: &str = "❌ High sodium - not suitable for hypertension";

pub const REC_PRODUCE: &str = "✅ Great source of vitamins and fiber";
pub const REC_PROTEIN: &str = "✅ Good for muscle building";
pub const REC_CHILD: &str = "✅ Good for growing children";
pub const REC_SENIOR: &str = "✅ Beneficial for seniors";

/// Allergen-specific message listed under `allergen_warnings`
pub fn allergen_warning(allergen: &str) -> String {
    format!("Contains {} - You are allergic to this!", allergen)
}

/// Generic warning added alongside each allergen match
pub fn allergen_alert(allergen: &str) -> String {
    format!("⚠️ ALLERGEN WARNING: {}", allergen)
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

// ============================================================================
// Evaluation context
// ============================================================================

/// Everything a rule may read: the lower-cased product text, the profile
/// snapshot and the scoring constants
#[derive(Debug, Clone)]
pub struct RuleContext<'a> {
    pub name: String,
    /// Lower-cased category, empty when the product has none
    pub category: String,
    pub profile: &'a HealthProfile,
    pub scoring: &'a ScoringConfig,
}

impl<'a> RuleContext<'a> {
    pub fn new(
        product: &ProductSignal,
        profile: &'a HealthProfile,
        scoring: &'a ScoringConfig,
    ) -> Self {
        RuleContext {
            name: product.lowercase_name(),
            category: product.lowercase_category(),
            profile,
            scoring,
        }
    }

    fn name_has_any(&self, keywords: &[&str]) -> bool {
        contains_any(&self.name, keywords)
    }

    /// Allergen keywords present in the name that the profile declares
    fn matched_allergens(&self) -> impl Iterator<Item = &'static str> + '_ {
        ALLERGEN_KEYWORDS
            .iter()
            .copied()
            .filter(move |a| self.name.contains(a) && self.profile.is_allergic_to(a))
    }
}

// ============================================================================
// Rules
// ============================================================================

/// One entry of the rule catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rule {
    /// Declared allergen named in the product; compounds per allergen
    Allergen,
    /// Sustainability keyword in the name; no score effect
    EcoFriendly,
    /// Forces the sugar baseline and marks the product unhealthy
    HighSugar,
    HighFat,
    HighSodium,
    /// Forces the produce baseline and marks the product healthy and eco-friendly
    Produce,
    Protein,
    ChildAdvice,
    SeniorAdvice,
}

/// The catalog in evaluation order
pub const RULE_CATALOG: [Rule; 9] = [
    Rule::Allergen,
    Rule::EcoFriendly,
    Rule::HighSugar,
    Rule::HighFat,
    Rule::HighSodium,
    Rule::Produce,
    Rule::Protein,
    Rule::ChildAdvice,
    Rule::SeniorAdvice,
];

impl Rule {
    pub fn name(&self) -> &'static str {
        match self {
            Rule::Allergen => "allergen",
            Rule::EcoFriendly => "eco-friendly",
            Rule::HighSugar => "high-sugar",
            Rule::HighFat => "high-fat",
            Rule::HighSodium => "high-sodium",
            Rule::Produce => "produce",
            Rule::Protein => "protein",
            Rule::ChildAdvice => "child-advice",
            Rule::SeniorAdvice => "senior-advice",
        }
    }

    /// Whether this rule fires for the given context
    pub fn matches(&self, ctx: &RuleContext<'_>) -> bool {
        match self {
            Rule::Allergen => ctx.matched_allergens().next().is_some(),
            Rule::EcoFriendly => ctx.name_has_any(&ECO_KEYWORDS),
            Rule::HighSugar => ctx.name_has_any(&SUGAR_KEYWORDS),
            Rule::HighFat => {
                ctx.name_has_any(&FAT_KEYWORDS) || ctx.category.contains(FAT_CATEGORY)
            }
            Rule::HighSodium => ctx.name_has_any(&SODIUM_KEYWORDS),
            Rule::Produce => {
                ctx.name_has_any(&PRODUCE_KEYWORDS) || ctx.category.contains(PRODUCE_CATEGORY)
            }
            Rule::Protein => ctx.name_has_any(&PROTEIN_KEYWORDS),
            Rule::ChildAdvice => {
                ctx.profile.age_group == AgeGroup::Child && ctx.name_has_any(&CHILD_KEYWORDS)
            }
            Rule::SeniorAdvice => {
                ctx.profile.age_group == AgeGroup::Senior && ctx.name_has_any(&SENIOR_KEYWORDS)
            }
        }
    }

    /// Fold this rule's effect into the running result
    ///
    /// Callers are expected to check [`Rule::matches`] first; `apply` assumes
    /// the rule fired (except for the allergen rule, which re-checks each
    /// allergen individually).
    pub fn apply(&self, ctx: &RuleContext<'_>, mut result: AnalysisResult) -> AnalysisResult {
        let scoring = ctx.scoring;
        let profile = ctx.profile;

        match self {
            Rule::Allergen => {
                for allergen in ctx.matched_allergens() {
                    result.allergen_warnings.push(allergen_warning(allergen));
                    result.warnings.push(allergen_alert(allergen));
                    result.health_score = result.health_score.saturating_sub(scoring.allergen_penalty);
                }
            }
            Rule::EcoFriendly => {
                result.eco_friendly = true;
            }
            Rule::HighSugar => {
                result.health_score = scoring.sugar_baseline;
                result.is_healthy = false;
                result.warnings.push(WARN_HIGH_SUGAR.to_string());
                result.tags.push(TAG_HIGH_SUGAR.to_string());
                if profile.diabetic {
                    result.warnings.push(WARN_DIABETIC.to_string());
                }
            }
            Rule::HighFat => {
                result.health_score = result.health_score.saturating_sub(scoring.fat_penalty);
                result.warnings.push(WARN_HIGH_FAT.to_string());
                result.tags.push(TAG_HIGH_FAT.to_string());
                if profile.heart_disease {
                    result.warnings.push(WARN_HEART.to_string());
                }
            }
            Rule::HighSodium => {
                result.health_score = result.health_score.saturating_sub(scoring.sodium_penalty);
                result.warnings.push(WARN_HIGH_SODIUM.to_string());
                result.tags.push(TAG_HIGH_SODIUM.to_string());
                if profile.hypertension {
                    result.warnings.push(WARN_HYPERTENSION.to_string());
                }
            }
            Rule::Produce => {
                result.health_score = scoring.produce_baseline;
                result.is_healthy = true;
                result.suitable_for.push(SUITABLE_EVERYONE.to_string());
                result.tags.push(TAG_NATURAL.to_string());
                result.tags.push(TAG_HEALTHY.to_string());
                result.recommendations.push(REC_PRODUCE.to_string());
                result.eco_friendly = true;
            }
            Rule::Protein => {
                result.health_score = result.health_score.saturating_add(scoring.protein_bonus);
                result.tags.push(TAG_HIGH_PROTEIN.to_string());
                result.suitable_for.push(SUITABLE_FITNESS.to_string());
                result.recommendations.push(REC_PROTEIN.to_string());
            }
            Rule::ChildAdvice => {
                result.recommendations.push(REC_CHILD.to_string());
            }
            Rule::SeniorAdvice => {
                result.recommendations.push(REC_SENIOR.to_string());
            }
        }

        result
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
