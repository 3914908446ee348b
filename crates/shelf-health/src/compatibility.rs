//! Compatibility Adapter
//!
//! Reduces a full [`AnalysisResult`] to the yes/no suitability view used by
//! catalog listings.

use serde::{Deserialize, Serialize};

use crate::analysis::AnalysisResult;

/// Simplified suitability verdict
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityView {
    /// True only when there are no warnings and no allergen warnings
    pub compatible: bool,
    pub warnings: Vec<String>,
    pub recommendations: Vec<String>,
    pub allergen_warnings: Vec<String>,
}

impl From<AnalysisResult> for CompatibilityView {
    fn from(result: AnalysisResult) -> Self {
        CompatibilityView {
            compatible: result.warnings.is_empty() && result.allergen_warnings.is_empty(),
            warnings: result.warnings,
            recommendations: result.recommendations,
            allergen_warnings: result.allergen_warnings,
        }
    }
}

impl From<&AnalysisResult> for CompatibilityView {
    fn from(result: &AnalysisResult) -> Self {
        CompatibilityView::from(result.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_result_is_compatible() {
        let view = CompatibilityView::from(AnalysisResult::default());
        assert!(view.compatible);
        assert!(view.warnings.is_empty());
    }

    #[test]
    fn test_any_warning_breaks_compatibility() {
        let mut result = AnalysisResult::default();
        result.warnings.push("High oil content".to_string());
        result.recommendations.push("✅ Good for muscle building".to_string());

        let view = CompatibilityView::from(&result);
        assert!(!view.compatible);
        assert_eq!(view.warnings, result.warnings);
        assert_eq!(view.recommendations, result.recommendations);
    }

    #[test]
    fn test_recommendations_alone_stay_compatible() {
        let mut result = AnalysisResult::default();
        result.recommendations.push("✅ Beneficial for seniors".to_string());
        assert!(CompatibilityView::from(result).compatible);
    }

    #[test]
    fn test_allergen_warning_alone_breaks_compatibility() {
        let mut result = AnalysisResult::default();
        result
            .allergen_warnings
            .push("Contains soy - You are allergic to this!".to_string());
        assert!(!CompatibilityView::from(result).compatible);
    }
}
