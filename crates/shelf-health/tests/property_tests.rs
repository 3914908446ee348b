//! Property-Based Tests for the Analysis Engine
//!
//! These tests verify the engine's contract over arbitrary inputs:
//! - Determinism (equal inputs, equal outputs)
//! - Compatibility agrees with the full analysis
//! - Inputs are never mutated
//! - Allergen matching is literal
//!
//! Uses proptest for randomized property testing with shrinking.

use proptest::prelude::*;
use shelf_health::rules::ALLERGEN_KEYWORDS;
use shelf_health::{AgeGroup, CompatibilityView, HealthEngine, HealthProfile, ProductSignal};

/// Product names mixing rule keywords with filler words
fn product_name() -> impl Strategy<Value = String> {
    let words = prop::sample::select(vec![
        "organic", "apple", "candy", "soda", "fried", "oil", "salt", "chips", "pickle",
        "chicken", "fish", "protein", "milk", "cheese", "calcium", "vitamin", "nuts", "dairy",
        "soy", "eggs", "gluten", "shellfish", "fresh", "bread", "Almond", "Peanut", "BAR",
    ]);
    prop::collection::vec(words, 0..6).prop_map(|w| w.join(" "))
}

fn category() -> impl Strategy<Value = Option<String>> {
    prop::option::of(
        prop::sample::select(vec!["Produce", "Snacks", "Dairy", "Bakery", "Electronics"])
            .prop_map(str::to_string),
    )
}

fn profile() -> impl Strategy<Value = HealthProfile> {
    (
        any::<[bool; 4]>(),
        prop::collection::vec("[A-Za-z ]{0,12}", 0..4),
        prop::sample::select(vec![AgeGroup::Child, AgeGroup::Adult, AgeGroup::Senior]),
    )
        .prop_map(|(flags, allergies, age_group)| HealthProfile {
            diabetic: flags[0],
            heart_disease: flags[1],
            hypertension: flags[2],
            pregnant: flags[3],
            allergies,
            age_group,
            ..Default::default()
        })
}

proptest! {
    #[test]
    fn analysis_is_deterministic(name in product_name(), category in category(), profile in profile()) {
        let engine = HealthEngine::new();
        let product = ProductSignal { name, category, ..Default::default() };
        let first = engine.analyze(&product, &profile);
        let second = engine.analyze(&product.clone(), &profile.clone());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn compatibility_matches_analysis(name in product_name(), category in category(), profile in profile()) {
        let engine = HealthEngine::new();
        let product = ProductSignal { name, category, ..Default::default() };
        let analysis = engine.analyze(&product, &profile);
        let view = engine.compatibility(&product, &profile);
        prop_assert_eq!(
            view.compatible,
            analysis.warnings.is_empty() && analysis.allergen_warnings.is_empty()
        );
        prop_assert_eq!(view, CompatibilityView::from(analysis));
    }

    #[test]
    fn inputs_are_not_mutated(name in product_name(), category in category(), profile in profile()) {
        let product = ProductSignal { name, category, ..Default::default() };
        let product_before = product.clone();
        let profile_before = profile.clone();
        let _ = HealthEngine::new().analyze(&product, &profile);
        prop_assert_eq!(product, product_before);
        prop_assert_eq!(profile, profile_before);
    }

    #[test]
    fn allergen_warnings_need_literal_keyword(name in product_name(), profile in profile()) {
        let product = ProductSignal::named(name.clone());
        let result = HealthEngine::new().analyze(&product, &profile);
        let lowered = name.to_lowercase();
        let expected = ALLERGEN_KEYWORDS
            .iter()
            .filter(|k| lowered.contains(*k) && profile.is_allergic_to(k))
            .count();
        prop_assert_eq!(result.allergen_warnings.len(), expected);
    }

    #[test]
    fn no_allergies_means_no_allergen_warnings(name in product_name()) {
        let result = HealthEngine::new().analyze(&ProductSignal::named(name), &HealthProfile::default());
        prop_assert!(result.allergen_warnings.is_empty());
    }

    #[test]
    fn display_score_is_clamped(name in product_name(), profile in profile()) {
        let result = HealthEngine::new().analyze(&ProductSignal::named(name), &profile);
        prop_assert!(result.display_score() <= 100);
    }
}
