//! Health Profile Store
//!
//! Holds the shopper's health conditions, declared allergies and age group
//! for the current session. The store is plain data: it is mutated only
//! through explicit merge/replace/reset operations and read by the engine
//! as a borrowed snapshot.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::HealthError;

/// Allergy choices offered by the settings panel
pub const COMMON_ALLERGY_OPTIONS: [&str; 8] = [
    "Nuts (peanuts, tree nuts)",
    "Dairy products",
    "Gluten/Wheat",
    "Shellfish",
    "Eggs",
    "Soy products",
    "Fish",
    "Sesame seeds",
];

/// Age bracket used by the age-specific advice rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeGroup {
    Child,
    #[default]
    Adult,
    Senior,
}

impl AgeGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgeGroup::Child => "child",
            AgeGroup::Adult => "adult",
            AgeGroup::Senior => "senior",
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgeGroup {
    type Err = HealthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "child" => Ok(AgeGroup::Child),
            "adult" => Ok(AgeGroup::Adult),
            "senior" => Ok(AgeGroup::Senior),
            _ => Err(HealthError::UnknownAgeGroup(s.to_string())),
        }
    }
}

/// The shopper's health profile
///
/// `dietary_preferences` and `fitness_goals` are not read by the scoring
/// rules; they are kept so that every update round-trips them untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthProfile {
    pub diabetic: bool,
    pub heart_disease: bool,
    pub hypertension: bool,
    pub pregnant: bool,
    /// Free-text allergen names, matched case-insensitively. Duplicates allowed.
    pub allergies: Vec<String>,
    pub age_group: AgeGroup,
    pub dietary_preferences: Vec<String>,
    pub fitness_goals: Vec<String>,
}

impl HealthProfile {
    /// Whether any declared allergy mentions `keyword` (case-insensitive substring)
    pub fn is_allergic_to(&self, keyword: &str) -> bool {
        let keyword = keyword.to_lowercase();
        self.allergies
            .iter()
            .any(|allergy| allergy.to_lowercase().contains(&keyword))
    }

    /// Whether any condition flag is set
    pub fn has_conditions(&self) -> bool {
        self.diabetic || self.heart_disease || self.hypertension || self.pregnant
    }
}

/// A partial profile update; `None` leaves the field unchanged
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileUpdate {
    pub diabetic: Option<bool>,
    pub heart_disease: Option<bool>,
    pub hypertension: Option<bool>,
    pub pregnant: Option<bool>,
    pub allergies: Option<Vec<String>>,
    pub age_group: Option<AgeGroup>,
    pub dietary_preferences: Option<Vec<String>>,
    pub fitness_goals: Option<Vec<String>>,
}

impl ProfileUpdate {
    /// Shallow, last-write-wins merge of this update over `profile`
    pub fn apply_to(self, profile: &mut HealthProfile) {
        if let Some(v) = self.diabetic {
            profile.diabetic = v;
        }
        if let Some(v) = self.heart_disease {
            profile.heart_disease = v;
        }
        if let Some(v) = self.hypertension {
            profile.hypertension = v;
        }
        if let Some(v) = self.pregnant {
            profile.pregnant = v;
        }
        if let Some(v) = self.allergies {
            profile.allergies = v;
        }
        if let Some(v) = self.age_group {
            profile.age_group = v;
        }
        if let Some(v) = self.dietary_preferences {
            profile.dietary_preferences = v;
        }
        if let Some(v) = self.fitness_goals {
            profile.fitness_goals = v;
        }
    }
}

/// Session-scoped holder of the current [`HealthProfile`]
///
/// The allergy list is stored once, inside the profile; [`ProfileStore::allergies`]
/// is a second view onto the same data, so the two can never disagree.
#[derive(Debug, Clone, Default)]
pub struct ProfileStore {
    profile: HealthProfile,
}

impl ProfileStore {
    /// Create a store holding the default profile
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with an existing profile
    pub fn with_profile(profile: HealthProfile) -> Self {
        ProfileStore { profile }
    }

    pub fn profile(&self) -> &HealthProfile {
        &self.profile
    }

    pub fn allergies(&self) -> &[String] {
        &self.profile.allergies
    }

    /// Owned copy of the current profile
    pub fn snapshot(&self) -> HealthProfile {
        self.profile.clone()
    }

    /// Merge a partial update over the current profile
    pub fn update_profile(&mut self, update: ProfileUpdate) {
        update.apply_to(&mut self.profile);
        debug!(
            age_group = %self.profile.age_group,
            allergies = self.profile.allergies.len(),
            "profile updated"
        );
    }

    /// Replace the declared allergies outright
    pub fn update_allergies(&mut self, allergies: Vec<String>) {
        debug!(count = allergies.len(), "allergies replaced");
        self.profile.allergies = allergies;
    }

    /// Return to the default profile
    pub fn reset(&mut self) {
        debug!("profile reset to defaults");
        self.profile = HealthProfile::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile() {
        let profile = HealthProfile::default();
        assert!(!profile.has_conditions());
        assert!(profile.allergies.is_empty());
        assert_eq!(profile.age_group, AgeGroup::Adult);
    }

    #[test]
    fn test_age_group_parsing() {
        assert_eq!("child".parse::<AgeGroup>().unwrap(), AgeGroup::Child);
        assert_eq!(" Senior ".parse::<AgeGroup>().unwrap(), AgeGroup::Senior);
        assert!(matches!(
            "toddler".parse::<AgeGroup>(),
            Err(HealthError::UnknownAgeGroup(s)) if s == "toddler"
        ));
    }

    #[test]
    fn test_allergy_match_is_case_insensitive_substring() {
        let profile = HealthProfile {
            allergies: vec!["Nuts (peanuts, tree nuts)".to_string()],
            ..Default::default()
        };
        assert!(profile.is_allergic_to("nuts"));
        assert!(profile.is_allergic_to("NUTS"));
        assert!(!profile.is_allergic_to("dairy"));
    }

    #[test]
    fn test_update_merges_only_present_fields() {
        let mut store = ProfileStore::new();
        store.update_profile(ProfileUpdate {
            diabetic: Some(true),
            fitness_goals: Some(vec!["muscle gain".to_string()]),
            ..Default::default()
        });
        store.update_profile(ProfileUpdate {
            age_group: Some(AgeGroup::Senior),
            ..Default::default()
        });

        let profile = store.profile();
        assert!(profile.diabetic);
        assert_eq!(profile.age_group, AgeGroup::Senior);
        assert_eq!(profile.fitness_goals, vec!["muscle gain".to_string()]);
    }

    #[test]
    fn test_last_write_wins() {
        let mut store = ProfileStore::new();
        store.update_profile(ProfileUpdate {
            hypertension: Some(true),
            ..Default::default()
        });
        store.update_profile(ProfileUpdate {
            hypertension: Some(false),
            ..Default::default()
        });
        assert!(!store.profile().hypertension);
    }

    #[test]
    fn test_allergy_views_agree() {
        let mut store = ProfileStore::new();
        store.update_allergies(vec!["Dairy".to_string(), "dairy".to_string()]);
        assert_eq!(store.allergies(), store.profile().allergies.as_slice());

        store.update_profile(ProfileUpdate {
            allergies: Some(vec!["Soy".to_string()]),
            ..Default::default()
        });
        assert_eq!(store.allergies(), &["Soy".to_string()]);
        assert_eq!(store.allergies(), store.profile().allergies.as_slice());
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut store = ProfileStore::new();
        store.update_allergies(vec!["Eggs".to_string()]);
        store.update_profile(ProfileUpdate {
            pregnant: Some(true),
            ..Default::default()
        });
        store.reset();
        assert_eq!(store.profile(), &HealthProfile::default());
        assert!(store.allergies().is_empty());
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut store = ProfileStore::new();
        let before = store.snapshot();
        store.update_profile(ProfileUpdate {
            diabetic: Some(true),
            ..Default::default()
        });
        assert!(!before.diabetic);
        assert!(store.profile().diabetic);
    }
}
