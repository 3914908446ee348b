//! Audience guidance
//!
//! Static recommended/avoid food lists for the audiences shown in the
//! health panel. Guidance is advisory text only and never affects scores.

use serde::Serialize;

use crate::profile::HealthProfile;

/// A shopper audience with its own dietary guidance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Audience {
    Diabetic,
    HeartPatient,
    GymGoer,
    Pregnant,
}

/// Guidance for one audience
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Guidance {
    pub audience: Audience,
    pub title: &'static str,
    pub recommended: &'static [&'static str],
    pub avoid: &'static [&'static str],
}

impl Audience {
    pub const ALL: [Audience; 4] = [
        Audience::Diabetic,
        Audience::HeartPatient,
        Audience::GymGoer,
        Audience::Pregnant,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Audience::Diabetic => "Diabetic Person",
            Audience::HeartPatient => "Heart Patient",
            Audience::GymGoer => "Gym-Goer",
            Audience::Pregnant => "Pregnant Woman",
        }
    }

    pub fn recommended(&self) -> &'static [&'static str] {
        match self {
            Audience::Diabetic => &[
                "Low glycemic index foods (quinoa, oats)",
                "High fiber vegetables (broccoli, spinach)",
                "Lean proteins (chicken, fish)",
                "Nuts and seeds in moderation",
            ],
            Audience::HeartPatient => &[
                "Omega-3 rich fish (salmon, mackerel)",
                "Whole grains and fiber",
                "Fresh fruits and vegetables",
                "Low-fat dairy products",
            ],
            Audience::GymGoer => &[
                "High protein foods (eggs, chicken)",
                "Complex carbohydrates (sweet potato)",
                "Pre-workout bananas and dates",
                "Post-workout protein shakes",
            ],
            Audience::Pregnant => &[
                "Folate-rich foods (leafy greens)",
                "Calcium sources (dairy, almonds)",
                "Iron-rich foods (lean meat, beans)",
                "Prenatal vitamins",
            ],
        }
    }

    pub fn avoid(&self) -> &'static [&'static str] {
        match self {
            Audience::Diabetic => &[
                "Sugary drinks and desserts",
                "White bread and refined grains",
                "Processed foods high in sodium",
                "Fried and fatty foods",
            ],
            Audience::HeartPatient => &[
                "High sodium processed foods",
                "Trans fats and saturated fats",
                "Excessive alcohol",
                "Red meat in large quantities",
            ],
            Audience::GymGoer => &[
                "Heavy meals before workout",
                "High-fat foods pre-exercise",
                "Excessive sugar",
                "Alcohol before training",
            ],
            Audience::Pregnant => &[
                "Raw or undercooked meat/eggs",
                "High mercury fish",
                "Alcohol and caffeine excess",
                "Unpasteurized dairy products",
            ],
        }
    }

    pub fn guidance(&self) -> Guidance {
        Guidance {
            audience: *self,
            title: self.title(),
            recommended: self.recommended(),
            avoid: self.avoid(),
        }
    }
}

/// Audiences relevant to `profile`, in panel order
///
/// Hypertension maps to the heart-patient guidance; any declared fitness
/// goal maps to the gym-goer guidance.
pub fn audiences_for(profile: &HealthProfile) -> Vec<Audience> {
    Audience::ALL
        .into_iter()
        .filter(|audience| match audience {
            Audience::Diabetic => profile.diabetic,
            Audience::HeartPatient => profile.heart_disease || profile.hypertension,
            Audience::GymGoer => !profile.fitness_goals.is_empty(),
            Audience::Pregnant => profile.pregnant,
        })
        .collect()
}

/// Guidance entries relevant to `profile`
pub fn guidance_for(profile: &HealthProfile) -> Vec<Guidance> {
    audiences_for(profile).iter().map(Audience::guidance).collect()
}
