//! Shelf Health - Health & Compatibility Analysis Engine
//!
//! Rule-based nutrition and allergy advisory for retail products. Given a
//! product description and a shopper's health profile, the engine produces
//! a structured assessment: a health score, warnings, recommendations,
//! tags, suitability labels and an eco-friendliness flag.
//!
//! # Features
//!
//! - Ordered keyword rule catalog (allergens, sugar/fat/sodium risk,
//!   produce and protein benefits, age-specific advice)
//! - Pure, deterministic analysis over explicit inputs
//! - Compatibility verdicts for catalog listings
//! - Session profile store with partial updates
//! - Scan history for barcode/QR lookups
//! - Audience guidance lists
//!
//! # Example
//!
//! ```rust
//! use shelf_health::{analyze, HealthProfile, ProductSignal};
//!
//! let profile = HealthProfile {
//!     diabetic: true,
//!     ..Default::default()
//! };
//! let result = analyze(&ProductSignal::named("Chocolate Soda"), &profile);
//!
//! assert_eq!(result.health_score, 25);
//! assert!(!result.is_healthy);
//! ```

pub mod analysis;
pub mod compatibility;
pub mod config;
pub mod guidance;
pub mod product;
pub mod profile;
pub mod rules;
pub mod scan;
pub mod session;

// Re-export commonly used types for convenience
pub use analysis::{analyze, AnalysisResult, HealthEngine, ScoreBand};
pub use compatibility::CompatibilityView;
pub use config::{EngineConfig, ScoringConfig};
pub use guidance::{audiences_for, guidance_for, Audience, Guidance};
pub use product::{CatalogProduct, ProductSignal};
pub use profile::{AgeGroup, HealthProfile, ProfileStore, ProfileUpdate, COMMON_ALLERGY_OPTIONS};
pub use rules::{Rule, RULE_CATALOG};
pub use scan::{find_by_barcode, sample_scan_database, NutritionFacts, ScanHistory, ScanRecord, ScannedProduct};
pub use session::HealthSession;

/// Errors raised at the edges of the engine (configuration, user input, lookups)
///
/// Analysis itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum HealthError {
    /// Configuration text is not valid TOML for [`EngineConfig`]
    #[error("failed to parse config {path}: {message}")]
    ConfigParse { path: String, message: String },
    /// Configuration parsed but holds an out-of-range value
    #[error("invalid config value for {field}: {message}")]
    ConfigValidation { field: String, message: String },
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("unknown age group: '{0}' (expected child, adult or senior)")]
    UnknownAgeGroup(String),
    #[error("no product found for barcode {0}")]
    UnknownBarcode(String),
}

pub type Result<T> = std::result::Result<T, HealthError>;
