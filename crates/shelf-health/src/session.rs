//! Shopping session
//!
//! Ties the profile store, the engine and the scan history together for
//! one shopper. Mutation goes through `&mut self`, so an `analyze` call
//! always sees one consistent profile for its whole evaluation.

use chrono::Utc;
use tracing::debug;

use crate::analysis::{AnalysisResult, HealthEngine};
use crate::compatibility::CompatibilityView;
use crate::guidance::{guidance_for, Guidance};
use crate::product::ProductSignal;
use crate::profile::{HealthProfile, ProfileStore, ProfileUpdate};
use crate::scan::{ScanHistory, ScanRecord, ScannedProduct};

/// Per-shopper state: profile, engine and scan history
#[derive(Debug, Clone, Default)]
pub struct HealthSession {
    profile: ProfileStore,
    scans: ScanHistory,
    engine: HealthEngine,
}

impl HealthSession {
    /// Session with the default profile and reference scoring
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_engine(engine: HealthEngine) -> Self {
        HealthSession {
            engine,
            ..Self::default()
        }
    }

    pub fn engine(&self) -> &HealthEngine {
        &self.engine
    }

    pub fn profile(&self) -> &HealthProfile {
        self.profile.profile()
    }

    pub fn allergies(&self) -> &[String] {
        self.profile.allergies()
    }

    pub fn update_profile(&mut self, update: ProfileUpdate) {
        self.profile.update_profile(update);
    }

    pub fn update_allergies(&mut self, allergies: Vec<String>) {
        self.profile.update_allergies(allergies);
    }

    pub fn reset_profile(&mut self) {
        self.profile.reset();
    }

    /// Analyze against the current profile
    pub fn analyze(&self, product: &ProductSignal) -> AnalysisResult {
        self.engine.analyze(product, self.profile.profile())
    }

    /// Compatibility verdict against the current profile
    pub fn get_compatibility(&self, product: &ProductSignal) -> CompatibilityView {
        self.engine.compatibility(product, self.profile.profile())
    }

    /// Analyze a scanned item and prepend it to the history
    pub fn scan(&mut self, product: ScannedProduct) -> &ScanRecord {
        let analysis = self.analyze(&ProductSignal::from(&product));
        debug!(
            product = %product.name,
            barcode = %product.barcode,
            score = analysis.health_score,
            "product scanned"
        );
        self.scans.record(ScanRecord {
            product,
            analysis,
            scanned_at: Utc::now(),
        })
    }

    pub fn scan_history(&self) -> &ScanHistory {
        &self.scans
    }

    pub fn clear_scan_history(&mut self) {
        self.scans.clear();
    }

    /// Audience guidance for the current profile
    pub fn guidance(&self) -> Vec<Guidance> {
        guidance_for(self.profile.profile())
    }
}
