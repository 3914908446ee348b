//! Barcode/QR scan support
//!
//! Scanned items carry ingredients, nutrition facts and declared allergens.
//! Each scan is analyzed once against the profile current at scan time and
//! kept in a newest-first history for the rest of the session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::AnalysisResult;
use crate::{HealthError, Result};

/// Per-serving nutrition facts printed on a scanned item
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NutritionFacts {
    pub calories: u32,
    pub fat: f64,
    pub saturated_fat: f64,
    /// Milligrams
    pub sodium: u32,
    pub sugar: f64,
    pub protein: f64,
    pub fiber: f64,
}

/// An item identified by the barcode scanner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScannedProduct {
    pub id: String,
    pub name: String,
    pub barcode: String,
    pub ingredients: Vec<String>,
    pub nutrition: NutritionFacts,
    pub allergens: Vec<String>,
}

/// A scanned item together with the analysis computed when it was scanned
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanRecord {
    pub product: ScannedProduct,
    pub analysis: AnalysisResult,
    pub scanned_at: DateTime<Utc>,
}

/// Session scan history, newest first
#[derive(Debug, Clone, Default)]
pub struct ScanHistory {
    records: Vec<ScanRecord>,
}

impl ScanHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend a record and return a reference to it
    pub fn record(&mut self, record: ScanRecord) -> &ScanRecord {
        self.records.insert(0, record);
        &self.records[0]
    }

    pub fn records(&self) -> &[ScanRecord] {
        &self.records
    }

    pub fn latest(&self) -> Option<&ScanRecord> {
        self.records.first()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The demo items the scan simulator can recognise
pub fn sample_scan_database() -> Vec<ScannedProduct> {
    vec![
        ScannedProduct {
            id: "1".to_string(),
            name: "Coca Cola Original".to_string(),
            barcode: "1234567890".to_string(),
            ingredients: strings(&[
                "Carbonated Water",
                "High Fructose Corn Syrup",
                "Caramel Color",
                "Phosphoric Acid",
                "Natural Flavors",
                "Caffeine",
            ]),
            nutrition: NutritionFacts {
                calories: 140,
                fat: 0.0,
                saturated_fat: 0.0,
                sodium: 45,
                sugar: 39.0,
                protein: 0.0,
                fiber: 0.0,
            },
            allergens: Vec::new(),
        },
        ScannedProduct {
            id: "2".to_string(),
            name: "Peanut Butter Cookies".to_string(),
            barcode: "0987654321".to_string(),
            ingredients: strings(&[
                "Wheat Flour",
                "Peanut Butter",
                "Sugar",
                "Eggs",
                "Butter",
                "Baking Soda",
                "Salt",
            ]),
            nutrition: NutritionFacts {
                calories: 180,
                fat: 9.0,
                saturated_fat: 3.0,
                sodium: 190,
                sugar: 12.0,
                protein: 4.0,
                fiber: 1.0,
            },
            allergens: strings(&["Peanuts", "Gluten", "Eggs"]),
        },
        ScannedProduct {
            id: "3".to_string(),
            name: "Organic Apple Juice".to_string(),
            barcode: "1122334455".to_string(),
            ingredients: strings(&["Organic Apple Juice", "Vitamin C"]),
            nutrition: NutritionFacts {
                calories: 110,
                fat: 0.0,
                saturated_fat: 0.0,
                sodium: 10,
                sugar: 24.0,
                protein: 0.0,
                fiber: 0.0,
            },
            allergens: Vec::new(),
        },
    ]
}

/// Look up a demo item by barcode
pub fn find_by_barcode(barcode: &str) -> Result<ScannedProduct> {
    let barcode = barcode.trim();
    sample_scan_database()
        .into_iter()
        .find(|p| p.barcode == barcode)
        .ok_or_else(|| HealthError::UnknownBarcode(barcode.to_string()))
}
