//! Product signals
//!
//! The engine only needs a narrow view of a product: its name, an optional
//! category and, for scanned items, the ingredient and allergen lists.
//! Catalog listings and scanned items both convert into [`ProductSignal`].

use serde::{Deserialize, Serialize};

use crate::scan::ScannedProduct;

/// The minimal product view consumed by the analysis engine
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductSignal {
    pub name: String,
    /// Present for catalog listings, absent for scanned items
    pub category: Option<String>,
    pub ingredients: Vec<String>,
    /// Explicit allergen declarations, present for scanned items
    pub allergens: Vec<String>,
}

impl ProductSignal {
    /// A signal carrying only a product name
    pub fn named(name: impl Into<String>) -> Self {
        ProductSignal {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Builder-style category setter
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub(crate) fn lowercase_name(&self) -> String {
        self.name.to_lowercase()
    }

    /// Lower-cased category, or the empty string when absent
    pub(crate) fn lowercase_category(&self) -> String {
        self.category
            .as_deref()
            .map(str::to_lowercase)
            .unwrap_or_default()
    }
}

/// A product listed in the store catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogProduct {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub category: String,
    pub rating: f64,
    pub distance: Option<String>,
    pub aisle: Option<String>,
    pub in_stock: bool,
    pub description: String,
}

impl From<&CatalogProduct> for ProductSignal {
    fn from(product: &CatalogProduct) -> Self {
        ProductSignal {
            name: product.name.clone(),
            category: Some(product.category.clone()),
            ingredients: Vec::new(),
            allergens: Vec::new(),
        }
    }
}

impl From<&ScannedProduct> for ProductSignal {
    fn from(product: &ScannedProduct) -> Self {
        ProductSignal {
            name: product.name.clone(),
            category: None,
            ingredients: product.ingredients.clone(),
            allergens: product.allergens.clone(),
        }
    }
}
