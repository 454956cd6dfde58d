//! Product Model

use serde::{Deserialize, Serialize};

/// Product entity as returned by the inventory backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Unique human-facing key; backend updates are addressed by sku
    pub sku: String,
    /// Authoritative stock count as last known from the backend
    pub current_stock: i64,
    pub image_url: String,
    pub category: String,
    /// Some backends expose reporting categories separately; optional for compatibility
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reporting_category: Option<String>,
}

/// Partial update payload for `PUT /product/{sku}`
///
/// Only fields that are present are serialized. Stock adjustments send
/// `current_stock` alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_stock: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl ProductUpdate {
    /// Update carrying only a new stock count
    pub fn stock(current_stock: i64) -> Self {
        Self {
            current_stock: Some(current_stock),
            ..Self::default()
        }
    }
}
