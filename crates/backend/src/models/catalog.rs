//! Product catalog domain types.

use serde::{Deserialize, Serialize};

use rustwear_core::{Price, ProductId, ProductMetricId, ProductModelId};

/// A product line (e.g., "Hoodies").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique ID, `None` until persisted.
    pub id: Option<ProductId>,
    /// Display name.
    pub name: String,
}

/// A sellable model within a product line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductModel {
    /// Unique ID, `None` until persisted.
    pub id: Option<ProductModelId>,
    /// Display name.
    pub name: String,
    /// Product line this model belongs to.
    pub product: Option<ProductId>,
    /// List price.
    pub price: Price,
}

/// Size measurements recorded for a product model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductMetric {
    /// Unique ID, `None` until persisted.
    pub id: Option<ProductMetricId>,
    /// Display name (e.g., "Oversized Hoodie").
    pub name: String,
    /// Model these measurements describe.
    pub product_model: Option<ProductModelId>,
    /// First measured dimension (e.g., "Width").
    pub metric_x: String,
    /// Second measured dimension (e.g., "Length").
    pub metric_y: String,
    /// Third measured dimension (e.g., "Sleeve Length").
    pub metric_z: String,
}
