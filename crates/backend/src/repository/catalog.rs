//! Catalog repository interfaces.

use async_trait::async_trait;

use rustwear_core::{ProductId, ProductMetricId, ProductModelId};

use super::RepositoryError;
use crate::models::{Product, ProductMetric, ProductModel};

/// Read-only lookup for product lines.
///
/// The service layer only consults products to confirm a referenced line
/// exists; product maintenance itself lives elsewhere.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Fetch a product line by ID, `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the storage engine fails.
    async fn read(&self, id: ProductId) -> Result<Option<Product>, RepositoryError>;
}

/// Identity-keyed CRUD persistence for product models.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductModelRepository: Send + Sync {
    /// Persist a new model and assign its identity.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the storage engine fails.
    async fn create(&self, model: ProductModel) -> Result<ProductModel, RepositoryError>;

    /// Fetch a model by ID, `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the storage engine fails.
    async fn read(&self, id: ProductModelId) -> Result<Option<ProductModel>, RepositoryError>;

    /// Replace a stored model record.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the storage engine fails.
    async fn update(&self, model: ProductModel) -> Result<ProductModel, RepositoryError>;

    /// Remove a model, returning the removed record or `None`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the storage engine fails.
    async fn delete(&self, id: ProductModelId)
    -> Result<Option<ProductModel>, RepositoryError>;
}

/// Identity-keyed CRUD persistence for product metrics.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductMetricRepository: Send + Sync {
    /// Persist a new metric and assign its identity.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the storage engine fails.
    async fn create(&self, metric: ProductMetric) -> Result<ProductMetric, RepositoryError>;

    /// Fetch a metric by ID, `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the storage engine fails.
    async fn read(&self, id: ProductMetricId)
    -> Result<Option<ProductMetric>, RepositoryError>;

    /// Replace a stored metric record.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the storage engine fails.
    async fn update(&self, metric: ProductMetric) -> Result<ProductMetric, RepositoryError>;

    /// Remove a metric, returning the removed record or `None`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the storage engine fails.
    async fn delete(&self, id: ProductMetricId)
    -> Result<Option<ProductMetric>, RepositoryError>;
}
