//! Order repository interface.

use async_trait::async_trait;

use rustwear_core::OrderId;

use super::RepositoryError;
use crate::models::Order;

/// Identity-keyed CRUD persistence for orders.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Persist a new order and assign its identity.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the storage engine fails.
    async fn create(&self, order: Order) -> Result<Order, RepositoryError>;

    /// Fetch an order by ID, `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the storage engine fails.
    async fn read(&self, id: OrderId) -> Result<Option<Order>, RepositoryError>;

    /// Replace a stored order record.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the storage engine fails.
    async fn update(&self, order: Order) -> Result<Order, RepositoryError>;

    /// Remove an order, returning the removed record or `None`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the storage engine fails.
    async fn delete(&self, id: OrderId) -> Result<Option<Order>, RepositoryError>;
}
