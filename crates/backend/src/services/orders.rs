//! Order CRUD service.

use tracing::instrument;

use rustwear_core::OrderId;

use super::ServiceError;
use super::validation::{Draft, Lifecycle, ValidationError, validate_draft};
use crate::models::Order;
use crate::repository::{OrderRepository, UserRepository};

/// CRUD service for orders.
///
/// The user repository is consulted only to confirm the ordering account
/// exists before a write.
pub struct OrderService<R, U> {
    orders: R,
    users: U,
}

impl<R, U> OrderService<R, U>
where
    R: OrderRepository,
    U: UserRepository,
{
    /// Create a new order service.
    #[must_use]
    pub const fn new(orders: R, users: U) -> Self {
        Self { orders, users }
    }

    /// Validate and persist a new order.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Validation` if the order carries a
    /// pre-assigned id, the shipping address is empty, the user reference
    /// is absent, or the referenced user does not exist. Repository
    /// failures pass through unchanged.
    #[instrument(skip(self, order), fields(user = ?order.user))]
    pub async fn create(&self, order: Order) -> Result<Order, ServiceError> {
        validate_draft(&order, Lifecycle::Create)?;
        let Some(user_id) = order.user else {
            return Err(ValidationError::MissingParent {
                entity: Order::ENTITY,
                parent: Order::PARENT,
            }
            .into());
        };

        if self.users.read(user_id).await?.is_none() {
            return Err(ValidationError::UnknownParent {
                parent: Order::PARENT,
                id: user_id.as_i32(),
            }
            .into());
        }

        Ok(self.orders.create(order).await?)
    }

    /// Fetch an order by id; absence is `Ok(None)`, not an error.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Repository` if the storage engine fails.
    pub async fn read(&self, id: OrderId) -> Result<Option<Order>, ServiceError> {
        Ok(self.orders.read(id).await?)
    }

    /// Validate and replace a stored order.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Validation` if the order has no id, the
    /// shipping address is empty, the user reference is absent, the id has
    /// no stored record, or the referenced user does not exist.
    #[instrument(skip(self, order), fields(id = ?order.id))]
    pub async fn update(&self, order: Order) -> Result<Order, ServiceError> {
        validate_draft(&order, Lifecycle::Update)?;
        let Some(id) = order.id else {
            return Err(ValidationError::MissingId {
                entity: Order::ENTITY,
            }
            .into());
        };
        let Some(user_id) = order.user else {
            return Err(ValidationError::MissingParent {
                entity: Order::ENTITY,
                parent: Order::PARENT,
            }
            .into());
        };

        if self.orders.read(id).await?.is_none() {
            return Err(ValidationError::UnknownEntity {
                entity: Order::ENTITY,
                id: id.as_i32(),
            }
            .into());
        }
        if self.users.read(user_id).await?.is_none() {
            return Err(ValidationError::UnknownParent {
                parent: Order::PARENT,
                id: user_id.as_i32(),
            }
            .into());
        }

        Ok(self.orders.update(order).await?)
    }

    /// Remove an order; deleting an unknown id is `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Repository` if the storage engine fails.
    pub async fn delete(&self, id: OrderId) -> Result<Option<Order>, ServiceError> {
        Ok(self.orders.delete(id).await?)
    }
}
