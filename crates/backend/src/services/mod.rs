//! Storefront services.
//!
//! Each CRUD service wraps one entity repository plus the repository of the
//! entity it references, and enforces the validation rules before any write
//! is attempted. Services hold no per-call state, so one instance can be
//! shared across concurrent callers.

pub mod auth;
pub mod catalog;
pub mod orders;
pub(crate) mod validation;

use thiserror::Error;

pub use auth::AccountService;
pub use catalog::{ProductMetricService, ProductModelService};
pub use orders::OrderService;
pub use validation::ValidationError;

use crate::repository::RepositoryError;

/// Errors returned by the CRUD services.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A precondition on the entity argument failed; nothing was written.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The persistence layer failed; passed through unchanged.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
