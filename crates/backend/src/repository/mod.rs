//! Persistence collaborator interfaces.
//!
//! The service layer is storage-engine agnostic: it talks to persistence
//! through the traits below and never assumes a concrete backend. Identity
//! assignment happens inside `create`; `read` and `delete` report absence
//! as `Ok(None)` rather than an error. The services never retry these
//! calls and never catch their errors.

pub mod catalog;
pub mod orders;
pub mod users;

use thiserror::Error;

pub use catalog::{ProductMetricRepository, ProductModelRepository, ProductRepository};
pub use orders::OrderRepository;
pub use users::UserRepository;

/// Errors that can occur during repository operations.
///
/// These are upstream failures; the service layer passes them through
/// unchanged rather than mapping them to validation errors.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The underlying storage engine failed.
    #[error("storage error: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Data in the store is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Constraint violation (e.g., unique username).
    #[error("constraint violation: {0}")]
    Conflict(String),
}
