//! Shared precondition checks for the CRUD services.
//!
//! Every validated entity runs through the same state machine before its
//! repository is touched: id-state first, then required text fields in
//! declaration order, then the parent link. The order is fixed so callers
//! can rely on which error fires first. Existence checks against the
//! repositories are the services' job; they run after these local checks
//! pass and before any write.

use thiserror::Error;

use crate::models::{Order, ProductMetric, ProductModel};

/// A precondition on an entity argument failed.
///
/// These are local, synchronous, non-retryable argument errors; each
/// carries the field or id that failed so the caller can act on it.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Create was given an entity that already has an identity.
    #[error("{entity} id must not be pre-assigned")]
    IdAlreadyAssigned {
        /// Entity noun.
        entity: &'static str,
    },

    /// Update was given an entity without an identity.
    #[error("{entity} id is required for update")]
    MissingId {
        /// Entity noun.
        entity: &'static str,
    },

    /// A required text field was empty.
    #[error("{entity} field `{field}` must not be empty")]
    MissingField {
        /// Entity noun.
        entity: &'static str,
        /// Name of the offending field.
        field: &'static str,
    },

    /// The reference to the parent entity was absent.
    #[error("{entity} must reference a {parent}")]
    MissingParent {
        /// Entity noun.
        entity: &'static str,
        /// Parent noun.
        parent: &'static str,
    },

    /// Update referenced an id with no stored record.
    #[error("no {entity} exists with id {id}")]
    UnknownEntity {
        /// Entity noun.
        entity: &'static str,
        /// The id that was not found.
        id: i32,
    },

    /// The referenced parent does not exist in its repository.
    #[error("referenced {parent} {id} does not exist")]
    UnknownParent {
        /// Parent noun.
        parent: &'static str,
        /// The id that was not found.
        id: i32,
    },
}

/// Which operation a draft is being validated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Lifecycle {
    Create,
    Update,
}

/// An entity argument subject to the shared precondition checks.
pub(crate) trait Draft {
    /// Entity noun used in error messages.
    const ENTITY: &'static str;
    /// Parent noun used in error messages.
    const PARENT: &'static str;

    fn id_value(&self) -> Option<i32>;
    fn parent_value(&self) -> Option<i32>;
    /// Required text fields, in validation order.
    fn text_fields(&self) -> Vec<(&'static str, &str)>;
}

/// Run the local checks: id-state, required fields, parent presence.
///
/// Empty strings count as missing, matching how form input arrives from
/// the client.
pub(crate) fn validate_draft<D: Draft>(
    draft: &D,
    lifecycle: Lifecycle,
) -> Result<(), ValidationError> {
    match (lifecycle, draft.id_value()) {
        (Lifecycle::Create, Some(_)) => {
            return Err(ValidationError::IdAlreadyAssigned { entity: D::ENTITY });
        }
        (Lifecycle::Update, None) => {
            return Err(ValidationError::MissingId { entity: D::ENTITY });
        }
        _ => {}
    }

    for (field, value) in draft.text_fields() {
        if value.is_empty() {
            return Err(ValidationError::MissingField {
                entity: D::ENTITY,
                field,
            });
        }
    }

    if draft.parent_value().is_none() {
        return Err(ValidationError::MissingParent {
            entity: D::ENTITY,
            parent: D::PARENT,
        });
    }

    Ok(())
}

impl Draft for ProductModel {
    const ENTITY: &'static str = "product model";
    const PARENT: &'static str = "product";

    fn id_value(&self) -> Option<i32> {
        self.id.map(|id| id.as_i32())
    }

    fn parent_value(&self) -> Option<i32> {
        self.product.map(|id| id.as_i32())
    }

    fn text_fields(&self) -> Vec<(&'static str, &str)> {
        vec![("name", &self.name)]
    }
}

impl Draft for ProductMetric {
    const ENTITY: &'static str = "product metric";
    const PARENT: &'static str = "product model";

    fn id_value(&self) -> Option<i32> {
        self.id.map(|id| id.as_i32())
    }

    fn parent_value(&self) -> Option<i32> {
        self.product_model.map(|id| id.as_i32())
    }

    fn text_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("name", &self.name),
            ("metric_x", &self.metric_x),
            ("metric_y", &self.metric_y),
            ("metric_z", &self.metric_z),
        ]
    }
}

impl Draft for Order {
    const ENTITY: &'static str = "order";
    const PARENT: &'static str = "user";

    fn id_value(&self) -> Option<i32> {
        self.id.map(|id| id.as_i32())
    }

    fn parent_value(&self) -> Option<i32> {
        self.user.map(|id| id.as_i32())
    }

    fn text_fields(&self) -> Vec<(&'static str, &str)> {
        vec![("shipping_address", &self.shipping_address)]
    }
}
