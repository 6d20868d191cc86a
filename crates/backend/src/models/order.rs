//! Order domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use rustwear_core::{OrderId, Price, UserId};

/// A placed order.
///
/// Whole-record semantics: updates replace the stored order, they do not
/// patch individual fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Unique ID, `None` until persisted.
    pub id: Option<OrderId>,
    /// Account that placed the order.
    pub user: Option<UserId>,
    /// Destination address as a single formatted block.
    pub shipping_address: String,
    /// When the order was placed.
    pub order_date: DateTime<Utc>,
    /// Order total at checkout time.
    pub total: Price,
}
