//! The Order entity and its status flag set.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::repository::Entity;
use crate::domain::shared::OrderId;

/// Order lifecycle status.
///
/// A closed flag set with power-of-two bit values. Creation and update always
/// assign exactly one flag, but the list filter tests bit *intersection*
/// against the stored value, so the set stays multi-value-capable on reads.
///
/// JSON encoding is the symbolic name (`"New"`, `"InProgress"`, ...); the
/// database stores the integer bit value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    /// Order received, not yet picked up.
    #[default]
    New,
    /// Order being worked.
    InProgress,
    /// Order fulfilled.
    Completed,
    /// Order archived out of active views.
    Archived,
}

impl OrderStatus {
    /// The flag's bit value.
    #[must_use]
    pub const fn bits(self) -> i64 {
        match self {
            Self::New => 1,
            Self::InProgress => 2,
            Self::Completed => 4,
            Self::Archived => 8,
        }
    }

    /// Reconstruct a status from its stored bit value.
    #[must_use]
    pub const fn from_bits(bits: i64) -> Option<Self> {
        match bits {
            1 => Some(Self::New),
            2 => Some(Self::InProgress),
            4 => Some(Self::Completed),
            8 => Some(Self::Archived),
            _ => None,
        }
    }

    /// Bitwise-AND non-zero test, the list filter's semantics.
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.bits() & other.bits() != 0
    }
}

/// A customer order.
///
/// Plain record: the ID is assigned at construction and immutable thereafter.
/// The total is unconstrained in sign here; negative totals are rejected at
/// the HTTP boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    /// Unique identifier, assigned at construction.
    pub id: OrderId,
    /// Lifecycle status.
    pub status: OrderStatus,
    /// Delivery address.
    pub address: String,
    /// Order total.
    pub total: Decimal,
}

impl Order {
    /// Create a new order with a freshly generated ID.
    #[must_use]
    pub fn new(status: OrderStatus, address: impl Into<String>, total: Decimal) -> Self {
        Self {
            id: OrderId::generate(),
            status,
            address: address.into(),
            total,
        }
    }
}

impl Entity for Order {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}
