//! Order DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::ordering::{Order, OrderStatus};

/// Wire representation of an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDto {
    /// Unique identifier.
    pub id: String,
    /// Lifecycle status, encoded as its symbolic name.
    pub status: OrderStatus,
    /// Delivery address.
    pub address: String,
    /// Order total.
    pub total: Decimal,
}

impl OrderDto {
    /// Explicit field copy from the persisted shape.
    #[must_use]
    pub fn from_entity(order: &Order) -> Self {
        Self {
            id: order.id.to_string(),
            status: order.status,
            address: order.address.clone(),
            total: order.total,
        }
    }
}

/// Body of `POST /api/orders`. Omitted status defaults to `New`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderDto {
    /// Initial status; `New` when omitted.
    #[serde(default)]
    pub status: OrderStatus,
    /// Delivery address. Must be non-empty.
    pub address: String,
    /// Order total. Must not be negative.
    pub total: Decimal,
}

impl CreateOrderDto {
    /// Build the entity to persist; the ID is assigned here.
    #[must_use]
    pub fn into_entity(self) -> Order {
        Order::new(self.status, self.address, self.total)
    }
}

/// Body of `PUT /api/orders/{id}`. Every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateOrderDto {
    /// Replacement status, if any.
    pub status: Option<OrderStatus>,
    /// Replacement address, if any.
    pub address: Option<String>,
    /// Replacement total, if any.
    pub total: Option<Decimal>,
}

impl UpdateOrderDto {
    /// Update-merge policy: supplied value if present, else the existing
    /// row's value; the ID always comes from the existing row.
    #[must_use]
    pub fn merge(&self, existing: &Order) -> Order {
        Order {
            id: existing.id.clone(),
            status: self.status.unwrap_or(existing.status),
            address: self
                .address
                .clone()
                .unwrap_or_else(|| existing.address.clone()),
            total: self.total.unwrap_or(existing.total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn order() -> Order {
        Order::new(
            OrderStatus::New,
            "1 Main St",
            Decimal::from_str("25.00").unwrap(),
        )
    }

    #[test]
    fn from_entity_copies_every_field() {
        let order = order();
        let dto = OrderDto::from_entity(&order);
        assert_eq!(dto.id, order.id.to_string());
        assert_eq!(dto.status, order.status);
        assert_eq!(dto.address, order.address);
        assert_eq!(dto.total, order.total);
    }

    #[test]
    fn create_body_defaults_status_to_new() {
        let dto: CreateOrderDto =
            serde_json::from_str(r#"{"address": "1 Main St", "total": "25.00"}"#).unwrap();
        assert_eq!(dto.status, OrderStatus::New);
    }

    #[test]
    fn merge_with_all_fields_absent_keeps_the_row() {
        let order = order();
        let merged = UpdateOrderDto::default().merge(&order);
        assert_eq!(merged, order);
    }

    #[test]
    fn merge_overrides_only_supplied_fields() {
        let order = order();
        let merged = UpdateOrderDto {
            status: Some(OrderStatus::InProgress),
            address: None,
            total: None,
        }
        .merge(&order);
        assert_eq!(merged.id, order.id);
        assert_eq!(merged.status, OrderStatus::InProgress);
        assert_eq!(merged.address, order.address);
        assert_eq!(merged.total, order.total);
    }
}
