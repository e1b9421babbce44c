//! Item DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::catalog::Item;

/// Wire representation of an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDto {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Decimal,
}

impl ItemDto {
    /// Explicit field copy from the persisted shape.
    #[must_use]
    pub fn from_entity(item: &Item) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name.clone(),
            price: item.price,
        }
    }
}

/// Body of `POST /api/items`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateItemDto {
    /// Display name. Must be non-empty.
    pub name: String,
    /// Unit price. Must not be negative.
    pub price: Decimal,
}

impl CreateItemDto {
    /// Build the entity to persist; the ID is assigned here.
    #[must_use]
    pub fn into_entity(self) -> Item {
        Item::new(self.name, self.price)
    }
}

/// Body of `PUT /api/items/{id}`. Every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateItemDto {
    /// Replacement name, if any.
    pub name: Option<String>,
    /// Replacement price, if any.
    pub price: Option<Decimal>,
}

impl UpdateItemDto {
    /// Update-merge policy: each field is the supplied value if present,
    /// else the existing row's value. The ID always comes from the existing
    /// row. The result is handed to the repository's full-field overwrite,
    /// which yields PATCH-like semantics from a PUT-shaped operation.
    #[must_use]
    pub fn merge(&self, existing: &Item) -> Item {
        Item {
            id: existing.id.clone(),
            name: self.name.clone().unwrap_or_else(|| existing.name.clone()),
            price: self.price.unwrap_or(existing.price),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn widget() -> Item {
        Item::new("Widget", Decimal::from_str("9.99").unwrap())
    }

    #[test]
    fn from_entity_copies_every_field() {
        let item = widget();
        let dto = ItemDto::from_entity(&item);
        assert_eq!(dto.id, item.id.to_string());
        assert_eq!(dto.name, item.name);
        assert_eq!(dto.price, item.price);
    }

    #[test]
    fn merge_with_all_fields_absent_keeps_the_row() {
        let item = widget();
        let merged = UpdateItemDto::default().merge(&item);
        assert_eq!(merged, item);
    }

    #[test]
    fn merge_overrides_only_supplied_fields() {
        let item = widget();
        let update = UpdateItemDto {
            name: Some("Gadget".to_string()),
            price: None,
        };
        let merged = update.merge(&item);
        assert_eq!(merged.id, item.id);
        assert_eq!(merged.name, "Gadget");
        assert_eq!(merged.price, item.price);
    }

    #[test]
    fn merge_never_takes_id_from_caller_input() {
        let item = widget();
        let merged = UpdateItemDto {
            name: Some("Gadget".to_string()),
            price: Some(Decimal::ONE),
        }
        .merge(&item);
        assert_eq!(merged.id, item.id);
    }

    #[test]
    fn update_body_fields_default_to_absent() {
        let update: UpdateItemDto = serde_json::from_str("{}").unwrap();
        assert!(update.name.is_none());
        assert!(update.price.is_none());
    }
}
