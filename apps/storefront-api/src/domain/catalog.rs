//! The Item entity.

use rust_decimal::Decimal;

use crate::domain::repository::Entity;
use crate::domain::shared::ItemId;

/// A catalog item.
///
/// Plain record: the ID is assigned at construction and immutable thereafter;
/// name and price are mutable through the update path. Non-negativity of the
/// price is enforced at the HTTP boundary, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Unique identifier, assigned at construction.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Decimal,
}

impl Item {
    /// Create a new item with a freshly generated ID.
    #[must_use]
    pub fn new(name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id: ItemId::generate(),
            name: name.into(),
            price,
        }
    }
}

impl Entity for Item {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn new_assigns_nonempty_id() {
        let item = Item::new("Widget", Decimal::from_str("9.99").unwrap());
        assert!(!item.id.as_str().is_empty());
        assert_eq!(item.name, "Widget");
    }

    #[test]
    fn each_item_gets_its_own_id() {
        let a = Item::new("Widget", Decimal::ONE);
        let b = Item::new("Widget", Decimal::ONE);
        assert_ne!(a.id, b.id);
    }
}
