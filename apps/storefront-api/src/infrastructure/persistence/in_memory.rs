//! In-memory repository for testing.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::repository::{Entity, Repository};
use crate::domain::shared::StoreError;

/// In-memory implementation of [`Repository`].
///
/// Suitable for testing and development. Mirrors the store's primary-key
/// behavior: creating a duplicate ID fails with a store error.
#[derive(Debug, Default)]
pub struct InMemoryRepository<T> {
    rows: RwLock<HashMap<String, T>>,
}

impl<T: Entity + Clone> InMemoryRepository<T> {
    /// Create a new empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
        }
    }

    /// Number of stored rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.read().unwrap().len()
    }

    /// Whether the repository holds no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.read().unwrap().is_empty()
    }

    /// Insert a row directly (for test setup).
    pub fn add(&self, entity: T) {
        let mut rows = self.rows.write().unwrap();
        rows.insert(entity.id().to_string(), entity);
    }
}

#[async_trait]
impl<T> Repository<T> for InMemoryRepository<T>
where
    T: Entity + Clone + Send + Sync,
{
    async fn get_by_id(&self, id: &str) -> Result<Option<T>, StoreError> {
        let rows = self.rows.read().unwrap();
        Ok(rows.get(id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<T>, StoreError> {
        let rows = self.rows.read().unwrap();
        Ok(rows.values().cloned().collect())
    }

    async fn create(&self, entity: T) -> Result<T, StoreError> {
        let mut rows = self.rows.write().unwrap();
        if rows.contains_key(entity.id()) {
            return Err(StoreError::Database(format!(
                "UNIQUE constraint failed: id {}",
                entity.id()
            )));
        }
        rows.insert(entity.id().to_string(), entity.clone());
        Ok(entity)
    }

    async fn update(&self, entity: &T) -> Result<Option<T>, StoreError> {
        let mut rows = self.rows.write().unwrap();
        if !rows.contains_key(entity.id()) {
            return Ok(None);
        }
        rows.insert(entity.id().to_string(), entity.clone());
        Ok(Some(entity.clone()))
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let mut rows = self.rows.write().unwrap();
        Ok(rows.remove(id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::Item;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn widget() -> Item {
        Item::new("Widget", Decimal::from_str("9.99").unwrap())
    }

    #[tokio::test]
    async fn create_and_get_by_id() {
        let repo = InMemoryRepository::new();
        let item = repo.create(widget()).await.unwrap();

        let found = repo.get_by_id(item.id.as_str()).await.unwrap();
        assert_eq!(found, Some(item));
    }

    #[tokio::test]
    async fn get_by_id_miss_is_none() {
        let repo: InMemoryRepository<Item> = InMemoryRepository::new();
        assert!(repo.get_by_id("nonexistent").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn create_duplicate_id_is_a_store_error() {
        let repo = InMemoryRepository::new();
        let item = repo.create(widget()).await.unwrap();

        let result = repo.create(item).await;
        assert!(result.is_err());
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn get_all_snapshots_every_row() {
        let repo = InMemoryRepository::new();
        repo.add(widget());
        repo.add(Item::new("Gadget", Decimal::from_str("4.50").unwrap()));

        let all = repo.get_all().await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn update_missing_row_is_none_and_creates_nothing() {
        let repo = InMemoryRepository::new();
        let item = widget();

        let updated = repo.update(&item).await.unwrap();
        assert!(updated.is_none());
        assert!(repo.is_empty());
    }

    #[tokio::test]
    async fn update_overwrites_every_field() {
        let repo = InMemoryRepository::new();
        let mut item = repo.create(widget()).await.unwrap();
        item.name = "Sprocket".to_string();
        item.price = Decimal::ONE;

        let updated = repo.update(&item).await.unwrap().unwrap();
        assert_eq!(updated, item);

        let stored = repo.get_by_id(item.id.as_str()).await.unwrap().unwrap();
        assert_eq!(stored.name, "Sprocket");
    }

    #[tokio::test]
    async fn delete_twice_reports_false_the_second_time() {
        let repo = InMemoryRepository::new();
        let item = repo.create(widget()).await.unwrap();

        assert!(repo.delete(item.id.as_str()).await.unwrap());
        assert!(!repo.delete(item.id.as_str()).await.unwrap());
    }
}
