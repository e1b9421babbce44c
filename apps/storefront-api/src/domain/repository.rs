//! Generic Repository Trait
//!
//! Defines the persistence abstraction shared by both entity collections.
//! Implemented by adapters in the infrastructure layer (SQLite, in-memory),
//! once, and instantiated per entity type.

use async_trait::async_trait;

use crate::domain::shared::StoreError;

/// Capability every persisted entity exposes to the generic repository.
pub trait Entity {
    /// The stored identifier, compared exactly by the repository. Callers
    /// lowercase IDs before lookups; generated IDs are already lowercase.
    fn id(&self) -> &str;
}

/// Repository trait mediating all access to one entity's stored collection.
///
/// Each operation is a single atomic unit against the store; there is no
/// transactional batching and no retry. Cancellation is cooperative: dropping
/// the returned future abandons the operation at its next suspension point.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Find an entity by ID. Absence is `None`, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    async fn get_by_id(&self, id: &str) -> Result<Option<T>, StoreError>;

    /// Return every stored row as an unordered snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    async fn get_all(&self) -> Result<Vec<T>, StoreError>;

    /// Insert the entity as-is and echo the persisted row.
    ///
    /// The ID is pre-assigned by entity construction. Uniqueness is enforced
    /// by the store's primary key; a duplicate surfaces as a store error.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails (including duplicate ID).
    async fn create(&self, entity: T) -> Result<T, StoreError>;

    /// Overwrite every mutable field of the row with the entity's ID.
    ///
    /// Returns `None` when no such row exists; no row is created. This is a
    /// full-field overwrite — partial-patch semantics are the caller's job.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    async fn update(&self, entity: &T) -> Result<Option<T>, StoreError>;

    /// Remove the row with the given ID.
    ///
    /// Returns `false` when no row matched, `true` when one was removed.
    /// Removal is permanent, not a tombstone.
    ///
    /// # Errors
    ///
    /// Returns an error if the deletion fails.
    async fn delete(&self, id: &str) -> Result<bool, StoreError>;
}
