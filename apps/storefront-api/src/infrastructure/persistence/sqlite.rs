//! SQLite repository adapter.
//!
//! One generic implementation of the domain [`Repository`] port, written
//! against `sqlx` and instantiated per entity type. The per-entity knowledge
//! (table name, column list, parameter binding, row decoding) lives in the
//! [`Persistable`] capability trait, so adding an entity does not mean adding
//! another repository.
//!
//! Decimal columns are stored as TEXT to keep money values exact; status
//! flags are stored as their integer bit value.

use std::marker::PhantomData;
use std::str::FromStr;

use anyhow::{Context, Result};
use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::query::Query;
use sqlx::sqlite::{
    SqliteArguments, SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow,
};
use sqlx::{Row, Sqlite};

use crate::domain::catalog::Item;
use crate::domain::ordering::{Order, OrderStatus};
use crate::domain::repository::{Entity, Repository};
use crate::domain::shared::{ItemId, OrderId, StoreError};

/// Open the SQLite pool, creating the database file when missing.
pub async fn init_pool(url: &str) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(url)
        .context("invalid database url")?
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .context("failed to open sqlite database")?;
    Ok(pool)
}

/// Create both entity tables when they do not exist yet.
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    sqlx::query(Item::CREATE_TABLE_SQL)
        .execute(pool)
        .await
        .context("failed to create item table")?;
    sqlx::query(Order::CREATE_TABLE_SQL)
        .execute(pool)
        .await
        .context("failed to create order table")?;
    Ok(())
}

/// Per-entity capability set the generic repository needs: the table, the
/// column list, and how to bind and decode one row.
pub trait Persistable: Entity + Clone + Send + Sync + Unpin + 'static {
    /// Table name.
    const TABLE: &'static str;
    /// Column names; `id` is always first and is the primary key.
    const COLUMNS: &'static [&'static str];
    /// Idempotent table definition executed at startup.
    const CREATE_TABLE_SQL: &'static str;

    /// Bind every column value, in [`Self::COLUMNS`] order.
    fn bind<'q>(
        &'q self,
        query: Query<'q, Sqlite, SqliteArguments<'q>>,
    ) -> Query<'q, Sqlite, SqliteArguments<'q>>;

    /// Decode one row fetched with [`Self::COLUMNS`].
    ///
    /// # Errors
    ///
    /// Returns a column-decode error when a stored value is malformed.
    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error>;
}

/// SQLite implementation of [`Repository`], generic over the entity type.
#[derive(Debug, Clone)]
pub struct SqliteRepository<T> {
    pool: SqlitePool,
    _entity: PhantomData<fn() -> T>,
}

impl<T: Persistable> SqliteRepository<T> {
    /// Create a repository over an open pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }

    fn select_sql() -> String {
        format!("SELECT {} FROM {}", T::COLUMNS.join(", "), T::TABLE)
    }

    fn insert_sql() -> String {
        let placeholders = (1..=T::COLUMNS.len())
            .map(|i| format!("${i}"))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "INSERT INTO {} ({}) VALUES ({})",
            T::TABLE,
            T::COLUMNS.join(", "),
            placeholders
        )
    }

    fn update_sql() -> String {
        // Bind order matches COLUMNS, so id lands in $1 and the WHERE clause.
        let assignments = T::COLUMNS[1..]
            .iter()
            .enumerate()
            .map(|(i, col)| format!("{col} = ${}", i + 2))
            .collect::<Vec<_>>()
            .join(", ");
        format!("UPDATE {} SET {} WHERE id = $1", T::TABLE, assignments)
    }
}

#[async_trait]
impl<T: Persistable> Repository<T> for SqliteRepository<T> {
    async fn get_by_id(&self, id: &str) -> Result<Option<T>, StoreError> {
        let sql = format!("{} WHERE id = $1", Self::select_sql());
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|r| T::from_row(&r)).transpose().map_err(Into::into)
    }

    async fn get_all(&self) -> Result<Vec<T>, StoreError> {
        let sql = Self::select_sql();
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        rows.iter()
            .map(T::from_row)
            .collect::<Result<Vec<_>, sqlx::Error>>()
            .map_err(Into::into)
    }

    async fn create(&self, entity: T) -> Result<T, StoreError> {
        let sql = Self::insert_sql();
        entity.bind(sqlx::query(&sql)).execute(&self.pool).await?;
        Ok(entity)
    }

    async fn update(&self, entity: &T) -> Result<Option<T>, StoreError> {
        let sql = Self::update_sql();
        let result = entity.bind(sqlx::query(&sql)).execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            Ok(None)
        } else {
            Ok(Some(entity.clone()))
        }
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", T::TABLE);
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err.to_string())
    }
}

fn decode_decimal(row: &SqliteRow, column: &str) -> Result<Decimal, sqlx::Error> {
    let text: String = row.try_get(column)?;
    Decimal::from_str(&text).map_err(|e| sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: Box::new(e),
    })
}

impl Persistable for Item {
    const TABLE: &'static str = "item";
    const COLUMNS: &'static [&'static str] = &["id", "name", "price"];
    const CREATE_TABLE_SQL: &'static str = "CREATE TABLE IF NOT EXISTS item (\
         id TEXT PRIMARY KEY, \
         name TEXT NOT NULL, \
         price TEXT NOT NULL)";

    fn bind<'q>(
        &'q self,
        query: Query<'q, Sqlite, SqliteArguments<'q>>,
    ) -> Query<'q, Sqlite, SqliteArguments<'q>> {
        query
            .bind(self.id.as_str())
            .bind(self.name.as_str())
            .bind(self.price.to_string())
    }

    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: ItemId::new(row.try_get::<String, _>("id")?),
            name: row.try_get("name")?,
            price: decode_decimal(row, "price")?,
        })
    }
}

impl Persistable for Order {
    const TABLE: &'static str = "customer_order";
    const COLUMNS: &'static [&'static str] = &["id", "status", "address", "total"];
    const CREATE_TABLE_SQL: &'static str = "CREATE TABLE IF NOT EXISTS customer_order (\
         id TEXT PRIMARY KEY, \
         status INTEGER NOT NULL, \
         address TEXT NOT NULL, \
         total TEXT NOT NULL)";

    fn bind<'q>(
        &'q self,
        query: Query<'q, Sqlite, SqliteArguments<'q>>,
    ) -> Query<'q, Sqlite, SqliteArguments<'q>> {
        query
            .bind(self.id.as_str())
            .bind(self.status.bits())
            .bind(self.address.as_str())
            .bind(self.total.to_string())
    }

    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        let bits: i64 = row.try_get("status")?;
        let status = OrderStatus::from_bits(bits).ok_or_else(|| sqlx::Error::ColumnDecode {
            index: "status".to_string(),
            source: format!("invalid status bits: {bits}").into(),
        })?;
        Ok(Self {
            id: OrderId::new(row.try_get::<String, _>("id")?),
            status,
            address: row.try_get("address")?,
            total: decode_decimal(row, "total")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn open_test_pool() -> (TempDir, SqlitePool) {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}", dir.path().join("test.db").display());
        let pool = init_pool(&url).await.unwrap();
        run_migrations(&pool).await.unwrap();
        (dir, pool)
    }

    fn widget() -> Item {
        Item::new("Widget", Decimal::from_str("9.99").unwrap())
    }

    #[tokio::test]
    async fn migrations_are_idempotent() {
        let (_dir, pool) = open_test_pool().await;
        run_migrations(&pool).await.unwrap();
    }

    #[tokio::test]
    async fn create_then_get_round_trips_exactly() {
        let (_dir, pool) = open_test_pool().await;
        let repo = SqliteRepository::<Item>::new(pool);

        let created = repo.create(widget()).await.unwrap();
        let found = repo.get_by_id(created.id.as_str()).await.unwrap().unwrap();

        assert_eq!(found, created);
        assert_eq!(found.price, Decimal::from_str("9.99").unwrap());
    }

    #[tokio::test]
    async fn get_by_id_miss_is_none() {
        let (_dir, pool) = open_test_pool().await;
        let repo = SqliteRepository::<Item>::new(pool);

        assert!(repo.get_by_id("nonexistent").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn duplicate_id_hits_the_primary_key() {
        let (_dir, pool) = open_test_pool().await;
        let repo = SqliteRepository::<Item>::new(pool);

        let item = repo.create(widget()).await.unwrap();
        let result = repo.create(item).await;

        assert!(matches!(result, Err(StoreError::Database(_))));
    }

    #[tokio::test]
    async fn get_all_returns_every_row() {
        let (_dir, pool) = open_test_pool().await;
        let repo = SqliteRepository::<Item>::new(pool);

        repo.create(widget()).await.unwrap();
        repo.create(Item::new("Gadget", Decimal::from_str("4.50").unwrap()))
            .await
            .unwrap();

        assert_eq!(repo.get_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn update_missing_row_is_none_and_creates_nothing() {
        let (_dir, pool) = open_test_pool().await;
        let repo = SqliteRepository::<Item>::new(pool);

        let item = widget();
        assert!(repo.update(&item).await.unwrap().is_none());
        assert!(repo.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_overwrites_every_mutable_field() {
        let (_dir, pool) = open_test_pool().await;
        let repo = SqliteRepository::<Item>::new(pool);

        let mut item = repo.create(widget()).await.unwrap();
        item.name = "Sprocket".to_string();
        item.price = Decimal::from_str("1.25").unwrap();

        let updated = repo.update(&item).await.unwrap().unwrap();
        assert_eq!(updated, item);

        let stored = repo.get_by_id(item.id.as_str()).await.unwrap().unwrap();
        assert_eq!(stored, item);
    }

    #[tokio::test]
    async fn delete_twice_reports_false_the_second_time() {
        let (_dir, pool) = open_test_pool().await;
        let repo = SqliteRepository::<Item>::new(pool);

        let item = repo.create(widget()).await.unwrap();
        assert!(repo.delete(item.id.as_str()).await.unwrap());
        assert!(!repo.delete(item.id.as_str()).await.unwrap());
    }

    #[tokio::test]
    async fn order_status_bits_round_trip_through_the_store() {
        let (_dir, pool) = open_test_pool().await;
        let repo = SqliteRepository::<Order>::new(pool);

        let order = repo
            .create(Order::new(
                OrderStatus::InProgress,
                "1 Main St",
                Decimal::from_str("25.00").unwrap(),
            ))
            .await
            .unwrap();

        let stored = repo.get_by_id(order.id.as_str()).await.unwrap().unwrap();
        assert_eq!(stored.status, OrderStatus::InProgress);
        assert_eq!(stored.total, Decimal::from_str("25.00").unwrap());
    }
}
