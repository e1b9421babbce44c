//! Persistence adapters.
//!
//! One generic repository implementation per backend, instantiated per
//! entity type: [`sqlite::SqliteRepository`] for production and
//! [`in_memory::InMemoryRepository`] for tests and development.

pub mod in_memory;
pub mod sqlite;

pub use in_memory::InMemoryRepository;
pub use sqlite::{Persistable, SqliteRepository, init_pool, run_migrations};
