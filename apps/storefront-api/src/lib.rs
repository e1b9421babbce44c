// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::too_many_lines,
        clippy::needless_pass_by_value
    )
)]

//! Storefront API - Library
//!
//! A small CRUD REST service over two entities, Item and Order, backed by
//! SQLite through a generic repository.
//!
//! # Architecture
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: entities, value objects and the persistence port
//!   - `catalog`: the Item entity
//!   - `ordering`: the Order entity and its status flag set
//!   - `repository`: generic `Repository<T>` trait
//! - **Application**: wire-facing DTOs and explicit entity↔DTO mapping,
//!   including the update-merge policy
//! - **Infrastructure**: adapters
//!   - `persistence`: generic SQLite repository, in-memory repository
//!   - `http`: axum router, per-entity handlers, error mapping

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

/// Domain layer - entities and the persistence port.
pub mod domain;

/// Application layer - DTOs and mapping.
pub mod application;

/// Infrastructure layer - persistence and HTTP adapters.
pub mod infrastructure;

// Domain re-exports
pub use domain::catalog::Item;
pub use domain::ordering::{Order, OrderStatus};
pub use domain::repository::{Entity, Repository};
pub use domain::shared::{ItemId, OrderId, StoreError};

// Application re-exports
pub use application::dto::{
    CreateItemDto, CreateOrderDto, ItemDto, OrderDto, UpdateItemDto, UpdateOrderDto,
};

// Infrastructure re-exports
pub use infrastructure::http::{ApiError, ApiJson, AppState, create_router};
pub use infrastructure::persistence::{
    InMemoryRepository, Persistable, SqliteRepository, init_pool, run_migrations,
};
