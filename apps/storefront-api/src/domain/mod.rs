//! Domain Layer
//!
//! The innermost layer: entities, value objects and the persistence port.
//! Nothing here depends on HTTP or the database driver.
//!
//! - [`catalog`]: the Item entity
//! - [`ordering`]: the Order entity and its status flag set
//! - [`repository`]: the generic persistence abstraction
//! - [`shared`]: identifiers and errors shared across entities

pub mod catalog;
pub mod ordering;
pub mod repository;
pub mod shared;
