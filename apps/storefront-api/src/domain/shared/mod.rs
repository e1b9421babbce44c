//! Shared Domain Types
//!
//! Identifiers and errors shared across entities.

pub mod errors;
pub mod identifiers;

pub use errors::StoreError;
pub use identifiers::{ItemId, OrderId};
