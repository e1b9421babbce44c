//! HTTP surface (driver adapter).
//!
//! Axum router and per-entity handlers, plus the error-to-status mapping.

pub mod controller;
pub mod error;
pub mod extractors;

pub use controller::{AppState, create_router};
pub use error::ApiError;
pub use extractors::ApiJson;
