//! Infrastructure Layer
//!
//! Adapters binding the domain to the outside world: the SQLite persistence
//! adapter and the axum HTTP surface.

pub mod http;
pub mod persistence;
