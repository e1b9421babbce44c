//! Application Layer
//!
//! Wire-facing DTOs and the explicit entity↔DTO mapping functions,
//! including the update-merge policy applied before repository updates.

pub mod dto;
