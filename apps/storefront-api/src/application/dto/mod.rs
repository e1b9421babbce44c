//! Data transfer objects for the HTTP boundary.
//!
//! Entity and DTO shapes are currently field-identical; the mapping is an
//! explicit, compiler-checked field copy in each direction rather than a
//! reflection-based mapper, so the two shapes can diverge later without
//! hidden behavior.

pub mod item_dto;
pub mod order_dto;

pub use item_dto::{CreateItemDto, ItemDto, UpdateItemDto};
pub use order_dto::{CreateOrderDto, OrderDto, UpdateOrderDto};
