//! `pos-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the catalog,
//! customer and sales crates (no IO, no storage).

pub mod entity;
pub mod error;
pub mod id;
pub mod money;

pub use entity::{Entity, find_by_id, position_by_id};
pub use error::{DomainError, DomainResult};
pub use id::{CustomerId, IdGenerator, OrderId, ProductId, SequentialIds, UuidIds};
pub use money::Money;
