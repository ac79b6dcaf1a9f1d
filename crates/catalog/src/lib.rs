//! Catalog module: the read-only product/stock listing.
//!
//! The sales crate only ever reads from here, through [`ProductLookup`].

pub mod catalog;
pub mod product;
pub mod sample;

pub use catalog::{Catalog, ProductLookup};
pub use product::Product;
