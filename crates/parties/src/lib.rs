//! Customers: the directory an order's customer is resolved against.

pub mod customer;
pub mod directory;
pub mod sample;

pub use customer::{Customer, CustomerRef};
pub use directory::CustomerDirectory;
