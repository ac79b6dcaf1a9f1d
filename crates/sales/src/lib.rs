//! Sales orders: composing, validating and storing point-of-sale orders.
//!
//! This crate contains business rules for orders, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage beyond memory).

pub mod composer;
pub mod line_item;
pub mod order;
pub mod sample;
pub mod session;
pub mod store;

pub use composer::{CompositionError, DraftValidation, OrderComposer};
pub use line_item::LineItem;
pub use order::{Order, OrderStatus, PaymentMethod, WALK_IN_CUSTOMER};
pub use session::{OrderSession, SessionMode, SubmitError};
pub use store::{InMemoryOrderStore, OrderStore};
