//! Point-of-sale application wiring: configuration plus the scripted
//! checkout the `pos` binary runs over the sample data.

pub mod checkout;
pub mod config;

pub use checkout::{CheckoutSummary, PosState, run_checkout};
pub use config::{ConfigError, IdStrategy, PosConfig};
