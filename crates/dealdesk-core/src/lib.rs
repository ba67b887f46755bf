//! DealDesk Core: shared error model and money helpers
//!
//! The rate calculator and the negotiation crates compose only through plain
//! numbers; this crate holds the pieces both sides agree on.

pub mod error;
pub mod money;

pub use error::DealDeskError;
pub use money::{format_currency, round_half_away};

/// Version of the pricing tables and template contract
pub const ENGINE_VERSION: &str = "1.0.0";
