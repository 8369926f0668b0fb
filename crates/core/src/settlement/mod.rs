//! Settlement of member balances into peer-to-peer transfers.
//!
//! This module implements the final stage of the split:
//! - Transfer type (who pays whom, how much)
//! - Greedy matching of the largest debtors against the largest creditors

pub mod engine;
pub mod types;

#[cfg(test)]
mod engine_props;

pub use engine::settle;
pub use types::Transfer;
