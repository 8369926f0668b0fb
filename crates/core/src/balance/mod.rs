//! Per-member balances relative to an equal share of the budget.
//!
//! - `types` - balance rows and creditor/debtor positions
//! - `calculator` - share and balance derivation

pub mod calculator;
pub mod types;

#[cfg(test)]
mod calculator_props;

pub use calculator::{compute_balances, equal_share, net_imbalance};
pub use types::{MemberBalance, Position};
