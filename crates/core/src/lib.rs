//! Core business logic for Chama.
//!
//! This crate contains pure logic with ZERO file or network dependencies.
//! Data flows one way: ledger state, then balances, then settlement.
//!
//! # Modules
//!
//! - `ledger` - Members, contributions, and the shared budget
//! - `balance` - Equal shares and signed per-member balances
//! - `settlement` - Minimal transfers that zero the balances
//! - `summary` - Report assembled from the three stages above
//!
//! # Example
//!
//! ```
//! use chama_core::ledger::Ledger;
//!
//! let mut ledger = Ledger::new();
//! ledger.add_member("A");
//! ledger.add_member("B");
//! ledger.add_member("C");
//! ledger.set_budget("90");
//! ledger.set_contribution("A", "90").unwrap();
//!
//! let transfers = ledger.settlement();
//! assert_eq!(transfers.len(), 2);
//! assert_eq!(transfers[0].from.as_str(), "B");
//! assert_eq!(transfers[0].amount, 3_000);
//! ```

pub mod balance;
pub mod ledger;
pub mod settlement;
pub mod summary;

pub use balance::MemberBalance;
pub use ledger::{Ledger, LedgerError, Member};
pub use settlement::Transfer;
pub use summary::{SettlementSummary, SummaryRenderer};
