//! Group ledger state.
//!
//! This module holds the canonical data everything else derives from:
//! - Members, unique by trimmed, case-sensitive name
//! - One contribution per member, in minor units
//! - The budget shared equally among members

pub mod book;
pub mod error;
pub mod types;


pub use book::Ledger;
pub use error::LedgerError;
pub use types::Member;
