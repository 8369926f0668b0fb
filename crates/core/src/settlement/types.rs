//! Settlement types.

use serde::{Deserialize, Serialize};

use crate::ledger::Member;

/// A single payment that moves money from a debtor to a creditor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    /// Member who pays.
    pub from: Member,
    /// Member who receives.
    pub to: Member,
    /// Amount in minor units. Always positive.
    pub amount: i64,
}

impl Transfer {
    /// Creates a new transfer.
    #[must_use]
    pub fn new(from: Member, to: Member, amount: i64) -> Self {
        Self { from, to, amount }
    }
}
