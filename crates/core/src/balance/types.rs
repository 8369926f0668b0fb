//! Balance row types.

use serde::{Deserialize, Serialize};

use crate::ledger::Member;

/// A member's paid amount and signed balance, in minor units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberBalance {
    /// The member.
    pub member: Member,
    /// Total contributed.
    pub paid: i64,
    /// `paid - share`. Positive means overpaid, negative means underpaid.
    pub balance: i64,
}

/// Which way money flows for a member once the group settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "direction", content = "amount", rename_all = "lowercase")]
pub enum Position {
    /// Member is owed this amount. A zero balance counts as receiving nothing.
    Receives(i64),
    /// Member owes this amount.
    Owes(i64),
}

impl MemberBalance {
    /// Returns true if the member overpaid.
    #[must_use]
    pub const fn is_creditor(&self) -> bool {
        self.balance > 0
    }

    /// Returns true if the member underpaid.
    #[must_use]
    pub const fn is_debtor(&self) -> bool {
        self.balance < 0
    }

    /// Returns true if the member contributed nothing.
    #[must_use]
    pub const fn is_non_contributor(&self) -> bool {
        self.paid == 0
    }

    /// The member's position as a non-negative amount and a direction.
    #[must_use]
    pub const fn position(&self) -> Position {
        if self.balance >= 0 {
            Position::Receives(self.balance)
        } else {
            Position::Owes(self.balance.saturating_neg())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(balance: i64) -> MemberBalance {
        MemberBalance {
            member: Member::parse("Achieng").unwrap(),
            paid: 0,
            balance,
        }
    }

    #[test]
    fn test_position() {
        assert_eq!(row(600).position(), Position::Receives(600));
        assert_eq!(row(0).position(), Position::Receives(0));
        assert_eq!(row(-300).position(), Position::Owes(300));
        assert_eq!(row(i64::MIN).position(), Position::Owes(i64::MAX));
    }

    #[test]
    fn test_sides() {
        assert!(row(1).is_creditor());
        assert!(!row(1).is_debtor());
        assert!(row(-1).is_debtor());
        assert!(!row(0).is_creditor());
        assert!(!row(0).is_debtor());
        assert!(row(0).is_non_contributor());
    }
}
