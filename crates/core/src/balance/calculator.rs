//! Share and balance derivation.
//!
//! Every member owes the same share of the budget:
//! `share = round(budget / member_count)`, with halves rounding toward
//! positive infinity. A member's balance is what they paid minus that share.
//!
//! Rounding the share means `share * member_count` can miss the budget by up
//! to `member_count - 1` minor units. That residue is left as is; nothing
//! redistributes it.

use std::collections::HashMap;

use chama_shared::types::round_half_up;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use super::types::MemberBalance;
use crate::ledger::Member;

/// Equal share of `budget` per member, in minor units.
///
/// Returns 0 when there are no members.
///
/// # Example
///
/// ```
/// use chama_core::balance::equal_share;
///
/// assert_eq!(equal_share(9_000, 3), 3_000);
/// assert_eq!(equal_share(100, 3), 33);
/// assert_eq!(equal_share(5, 2), 3);
/// ```
#[must_use]
pub fn equal_share(budget: i64, member_count: usize) -> i64 {
    if member_count == 0 {
        return 0;
    }

    let exact = Decimal::from(budget) / Decimal::from(member_count);
    // |share| <= |budget| + 1 for any count, and i64::MIN / 1 is exact.
    round_half_up(exact).to_i64().unwrap_or(budget)
}

/// Derives each member's paid amount and balance.
///
/// Members without a contribution entry count as having paid 0. The output
/// follows `members` order.
#[must_use]
pub fn compute_balances(
    members: &[Member],
    contributions: &HashMap<Member, i64>,
    budget: i64,
) -> Vec<MemberBalance> {
    let share = equal_share(budget, members.len());

    members
        .iter()
        .map(|member| {
            let paid = contributions.get(member).copied().unwrap_or(0);
            MemberBalance {
                member: member.clone(),
                paid,
                balance: paid.saturating_sub(share),
            }
        })
        .collect()
}

/// Sum of all balances.
///
/// Zero when contributions exactly cover `share * member_count`. A positive
/// value is left owed to creditors after settlement, a negative value is left
/// unpaid by debtors.
#[must_use]
pub fn net_imbalance(balances: &[MemberBalance]) -> i64 {
    balances
        .iter()
        .fold(0i64, |acc, row| acc.saturating_add(row.balance))
}
