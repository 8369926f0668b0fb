//! Property-based tests for share and balance derivation.

use std::collections::HashMap;

use proptest::prelude::*;

use super::calculator::{compute_balances, equal_share, net_imbalance};
use crate::ledger::Member;

/// Strategy for a list of distinct member names.
fn members_strategy(max_len: usize) -> impl Strategy<Value = Vec<Member>> {
    prop::collection::btree_set("[A-Za-z]{1,8}", 1..=max_len).prop_map(|names| {
        names
            .into_iter()
            .filter_map(|name| Member::parse(&name))
            .collect()
    })
}

/// Strategy for a realistic contribution or budget in minor units.
fn amount_strategy() -> impl Strategy<Value = i64> {
    0i64..10_000_000_000i64
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// sum(balances) == sum(contributions) - n * share.
    #[test]
    fn prop_balances_sum_to_contributions_minus_shares(
        members in members_strategy(12),
        budget in amount_strategy(),
        amounts in prop::collection::vec(amount_strategy(), 12),
    ) {
        let contributions: HashMap<Member, i64> = members
            .iter()
            .cloned()
            .zip(amounts.iter().copied())
            .collect();

        let balances = compute_balances(&members, &contributions, budget);
        let n = i64::try_from(members.len()).unwrap();
        let share = equal_share(budget, members.len());
        let contributed: i64 = contributions.values().sum();

        prop_assert_eq!(net_imbalance(&balances), contributed - n * share);
    }

    /// The shares miss the budget by at most n - 1 minor units.
    #[test]
    fn prop_share_residue_is_bounded(
        budget in -10_000_000_000i64..10_000_000_000i64,
        count in 1usize..500,
    ) {
        let n = i64::try_from(count).unwrap();
        let share = equal_share(budget, count);
        let residue = (n * share - budget).abs();

        prop_assert!(
            residue <= n - 1,
            "residue {} exceeds {} for budget {} over {} members",
            residue, n - 1, budget, count
        );
        // Rounding to nearest actually keeps it within half the member count.
        prop_assert!(2 * residue <= n);
    }

    /// Balances are a pure function of their inputs.
    #[test]
    fn prop_compute_balances_is_deterministic(
        members in members_strategy(8),
        budget in amount_strategy(),
        amounts in prop::collection::vec(amount_strategy(), 8),
    ) {
        let contributions: HashMap<Member, i64> = members
            .iter()
            .cloned()
            .zip(amounts)
            .collect();

        let first = compute_balances(&members, &contributions, budget);
        let second = compute_balances(&members, &contributions, budget);
        prop_assert_eq!(first, second);
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// Specific example: 10 over 4 members is 2.5, which rounds up to 3.
    #[test]
    fn test_half_share_rounds_up() {
        assert_eq!(equal_share(10, 4), 3);
        // 4 * 3 - 10 = 2, within the n - 1 = 3 bound.
        assert!(4 * equal_share(10, 4) - 10 <= 3);
    }
}
