//! Property-based tests for the settlement engine.

use std::collections::HashMap;

use proptest::prelude::*;

use super::engine::settle;
use crate::balance::MemberBalance;
use crate::ledger::Member;

/// Strategy for a signed balance, biased toward small values so ties happen.
fn balance_strategy() -> impl Strategy<Value = i64> {
    prop_oneof![
        -50i64..50i64,
        -1_000_000_000i64..1_000_000_000i64,
    ]
}

/// Balance rows for distinct members, in generation order.
fn rows_strategy(max_len: usize) -> impl Strategy<Value = Vec<MemberBalance>> {
    prop::collection::vec(balance_strategy(), 0..=max_len).prop_map(|values| {
        values
            .into_iter()
            .enumerate()
            .map(|(idx, balance)| MemberBalance {
                member: Member::parse(&format!("member-{idx}")).unwrap(),
                paid: 0,
                balance,
            })
            .collect()
    })
}

/// Like `rows_strategy`, but the last row absorbs the total so balances sum to zero.
fn zero_sum_rows_strategy(max_len: usize) -> impl Strategy<Value = Vec<MemberBalance>> {
    rows_strategy(max_len).prop_map(|mut rows| {
        let total: i64 = rows.iter().map(|r| r.balance).sum();
        if let Some(last) = rows.last_mut() {
            last.balance -= total;
        }
        rows
    })
}

/// Net flow per member: received minus paid.
fn net_flows(transfers: &[super::Transfer]) -> HashMap<&str, i64> {
    let mut net = HashMap::new();
    for t in transfers {
        *net.entry(t.to.as_str()).or_insert(0) += t.amount;
        *net.entry(t.from.as_str()).or_insert(0) -= t.amount;
    }
    net
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Every transfer moves a positive amount between two different members.
    #[test]
    fn prop_transfers_are_positive(rows in rows_strategy(16)) {
        for t in settle(&rows) {
            prop_assert!(t.amount > 0, "non-positive transfer {:?}", t);
            prop_assert_ne!(t.from, t.to);
        }
    }

    /// At most creditors + debtors - 1 transfers.
    #[test]
    fn prop_cardinality_bound(rows in rows_strategy(16)) {
        let creditors = rows.iter().filter(|r| r.balance > 0).count();
        let debtors = rows.iter().filter(|r| r.balance < 0).count();
        let transfers = settle(&rows);

        if creditors == 0 || debtors == 0 {
            prop_assert!(transfers.is_empty());
        } else {
            prop_assert!(transfers.len() < creditors + debtors);
        }
    }

    /// With matching credits and debits, each member's net flow equals their balance.
    #[test]
    fn prop_conservation_per_member(rows in zero_sum_rows_strategy(16)) {
        let transfers = settle(&rows);
        let net = net_flows(&transfers);

        for row in &rows {
            let flow = net.get(row.member.as_str()).copied().unwrap_or(0);
            prop_assert_eq!(
                flow, row.balance,
                "member {} settled {} against balance {}",
                row.member, flow, row.balance
            );
        }
    }

    /// The transfer total equals the smaller of total credits and total debits.
    #[test]
    fn prop_total_moved_is_smaller_side(rows in rows_strategy(16)) {
        let credits: i64 = rows.iter().filter(|r| r.balance > 0).map(|r| r.balance).sum();
        let debits: i64 = rows.iter().filter(|r| r.balance < 0).map(|r| -r.balance).sum();
        let moved: i64 = settle(&rows).iter().map(|t| t.amount).sum();

        prop_assert_eq!(moved, credits.min(debits));
    }

    /// Debtors only pay and creditors only receive, never more than their balance.
    #[test]
    fn prop_directions_follow_balances(rows in rows_strategy(16)) {
        let transfers = settle(&rows);
        let net = net_flows(&transfers);

        for row in &rows {
            let flow = net.get(row.member.as_str()).copied().unwrap_or(0);
            if row.balance > 0 {
                prop_assert!((0..=row.balance).contains(&flow));
            } else if row.balance < 0 {
                prop_assert!((row.balance..=0).contains(&flow));
            } else {
                prop_assert_eq!(flow, 0);
            }
        }
    }

    /// Same input, same output, same order.
    #[test]
    fn prop_settle_is_deterministic(rows in rows_strategy(16)) {
        prop_assert_eq!(settle(&rows), settle(&rows));
    }
}
