//! Summary report data.

use std::collections::HashMap;

use serde::Serialize;

use crate::balance::{self, MemberBalance};
use crate::ledger::Member;
use crate::settlement::{self, Transfer};

/// Everything a presentation layer needs to show the group's position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettlementSummary {
    /// Group budget.
    pub budget: i64,
    /// Equal share per member.
    pub share: i64,
    /// Sum of all contributions.
    pub total_contributed: i64,
    /// Per-member rows, in member order.
    pub balances: Vec<MemberBalance>,
    /// Members who paid nothing, in member order.
    pub non_contributors: Vec<Member>,
    /// Transfers that settle the balances.
    pub transfers: Vec<Transfer>,
    /// Sum of all balances. Non-zero when contributions and shares differ.
    pub net_imbalance: i64,
}

impl SettlementSummary {
    /// Assembles a summary from already derived values.
    #[must_use]
    pub fn new(
        budget: i64,
        share: i64,
        total_contributed: i64,
        balances: Vec<MemberBalance>,
        transfers: Vec<Transfer>,
    ) -> Self {
        let non_contributors = balances
            .iter()
            .filter(|row| row.is_non_contributor())
            .map(|row| row.member.clone())
            .collect();
        let net_imbalance = balance::net_imbalance(&balances);

        Self {
            budget,
            share,
            total_contributed,
            balances,
            non_contributors,
            transfers,
            net_imbalance,
        }
    }

    /// Runs the whole pipeline over a snapshot of ledger data.
    #[must_use]
    pub fn build(members: &[Member], contributions: &HashMap<Member, i64>, budget: i64) -> Self {
        let balances = balance::compute_balances(members, contributions, budget);
        let transfers = settlement::settle(&balances);
        let total_contributed = members
            .iter()
            .filter_map(|member| contributions.get(member))
            .fold(0i64, |acc, paid| acc.saturating_add(*paid));

        Self::new(
            budget,
            balance::equal_share(budget, members.len()),
            total_contributed,
            balances,
            transfers,
        )
    }

    /// Returns true if nobody needs to pay anybody.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.transfers.is_empty()
    }
}
