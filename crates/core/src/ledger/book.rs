//! The group ledger: members, contributions, and the shared budget.

use std::collections::HashMap;

use chama_shared::types::ToCents;
use once_cell::sync::OnceCell;

use super::error::LedgerError;
use super::types::Member;
use crate::balance::{self, MemberBalance};
use crate::settlement::{self, Transfer};
use crate::summary::SettlementSummary;

/// Canonical state of one group: who is in it, what each member paid, and
/// the budget they split equally.
///
/// Every mutation clears the cached settlement; derived views are recomputed
/// from the current state on demand.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    members: Vec<Member>,
    contributions: HashMap<Member, i64>,
    budget: i64,
    settlement: OnceCell<Vec<Transfer>>,
}

impl Ledger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a member with a zero contribution.
    ///
    /// The name is trimmed first. Blank and duplicate names are ignored and
    /// return `false`.
    pub fn add_member(&mut self, name: &str) -> bool {
        let Some(member) = Member::parse(name) else {
            tracing::debug!(input = %name, "Ignoring blank member name");
            return false;
        };
        if self.contributions.contains_key(&member) {
            tracing::debug!(member = %member, "Ignoring duplicate member");
            return false;
        }

        self.contributions.insert(member.clone(), 0);
        self.members.push(member);
        self.settlement.take();
        true
    }

    /// Records what `name` has paid, replacing any earlier amount.
    ///
    /// `amount` is in major units; text that is not a number counts as 0.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::UnknownMember` if `name` was never added. The
    /// ledger is left untouched.
    pub fn set_contribution(&mut self, name: &str, amount: impl ToCents) -> Result<(), LedgerError> {
        let Some(paid) = self.contributions.get_mut(name) else {
            tracing::warn!(member = %name, "Contribution for unknown member rejected");
            return Err(LedgerError::UnknownMember(name.to_string()));
        };

        *paid = amount.to_cents();
        tracing::debug!(member = %name, amount_cents = *paid, "Contribution recorded");
        self.settlement.take();
        Ok(())
    }

    /// Sets the group budget. `amount` is in major units.
    pub fn set_budget(&mut self, amount: impl ToCents) {
        self.budget = amount.to_cents();
        tracing::debug!(budget_cents = self.budget, "Budget set");
        self.settlement.take();
    }

    /// Returns the ledger to its initial empty state.
    pub fn reset(&mut self) {
        *self = Self::default();
        tracing::debug!("Ledger reset");
    }

    /// Members in the order they were added.
    #[must_use]
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Returns true if `name` is a member. Matching is exact.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.contributions.contains_key(name)
    }

    /// Number of members.
    #[must_use]
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Returns true if the ledger has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// What `name` has paid, or `None` for a non-member.
    #[must_use]
    pub fn contribution(&self, name: &str) -> Option<i64> {
        self.contributions.get(name).copied()
    }

    /// All contributions keyed by member.
    #[must_use]
    pub fn contributions(&self) -> &HashMap<Member, i64> {
        &self.contributions
    }

    /// The group budget in minor units.
    #[must_use]
    pub fn budget(&self) -> i64 {
        self.budget
    }

    /// Sum of all contributions.
    #[must_use]
    pub fn total_contributed(&self) -> i64 {
        self.contributions
            .values()
            .fold(0i64, |acc, paid| acc.saturating_add(*paid))
    }

    /// Each member's equal share of the budget.
    #[must_use]
    pub fn share(&self) -> i64 {
        balance::equal_share(self.budget, self.members.len())
    }

    /// Paid amount and balance per member, in member order.
    #[must_use]
    pub fn balances(&self) -> Vec<MemberBalance> {
        balance::compute_balances(&self.members, &self.contributions, self.budget)
    }

    /// Transfers that settle the current balances.
    ///
    /// Computed on first use and reused until the next mutation.
    #[must_use]
    pub fn settlement(&self) -> &[Transfer] {
        self.settlement.get_or_init(|| {
            tracing::debug!(members = self.members.len(), "Computing settlement");
            settlement::settle(&self.balances())
        })
    }

    /// Full report of the current state.
    #[must_use]
    pub fn summary(&self) -> SettlementSummary {
        SettlementSummary::new(
            self.budget,
            self.share(),
            self.total_contributed(),
            self.balances(),
            self.settlement().to_vec(),
        )
    }
}

/// Ledgers are equal when their members, contributions, and budget match.
impl PartialEq for Ledger {
    fn eq(&self, other: &Self) -> bool {
        self.members == other.members
            && self.contributions == other.contributions
            && self.budget == other.budget
    }
}

impl Eq for Ledger {}
