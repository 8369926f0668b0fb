//! Greedy settlement engine.
//!
//! Creditors (balance > 0) are sorted largest first and debtors
//! (balance < 0) most negative first; both sorts are stable, so equal balances
//! keep member order and the output is reproducible. Two cursors then walk the
//! lists, and each step pays `min(debt, credit)` from the current debtor to the
//! current creditor, moving past whichever side reached zero.
//!
//! Every step zeroes at least one side, so the result has at most
//! `creditors + debtors - 1` transfers.

use super::types::Transfer;
use crate::balance::MemberBalance;
use crate::ledger::Member;

/// Produces the transfers that settle `balances`.
///
/// Members with a zero balance take no part. When credits and debits do not
/// match (uneven share rounding, or contributions that differ from the
/// budget), the larger side is left partly unsettled.
///
/// # Example
///
/// ```
/// use chama_core::balance::MemberBalance;
/// use chama_core::ledger::Member;
/// use chama_core::settlement::settle;
///
/// let row = |name: &str, balance| MemberBalance {
///     member: Member::parse(name).unwrap(),
///     paid: 0,
///     balance,
/// };
/// let transfers = settle(&[row("A", 6_000), row("B", -3_000), row("C", -3_000)]);
///
/// assert_eq!(transfers.len(), 2);
/// assert_eq!(transfers[0].from.as_str(), "B");
/// assert_eq!(transfers[0].to.as_str(), "A");
/// assert_eq!(transfers[0].amount, 3_000);
/// ```
#[must_use]
pub fn settle(balances: &[MemberBalance]) -> Vec<Transfer> {
    // Outstanding amounts as magnitudes, so i64::MIN needs no negation.
    let mut creditors: Vec<(&Member, u64)> = balances
        .iter()
        .filter(|row| row.is_creditor())
        .map(|row| (&row.member, row.balance.unsigned_abs()))
        .collect();
    let mut debtors: Vec<(&Member, u64)> = balances
        .iter()
        .filter(|row| row.is_debtor())
        .map(|row| (&row.member, row.balance.unsigned_abs()))
        .collect();

    creditors.sort_by(|a, b| b.1.cmp(&a.1));
    debtors.sort_by(|a, b| b.1.cmp(&a.1));

    let mut transfers = Vec::with_capacity((creditors.len() + debtors.len()).saturating_sub(1));
    let mut i = 0; // debtor cursor
    let mut j = 0; // creditor cursor

    while i < debtors.len() && j < creditors.len() {
        let (debtor, owed) = debtors[i];
        let (creditor, due) = creditors[j];
        let amount = owed.min(due);

        if amount > 0 {
            // Bounded by a positive i64 balance.
            let amount_cents = i64::try_from(amount).unwrap_or(i64::MAX);
            transfers.push(Transfer::new(debtor.clone(), creditor.clone(), amount_cents));
            debtors[i].1 -= amount;
            creditors[j].1 -= amount;
        }

        if debtors[i].1 == 0 {
            i += 1;
        }
        if creditors[j].1 == 0 {
            j += 1;
        }
    }

    tracing::debug!(
        creditors = creditors.len(),
        debtors = debtors.len(),
        transfers = transfers.len(),
        "Settlement computed"
    );

    transfers
}
