//! Plain-text summary rendering.

use std::fmt::{self, Write};

use chama_shared::types::CurrencyFormat;

use super::types::SettlementSummary;
use crate::balance::Position;

/// Renders a [`SettlementSummary`] as a plain-text report.
#[derive(Debug, Clone, Default)]
pub struct SummaryRenderer {
    format: CurrencyFormat,
}

impl SummaryRenderer {
    /// Creates a renderer that prints amounts with `format`.
    #[must_use]
    pub fn new(format: CurrencyFormat) -> Self {
        Self { format }
    }

    /// Renders the report, one line per fact, sections separated by blank lines.
    #[must_use]
    pub fn render(&self, summary: &SettlementSummary) -> String {
        let mut out = String::new();
        // fmt::Write for String never fails.
        let _ = self.write_to(summary, &mut out);
        out
    }

    /// Writes the report into `out`.
    pub fn write_to(&self, summary: &SettlementSummary, out: &mut impl Write) -> fmt::Result {
        let money = |cents: i64| self.format.format(cents);

        writeln!(out, "Settlement Summary")?;
        writeln!(out, "Group Budget: {}", money(summary.budget))?;
        writeln!(out, "Each Person Share: {}", money(summary.share))?;
        writeln!(out, "Total Contributed: {}", money(summary.total_contributed))?;

        writeln!(out, "\nContributions")?;
        if summary.balances.is_empty() {
            writeln!(out, "No members yet.")?;
        }
        for row in &summary.balances {
            writeln!(out, "- {} contributed {}", row.member, money(row.paid))?;
        }

        writeln!(out, "\nPeople Who Did NOT Contribute")?;
        if summary.non_contributors.is_empty() {
            writeln!(out, "Everyone contributed something.")?;
        }
        for member in &summary.non_contributors {
            writeln!(out, "- {member}")?;
        }

        writeln!(out, "\nWho Owes / Who Receives")?;
        for row in &summary.balances {
            match row.position() {
                Position::Receives(amount) => {
                    writeln!(out, "- {}: Receives {}", row.member, money(amount))?;
                }
                Position::Owes(amount) => {
                    writeln!(out, "- {}: Owes {}", row.member, money(amount))?;
                }
            }
        }

        writeln!(out, "\nWho Pays Who (Final Settlement)")?;
        if summary.transfers.is_empty() {
            writeln!(out, "No transfers needed (everyone is balanced).")?;
        }
        for transfer in &summary.transfers {
            writeln!(
                out,
                "- {} pays {} {}",
                transfer.from,
                transfer.to,
                money(transfer.amount)
            )?;
        }

        if summary.net_imbalance != 0 {
            writeln!(out, "\nUnsettled Difference: {}", money(summary.net_imbalance))?;
        }

        Ok(())
    }
}
