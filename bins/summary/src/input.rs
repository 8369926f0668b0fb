//! Ledger file format.
//!
//! ```json
//! { "budget": "12000", "members": [ { "name": "Alice", "contribution": 9000 }, { "name": "Bob" } ] }
//! ```
//!
//! Amounts are major units given as JSON strings or numbers. Anything else
//! counts as zero, the same as text that is not a number.

use chama_core::ledger::{Ledger, LedgerError, Member};
use chama_shared::types::{ToCents, parse_currency_to_cents};
use serde::Deserialize;

/// Top-level ledger file.
#[derive(Debug, Default, Deserialize)]
pub struct LedgerFile {
    /// Group budget.
    #[serde(default)]
    pub budget: Option<RawAmount>,
    /// Members in the order they should be added.
    #[serde(default)]
    pub members: Vec<MemberEntry>,
}

/// One member line.
#[derive(Debug, Deserialize)]
pub struct MemberEntry {
    /// Display name, trimmed on add.
    pub name: String,
    /// What the member paid. Missing means 0.
    #[serde(default)]
    pub contribution: Option<RawAmount>,
}

/// An amount exactly as it appeared in the file.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    /// JSON number.
    Number(serde_json::Number),
    /// JSON string.
    Text(String),
    /// Any other JSON value.
    Other(serde_json::Value),
}

impl ToCents for RawAmount {
    fn to_cents(&self) -> i64 {
        match self {
            Self::Number(number) => parse_currency_to_cents(&number.to_string()),
            Self::Text(text) => parse_currency_to_cents(text),
            Self::Other(value) => {
                tracing::warn!(input = %value, "Non-numeric amount treated as zero");
                0
            }
        }
    }
}

impl LedgerFile {
    /// Parses a ledger file from JSON text.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Replays the file into a fresh ledger.
    ///
    /// Blank and repeated names are skipped along with their contribution,
    /// matching what `Ledger::add_member` accepts.
    pub fn into_ledger(self) -> Result<Ledger, LedgerError> {
        let mut ledger = Ledger::new();

        for entry in self.members {
            let Some(member) = Member::parse(&entry.name) else {
                tracing::warn!("Skipping member with blank name");
                continue;
            };
            if !ledger.add_member(member.as_str()) {
                tracing::warn!(member = %member, "Skipping repeated member");
                continue;
            }
            if let Some(amount) = entry.contribution {
                ledger.set_contribution(member.as_str(), amount)?;
            }
        }

        if let Some(budget) = self.budget {
            ledger.set_budget(budget);
        }

        tracing::info!(
            members = ledger.member_count(),
            budget_cents = ledger.budget(),
            "Ledger loaded"
        );
        Ok(ledger)
    }
}
