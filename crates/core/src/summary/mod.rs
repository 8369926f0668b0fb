//! Settlement summary report.
//!
//! - `types` - the report as data, ready to serialize
//! - `render` - plain-text rendering with a currency prefix

pub mod render;
pub mod types;

pub use render::SummaryRenderer;
pub use types::SettlementSummary;
