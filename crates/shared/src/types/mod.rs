//! Common types used across the application.

pub mod money;

pub use money::{
    CENTS_PER_UNIT, CurrencyFormat, DEFAULT_CURRENCY_PREFIX, ToCents, format_cents,
    parse_currency_to_cents, round_half_up,
};
