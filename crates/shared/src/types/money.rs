//! Minor-unit money parsing and formatting.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts are `i64` minor units (cents); every conversion from user input
//! goes through `rust_decimal::Decimal` so no binary rounding leaks in.
//!
//! Malformed input is not an error here. Anything that does not start with a
//! number converts to zero, mirroring how form inputs behave.

use rust_decimal::Decimal;
use rust_decimal::prelude::*;

/// Minor units per major currency unit.
pub const CENTS_PER_UNIT: i64 = 100;

/// Exponents beyond this magnitude cannot produce a representable `i64` cent
/// amount from a `Decimal` mantissa.
const MAX_EXPONENT_MAGNITUDE: u64 = 60;

/// Default prefix used when rendering amounts.
pub const DEFAULT_CURRENCY_PREFIX: &str = "Ksh";

/// Rounds to the nearest integer, halves going toward positive infinity.
///
/// `2.5 -> 3`, `-2.5 -> -2`.
#[must_use]
pub fn round_half_up(value: Decimal) -> Decimal {
    (value + Decimal::new(5, 1)).floor()
}

/// Converts a raw major-unit amount into minor units.
///
/// Parsing reads the longest numeric prefix after leading whitespace: an
/// optional sign, digits with an optional fractional part, and an optional
/// exponent (`"12.5"`, `"-.5"`, `"1e3"`, `"42 shillings"`). The value is
/// scaled by 100 and rounded with [`round_half_up`].
///
/// Returns 0 when no numeric prefix exists or the result does not fit in an
/// `i64`.
///
/// # Example
///
/// ```
/// use chama_shared::types::parse_currency_to_cents;
///
/// assert_eq!(parse_currency_to_cents("1234.5"), 123_450);
/// assert_eq!(parse_currency_to_cents("abc"), 0);
/// ```
#[must_use]
pub fn parse_currency_to_cents(raw: &str) -> i64 {
    match numeric_prefix(raw).and_then(|(value, exponent)| scale_to_cents(value, exponent)) {
        Some(cents) => cents,
        None => {
            if !raw.trim().is_empty() {
                tracing::warn!(input = %raw, "Non-numeric amount treated as zero");
            }
            0
        }
    }
}

/// Splits the numeric prefix of `raw` into a mantissa and a decimal exponent.
fn numeric_prefix(raw: &str) -> Option<(Decimal, i64)> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut pos = 0;

    let negative = match bytes.first() {
        Some(b'-') => {
            pos = 1;
            true
        }
        Some(b'+') => {
            pos = 1;
            false
        }
        _ => false,
    };

    let int_start = pos;
    while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
        pos += 1;
    }
    let int_digits = &s[int_start..pos];

    let mut frac_digits = "";
    if bytes.get(pos) == Some(&b'.') {
        let frac_start = pos + 1;
        let mut end = frac_start;
        while bytes.get(end).is_some_and(u8::is_ascii_digit) {
            end += 1;
        }
        frac_digits = &s[frac_start..end];
        pos = end;
    }

    if int_digits.is_empty() && frac_digits.is_empty() {
        return None;
    }

    let mut exponent = 0i64;
    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut end = pos + 1;
        let exp_negative = match bytes.get(end) {
            Some(b'-') => {
                end += 1;
                true
            }
            Some(b'+') => {
                end += 1;
                false
            }
            _ => false,
        };
        let digits_start = end;
        while bytes.get(end).is_some_and(u8::is_ascii_digit) {
            end += 1;
        }
        // "1e" or "1e+" keeps the mantissa and ignores the dangling marker.
        if end > digits_start {
            let magnitude = s[digits_start..end].parse::<i64>().unwrap_or(i64::MAX);
            exponent = if exp_negative { -magnitude } else { magnitude };
        }
        pos = end;
    }

    if pos < s.len() {
        tracing::debug!(input = %raw, "Ignoring trailing characters after amount");
    }

    let text = format!(
        "{}{}.{}",
        if negative { "-" } else { "" },
        if int_digits.is_empty() { "0" } else { int_digits },
        if frac_digits.is_empty() { "0" } else { frac_digits },
    );
    let mantissa = Decimal::from_str(&text).ok()?;
    Some((mantissa, exponent))
}

/// Scales `mantissa * 10^exponent` to cents and rounds it.
fn scale_to_cents(mantissa: Decimal, exponent: i64) -> Option<i64> {
    let scaled = scale_by_power_of_ten(mantissa, exponent.saturating_add(2))?;
    scaled.checked_add(Decimal::new(5, 1))?.floor().to_i64()
}

fn scale_by_power_of_ten(value: Decimal, exponent: i64) -> Option<Decimal> {
    if value.is_zero() {
        return Some(Decimal::ZERO);
    }
    if exponent.unsigned_abs() > MAX_EXPONENT_MAGNITUDE {
        return if exponent > 0 { None } else { Some(Decimal::ZERO) };
    }

    let mut scaled = value;
    for _ in 0..exponent.unsigned_abs() {
        scaled = if exponent > 0 {
            scaled.checked_mul(Decimal::TEN)?
        } else {
            scaled.checked_div(Decimal::TEN)?
        };
    }
    Some(scaled)
}

/// Values that can be turned into minor units with the soft-fail rule.
///
/// Numbers are interpreted as major units, so `12.5` and `"12.5"` both become
/// `1250`.
pub trait ToCents {
    /// Converts `self` into minor units, yielding 0 for unusable input.
    fn to_cents(&self) -> i64;
}

impl ToCents for str {
    fn to_cents(&self) -> i64 {
        parse_currency_to_cents(self)
    }
}

impl ToCents for String {
    fn to_cents(&self) -> i64 {
        parse_currency_to_cents(self)
    }
}

impl ToCents for f64 {
    fn to_cents(&self) -> i64 {
        if !self.is_finite() {
            tracing::warn!(input = %self, "Non-finite amount treated as zero");
            return 0;
        }
        // Display prints the shortest exact decimal form, never an exponent.
        parse_currency_to_cents(&self.to_string())
    }
}

impl ToCents for i64 {
    fn to_cents(&self) -> i64 {
        self.checked_mul(CENTS_PER_UNIT).unwrap_or_else(|| {
            tracing::warn!(input = %self, "Amount out of range treated as zero");
            0
        })
    }
}

impl ToCents for i32 {
    fn to_cents(&self) -> i64 {
        i64::from(*self).to_cents()
    }
}

impl ToCents for Decimal {
    fn to_cents(&self) -> i64 {
        scale_to_cents(*self, 0).unwrap_or_else(|| {
            tracing::warn!(input = %self, "Amount out of range treated as zero");
            0
        })
    }
}

impl<T: ToCents + ?Sized> ToCents for &T {
    fn to_cents(&self) -> i64 {
        (**self).to_cents()
    }
}

/// Renders minor units as `"<prefix> <major>.<minor>"`.
///
/// # Example
///
/// ```
/// use chama_shared::types::format_cents;
///
/// assert_eq!(format_cents(123_450, "Ksh"), "Ksh 1234.50");
/// ```
#[must_use]
pub fn format_cents(cents: i64, prefix: &str) -> String {
    format!("{prefix} {}", Decimal::from_i128_with_scale(i128::from(cents), 2))
}

/// Amount formatter bound to a currency prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    prefix: String,
}

impl CurrencyFormat {
    /// Creates a formatter for the given prefix.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// The configured prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Formats `cents` with this formatter's prefix.
    #[must_use]
    pub fn format(&self, cents: i64) -> String {
        format_cents(cents, &self.prefix)
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::new(DEFAULT_CURRENCY_PREFIX)
    }
}

#[cfg(test)]
#[path = "money_tests.rs"]
mod tests;
