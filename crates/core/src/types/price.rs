//! Price handling using decimal arithmetic.
//!
//! Product prices are stored as text in the catalog. On creation they are
//! coerced to a number and normalized to exactly two decimal places, so
//! `"5"`, `" 5.0 "` and `"5e0"` all become `"5.00"`. Anything that does not
//! parse as a number coerces to zero.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Number of decimal places used for normalized prices.
const PRICE_SCALE: u32 = 2;

/// Coerce free text to a decimal amount.
///
/// Surrounding whitespace is ignored, an empty string is zero, plain and
/// scientific notation are accepted, and anything else coerces to zero.
/// Digit separators such as `1_000` are not numbers.
#[must_use]
pub fn coerce_amount(input: &str) -> Decimal {
    let trimmed = input.trim();
    if trimmed.is_empty() || !trimmed.chars().all(is_number_char) {
        return Decimal::ZERO;
    }

    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .unwrap_or(Decimal::ZERO)
}

const fn is_number_char(c: char) -> bool {
    matches!(c, '0'..='9' | '+' | '-' | '.' | 'e' | 'E')
}

/// Normalize a price string to a fixed two-decimal representation.
///
/// ```rust
/// # use singsing_core::normalize_price;
/// assert_eq!(normalize_price("12.5"), "12.50");
/// assert_eq!(normalize_price("abc"), "0.00");
/// ```
#[must_use]
pub fn normalize_price(input: &str) -> String {
    format_amount(coerce_amount(input))
}

fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::MidpointAwayFromZero);
    // Avoid rendering "-0.00" for tiny negative inputs that round to zero.
    let rounded = if rounded.is_zero() { Decimal::ZERO } else { rounded };
    format!("{rounded:.2}")
}

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., pesos, not centavos).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Create a price from a whole number of currency units.
    #[must_use]
    pub fn whole(units: i64, currency_code: CurrencyCode) -> Self {
        Self::new(Decimal::from(units), currency_code)
    }

    /// Format for display, e.g. `"₱ 30.00"`.
    #[must_use]
    pub fn display(&self) -> String {
        format!("{} {}", self.currency_code.symbol(), format_amount(self.amount))
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    PHP,
}

impl CurrencyCode {
    /// Currency symbol used in price labels.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::PHP => "₱",
        }
    }
}
