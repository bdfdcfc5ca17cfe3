//! Product codes (the user-facing `id` column of a product row).
//!
//! Codes are free text. When a product is created without one, a default is
//! derived from the existing rows and zero-padded to [`CODE_WIDTH`] digits.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum width of generated product codes.
pub const CODE_WIDTH: usize = 4;

/// Format a sequence number as a zero-padded product code.
///
/// Numbers wider than [`CODE_WIDTH`] are not truncated.
///
/// ```rust
/// # use singsing_core::sequential_code;
/// assert_eq!(sequential_code(11), "0011");
/// assert_eq!(sequential_code(12345), "12345");
/// ```
#[must_use]
pub fn sequential_code(n: u64) -> String {
    format!("{n:0width$}", width = CODE_WIDTH)
}

/// Numeric value of a code made only of ASCII digits.
///
/// Returns `None` for codes with any other character (including whitespace).
#[must_use]
pub fn code_number(code: &str) -> Option<u64> {
    if code.is_empty() || !code.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    code.parse().ok()
}

/// How the default code for a new product is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    /// Row count plus one.
    ///
    /// After a deletion this can reproduce a code that is still in use, in
    /// which case creation is rejected as a duplicate.
    RowCount,
    /// Highest numeric code plus one.
    #[default]
    MaxPlusOne,
}

impl IdStrategy {
    /// Compute the default code for the next product.
    #[must_use]
    pub fn next_code<'a, I>(self, existing: I) -> String
    where
        I: IntoIterator<Item = &'a str>,
    {
        let next = match self {
            Self::RowCount => existing.into_iter().count() as u64 + 1,
            Self::MaxPlusOne => {
                existing
                    .into_iter()
                    .filter_map(code_number)
                    .max()
                    .unwrap_or(0)
                    .saturating_add(1)
            }
        };
        sequential_code(next)
    }

    /// Stable name used in configuration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RowCount => "row_count",
            Self::MaxPlusOne => "max_plus_one",
        }
    }
}

impl std::fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown [`IdStrategy`] name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown id strategy '{0}' (expected 'row_count' or 'max_plus_one')")]
pub struct ParseIdStrategyError(pub String);

impl FromStr for IdStrategy {
    type Err = ParseIdStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "row_count" | "row-count" => Ok(Self::RowCount),
            "max_plus_one" | "max-plus-one" => Ok(Self::MaxPlusOne),
            other => Err(ParseIdStrategyError(other.to_string())),
        }
    }
}
