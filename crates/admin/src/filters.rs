//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Formats a count as "1 item" / "N items".
///
/// Usage in templates: `{{ total|items_label }}`
#[askama::filter_fn]
pub fn items_label(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    let count = value.to_string();
    let noun = if count == "1" { "item" } else { "items" };
    Ok(format!("{count} {noun}"))
}
