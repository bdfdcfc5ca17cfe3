//! Session-scoped year preference.
//!
//! The dashboard year selector remembers its value under the `yearSelect`
//! session key. Reading never writes; a session without a stored value sees
//! the configured default.

use thiserror::Error;
use tower_sessions::Session;

use crate::{config::YearSettings, models::keys};

/// Errors raised when changing the year.
#[derive(Debug, Error)]
pub enum PreferenceError {
    /// The value is not one of the selectable years.
    #[error("Year \"{0}\" is not one of the selectable years")]
    UnknownYear(String),

    #[error(transparent)]
    Session(#[from] tower_sessions::session::Error),
}

/// One `<option>` of the year selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearOption {
    pub value: String,
    pub selected: bool,
}

/// The year currently selected for this session.
///
/// A stored value that is no longer selectable (the list was reconfigured)
/// reads as the default.
///
/// # Errors
///
/// Returns an error if the session store cannot be read.
pub async fn selected_year(
    session: &Session,
    years: &YearSettings,
) -> Result<String, tower_sessions::session::Error> {
    let stored = session.get::<String>(keys::YEAR_SELECT).await?;
    Ok(stored
        .filter(|year| years.allows(year))
        .unwrap_or_else(|| years.default_year.clone()))
}

/// Remember a new year for this session.
///
/// # Errors
///
/// Returns [`PreferenceError::UnknownYear`] for a value the selector does not
/// offer, or a session error if the store cannot be written.
pub async fn set_year(
    session: &Session,
    years: &YearSettings,
    value: &str,
) -> Result<String, PreferenceError> {
    let year = value.trim();
    if !years.allows(year) {
        tracing::debug!(year, "Rejected year preference");
        return Err(PreferenceError::UnknownYear(year.to_string()));
    }
    session.insert(keys::YEAR_SELECT, year).await?;
    Ok(year.to_string())
}

/// Options for the selector with `selected` marked.
#[must_use]
pub fn year_options(years: &YearSettings, selected: &str) -> Vec<YearOption> {
    years
        .options
        .iter()
        .map(|value| YearOption {
            value: value.clone(),
            selected: value == selected,
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use tower_sessions::MemoryStore;

    use super::*;

    fn session() -> Session {
        Session::new(None, Arc::new(MemoryStore::default()), None)
    }

    #[tokio::test]
    async fn test_default_year_without_stored_value() {
        let session = session();
        let year = selected_year(&session, &YearSettings::default()).await.unwrap();
        assert_eq!(year, "2023");
    }

    #[tokio::test]
    async fn test_set_then_read() {
        let session = session();
        let years = YearSettings::default();

        set_year(&session, &years, "2025").await.unwrap();
        assert_eq!(selected_year(&session, &years).await.unwrap(), "2025");
        assert_eq!(
            session.get::<String>(keys::YEAR_SELECT).await.unwrap(),
            Some("2025".to_string())
        );
    }

    #[tokio::test]
    async fn test_unknown_year_rejected_and_not_stored() {
        let session = session();
        let years = YearSettings::default();

        let err = set_year(&session, &years, "1999").await.unwrap_err();
        assert!(matches!(err, PreferenceError::UnknownYear(ref y) if y == "1999"));
        assert_eq!(selected_year(&session, &years).await.unwrap(), "2023");
    }

    #[tokio::test]
    async fn test_stale_stored_value_reads_as_default() {
        let session = session();
        session.insert(keys::YEAR_SELECT, "2019").await.unwrap();
        let year = selected_year(&session, &YearSettings::default()).await.unwrap();
        assert_eq!(year, "2023");
    }

    #[test]
    fn test_year_options_mark_selection() {
        let options = year_options(&YearSettings::default(), "2022");
        assert_eq!(options.len(), 5);
        let selected: Vec<&str> = options
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.value.as_str())
            .collect();
        assert_eq!(selected, vec!["2022"]);
    }
}
