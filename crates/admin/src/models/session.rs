//! Session-stored state.
//!
//! Everything the panel remembers lives in the in-memory session store and is
//! discarded with the session.

/// Session keys.
pub mod keys {
    /// Key for the ordered product rows of the visitor's catalog.
    pub const CATALOG_ROWS: &str = "catalog_rows";

    /// Key for the selected dashboard year.
    pub const YEAR_SELECT: &str = "yearSelect";
}
