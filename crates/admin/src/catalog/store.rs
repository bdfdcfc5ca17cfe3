//! Session persistence for the catalog.
//!
//! Each session owns its own rows. A session that has never saved a catalog
//! starts from the ten sample rows; loading never writes.

use tower_sessions::Session;

use singsing_core::ProductRow;

use super::CatalogEditor;
use crate::{config::CatalogSettings, models::keys};

/// Load the session's catalog, or the sample rows if none was saved.
///
/// # Errors
///
/// Returns an error if the session store cannot be read.
pub async fn load(
    session: &Session,
    settings: CatalogSettings,
) -> Result<CatalogEditor, tower_sessions::session::Error> {
    let rows = session.get::<Vec<ProductRow>>(keys::CATALOG_ROWS).await?;
    Ok(rows.map_or_else(
        || CatalogEditor::seeded(settings),
        |rows| CatalogEditor::new(rows, settings),
    ))
}

/// Save the catalog's rows into the session.
///
/// # Errors
///
/// Returns an error if the session store cannot be written.
pub async fn save(
    session: &Session,
    editor: &CatalogEditor,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(keys::CATALOG_ROWS, editor.rows()).await
}

/// Drop the saved rows so the next load starts from the sample rows again.
///
/// # Errors
///
/// Returns an error if the session store cannot be written.
pub async fn reset(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session.remove_value(keys::CATALOG_ROWS).await?;
    Ok(())
}
