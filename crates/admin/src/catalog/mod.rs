//! Product catalog editor.
//!
//! The catalog is an ordered list of [`ProductRow`]s addressed by position.
//! Edit and remove forms also carry the code of the row they were opened for,
//! so a form submitted after the rows shifted is refused instead of landing on
//! a neighbour. The catalog is owned by a [`CatalogEditor`] value, mutated exclusively
//! through [`intent::dispatch`], and projected into a [`CatalogView`] for the
//! products table after every change.
//!
//! # Validation
//!
//! | Operation | Name required | Unique code | Price normalized |
//! |-----------|---------------|-------------|------------------|
//! | create    | yes           | yes         | yes              |
//! | update    | no*           | no*         | no*              |
//! | remove    | -             | -           | -                |
//!
//! \* unless `ADMIN_VALIDATE_EDITS` is enabled.

pub mod editor;
pub mod intent;
pub mod seed;
pub mod store;
pub mod view;

use thiserror::Error;

use singsing_core::FieldError;

pub use editor::CatalogEditor;
pub use intent::{CatalogIntent, Dispatch, Outcome, RowRef, dispatch};
pub use view::{CatalogPage, CatalogView, PAGE_SIZE, RowView};

/// Errors raised by catalog operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Create was submitted without a product name.
    #[error("Product name is required.")]
    BlankName,
    /// The effective product code is already used by another row.
    #[error("Product ID \"{0}\" already exists. Please choose a different ID.")]
    DuplicateId(String),
    /// No row exists at the requested position.
    #[error("No product at position {position} (catalog has {len} rows)")]
    PositionOutOfRange { position: usize, len: usize },
    /// The row at `position` is no longer the one the form was opened for.
    #[error("Product \"{expected}\" changed or was removed after this form was opened. Please try again.")]
    RowChanged { position: usize, expected: String },
}

impl From<FieldError> for CatalogError {
    fn from(err: FieldError) -> Self {
        match err {
            FieldError::BlankName => Self::BlankName,
        }
    }
}
