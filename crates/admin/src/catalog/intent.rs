//! User intents and the single dispatcher that applies them.
//!
//! Route handlers translate requests into a [`CatalogIntent`] and call
//! [`dispatch`]. Nothing else mutates a [`CatalogEditor`].

use singsing_core::{ProductFields, ProductRow};

use super::{CatalogEditor, CatalogError};
use crate::modal::{Focus, Modal};

/// A row as the user saw it: its position and code when the form was opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowRef {
    pub position: usize,
    pub id: String,
}

impl RowRef {
    #[must_use]
    pub fn new(position: usize, id: impl Into<String>) -> Self {
        Self {
            position,
            id: id.into(),
        }
    }
}

/// Something the user asked the products page to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogIntent {
    /// Show the empty create form.
    OpenCreate,
    /// Save the create form.
    SubmitCreate(ProductFields),
    /// Show the edit form for a position.
    OpenEdit(usize),
    /// Save the edit form opened for a row.
    SubmitEdit(RowRef, ProductFields),
    /// Ask for confirmation before removing a position.
    OpenRemove(usize),
    /// Remove the confirmed row.
    ConfirmRemove(RowRef),
    /// Close whatever dialog is open.
    Cancel,
}

/// What happened to the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Unchanged,
    Created { position: usize, id: String },
    Updated { position: usize },
    Removed { position: usize, row: ProductRow },
    /// A form was rejected; the dialog stays open.
    Rejected(CatalogError),
}

/// Result of dispatching an intent: the overlay to show and what changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    pub modal: Modal,
    pub outcome: Outcome,
}

impl Dispatch {
    const fn show(modal: Modal) -> Self {
        Self {
            modal,
            outcome: Outcome::Unchanged,
        }
    }

    const fn closed(outcome: Outcome) -> Self {
        Self {
            modal: Modal::Closed,
            outcome,
        }
    }

    /// Whether the catalog was mutated (and must be re-rendered and saved).
    #[must_use]
    pub const fn changed(&self) -> bool {
        matches!(
            self.outcome,
            Outcome::Created { .. } | Outcome::Updated { .. } | Outcome::Removed { .. }
        )
    }

    /// The rejection, if the form was not accepted.
    #[must_use]
    pub const fn rejection(&self) -> Option<&CatalogError> {
        match &self.outcome {
            Outcome::Rejected(err) => Some(err),
            _ => None,
        }
    }
}

/// Apply an intent to the catalog.
///
/// Validation failures on submitted forms are not errors: they keep the
/// dialog open with the submitted values, focus the offending field and, for
/// a duplicate code, carry the alert text.
///
/// # Errors
///
/// Returns [`CatalogError::PositionOutOfRange`] when an intent names a
/// position that does not exist.
///
/// A submitted edit or removal whose row has moved or gone is rejected with
/// [`CatalogError::RowChanged`]. If the row still exists elsewhere its dialog
/// is reopened at the new position; otherwise the dialog closes.
pub fn dispatch(
    editor: &mut CatalogEditor,
    intent: CatalogIntent,
) -> Result<Dispatch, CatalogError> {
    match intent {
        CatalogIntent::OpenCreate => Ok(Dispatch::show(Modal::Create {
            draft: ProductFields::create_defaults(),
            focus: None,
            alert: None,
        })),
        CatalogIntent::SubmitCreate(fields) => match editor.create(fields.clone()) {
            Ok(position) => {
                let id = editor
                    .get(position)
                    .map(|row| row.id.clone())
                    .unwrap_or_default();
                tracing::info!(position, id = %id, "Product created");
                Ok(Dispatch::closed(Outcome::Created { position, id }))
            }
            Err(err) => {
                let (focus, alert) = rejection_feedback(&err)?;
                tracing::debug!(error = %err, "Product create rejected");
                Ok(Dispatch {
                    modal: Modal::Create {
                        draft: fields,
                        focus: Some(focus),
                        alert,
                    },
                    outcome: Outcome::Rejected(err),
                })
            }
        },
        CatalogIntent::OpenEdit(position) => {
            let row = editor.row_at(position)?;
            Ok(Dispatch::show(Modal::Edit {
                position,
                expected_id: row.id.clone(),
                draft: ProductFields::from_row(row),
                focus: None,
                alert: None,
            }))
        }
        CatalogIntent::SubmitEdit(target, fields) => {
            if let Err(err) = editor.expect_row(target.position, &target.id) {
                tracing::debug!(position = target.position, id = %target.id, "Stale edit rejected");
                let modal = editor
                    .position_of(&target.id)
                    .map_or(Modal::Closed, |position| Modal::Edit {
                        position,
                        expected_id: target.id.clone(),
                        draft: fields,
                        focus: None,
                        alert: Some(err.to_string()),
                    });
                return Ok(Dispatch {
                    modal,
                    outcome: Outcome::Rejected(err),
                });
            }

            let position = target.position;
            match editor.update(position, fields.clone()) {
                Ok(()) => {
                    tracing::info!(position, "Product updated");
                    Ok(Dispatch::closed(Outcome::Updated { position }))
                }
                Err(err) => {
                    let (focus, alert) = rejection_feedback(&err)?;
                    tracing::debug!(position, error = %err, "Product update rejected");
                    Ok(Dispatch {
                        modal: Modal::Edit {
                            position,
                            expected_id: target.id,
                            draft: fields,
                            focus: Some(focus),
                            alert,
                        },
                        outcome: Outcome::Rejected(err),
                    })
                }
            }
        }
        CatalogIntent::OpenRemove(position) => {
            let row = editor.row_at(position)?;
            Ok(Dispatch::show(Modal::ConfirmRemove {
                position,
                expected_id: row.id.clone(),
                alert: None,
            }))
        }
        CatalogIntent::ConfirmRemove(target) => {
            if let Err(err) = editor.expect_row(target.position, &target.id) {
                tracing::debug!(position = target.position, id = %target.id, "Stale removal rejected");
                let modal = editor
                    .position_of(&target.id)
                    .map_or(Modal::Closed, |position| Modal::ConfirmRemove {
                        position,
                        expected_id: target.id.clone(),
                        alert: Some(err.to_string()),
                    });
                return Ok(Dispatch {
                    modal,
                    outcome: Outcome::Rejected(err),
                });
            }

            let position = target.position;
            let row = editor.remove(position)?;
            tracing::info!(position, id = %row.id, "Product removed");
            Ok(Dispatch::closed(Outcome::Removed { position, row }))
        }
        CatalogIntent::Cancel => Ok(Dispatch::closed(Outcome::Unchanged)),
    }
}

/// Field to focus and alert to show for a rejected form.
///
/// A blank name only moves focus; a duplicate code also raises an alert.
/// Position and row-identity errors are passed through.
fn rejection_feedback(err: &CatalogError) -> Result<(Focus, Option<String>), CatalogError> {
    match err {
        CatalogError::BlankName => Ok((Focus::Name, None)),
        CatalogError::DuplicateId(_) => Ok((Focus::Id, Some(err.to_string()))),
        CatalogError::PositionOutOfRange { .. } | CatalogError::RowChanged { .. } => {
            Err(err.clone())
        }
    }
}
