//! Modal presenter.
//!
//! Every page has a single overlay. [`Modal`] is its state: closed, or showing
//! exactly one dialog. Opening a dialog replaces whatever was shown before.
//! [`Modal::view`] turns the state into a [`ModalView`] for the templates; the
//! forms are plain HTML forms, so pressing Enter in any field submits them.

use singsing_core::ProductFields;

use crate::catalog::view::update_action;
use crate::navigation::{DASHBOARD_PATH, LOGOUT_PATH};

/// Path that closes any product dialog.
pub const PRODUCTS_PATH: &str = "/products";

/// Hidden form field carrying the code of the row a dialog was opened for.
pub const EXPECTED_ID_FIELD: &str = "expected_id";

/// Form field that receives focus when a dialog is shown again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Id,
    Name,
}

/// State of the page overlay.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Modal {
    #[default]
    Closed,
    /// "Create New Item" form.
    Create {
        draft: ProductFields,
        focus: Option<Focus>,
        alert: Option<String>,
    },
    /// "Edit Item" form for the row at `position`, whose code was
    /// `expected_id` when the form was opened.
    Edit {
        position: usize,
        expected_id: String,
        draft: ProductFields,
        focus: Option<Focus>,
        alert: Option<String>,
    },
    /// Yes/Cancel confirmation before removing the row at `position`.
    ConfirmRemove {
        position: usize,
        expected_id: String,
        alert: Option<String>,
    },
    /// Yes/Cancel confirmation before logging out.
    ConfirmLogout,
}

impl Modal {
    /// Catalog position the dialog is about, if any.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::Edit { position, .. } | Self::ConfirmRemove { position, .. } => Some(*position),
            _ => None,
        }
    }

    /// Build the dialog markup model, or `None` when closed.
    ///
    /// `next_default_id` is shown as the placeholder of the create form's ID
    /// field.
    #[must_use]
    pub fn view(&self, next_default_id: &str) -> Option<ModalView> {
        match self {
            Self::Closed => None,
            Self::Create {
                draft,
                focus,
                alert,
            } => Some(create_form(draft, *focus, alert.clone(), next_default_id)),
            Self::Edit {
                position,
                expected_id,
                draft,
                focus,
                alert,
            } => Some(edit_form(*position, expected_id, draft, *focus, alert.clone())),
            Self::ConfirmRemove {
                position,
                expected_id,
                alert,
            } => Some(remove_confirm(*position, expected_id, alert.clone())),
            Self::ConfirmLogout => Some(logout_confirm()),
        }
    }
}

/// One input in a dialog form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    /// Element id.
    pub dom_id: String,
    /// Form field name.
    pub name: &'static str,
    pub label: &'static str,
    pub value: String,
    pub input_type: &'static str,
    pub placeholder: Option<String>,
    pub min: Option<&'static str>,
    pub step: Option<&'static str>,
    /// Spans both grid columns.
    pub wide: bool,
    pub autofocus: bool,
}

/// A value posted back unchanged with the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HiddenField {
    pub name: &'static str,
    pub value: String,
}

fn expected_id_field(expected_id: &str) -> Vec<HiddenField> {
    vec![HiddenField {
        name: EXPECTED_ID_FIELD,
        value: expected_id.to_string(),
    }]
}

/// Markup model for the open dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalView {
    pub heading: String,
    /// Form target of the confirm button.
    pub action: String,
    pub fields: Vec<FormField>,
    pub hidden: Vec<HiddenField>,
    pub confirm_label: &'static str,
    /// Button style: `primary` or `red`.
    pub confirm_class: &'static str,
    pub cancel_href: String,
    /// Blocking message shown above the form.
    pub alert: Option<String>,
    /// Short confirmation layout (no fields, centered text).
    pub centered: bool,
}

impl ModalView {
    #[must_use]
    pub fn has_fields(&self) -> bool {
        !self.fields.is_empty()
    }

    /// Field with autofocus, if any.
    #[must_use]
    pub fn focused_field(&self) -> Option<&FormField> {
        self.fields.iter().find(|f| f.autofocus)
    }
}

struct FieldSpec {
    suffix: &'static str,
    name: &'static str,
    label: &'static str,
    wide: bool,
}

/// Grid order of the product form: ID and Qty. on the first row, the name on
/// its own row, then Category, Item Stock and Retail Price.
const PRODUCT_FIELDS: [FieldSpec; 6] = [
    FieldSpec { suffix: "id", name: "id", label: "Product ID", wide: false },
    FieldSpec { suffix: "qty", name: "quantity", label: "Qty.", wide: false },
    FieldSpec { suffix: "name", name: "name", label: "Product Name", wide: true },
    FieldSpec { suffix: "cat", name: "category", label: "Category", wide: false },
    FieldSpec { suffix: "stock", name: "stock", label: "Item Stock", wide: false },
    FieldSpec { suffix: "price", name: "price", label: "Retail Price", wide: false },
];

fn field_value<'a>(draft: &'a ProductFields, name: &str) -> &'a str {
    match name {
        "id" => &draft.id,
        "quantity" => &draft.quantity,
        "name" => &draft.name,
        "category" => &draft.category,
        "stock" => &draft.stock,
        _ => &draft.price,
    }
}

const fn focus_target(focus: Focus) -> &'static str {
    match focus {
        Focus::Id => "id",
        Focus::Name => "name",
    }
}

fn product_fields(prefix: &str, draft: &ProductFields, focus: Option<Focus>) -> Vec<FormField> {
    PRODUCT_FIELDS
        .iter()
        .map(|spec| FormField {
            dom_id: format!("{prefix}{}", spec.suffix),
            name: spec.name,
            label: spec.label,
            value: field_value(draft, spec.name).to_string(),
            input_type: "text",
            placeholder: None,
            min: None,
            step: None,
            wide: spec.wide,
            autofocus: focus.is_some_and(|f| focus_target(f) == spec.name),
        })
        .collect()
}

/// The "Create New Item" dialog.
fn create_form(
    draft: &ProductFields,
    focus: Option<Focus>,
    alert: Option<String>,
    next_default_id: &str,
) -> ModalView {
    let mut fields = product_fields("n", draft, focus);
    for field in &mut fields {
        match field.name {
            "id" => field.placeholder = Some(format!("e.g. {next_default_id}")),
            "name" => field.placeholder = Some("Product Name".to_string()),
            "category" => field.placeholder = Some("Category".to_string()),
            "quantity" | "stock" => {
                field.input_type = "number";
                field.min = Some("0");
            }
            "price" => {
                field.input_type = "number";
                field.min = Some("0");
                field.step = Some("0.01");
            }
            _ => {}
        }
    }

    ModalView {
        heading: "Create New Item".to_string(),
        action: PRODUCTS_PATH.to_string(),
        fields,
        hidden: vec![],
        confirm_label: "Add Item",
        confirm_class: "primary",
        cancel_href: PRODUCTS_PATH.to_string(),
        alert,
        centered: false,
    }
}

/// The "Edit Item" dialog, prefilled with the row's current values.
fn edit_form(
    position: usize,
    expected_id: &str,
    draft: &ProductFields,
    focus: Option<Focus>,
    alert: Option<String>,
) -> ModalView {
    ModalView {
        heading: "Edit Item".to_string(),
        action: update_action(position),
        fields: product_fields("e", draft, focus),
        hidden: expected_id_field(expected_id),
        confirm_label: "Save",
        confirm_class: "primary",
        cancel_href: PRODUCTS_PATH.to_string(),
        alert,
        centered: false,
    }
}

fn remove_confirm(position: usize, expected_id: &str, alert: Option<String>) -> ModalView {
    ModalView {
        heading: "Are you sure you want to remove this item?".to_string(),
        action: format!("{}/remove", update_action(position)),
        fields: vec![],
        hidden: expected_id_field(expected_id),
        confirm_label: "Yes",
        confirm_class: "red",
        cancel_href: PRODUCTS_PATH.to_string(),
        alert,
        centered: true,
    }
}

fn logout_confirm() -> ModalView {
    ModalView {
        heading: "Are you sure you want to logout?".to_string(),
        action: LOGOUT_PATH.to_string(),
        fields: vec![],
        hidden: vec![],
        confirm_label: "Yes",
        confirm_class: "red",
        cancel_href: DASHBOARD_PATH.to_string(),
        alert: None,
        centered: false,
    }
}
