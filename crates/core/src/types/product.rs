//! Product rows and the form fields they are built from.
//!
//! A [`ProductRow`] holds six text fields. Rows are only ever built from
//! [`ProductFields`] through [`ProductFields::into_row`], with a [`RowPolicy`]
//! deciding whether the input is normalized (trimming, defaults, price
//! formatting) or stored exactly as submitted.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::price::normalize_price;

/// Category used when a new product is created without one.
pub const DEFAULT_CATEGORY: &str = "Uncategorized";

/// Quantity and stock used when a new product leaves them blank.
pub const DEFAULT_COUNT: &str = "0";

/// Price used when a new product leaves it blank (before normalization).
pub const DEFAULT_PRICE: &str = "0.00";

/// One entry in the product catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductRow {
    /// Product code, intended to be unique.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Quantity (numeric text, not validated).
    pub quantity: String,
    /// Category label.
    pub category: String,
    /// Item stock (numeric text, not validated).
    pub stock: String,
    /// Retail price.
    pub price: String,
}

impl ProductRow {
    /// Build a row from string slices, storing them verbatim.
    #[must_use]
    pub fn new(
        id: &str,
        name: &str,
        quantity: &str,
        category: &str,
        stock: &str,
        price: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            quantity: quantity.to_string(),
            category: category.to_string(),
            stock: stock.to_string(),
            price: price.to_string(),
        }
    }
}

/// How submitted fields become a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowPolicy {
    /// Trim text, require a name, fill defaults, normalize the price.
    #[default]
    Normalized,
    /// Store every field exactly as submitted.
    Verbatim,
}

/// Field-level validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    /// The product name was empty after trimming.
    #[error("product name is required")]
    BlankName,
}

/// Submitted product form fields, any of which may be blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductFields {
    pub id: String,
    pub name: String,
    pub quantity: String,
    pub category: String,
    pub stock: String,
    pub price: String,
}

impl ProductFields {
    /// Blank create-form values (quantity, stock and price prefilled).
    #[must_use]
    pub fn create_defaults() -> Self {
        Self {
            quantity: DEFAULT_COUNT.to_string(),
            stock: DEFAULT_COUNT.to_string(),
            price: DEFAULT_PRICE.to_string(),
            ..Self::default()
        }
    }

    /// Prefill the fields from an existing row (for the edit form).
    #[must_use]
    pub fn from_row(row: &ProductRow) -> Self {
        Self {
            id: row.id.clone(),
            name: row.name.clone(),
            quantity: row.quantity.clone(),
            category: row.category.clone(),
            stock: row.stock.clone(),
            price: row.price.clone(),
        }
    }

    /// Whether the name is empty after trimming.
    #[must_use]
    pub fn name_is_blank(&self) -> bool {
        self.name.trim().is_empty()
    }

    /// The trimmed product code, or `None` when it was left blank.
    #[must_use]
    pub fn requested_id(&self) -> Option<&str> {
        let id = self.id.trim();
        (!id.is_empty()).then_some(id)
    }

    /// Convert the fields into a row under the given policy.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::BlankName`] under [`RowPolicy::Normalized`] when the
    /// name is blank. [`RowPolicy::Verbatim`] never fails.
    pub fn into_row(self, policy: RowPolicy) -> Result<ProductRow, FieldError> {
        match policy {
            RowPolicy::Verbatim => Ok(ProductRow {
                id: self.id,
                name: self.name,
                quantity: self.quantity,
                category: self.category,
                stock: self.stock,
                price: self.price,
            }),
            RowPolicy::Normalized => {
                if self.name_is_blank() {
                    return Err(FieldError::BlankName);
                }
                Ok(ProductRow {
                    id: self.id.trim().to_string(),
                    name: self.name.trim().to_string(),
                    quantity: or_default(self.quantity, DEFAULT_COUNT),
                    category: or_default(self.category.trim().to_string(), DEFAULT_CATEGORY),
                    stock: or_default(self.stock, DEFAULT_COUNT),
                    price: normalize_price(&or_default(self.price, DEFAULT_PRICE)),
                })
            }
        }
    }
}

fn or_default(value: String, default: &str) -> String {
    if value.trim().is_empty() {
        default.to_string()
    } else {
        value
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn fields(id: &str, name: &str) -> ProductFields {
        ProductFields {
            id: id.to_string(),
            name: name.to_string(),
            ..ProductFields::default()
        }
    }

    #[test]
    fn test_normalized_fills_defaults() {
        let row = fields("0011", "Kimchi").into_row(RowPolicy::Normalized).unwrap();
        assert_eq!(row.quantity, "0");
        assert_eq!(row.stock, "0");
        assert_eq!(row.category, "Uncategorized");
        assert_eq!(row.price, "0.00");
    }

    #[test]
    fn test_normalized_trims_text_fields() {
        let mut input = fields("  0042 ", "  Tteokbokki ");
        input.category = "  Snacks ".to_string();
        let row = input.into_row(RowPolicy::Normalized).unwrap();
        assert_eq!(row.id, "0042");
        assert_eq!(row.name, "Tteokbokki");
        assert_eq!(row.category, "Snacks");
    }

    #[test]
    fn test_normalized_formats_price() {
        let mut input = fields("0011", "Kimchi");
        input.price = "3.5".to_string();
        let row = input.into_row(RowPolicy::Normalized).unwrap();
        assert_eq!(row.price, "3.50");
    }

    #[test]
    fn test_normalized_keeps_numeric_text_as_typed() {
        let mut input = fields("0011", "Kimchi");
        input.quantity = "12".to_string();
        input.stock = "007".to_string();
        let row = input.into_row(RowPolicy::Normalized).unwrap();
        assert_eq!(row.quantity, "12");
        assert_eq!(row.stock, "007");
    }

    #[test]
    fn test_normalized_rejects_blank_name() {
        let result = fields("0011", "   ").into_row(RowPolicy::Normalized);
        assert_eq!(result, Err(FieldError::BlankName));
    }

    #[test]
    fn test_verbatim_keeps_everything() {
        let mut input = fields(" 0001 ", "");
        input.price = "free".to_string();
        let row = input.clone().into_row(RowPolicy::Verbatim).unwrap();
        assert_eq!(row.id, " 0001 ");
        assert_eq!(row.name, "");
        assert_eq!(row.price, "free");
        assert_eq!(row.category, "");
        assert_eq!(ProductFields::from_row(&row), input);
    }

    #[test]
    fn test_requested_id() {
        assert_eq!(fields("  ", "x").requested_id(), None);
        assert_eq!(fields(" 0007 ", "x").requested_id(), Some("0007"));
    }

    #[test]
    fn test_create_defaults() {
        let defaults = ProductFields::create_defaults();
        assert_eq!(defaults.quantity, "0");
        assert_eq!(defaults.stock, "0");
        assert_eq!(defaults.price, "0.00");
        assert!(defaults.name.is_empty());
    }

    #[test]
    fn test_fields_deserialize_missing_as_blank() {
        let input: ProductFields = serde_json::from_str(r#"{"name":"Kimchi"}"#).unwrap();
        assert_eq!(input.name, "Kimchi");
        assert!(input.id.is_empty());
        assert!(input.price.is_empty());
    }
}
