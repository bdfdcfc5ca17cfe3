//! The catalog state and its create/update/remove operations.

use singsing_core::{ProductFields, ProductRow, RowPolicy};

use super::{CatalogError, seed::seed_rows, view::CatalogView};
use crate::config::CatalogSettings;

/// Owns the ordered product rows for one catalog instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEditor {
    rows: Vec<ProductRow>,
    settings: CatalogSettings,
}

impl CatalogEditor {
    /// Create an editor over existing rows.
    #[must_use]
    pub fn new(rows: Vec<ProductRow>, settings: CatalogSettings) -> Self {
        Self { rows, settings }
    }

    /// Create an editor holding the ten sample rows.
    #[must_use]
    pub fn seeded(settings: CatalogSettings) -> Self {
        Self::new(seed_rows(), settings)
    }

    #[must_use]
    pub fn rows(&self) -> &[ProductRow] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The row at `position`, if any.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&ProductRow> {
        self.rows.get(position)
    }

    #[must_use]
    pub const fn settings(&self) -> CatalogSettings {
        self.settings
    }

    /// The code a new product receives when its ID field is left blank.
    #[must_use]
    pub fn next_default_id(&self) -> String {
        self.settings
            .id_strategy
            .next_code(self.rows.iter().map(|row| row.id.as_str()))
    }

    /// Look up a row, mapping a missing position to an error.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::PositionOutOfRange`] if no row exists there.
    pub fn row_at(&self, position: usize) -> Result<&ProductRow, CatalogError> {
        self.rows.get(position).ok_or(CatalogError::PositionOutOfRange {
            position,
            len: self.rows.len(),
        })
    }

    /// Position of the first row with code `id`.
    #[must_use]
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.rows.iter().position(|row| row.id == id)
    }

    /// Confirm that the row at `position` still has code `expected`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::RowChanged`] when the position is empty or holds
    /// a different row.
    pub fn expect_row(&self, position: usize, expected: &str) -> Result<(), CatalogError> {
        match self.rows.get(position) {
            Some(row) if row.id == expected => Ok(()),
            _ => Err(CatalogError::RowChanged {
                position,
                expected: expected.to_string(),
            }),
        }
    }

    fn id_in_use(&self, id: &str, skip: Option<usize>) -> bool {
        self.rows
            .iter()
            .enumerate()
            .any(|(i, row)| Some(i) != skip && row.id == id)
    }

    /// Append a new product built from form fields.
    ///
    /// Checks run in order: blank name, then duplicate code (against the
    /// trimmed input or the generated default). The catalog is unchanged when
    /// either check fails.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::BlankName`] or [`CatalogError::DuplicateId`].
    pub fn create(&mut self, mut fields: ProductFields) -> Result<usize, CatalogError> {
        if fields.name_is_blank() {
            return Err(CatalogError::BlankName);
        }

        let id = fields
            .requested_id()
            .map_or_else(|| self.next_default_id(), ToString::to_string);
        if self.id_in_use(&id, None) {
            return Err(CatalogError::DuplicateId(id));
        }

        fields.id = id;
        let row = fields.into_row(RowPolicy::Normalized)?;
        self.rows.push(row);
        Ok(self.rows.len() - 1)
    }

    /// Replace the row at `position` wholesale.
    ///
    /// Values are stored verbatim unless edit validation is enabled, in which
    /// case the create rules apply (a blank code keeps the current one).
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::PositionOutOfRange`]; with edit validation
    /// enabled also [`CatalogError::BlankName`] or [`CatalogError::DuplicateId`].
    pub fn update(&mut self, position: usize, mut fields: ProductFields) -> Result<(), CatalogError> {
        let current_id = self.row_at(position)?.id.clone();

        let row = if self.settings.validate_edits {
            if fields.name_is_blank() {
                return Err(CatalogError::BlankName);
            }
            let id = fields
                .requested_id()
                .map_or(current_id, ToString::to_string);
            if self.id_in_use(&id, Some(position)) {
                return Err(CatalogError::DuplicateId(id));
            }
            fields.id = id;
            fields.into_row(RowPolicy::Normalized)?
        } else {
            fields.into_row(RowPolicy::Verbatim)?
        };

        if let Some(slot) = self.rows.get_mut(position) {
            *slot = row;
        }
        Ok(())
    }

    /// Delete exactly the row at `position`; later rows shift down by one.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::PositionOutOfRange`] if no row exists there.
    pub fn remove(&mut self, position: usize) -> Result<ProductRow, CatalogError> {
        self.row_at(position)?;
        Ok(self.rows.remove(position))
    }

    /// Project the current rows into a table view.
    #[must_use]
    pub fn render(&self) -> CatalogView {
        CatalogView::from_rows(&self.rows)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use singsing_core::IdStrategy;

    use super::*;

    fn editor() -> CatalogEditor {
        CatalogEditor::seeded(CatalogSettings::default())
    }

    fn fields(id: &str, name: &str) -> ProductFields {
        ProductFields {
            id: id.to_string(),
            name: name.to_string(),
            ..ProductFields::default()
        }
    }

    #[test]
    fn test_create_with_blank_id_uses_next_code() {
        let mut catalog = editor();
        let position = catalog.create(fields("", "Kimchi")).unwrap();

        assert_eq!(position, 10);
        assert_eq!(catalog.len(), 11);
        let row = catalog.rows().last().unwrap();
        assert_eq!(row.id, "0011");
        assert_eq!(row.name, "Kimchi");
        assert_eq!(row.price, "0.00");
        assert_eq!(row.category, "Uncategorized");
    }

    #[test]
    fn test_create_blank_name_leaves_catalog_unchanged() {
        let mut catalog = editor();
        let before = catalog.clone();

        for name in ["", "   ", "\t"] {
            let result = catalog.create(fields("0099", name));
            assert_eq!(result, Err(CatalogError::BlankName));
        }
        assert_eq!(catalog, before);
    }

    #[test]
    fn test_create_duplicate_id_leaves_catalog_unchanged() {
        let mut catalog = editor();
        let before = catalog.clone();

        let result = catalog.create(fields("0001", "Another Ramyun"));
        assert_eq!(result, Err(CatalogError::DuplicateId("0001".to_string())));
        assert_eq!(catalog.len(), 10);
        assert_eq!(catalog, before);
    }

    #[test]
    fn test_create_duplicate_check_uses_trimmed_id() {
        let mut catalog = editor();
        let result = catalog.create(fields("  0003  ", "Neoguri Mild"));
        assert_eq!(result, Err(CatalogError::DuplicateId("0003".to_string())));
    }

    #[test]
    fn test_blank_name_reported_before_duplicate_id() {
        let mut catalog = editor();
        assert_eq!(catalog.create(fields("0001", "")), Err(CatalogError::BlankName));
    }

    #[test]
    fn test_create_appends_in_insertion_order() {
        let mut catalog = editor();
        catalog.create(fields("0500", "Gochujang")).unwrap();
        catalog.create(fields("0100", "Doenjang")).unwrap();

        let ids: Vec<&str> = catalog.rows().iter().skip(10).map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["0500", "0100"]);
    }

    #[test]
    fn test_row_count_default_collides_after_delete() {
        let settings = CatalogSettings {
            id_strategy: IdStrategy::RowCount,
            validate_edits: false,
        };
        let mut catalog = CatalogEditor::seeded(settings);
        catalog.remove(0).unwrap();

        // Nine rows remain, so the default is "0010", which is still present.
        assert_eq!(catalog.next_default_id(), "0010");
        let result = catalog.create(fields("", "Kimchi"));
        assert_eq!(result, Err(CatalogError::DuplicateId("0010".to_string())));
        assert_eq!(catalog.len(), 9);
    }

    #[test]
    fn test_max_plus_one_default_survives_delete() {
        let mut catalog = editor();
        catalog.remove(0).unwrap();

        assert_eq!(catalog.next_default_id(), "0011");
        catalog.create(fields("", "Kimchi")).unwrap();
        assert_eq!(catalog.rows().last().unwrap().id, "0011");
    }

    #[test]
    fn test_update_stores_fields_verbatim() {
        let mut catalog = editor();
        let submitted = ProductFields {
            id: "0002".to_string(),
            name: String::new(),
            quantity: "lots".to_string(),
            category: " Misc ".to_string(),
            stock: String::new(),
            price: "3.5".to_string(),
        };

        catalog.update(0, submitted.clone()).unwrap();

        assert_eq!(catalog.len(), 10);
        assert_eq!(ProductFields::from_row(&catalog.rows()[0]), submitted);
        // The duplicate code is accepted on edit.
        assert_eq!(catalog.rows()[0].id, catalog.rows()[1].id);
    }

    #[test]
    fn test_update_only_touches_target_row() {
        let mut catalog = editor();
        let before = catalog.rows().to_vec();

        catalog.update(4, fields("X", "Y")).unwrap();

        for (i, (old, new)) in before.iter().zip(catalog.rows()).enumerate() {
            if i != 4 {
                assert_eq!(old, new);
            }
        }
    }

    #[test]
    fn test_update_out_of_range() {
        let mut catalog = editor();
        let result = catalog.update(10, fields("0011", "Ghost"));
        assert_eq!(
            result,
            Err(CatalogError::PositionOutOfRange { position: 10, len: 10 })
        );
    }

    #[test]
    fn test_validated_update_applies_create_rules() {
        let settings = CatalogSettings {
            validate_edits: true,
            ..CatalogSettings::default()
        };
        let mut catalog = CatalogEditor::seeded(settings);

        assert_eq!(catalog.update(0, fields("0001", " ")), Err(CatalogError::BlankName));
        assert_eq!(
            catalog.update(0, fields("0002", "Shin")),
            Err(CatalogError::DuplicateId("0002".to_string()))
        );

        // Keeping its own code is not a duplicate; a blank code keeps the current one.
        catalog.update(0, fields("0001", " Shin Red ")).unwrap();
        catalog.update(1, fields("", "Chapagetti")).unwrap();
        assert_eq!(catalog.rows()[0].name, "Shin Red");
        assert_eq!(catalog.rows()[0].price, "0.00");
        assert_eq!(catalog.rows()[1].id, "0002");
    }

    #[test]
    fn test_remove_shifts_later_rows() {
        let mut catalog = editor();
        let before = catalog.rows().to_vec();

        let removed = catalog.remove(3).unwrap();

        assert_eq!(removed, before[3]);
        assert_eq!(catalog.len(), 9);
        assert_eq!(&catalog.rows()[..3], &before[..3]);
        assert_eq!(&catalog.rows()[3..], &before[4..]);
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut catalog = editor();
        assert!(matches!(
            catalog.remove(99),
            Err(CatalogError::PositionOutOfRange { position: 99, .. })
        ));
        assert_eq!(catalog.len(), 10);
    }

    #[test]
    fn test_expect_row_detects_shifted_rows() {
        let mut catalog = editor();
        assert_eq!(catalog.expect_row(2, "0003"), Ok(()));

        catalog.remove(0).unwrap();
        assert_eq!(
            catalog.expect_row(2, "0003"),
            Err(CatalogError::RowChanged {
                position: 2,
                expected: "0003".to_string()
            })
        );
        assert_eq!(catalog.position_of("0003"), Some(1));
        assert!(catalog.expect_row(50, "0003").is_err());
        assert_eq!(catalog.position_of("9999"), None);
    }

    #[test]
    fn test_remove_everything_then_create() {
        let mut catalog = editor();
        while !catalog.is_empty() {
            catalog.remove(0).unwrap();
        }
        assert_eq!(catalog.next_default_id(), "0001");
        assert_eq!(catalog.create(fields("", "Kimchi")).unwrap(), 0);
    }
}
