//! Data table component types.
//!
//! These types describe the columns of a rendered table. Row cells are
//! supplied separately by the page; the template walks both in order.

/// Horizontal alignment of a column's header and cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColumnAlign {
    #[default]
    Left,
    Right,
}

impl ColumnAlign {
    /// CSS class for the alignment.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Left => "align-left",
            Self::Right => "align-right",
        }
    }
}

/// Column definition for a data table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableColumn {
    /// Unique key for the column.
    pub key: String,
    /// Display label for the column header.
    pub label: String,
    pub align: ColumnAlign,
}

impl TableColumn {
    /// Create a new left-aligned column.
    #[must_use]
    pub fn new(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            align: ColumnAlign::Left,
        }
    }

    /// Align the column to the right.
    #[must_use]
    pub const fn right(mut self) -> Self {
        self.align = ColumnAlign::Right;
        self
    }
}

/// Configuration for a data table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataTableConfig {
    /// Unique table identifier, used as the element id.
    pub table_id: String,
    /// Column definitions.
    pub columns: Vec<TableColumn>,
    /// Title for empty state.
    pub empty_title: String,
    /// Description for empty state.
    pub empty_description: Option<String>,
}

impl DataTableConfig {
    /// Create a new data table configuration.
    #[must_use]
    pub fn new(table_id: &str) -> Self {
        Self {
            table_id: table_id.to_string(),
            columns: vec![],
            empty_title: "No items found".to_string(),
            empty_description: None,
        }
    }

    /// Add a column.
    #[must_use]
    pub fn column(mut self, column: TableColumn) -> Self {
        self.columns.push(column);
        self
    }

    /// Set empty state configuration.
    #[must_use]
    pub fn empty_state(mut self, title: &str, description: Option<&str>) -> Self {
        self.empty_title = title.to_string();
        self.empty_description = description.map(ToString::to_string);
        self
    }

    /// Number of columns, for `colspan` on the empty-state row.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}

/// Build the products table configuration.
///
/// Column order matches the cell order of
/// [`RowView`](crate::catalog::RowView): the six product fields, then the
/// edit/remove actions.
#[must_use]
pub fn products_table_config() -> DataTableConfig {
    DataTableConfig::new("productsTable")
        .column(TableColumn::new("id", "Product ID"))
        .column(TableColumn::new("name", "Product Name"))
        .column(TableColumn::new("quantity", "Qty."))
        .column(TableColumn::new("category", "Category"))
        .column(TableColumn::new("stock", "Item Stock"))
        .column(TableColumn::new("price", "Retail Price"))
        .column(TableColumn::new("actions", "").right())
        .empty_state(
            "No products yet",
            Some("Use Add Item to create one, or reset to the sample rows"),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_products_table_columns() {
        let config = products_table_config();
        let keys: Vec<&str> = config.columns.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(
            keys,
            vec!["id", "name", "quantity", "category", "stock", "price", "actions"]
        );
        assert_eq!(config.column_count(), 7);
        assert_eq!(
            config.columns.last().map(|c| c.align),
            Some(ColumnAlign::Right)
        );
    }

    #[test]
    fn test_empty_state_defaults() {
        let config = DataTableConfig::new("t");
        assert_eq!(config.empty_title, "No items found");
        assert!(config.empty_description.is_none());
    }
}
