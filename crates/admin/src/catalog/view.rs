//! Table projection of the catalog.
//!
//! Rendering never mutates the catalog. Each row view carries the position it
//! had when the view was built, and the edit/remove targets derived from it,
//! so a view must be rebuilt after every mutation.
//!
//! The table shows [`PAGE_SIZE`] rows per page, selected with `?page=`. A
//! page number that is not an integer shows the first page; one outside the
//! range shows the last.

use singsing_core::ProductRow;

use crate::modal::PRODUCTS_PATH;

/// Rows per page of the products table.
pub const PAGE_SIZE: usize = 50;

/// One rendered table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    /// Zero-based position in the catalog at render time.
    pub position: usize,
    pub id: String,
    pub name: String,
    pub quantity: String,
    pub category: String,
    pub stock: String,
    pub price: String,
    /// Target that opens the edit dialog for this row.
    pub edit_href: String,
    /// Target that opens the remove confirmation for this row.
    pub remove_href: String,
}

impl RowView {
    fn new(position: usize, row: &ProductRow) -> Self {
        Self {
            position,
            id: row.id.clone(),
            name: row.name.clone(),
            quantity: row.quantity.clone(),
            category: row.category.clone(),
            stock: row.stock.clone(),
            price: row.price.clone(),
            edit_href: edit_href(position),
            remove_href: remove_href(position),
        }
    }
}

/// The full products table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogView {
    pub rows: Vec<RowView>,
}

impl CatalogView {
    /// Build a view with one entry per row, in sequence order.
    #[must_use]
    pub fn from_rows(rows: &[ProductRow]) -> Self {
        Self {
            rows: rows
                .iter()
                .enumerate()
                .map(|(position, row)| RowView::new(position, row))
                .collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of table pages; an empty catalog still has one.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.rows.len().div_ceil(PAGE_SIZE).max(1)
    }

    /// The rows of page `number` (1-based, clamped to the valid range).
    #[must_use]
    pub fn into_page(self, number: usize) -> CatalogPage {
        let total_pages = self.page_count();
        let number = number.clamp(1, total_pages);
        let total_rows = self.rows.len();
        let rows = self
            .rows
            .into_iter()
            .skip((number - 1) * PAGE_SIZE)
            .take(PAGE_SIZE)
            .collect();

        CatalogPage {
            rows,
            number,
            total_pages,
            total_rows,
        }
    }
}

/// One page of the products table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogPage {
    pub rows: Vec<RowView>,
    /// 1-based page number.
    pub number: usize,
    pub total_pages: usize,
    pub total_rows: usize,
}

impl CatalogPage {
    #[must_use]
    pub const fn is_paginated(&self) -> bool {
        self.total_pages > 1
    }

    #[must_use]
    pub fn previous_href(&self) -> Option<String> {
        (self.number > 1).then(|| page_href(self.number - 1))
    }

    #[must_use]
    pub fn next_href(&self) -> Option<String> {
        (self.number < self.total_pages).then(|| page_href(self.number + 1))
    }
}

/// Resolve a raw `?page=` value against `page_count` pages.
#[must_use]
pub fn resolve_page(raw: Option<&str>, page_count: usize) -> usize {
    let Some(Ok(number)) = raw.map(|r| r.trim().parse::<i64>()) else {
        return 1;
    };
    usize::try_from(number)
        .ok()
        .filter(|n| (1..=page_count).contains(n))
        .unwrap_or(page_count)
}

/// Page of the table that shows `position`.
#[must_use]
pub const fn page_containing(position: usize) -> usize {
    position / PAGE_SIZE + 1
}

/// Products table link for a page; the first page has no query.
#[must_use]
pub fn page_href(number: usize) -> String {
    if number <= 1 {
        PRODUCTS_PATH.to_string()
    } else {
        format!("{PRODUCTS_PATH}?page={number}")
    }
}

/// Path of the edit dialog for a position.
#[must_use]
pub fn edit_href(position: usize) -> String {
    format!("/products/{position}/edit")
}

/// Path of the remove confirmation for a position.
#[must_use]
pub fn remove_href(position: usize) -> String {
    format!("/products/{position}/remove")
}

/// Form target for saving an edit.
#[must_use]
pub fn update_action(position: usize) -> String {
    format!("/products/{position}")
}
