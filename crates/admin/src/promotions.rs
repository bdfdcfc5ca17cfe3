//! Promotions catalog.
//!
//! A small, read-only set of bundles shown as a filterable grid. Selecting a
//! card opens a detail panel listing what the bundle contains; switching the
//! category tab closes it.

use singsing_core::{CurrencyCode, Price};

/// Tab value that shows every promotion.
pub const ALL_CATEGORIES: &str = "all";

/// A promotional bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Promotion {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    /// Image path under `/static`.
    pub image: &'static str,
    pub price: Price,
    pub stock: u32,
    /// Contents of the bundle, one line each.
    pub description: &'static [&'static str],
}

impl Promotion {
    #[must_use]
    pub const fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Stock line shown on the card.
    #[must_use]
    pub fn stock_label(&self) -> String {
        if self.in_stock() {
            format!("In stock ({})", self.stock)
        } else {
            "Out of stock".to_string()
        }
    }

    #[must_use]
    pub fn price_label(&self) -> String {
        self.price.display()
    }

    /// Link that opens this card's detail panel within `category`.
    #[must_use]
    pub fn detail_href(&self, category: &str) -> String {
        promotions_href(category, Some(self.id))
    }
}

/// Category tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromoTab {
    pub category: &'static str,
    pub label: &'static str,
}

/// Tabs in display order.
pub const TABS: [PromoTab; 3] = [
    PromoTab { category: ALL_CATEGORIES, label: "All" },
    PromoTab { category: "ramen-bundle", label: "Ramen Bundles" },
    PromoTab { category: "shabu", label: "Shabu" },
];

/// The static promotions catalog.
#[derive(Debug, Clone)]
pub struct Promotions {
    items: Vec<Promotion>,
}

impl Default for Promotions {
    fn default() -> Self {
        Self::new(vec![
            Promotion {
                id: "ramen1",
                name: "Shin Ramyun",
                category: "ramen-bundle",
                image: "/static/images/shin-ramyun.svg",
                price: Price::whole(30, CurrencyCode::PHP),
                stock: 10,
                description: &["4 x Shin Cup", "1 x Kimchi"],
            },
            Promotion {
                id: "shabu1",
                name: "Shabu Bundle (Beef)",
                category: "shabu",
                image: "/static/images/shabu-beef.svg",
                price: Price::whole(2000, CurrencyCode::PHP),
                stock: 0,
                description: &["Shabu Balls", "Prawn Balls", "Vegetables"],
            },
        ])
    }
}

impl Promotions {
    #[must_use]
    pub const fn new(items: Vec<Promotion>) -> Self {
        Self { items }
    }

    #[must_use]
    pub fn items(&self) -> &[Promotion] {
        &self.items
    }

    /// Items in `category`, or all of them for [`ALL_CATEGORIES`].
    ///
    /// Categories match exactly; an unknown category yields nothing.
    #[must_use]
    pub fn filter(&self, category: &str) -> Vec<&Promotion> {
        self.items
            .iter()
            .filter(|p| category == ALL_CATEGORIES || p.category == category)
            .collect()
    }

    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Promotion> {
        self.items.iter().find(|p| p.id == id)
    }

    /// Detail panel for `id`, shown only when the item is part of the
    /// visible grid.
    #[must_use]
    pub fn detail(&self, category: &str, id: &str) -> Option<PromoDetail> {
        self.filter(category)
            .into_iter()
            .find(|p| p.id == id)
            .map(PromoDetail::from_promotion)
    }
}

/// The detail panel for one promotion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromoDetail {
    pub name: &'static str,
    pub lines: Vec<&'static str>,
    pub subtotal: String,
    pub total: String,
}

impl PromoDetail {
    /// Subtotal and total are both the bundle price.
    #[must_use]
    pub fn from_promotion(promotion: &Promotion) -> Self {
        Self {
            name: promotion.name,
            lines: promotion.description.to_vec(),
            subtotal: promotion.price_label(),
            total: promotion.price_label(),
        }
    }
}

/// Link to the grid for `category`, optionally with a detail panel open.
/// Query values are percent-encoded.
#[must_use]
pub fn promotions_href(category: &str, item: Option<&str>) -> String {
    let mut query = url::form_urlencoded::Serializer::new(String::new());
    query.append_pair("category", category);
    if let Some(item) = item {
        query.append_pair("item", item);
    }
    format!("/promotions?{}", query.finish())
}

/// Normalize a `?category=` value: missing or blank means all.
#[must_use]
pub fn category_or_all(category: Option<&str>) -> &str {
    match category.map(str::trim) {
        Some(c) if !c.is_empty() => c,
        _ => ALL_CATEGORIES,
    }
}
