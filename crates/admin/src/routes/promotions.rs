//! Promotions route handler.

use askama::Template;
use axum::{
    extract::{Query, State},
    response::Html,
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::{
    error::AppError,
    filters,
    promotions::{PromoDetail, PromoTab, TABS, category_or_all, promotions_href},
    routes::PageChrome,
    state::AppState,
};

#[derive(Debug, Default, Deserialize)]
pub struct PromotionsQuery {
    pub category: Option<String>,
    /// Promotion whose detail panel is open.
    pub item: Option<String>,
}

/// One card in the grid.
#[derive(Debug, Clone)]
pub struct PromoCard {
    pub id: &'static str,
    pub name: &'static str,
    pub image: &'static str,
    pub price: String,
    pub stock: String,
    pub in_stock: bool,
    pub href: String,
    pub selected: bool,
}

/// A tab with its active flag.
#[derive(Debug, Clone)]
pub struct TabView {
    pub tab: PromoTab,
    pub href: String,
    pub active: bool,
}

#[derive(Template)]
#[template(path = "promotions/index.html")]
pub struct PromotionsTemplate {
    pub chrome: PageChrome,
    pub tabs: Vec<TabView>,
    pub cards: Vec<PromoCard>,
    pub detail: Option<PromoDetail>,
}

/// Promotions grid for a category, with an optional detail panel.
///
/// GET /promotions
#[instrument(skip(state, session))]
pub async fn index(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<PromotionsQuery>,
) -> Result<Html<String>, AppError> {
    let chrome = PageChrome::load(&state, &session, "Promotions", "promotions", "/promotions").await?;
    let category = category_or_all(query.category.as_deref());
    let selected = query.item.as_deref().unwrap_or_default();

    let tabs = TABS
        .iter()
        .map(|tab| TabView {
            tab: *tab,
            href: promotions_href(tab.category, None),
            active: tab.category == category,
        })
        .collect();

    let cards = state
        .promotions()
        .filter(category)
        .into_iter()
        .map(|p| PromoCard {
            id: p.id,
            name: p.name,
            image: p.image,
            price: p.price_label(),
            stock: p.stock_label(),
            in_stock: p.in_stock(),
            href: p.detail_href(category),
            selected: p.id == selected,
        })
        .collect();

    let template = PromotionsTemplate {
        chrome,
        tabs,
        cards,
        detail: state.promotions().detail(category, selected),
    };
    Ok(Html(template.render()?))
}
