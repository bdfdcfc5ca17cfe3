//! Secondary sidebar pages: in-depth, settings and profile.

use std::collections::BTreeMap;

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::Html};
use tower_sessions::Session;
use tracing::instrument;

use singsing_core::{ProductRow, coerce_amount};

use crate::{
    catalog::store, config::CatalogSettings, error::AppError, filters, routes::PageChrome,
    state::AppState,
};

/// Row count and stock per category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryBreakdown {
    pub category: String,
    pub products: usize,
    /// Sum of the numeric stock values; non-numeric stock counts as zero.
    pub stock: String,
}

/// Group rows by category, sorted by name.
#[must_use]
pub fn category_breakdown(rows: &[ProductRow]) -> Vec<CategoryBreakdown> {
    let mut groups: BTreeMap<&str, (usize, rust_decimal::Decimal)> = BTreeMap::new();
    for row in rows {
        let entry = groups.entry(row.category.as_str()).or_default();
        entry.0 += 1;
        entry.1 += coerce_amount(&row.stock);
    }
    groups
        .into_iter()
        .map(|(category, (products, stock))| CategoryBreakdown {
            category: category.to_string(),
            products,
            stock: stock.normalize().to_string(),
        })
        .collect()
}

#[derive(Template)]
#[template(path = "pages/indepth.html")]
pub struct IndepthTemplate {
    pub chrome: PageChrome,
    pub breakdown: Vec<CategoryBreakdown>,
}

#[derive(Template)]
#[template(path = "pages/settings.html")]
pub struct SettingsTemplate {
    pub chrome: PageChrome,
    pub catalog: CatalogSettings,
    pub session_cookie: &'static str,
}

#[derive(Template, WebTemplate)]
#[template(path = "pages/profile.html")]
pub struct ProfileTemplate {
    pub chrome: PageChrome,
}

/// In-depth page: the session catalog broken down by category.
#[instrument(skip(state, session))]
pub async fn indepth(
    State(state): State<AppState>,
    session: Session,
) -> Result<Html<String>, AppError> {
    let chrome = PageChrome::load(&state, &session, "In-depth", "indepth", "/indepth").await?;
    let editor = store::load(&session, state.catalog_settings()).await?;

    let template = IndepthTemplate {
        chrome,
        breakdown: category_breakdown(editor.rows()),
    };
    Ok(Html(template.render()?))
}

/// Settings page: the catalog policies in effect and the reset control.
#[instrument(skip(state, session))]
pub async fn settings(
    State(state): State<AppState>,
    session: Session,
) -> Result<Html<String>, AppError> {
    let chrome = PageChrome::load(&state, &session, "Settings", "settings", "/settings").await?;
    let template = SettingsTemplate {
        chrome,
        catalog: state.catalog_settings(),
        session_cookie: crate::middleware::SESSION_COOKIE_NAME,
    };
    Ok(Html(template.render()?))
}

#[instrument(skip(state, session))]
pub async fn profile(
    State(state): State<AppState>,
    session: Session,
) -> Result<ProfileTemplate, AppError> {
    let chrome = PageChrome::load(&state, &session, "Profile", "profile", "/profile").await?;
    Ok(ProfileTemplate { chrome })
}
