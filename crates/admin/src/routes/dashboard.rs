//! Dashboard route handlers.

use std::collections::BTreeSet;

use askama::Template;
use axum::{
    extract::State,
    response::{Html, Redirect},
};
use tower_sessions::Session;
use tracing::instrument;

use crate::{
    catalog::{CatalogEditor, store},
    error::AppError,
    filters,
    navigation::DASHBOARD_PATH,
    routes::PageChrome,
    state::AppState,
};

/// Dashboard metrics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardMetrics {
    pub products: usize,
    pub categories: usize,
    pub promotions: usize,
    pub promotions_in_stock: usize,
    pub next_id: String,
}

impl DashboardMetrics {
    fn collect(editor: &CatalogEditor, state: &AppState) -> Self {
        let categories: BTreeSet<&str> = editor
            .rows()
            .iter()
            .map(|row| row.category.as_str())
            .collect();
        let promotions = state.promotions().items();

        Self {
            products: editor.len(),
            categories: categories.len(),
            promotions: promotions.len(),
            promotions_in_stock: promotions.iter().filter(|p| p.in_stock()).count(),
            next_id: editor.next_default_id(),
        }
    }
}

/// Dashboard template.
#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub chrome: PageChrome,
    pub metrics: DashboardMetrics,
}

/// `/` goes to the dashboard.
pub async fn index() -> Redirect {
    Redirect::to(DASHBOARD_PATH)
}

/// Dashboard page handler.
#[instrument(skip(state, session))]
pub async fn dashboard(
    State(state): State<AppState>,
    session: Session,
) -> Result<Html<String>, AppError> {
    let chrome = PageChrome::load(&state, &session, "Dashboard", "dashboard", DASHBOARD_PATH).await?;
    let editor = store::load(&session, state.catalog_settings()).await?;

    let template = DashboardTemplate {
        metrics: DashboardMetrics::collect(&editor, &state),
        chrome,
    };
    Ok(Html(template.render()?))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::{AdminConfig, CatalogSettings};

    #[test]
    fn test_metrics_for_sample_catalog() {
        let state = AppState::new(AdminConfig::default());
        let editor = CatalogEditor::seeded(CatalogSettings::default());

        let metrics = DashboardMetrics::collect(&editor, &state);

        assert_eq!(metrics.products, 10);
        assert_eq!(metrics.categories, 2);
        assert_eq!(metrics.promotions, 2);
        assert_eq!(metrics.promotions_in_stock, 1);
        assert_eq!(metrics.next_id, "0011");
    }
}
