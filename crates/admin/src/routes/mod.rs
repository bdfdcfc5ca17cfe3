//! HTTP route handlers for admin.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Health check
//!
//! # Dashboard
//! GET  /                       - Redirect to the dashboard
//! GET  /dashboard              - Dashboard overview (logo target)
//! GET  /indepth                - In-depth page
//! GET  /settings               - Settings page
//! GET  /profile                - Profile page
//!
//! # Auth
//! GET  /login                  - Login page (?reveal=1 shows the password)
//! POST /login                  - Enter the panel
//! GET  /logout                 - Logout confirmation
//! POST /logout                 - Clear the session, back to login
//!
//! # Products (session catalog)
//! GET  /products               - Products table (?page=, 50 rows per page)
//! GET  /products/new           - Create form
//! POST /products               - Create
//! POST /products/reset         - Restore the sample rows
//! GET  /products/{pos}/edit    - Edit form
//! POST /products/{pos}         - Update (expected_id must match the row)
//! GET  /products/{pos}/remove  - Remove confirmation
//! POST /products/{pos}/remove  - Remove (expected_id must match the row)
//!
//! # Promotions
//! GET  /promotions             - Grid (?category=, ?item= for detail)
//!
//! # Preferences
//! POST /preferences/year       - Change year (form, redirects back)
//! POST /api/preferences/year   - Change year (JSON)
//! ```

pub mod api;
pub mod auth;
pub mod dashboard;
pub mod pages;
pub mod products;
pub mod promotions;

use axum::{
    Form, Router,
    extract::State,
    response::Redirect,
    routing::{get, post},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::{
    error::AppError,
    modal::ModalView,
    navigation::{DASHBOARD_PATH, LOGO_TARGET, NavLink, nav_links},
    preferences::{self, YearOption},
    state::AppState,
};

/// Build all page and API routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        // Dashboard and static pages
        .route("/", get(dashboard::index))
        .route("/dashboard", get(dashboard::dashboard))
        .route("/indepth", get(pages::indepth))
        .route("/settings", get(pages::settings))
        .route("/profile", get(pages::profile))
        // Auth
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", get(auth::logout_page).post(auth::logout))
        // Products
        .route("/products", get(products::index).post(products::create))
        .route("/products/new", get(products::new))
        .route("/products/reset", post(products::reset))
        .route("/products/{position}", post(products::update))
        .route("/products/{position}/edit", get(products::edit))
        .route(
            "/products/{position}/remove",
            get(products::remove_page).post(products::remove),
        )
        // Promotions
        .route("/promotions", get(promotions::index))
        // Preferences
        .route("/preferences/year", post(set_year))
        .merge(api::router())
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running.
pub async fn health() -> &'static str {
    "ok"
}

/// Layout data every sidebar page needs.
#[derive(Debug, Clone)]
pub struct PageChrome {
    pub title: &'static str,
    pub current_path: String,
    /// Value of `data-page` on `<body>`.
    pub page: &'static str,
    pub nav: Vec<NavLink>,
    pub logo_href: &'static str,
    pub year: String,
    pub years: Vec<YearOption>,
    pub modal: Option<ModalView>,
}

impl PageChrome {
    /// Build the layout for `current_path`, reading the session's year.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store cannot be read.
    pub async fn load(
        state: &AppState,
        session: &Session,
        title: &'static str,
        page: &'static str,
        current_path: &str,
    ) -> Result<Self, AppError> {
        let year = preferences::selected_year(session, state.years()).await?;
        Ok(Self {
            title,
            current_path: current_path.to_string(),
            page,
            nav: nav_links(current_path),
            logo_href: LOGO_TARGET,
            years: preferences::year_options(state.years(), &year),
            year,
            modal: None,
        })
    }

    #[must_use]
    pub fn with_modal(mut self, modal: Option<ModalView>) -> Self {
        self.modal = modal;
        self
    }
}

/// Year selector form submission.
#[derive(Debug, Deserialize)]
pub struct YearForm {
    pub year: String,
    /// Page to return to.
    #[serde(default)]
    pub redirect_to: Option<String>,
}

/// Only same-site paths are followed; anything else goes to the dashboard.
///
/// Browsers read `\` as `/`, so a backslash anywhere is refused.
fn safe_return_path(path: Option<&str>) -> &str {
    match path {
        Some(p) if p.starts_with('/') && !p.starts_with("//") && !p.contains('\\') => p,
        _ => DASHBOARD_PATH,
    }
}

/// Change the year from the topbar selector.
///
/// # Errors
///
/// Returns 400 for a year the selector does not offer.
#[instrument(skip(state, session))]
pub async fn set_year(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<YearForm>,
) -> Result<Redirect, AppError> {
    preferences::set_year(&session, state.years(), &form.year).await?;
    Ok(Redirect::to(safe_return_path(form.redirect_to.as_deref())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_return_path() {
        assert_eq!(safe_return_path(Some("/products")), "/products");
        assert_eq!(safe_return_path(Some("//evil.example")), "/dashboard");
        assert_eq!(safe_return_path(Some("https://evil.example")), "/dashboard");
        assert_eq!(safe_return_path(Some("/\\evil.example")), "/dashboard");
        assert_eq!(safe_return_path(Some("/products\\..\\x")), "/dashboard");
        assert_eq!(safe_return_path(None), "/dashboard");
    }
}
