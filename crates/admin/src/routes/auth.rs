//! Login and logout route handlers for admin.
//!
//! The panel has no accounts: the login form simply enters the dashboard, and
//! logging out (after confirmation) discards the session and everything in it.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{Html, IntoResponse, Redirect},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::{
    error::AppError,
    filters,
    modal::Modal,
    navigation::{DASHBOARD_PATH, LOGIN_PATH, LOGOUT_PATH},
    routes::PageChrome,
    state::AppState,
};

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginPageTemplate {
    /// Show the password in clear text.
    pub reveal_password: bool,
    pub username: String,
}

/// Logout confirmation page template.
#[derive(Template)]
#[template(path = "auth/logout.html")]
pub struct LogoutTemplate {
    pub chrome: PageChrome,
}

#[derive(Debug, Default, Deserialize)]
pub struct LoginQuery {
    #[serde(default)]
    pub reveal: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

impl LoginQuery {
    fn reveal_password(&self) -> bool {
        matches!(self.reveal.as_deref(), Some("1" | "true" | "yes"))
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Render the login page.
///
/// GET /login
pub async fn login_page(Query(query): Query<LoginQuery>) -> LoginPageTemplate {
    LoginPageTemplate {
        reveal_password: query.reveal_password(),
        username: query.username.unwrap_or_default(),
    }
}

/// Enter the panel.
///
/// POST /login
#[instrument(skip_all)]
pub async fn login(Form(form): Form<LoginForm>) -> impl IntoResponse {
    tracing::info!(
        username = %form.username,
        has_password = !form.password.is_empty(),
        "Login"
    );
    Redirect::to(DASHBOARD_PATH)
}

/// Show the logout confirmation. Cancel returns to the dashboard.
///
/// GET /logout
#[instrument(skip(state, session))]
pub async fn logout_page(
    State(state): State<AppState>,
    session: Session,
) -> Result<Html<String>, AppError> {
    let chrome = PageChrome::load(&state, &session, "Logout", "logout", LOGOUT_PATH)
        .await?
        .with_modal(Modal::ConfirmLogout.view(""));
    Ok(Html(LogoutTemplate { chrome }.render()?))
}

/// Logout and clear session.
///
/// POST /logout
#[instrument(skip(session))]
pub async fn logout(session: Session) -> Result<Redirect, AppError> {
    session.flush().await?;
    tracing::info!("Session cleared");
    Ok(Redirect::to(LOGIN_PATH))
}
