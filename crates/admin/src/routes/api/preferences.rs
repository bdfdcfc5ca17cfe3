//! User preferences API handlers.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::{
    preferences::{self, PreferenceError},
    state::AppState,
};

/// Build the preferences router.
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/api/preferences/year",
        get(get_year).post(save_year),
    )
}

/// Request for saving the year.
#[derive(Debug, Deserialize)]
pub struct YearRequest {
    pub year: String,
}

/// The stored year.
#[derive(Debug, Serialize)]
pub struct YearResponse {
    pub year: String,
    pub options: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn year_response(state: &AppState, year: String) -> Json<YearResponse> {
    Json(YearResponse {
        year,
        options: state.years().options.clone(),
    })
}

fn session_failure(err: &tower_sessions::session::Error) -> Response {
    tracing::error!("Failed to access year preference: {err}");
    StatusCode::INTERNAL_SERVER_ERROR.into_response()
}

/// Read the year for this session.
pub async fn get_year(State(state): State<AppState>, session: Session) -> Response {
    match preferences::selected_year(&session, state.years()).await {
        Ok(year) => year_response(&state, year).into_response(),
        Err(e) => session_failure(&e),
    }
}

/// Save the year for this session.
///
/// Returns 400 with a JSON error for a year the selector does not offer.
pub async fn save_year(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<YearRequest>,
) -> Response {
    match preferences::set_year(&session, state.years(), &body.year).await {
        Ok(year) => year_response(&state, year).into_response(),
        Err(e @ PreferenceError::UnknownYear(_)) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
            .into_response(),
        Err(PreferenceError::Session(e)) => session_failure(&e),
    }
}
