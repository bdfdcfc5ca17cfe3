//! SingSing admin library.
//!
//! The admin panel as a library: the products catalog editor, the modal
//! presenter, navigation, the year preference and the promotions grid, plus
//! the axum router that serves them. The binary in `main.rs` adds error
//! tracking and binds a listener.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod components;
pub mod config;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod modal;
pub mod models;
pub mod navigation;
pub mod preferences;
pub mod promotions;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;

use crate::middleware::create_session_layer;
use crate::state::AppState;

/// Build the complete application router.
///
/// Includes the session layer, static files and request tracing. Sentry
/// layers are added by the binary.
pub fn app(state: AppState) -> Router {
    let session_layer = create_session_layer(state.config());
    let static_dir = ServeDir::new(&state.config().static_dir);

    Router::new()
        .merge(routes::routes())
        .nest_service("/static", static_dir)
        .layer(session_layer)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record(
                            "latency_ms",
                            u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                        );
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .with_state(state)
}
