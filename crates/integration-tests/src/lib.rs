//! Integration tests for the SingSing admin panel.
//!
//! Tests drive the real router in-process through [`tower::ServiceExt`]. A
//! [`TestClient`] carries the session cookie between requests the way a
//! browser would, so each client sees its own catalog.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p singsing-integration-tests
//! ```

#![allow(clippy::missing_panics_doc)]

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use tower::ServiceExt;

use singsing_admin::{app, config::AdminConfig, middleware::SESSION_COOKIE_NAME, state::AppState};

/// Upper bound on response bodies read by tests.
const BODY_LIMIT: usize = 1024 * 1024;

/// A response with its body read to a string.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    /// `Location` header of redirects.
    pub location: Option<String>,
    pub content_type: Option<String>,
    pub body: String,
}

impl TestResponse {
    /// Number of product rows in a rendered products table.
    #[must_use]
    pub fn product_rows(&self) -> usize {
        self.body.matches("data-position=\"").count()
    }

    /// Whether a dialog is rendered over the page.
    #[must_use]
    pub fn has_modal(&self) -> bool {
        self.body.contains("class=\"modal-backdrop\"")
    }

    /// Parse the body as JSON.
    ///
    /// # Panics
    ///
    /// Panics if the body is not valid JSON.
    #[must_use]
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("response body is not JSON")
    }
}

/// An in-process browser with a cookie jar holding one session cookie.
#[derive(Clone)]
pub struct TestClient {
    router: Router,
    cookie: Option<String>,
}

impl TestClient {
    /// A client against a fresh app with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(AdminConfig::default())
    }

    #[must_use]
    pub fn with_config(config: AdminConfig) -> Self {
        Self {
            router: app(AppState::new(config)),
            cookie: None,
        }
    }

    /// Another client against the same app, with no session.
    #[must_use]
    pub fn fresh_client(&self) -> Self {
        Self {
            router: self.router.clone(),
            cookie: None,
        }
    }

    #[must_use]
    pub fn has_session(&self) -> bool {
        self.cookie.is_some()
    }

    pub async fn get(&mut self, uri: &str) -> TestResponse {
        let request = Request::get(uri);
        self.send(request, Body::empty()).await
    }

    pub async fn post_form(&mut self, uri: &str, fields: &[(&str, &str)]) -> TestResponse {
        let body = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(fields)
            .finish();
        let request = Request::post(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        self.send(request, Body::from(body)).await
    }

    pub async fn post_json(&mut self, uri: &str, value: &serde_json::Value) -> TestResponse {
        let request = Request::post(uri).header(header::CONTENT_TYPE, "application/json");
        self.send(request, Body::from(value.to_string())).await
    }

    /// Post a create form with every field.
    pub async fn create_product(&mut self, id: &str, name: &str, price: &str) -> TestResponse {
        self.post_form(
            "/products",
            &[
                ("id", id),
                ("quantity", "0"),
                ("name", name),
                ("category", ""),
                ("stock", "0"),
                ("price", price),
            ],
        )
        .await
    }

    /// Confirm removal of the row at `position`, opened for `expected_id`.
    pub async fn remove_product(&mut self, position: usize, expected_id: &str) -> TestResponse {
        self.post_form(
            &format!("/products/{position}/remove"),
            &[("expected_id", expected_id)],
        )
        .await
    }

    async fn send(&mut self, builder: axum::http::request::Builder, body: Body) -> TestResponse {
        let builder = match &self.cookie {
            Some(cookie) => builder.header(header::COOKIE, cookie),
            None => builder,
        };
        let request = builder.body(body).expect("valid request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        for value in response.headers().get_all(header::SET_COOKIE) {
            if let Ok(raw) = value.to_str() {
                self.store_cookie(raw);
            }
        }

        let status = response.status();
        let header_str = |name: header::HeaderName| {
            response
                .headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(ToString::to_string)
        };
        let location = header_str(header::LOCATION);
        let content_type = header_str(header::CONTENT_TYPE);

        let bytes = axum::body::to_bytes(response.into_body(), BODY_LIMIT)
            .await
            .expect("readable body");

        TestResponse {
            status,
            location,
            content_type,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }

    fn store_cookie(&mut self, raw: &str) {
        let Some(pair) = raw.split(';').next() else {
            return;
        };
        let Some((name, value)) = pair.trim().split_once('=') else {
            return;
        };
        if name != SESSION_COOKIE_NAME {
            return;
        }
        let expired = raw.to_ascii_lowercase().contains("max-age=0");
        self.cookie = if value.is_empty() || expired {
            None
        } else {
            Some(format!("{name}={value}"))
        };
    }
}

impl Default for TestClient {
    fn default() -> Self {
        Self::new()
    }
}
