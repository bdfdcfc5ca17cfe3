//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::{AdminConfig, CatalogSettings, YearSettings};
use crate::promotions::Promotions;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. Per-visitor data (the catalog
/// and the year preference) lives in the session, not here.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    promotions: Promotions,
}

impl AppState {
    /// Create a new application state with the built-in promotions.
    #[must_use]
    pub fn new(config: AdminConfig) -> Self {
        Self::with_promotions(config, Promotions::default())
    }

    #[must_use]
    pub fn with_promotions(config: AdminConfig, promotions: Promotions) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, promotions }),
        }
    }

    /// Get a reference to the admin configuration.
    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    /// Policies every catalog in this process is built with.
    #[must_use]
    pub fn catalog_settings(&self) -> CatalogSettings {
        self.inner.config.catalog
    }

    #[must_use]
    pub fn years(&self) -> &YearSettings {
        &self.inner.config.years
    }

    #[must_use]
    pub fn promotions(&self) -> &Promotions {
        &self.inner.promotions
    }
}
