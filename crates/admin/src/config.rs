//! Admin configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; a variable that is set but invalid is an error.
//!
//! - `ADMIN_HOST` - Bind address (default: 127.0.0.1)
//! - `ADMIN_PORT` - Listen port (default: 3001)
//! - `ADMIN_BASE_URL` - Public URL for the admin panel (default: http://localhost:3001)
//! - `ADMIN_STATIC_DIR` - Static asset directory (default: crates/admin/static)
//! - `ADMIN_LOG_JSON` - Emit JSON logs when truthy
//!
//! ## Catalog
//! - `ADMIN_ID_STRATEGY` - Default product code scheme: `max_plus_one` (default) or `row_count`
//! - `ADMIN_VALIDATE_EDITS` - Apply create-time validation to edits (default: false)
//!
//! ## Year selector
//! - `ADMIN_DEFAULT_YEAR` - Year shown before the user picks one (default: 2023)
//! - `ADMIN_YEARS` - Comma-separated selectable years (default: 2021,2022,2023,2024,2025)
//!
//! ## Error tracking
//! - `SENTRY_DSN`, `SENTRY_ENVIRONMENT`, `SENTRY_SAMPLE_RATE`, `SENTRY_TRACES_SAMPLE_RATE`
//!
//! ## TLS
//! - `ADMIN_TLS_CERT` - PEM-encoded certificate chain
//! - `ADMIN_TLS_KEY` - PEM-encoded private key

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use secrecy::SecretString;
use singsing_core::IdStrategy;
use thiserror::Error;
use url::Url;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: &str = "3001";
const DEFAULT_BASE_URL: &str = "http://localhost:3001";
const DEFAULT_STATIC_DIR: &str = "crates/admin/static";
const DEFAULT_YEAR: &str = "2023";
const DEFAULT_YEARS: &[&str] = &["2021", "2022", "2023", "2024", "2025"];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Admin application configuration.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the admin panel
    pub base_url: String,
    /// Directory served under `/static`
    pub static_dir: String,
    /// Emit JSON logs instead of text
    pub log_json: bool,
    /// Product catalog behavior
    pub catalog: CatalogSettings,
    /// Year selector options
    pub years: YearSettings,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g., "development", "production")
    pub sentry_environment: Option<String>,
    /// Sentry error sample rate (0.0 to 1.0)
    pub sentry_sample_rate: f32,
    /// Sentry traces sample rate for performance monitoring (0.0 to 1.0)
    pub sentry_traces_sample_rate: f32,
    /// TLS configuration for HTTPS (optional)
    pub tls: Option<TlsConfig>,
}

/// Product catalog behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CatalogSettings {
    /// How default product codes are generated on create.
    pub id_strategy: IdStrategy,
    /// Whether edits go through the same validation as create.
    pub validate_edits: bool,
}

/// Year selector configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearSettings {
    /// Year used until the session stores a choice.
    pub default_year: String,
    /// Years offered by the selector, in display order.
    pub options: Vec<String>,
}

impl Default for YearSettings {
    fn default() -> Self {
        Self {
            default_year: DEFAULT_YEAR.to_string(),
            options: DEFAULT_YEARS.iter().map(ToString::to_string).collect(),
        }
    }
}

impl YearSettings {
    /// Whether `year` is one of the selectable options.
    #[must_use]
    pub fn allows(&self, year: &str) -> bool {
        self.options.iter().any(|option| option == year)
    }

    fn from_source(source: &impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let options: Vec<String> = match get_optional(source, "ADMIN_YEARS") {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect(),
            None => DEFAULT_YEARS.iter().map(ToString::to_string).collect(),
        };

        if options.is_empty() {
            return Err(ConfigError::InvalidEnvVar(
                "ADMIN_YEARS".to_string(),
                "at least one year is required".to_string(),
            ));
        }
        if let Some(bad) = options
            .iter()
            .find(|y| y.len() != 4 || !y.bytes().all(|b| b.is_ascii_digit()))
        {
            return Err(ConfigError::InvalidEnvVar(
                "ADMIN_YEARS".to_string(),
                format!("'{bad}' is not a four-digit year"),
            ));
        }

        let default_year = get_or_default(source, "ADMIN_DEFAULT_YEAR", DEFAULT_YEAR);
        let settings = Self {
            default_year,
            options,
        };
        if !settings.allows(&settings.default_year) {
            return Err(ConfigError::InvalidEnvVar(
                "ADMIN_DEFAULT_YEAR".to_string(),
                format!("'{}' is not one of ADMIN_YEARS", settings.default_year),
            ));
        }
        Ok(settings)
    }
}

/// TLS configuration for HTTPS.
#[derive(Clone)]
pub struct TlsConfig {
    /// PEM-encoded certificate chain
    pub cert_pem: String,
    /// PEM-encoded private key
    pub key_pem: SecretString,
}

impl std::fmt::Debug for TlsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TlsConfig")
            .field("cert_pem", &"[CERTIFICATE]")
            .field("key_pem", &"[REDACTED]")
            .finish()
    }
}

impl TlsConfig {
    fn from_source(source: &impl Fn(&str) -> Option<String>) -> Result<Option<Self>, ConfigError> {
        let cert_pem = get_optional(source, "ADMIN_TLS_CERT");
        let key_pem = get_optional(source, "ADMIN_TLS_KEY");

        match (cert_pem, key_pem) {
            (Some(cert), Some(key)) => Ok(Some(Self {
                cert_pem: cert,
                key_pem: SecretString::from(key),
            })),
            (None, None) => Ok(None),
            _ => Err(ConfigError::InvalidEnvVar(
                "ADMIN_TLS_*".to_string(),
                "Both ADMIN_TLS_CERT and ADMIN_TLS_KEY must be set together".to_string(),
            )),
        }
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 3001,
            base_url: DEFAULT_BASE_URL.to_string(),
            static_dir: DEFAULT_STATIC_DIR.to_string(),
            log_json: false,
            catalog: CatalogSettings::default(),
            years: YearSettings::default(),
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 1.0,
            tls: None,
        }
    }
}

impl AdminConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_source(&|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_source(source: &impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = get_or_default(source, "ADMIN_HOST", DEFAULT_HOST)
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("ADMIN_HOST".to_string(), e.to_string()))?;
        let port = get_or_default(source, "ADMIN_PORT", DEFAULT_PORT)
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("ADMIN_PORT".to_string(), e.to_string()))?;
        let base_url = get_or_default(source, "ADMIN_BASE_URL", DEFAULT_BASE_URL);
        Url::parse(&base_url)
            .map_err(|e| ConfigError::InvalidEnvVar("ADMIN_BASE_URL".to_string(), e.to_string()))?;
        let static_dir = get_or_default(source, "ADMIN_STATIC_DIR", DEFAULT_STATIC_DIR);
        let log_json = get_flag(source, "ADMIN_LOG_JSON")?;

        let id_strategy = match get_optional(source, "ADMIN_ID_STRATEGY") {
            Some(raw) => raw.parse::<IdStrategy>().map_err(|e| {
                ConfigError::InvalidEnvVar("ADMIN_ID_STRATEGY".to_string(), e.to_string())
            })?,
            None => IdStrategy::default(),
        };
        let catalog = CatalogSettings {
            id_strategy,
            validate_edits: get_flag(source, "ADMIN_VALIDATE_EDITS")?,
        };
        let years = YearSettings::from_source(source)?;

        let sentry_dsn = get_optional(source, "SENTRY_DSN");
        let sentry_environment = get_optional(source, "SENTRY_ENVIRONMENT");
        let sentry_sample_rate = get_optional(source, "SENTRY_SAMPLE_RATE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(1.0);
        let sentry_traces_sample_rate = get_optional(source, "SENTRY_TRACES_SAMPLE_RATE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(1.0);
        let tls = TlsConfig::from_source(source)?;

        Ok(Self {
            host,
            port,
            base_url,
            static_dir,
            log_json,
            catalog,
            years,
            sentry_dsn,
            sentry_environment,
            sentry_sample_rate,
            sentry_traces_sample_rate,
            tls,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether the panel is served over HTTPS (secure cookies).
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional variable, treating empty values as unset.
fn get_optional(source: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    source(key).filter(|v| !v.trim().is_empty())
}

/// Get a variable with a default value.
fn get_or_default(source: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    get_optional(source, key).unwrap_or_else(|| default.to_string())
}

/// Parse a boolean flag (`1/0`, `true/false`, `yes/no`, `on/off`).
fn get_flag(source: &impl Fn(&str) -> Option<String>, key: &str) -> Result<bool, ConfigError> {
    let Some(raw) = get_optional(source, key) else {
        return Ok(false);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("expected a boolean, got '{other}'"),
        )),
    }
}
