//! HTTP middleware stack for admin.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (added in `main`, capture errors and transactions)
//! 2. `TraceLayer` (request span with status and latency)
//! 3. Session layer (tower-sessions with the in-memory store)

pub mod session;

pub use session::{SESSION_COOKIE_NAME, create_session_layer};
