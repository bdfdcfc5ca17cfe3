//! Values the admin panel keeps in the visitor's session.

pub mod session;

pub use session::keys;
