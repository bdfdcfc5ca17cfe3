//! SingSing Core - Shared types library.
//!
//! This crate provides the types shared by the SingSing components:
//! - `admin` - Admin panel (products table, promotions, navigation)
//! - `integration-tests` - Router-level tests for the admin panel
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP,
//! no session handling. This keeps it lightweight and trivially testable.
//!
//! # Modules
//!
//! - [`types`] - Product rows, form fields, product codes and prices

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
