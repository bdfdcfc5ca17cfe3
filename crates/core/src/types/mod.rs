//! Core types for SingSing.
//!
//! This module provides typed wrappers for the product catalog and prices.

pub mod code;
pub mod price;
pub mod product;

pub use code::{CODE_WIDTH, IdStrategy, ParseIdStrategyError, code_number, sequential_code};
pub use price::{CurrencyCode, Price, coerce_amount, normalize_price};
pub use product::{
    DEFAULT_CATEGORY, DEFAULT_COUNT, DEFAULT_PRICE, FieldError, ProductFields, ProductRow,
    RowPolicy,
};
