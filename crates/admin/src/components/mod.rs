//! Reusable page components.

pub mod data_table;
