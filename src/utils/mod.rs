//! Shared helpers

pub mod text;

pub use text::{join_sub_values, select_sub_value, strip_whitespace, sub_value_count};
