//! Configuration file loading
//!
//! Reads `key:value` files named by `--load` into raw values that the
//! resolution engine merges beneath command-line values.

pub mod loader;

pub use loader::load_config;
