//! Command-line scanning

use crate::error::Result;
use crate::registry::Registry;

pub mod scanner;

pub use scanner::{CommandLineScanner, ScanResult};

/// Scan option tokens (the argument vector without the program name).
pub fn scan_arguments<S: AsRef<str>>(registry: &Registry, tokens: &[S]) -> Result<ScanResult> {
    CommandLineScanner::new(registry).scan(tokens)
}
