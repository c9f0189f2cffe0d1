//! Output rendering (usage listing, failure messages, value dumps)

pub mod dump;
pub mod usage;

pub use dump::{dump_header, write_dump};
pub use usage::render_usage;

use crate::error::OptionError;

/// Failure message followed by the usage listing.
pub fn render_failure(err: &OptionError, usage: &str) -> String {
    format!("error: {err}\n\n{usage}")
}
