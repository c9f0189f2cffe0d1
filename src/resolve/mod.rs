//! Resolution engine
//!
//! Merges command-line values, configuration-file values and declared
//! defaults, with that precedence, and maps every parse attempt to an
//! exit-code outcome.

pub mod engine;
pub mod outcome;

pub use engine::OptionParser;
pub use outcome::ParseOutcome;
