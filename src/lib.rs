//! optmerge: declare command-line options and resolve their values
//!
//! A host program declares named options with an arity, a default and a
//! description. Parsing then resolves each option from three sources in
//! strict precedence: command-line arguments, a configuration file named by
//! `--load`, and the declared defaults. Values are converted to the
//! requested type on retrieval.
//!
//! ```no_run
//! use optmerge::{BooleanAction, OptionParser, ParseOutcome};
//!
//! fn main() -> optmerge::Result<()> {
//!     let mut parser = OptionParser::new();
//!     parser.declare("timestep", 1, "Integration step", "0.001")?;
//!     parser.declare("period", 2, "Start and end time", "")?;
//!     parser.declare_boolean("verbose", BooleanAction::StoreTrue, "Talk more")?;
//!
//!     let outcome = parser.parse(std::env::args());
//!     if !matches!(outcome, ParseOutcome::Success) {
//!         std::process::exit(outcome.exit_code());
//!     }
//!
//!     let dt: f64 = parser.retrieve("timestep")?;
//!     let (start, end): (f64, f64) = parser.retrieve_pair("period")?;
//!     let verbose: bool = parser.retrieve("verbose")?;
//!     println!("{dt} {start} {end} {verbose}");
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod registry;
pub mod render;
pub mod resolve;
pub mod retrieve;
pub mod scan;
pub mod utils;

pub use domain::{BooleanAction, OptionDefinition, ResolvedValue, ValueSource};
pub use error::{OptionError, Result};
pub use registry::Registry;
pub use resolve::{OptionParser, ParseOutcome};
pub use retrieve::FromOptionValue;
