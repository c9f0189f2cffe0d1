//! Command-line interface for optmerge
//!
//! Declares a small simulation schema, resolves it from the process
//! arguments and an optional `--load` file, and reports the effective values.

use anyhow::{Context, Result};
use optmerge::{BooleanAction, OptionParser, ParseOutcome};
use std::fs;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod report;

/// `save` value meaning "do not dump".
const NO_SAVE: &str = "none";

/// `output` value meaning stdout.
const STDOUT: &str = "-";

/// Build the parser with the options this binary understands.
pub fn declare_options() -> optmerge::Result<OptionParser> {
    let mut parser = OptionParser::new();
    parser.declare("timestep", 1, "Integration step size", "0.001")?;
    parser.declare("period", 2, "Start and end time of the run", "0,1")?;
    parser.declare("steps", 1, "Number of steps to take", "")?;
    parser.declare("output", 1, "Where to write the report ('-' for stdout)", STDOUT)?;
    parser.declare("save", 1, "Append the effective options to this file", NO_SAVE)?;
    parser.declare_boolean("verbose", BooleanAction::StoreTrue, "Show where each value came from")?;
    parser.declare_boolean("json", BooleanAction::StoreTrue, "Print the report as JSON")?;
    parser.declare_boolean("progress", BooleanAction::StoreFalse, "Disable progress output")?;
    Ok(parser)
}

/// Run the binary and return the process exit code.
pub fn run() -> Result<i32> {
    // RUST_LOG takes precedence; default to warnings only.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let mut parser = declare_options()?;
    let args = std::env::args_os().map(|arg| arg.to_string_lossy().into_owned());

    let outcome = parser.parse(args);
    if !matches!(outcome, ParseOutcome::Success) {
        return Ok(outcome.exit_code());
    }

    let verbose: bool = parser.retrieve("verbose")?;
    let json: bool = parser.retrieve("json")?;
    // Paths are taken whole; sub-value selection would cut them at a comma.
    let output = parser.raw_value("output")?;
    let save = parser.raw_value("save")?;

    // Fail on values that do not convert before writing anything.
    parser.retrieve::<f64>("timestep")?;
    parser.retrieve_pair::<f64, f64>("period")?;
    parser.retrieve::<u64>("steps")?;

    let text = if json {
        report::render_json(&parser)?
    } else {
        report::render_text(&parser, verbose)?
    };

    if output == STDOUT {
        print!("{text}");
    } else {
        fs::write(output, &text).with_context(|| format!("Failed writing report: {output}"))?;
    }

    if save != NO_SAVE {
        parser.dump(save)?;
        tracing::info!("Saved options to {}", save);
    }

    Ok(0)
}
