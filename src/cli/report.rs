//! Report of the effective option values.

use anyhow::Result;
use optmerge::{OptionParser, ValueSource};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write;

#[derive(Serialize)]
struct ReportEntry<'a> {
    value: &'a str,
    source: ValueSource,
}

/// Effective user option values with their sources, in name order.
fn effective_values(parser: &OptionParser) -> Result<Vec<(&str, &str, ValueSource)>> {
    let mut entries = Vec::new();
    for (name, _) in parser.registry().user_options() {
        let Some(source) = parser.source_of(name) else {
            continue;
        };
        entries.push((name, parser.raw_value(name)?, source));
    }
    Ok(entries)
}

/// One `name = value` line per option, with `[source]` when verbose.
pub fn render_text(parser: &OptionParser, verbose: bool) -> Result<String> {
    let mut out = String::new();
    for (name, value, source) in effective_values(parser)? {
        if verbose {
            writeln!(out, "{name} = {value} [{source}]")?;
        } else {
            writeln!(out, "{name} = {value}")?;
        }
    }
    Ok(out)
}

/// JSON object mapping each option to its value and source.
pub fn render_json(parser: &OptionParser) -> Result<String> {
    let report: BTreeMap<&str, ReportEntry<'_>> = effective_values(parser)?
        .into_iter()
        .map(|(name, value, source)| (name, ReportEntry { value, source }))
        .collect();
    let mut json = serde_json::to_string_pretty(&report)?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::declare_options;

    fn parsed(args: &[&str]) -> OptionParser {
        let mut parser = declare_options().expect("schema");
        let mut sink = Vec::new();
        let outcome = parser.parse_with_diagnostics(args.iter().copied(), &mut sink);
        assert!(outcome.is_success(), "{outcome:?}");
        parser
    }

    #[test]
    fn text_lists_every_user_option() {
        let parser = parsed(&["optmerge", "--steps", "10"]);
        let text = render_text(&parser, false).expect("render");

        assert!(text.contains("steps = 10\n"));
        assert!(text.contains("period = 0,1\n"));
        assert!(text.contains("progress = 1\n"));
        assert!(!text.contains("help"));
        assert!(!text.contains("load"));
    }

    #[test]
    fn verbose_text_shows_sources() {
        let parser = parsed(&["optmerge", "--steps", "10", "--verbose"]);
        let text = render_text(&parser, true).expect("render");

        assert!(text.contains("steps = 10 [command line]\n"));
        assert!(text.contains("timestep = 0.001 [default]\n"));
    }

    #[test]
    fn json_report_has_values_and_sources() {
        let parser = parsed(&["optmerge", "--steps", "10", "--period", "2", "4"]);
        let json = render_json(&parser).expect("render");
        let parsed: serde_json::Value = serde_json::from_str(&json).expect("json");

        assert_eq!(parsed["period"]["value"], "2, 4");
        assert_eq!(parsed["period"]["source"], "command_line");
        assert_eq!(parsed["timestep"]["source"], "default");
    }
}
