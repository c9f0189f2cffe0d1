//! Option value dumps in configuration-file format.

use crate::domain::ResolvedValue;
use crate::registry::Registry;
use chrono::Local;
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::io::{self, Write};

const HEADER: &str = "# Created automatically by optmerge";

/// Comment line opening each dump block, with the local time when it can be
/// formatted.
pub fn dump_header() -> String {
    let mut stamp = String::new();
    match write!(stamp, "{}", Local::now().format("%c")) {
        Ok(()) if !stamp.is_empty() => format!("{HEADER} on {stamp}"),
        _ => HEADER.to_string(),
    }
}

/// Write one block of `name: value` lines for the user options.
///
/// Resolved values are preferred over defaults. Options with neither, and
/// the built-in options, are left out.
pub fn write_dump<W: Write>(
    writer: &mut W,
    registry: &Registry,
    values: &BTreeMap<String, ResolvedValue>,
) -> io::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "{}", dump_header())?;
    writeln!(writer)?;

    for (name, definition) in registry.user_options() {
        let value = match values.get(name) {
            Some(resolved) => resolved.raw.as_str(),
            None if definition.has_default() => definition.default_value.as_str(),
            None => continue,
        };
        writeln!(writer, "{name}: {value}")?;
    }

    writeln!(writer)?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BooleanAction, ValueSource};

    fn render(values: &BTreeMap<String, ResolvedValue>) -> String {
        let mut registry = Registry::new();
        registry.declare("timestep", 1, "", "0.001").expect("declare");
        registry.declare("period", 2, "", "").expect("declare");
        registry.declare("steps", 1, "", "").expect("declare");
        registry.declare_boolean("verbose", BooleanAction::StoreTrue, "").expect("declare");

        let mut out = Vec::new();
        write_dump(&mut out, &registry, values).expect("dump");
        String::from_utf8(out).expect("utf8")
    }

    #[test]
    fn header_names_the_tool() {
        assert!(dump_header().starts_with(HEADER));
    }

    #[test]
    fn resolved_values_win_over_defaults() {
        let mut values = BTreeMap::new();
        values.insert("timestep".to_string(), ResolvedValue::new("0.5", ValueSource::CommandLine));
        values.insert("period".to_string(), ResolvedValue::new("0, 1", ValueSource::ConfigFile));

        let text = render(&values);
        assert!(text.contains("\ntimestep: 0.5\n"));
        assert!(text.contains("\nperiod: 0, 1\n"));
        assert!(text.contains("\nverbose: 0\n"));
    }

    #[test]
    fn options_without_values_are_omitted() {
        let text = render(&BTreeMap::new());
        assert!(!text.contains("steps"));
        assert!(!text.contains("period"));
        assert!(!text.contains("help"));
        assert!(!text.contains("load:"));
    }

    #[test]
    fn block_is_framed_by_blank_lines() {
        let text = render(&BTreeMap::new());
        assert!(text.starts_with("\n# Created automatically by optmerge"));
        assert!(text.ends_with("\n\n"));
    }
}
