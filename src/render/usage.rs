//! Usage listing.

use crate::domain::OptionDefinition;
use crate::registry::Registry;
use unicode_width::UnicodeWidthStr;

const MISSING_DESCRIPTION: &str = "*** description unavailable ***";
const INDENT: &str = "  ";
const GAP: usize = 4;

/// Render the usage listing: built-in options first, then user options,
/// each group in name order.
pub fn render_usage(program_name: &str, registry: &Registry) -> String {
    let rows: Vec<(String, &str)> = registry
        .iter()
        .filter(|(_, def)| !def.is_user_option())
        .chain(registry.user_options())
        .map(|(name, def)| (option_synopsis(name, def), def.description.as_str()))
        .collect();

    let width = rows.iter().map(|(synopsis, _)| synopsis.width()).max().unwrap_or(0) + GAP;

    let mut out = format!("Usage: {program_name} [OPTIONS]\n\nWhere OPTIONS are:\n");
    for (synopsis, description) in &rows {
        let description = if description.is_empty() { MISSING_DESCRIPTION } else { description };
        let padding = " ".repeat(width - synopsis.width());
        out.push_str(&format!("{INDENT}{synopsis}{padding}{description}\n"));
    }
    out.push('\n');
    out
}

/// `--name <arg> <arg>` with one placeholder per sub-value.
fn option_synopsis(name: &str, definition: &OptionDefinition) -> String {
    let mut synopsis = format!("--{name}");
    for _ in 0..definition.nargs {
        synopsis.push_str(" <arg>");
    }
    synopsis
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BooleanAction;

    fn registry() -> Registry {
        let mut registry = Registry::new();
        registry.declare("period", 2, "Time window", "0,1").expect("declare");
        registry.declare("alpha", 1, "", "").expect("declare");
        registry.declare_boolean("verbose", BooleanAction::StoreTrue, "Talk more").expect("declare");
        registry
    }

    #[test]
    fn starts_with_program_name() {
        let usage = render_usage("sim", &registry());
        assert!(usage.starts_with("Usage: sim [OPTIONS]\n\nWhere OPTIONS are:\n"));
        assert!(usage.ends_with("\n\n"));
    }

    #[test]
    fn builtins_are_listed_before_user_options() {
        let usage = render_usage("sim", &registry());
        let position = |needle: &str| usage.find(needle).expect(needle);

        assert!(position("--help") < position("--load"));
        assert!(position("--load") < position("--alpha"));
        assert!(position("--alpha") < position("--period"));
        assert!(position("--period") < position("--verbose"));
    }

    #[test]
    fn rows_show_arity_and_descriptions() {
        let usage = render_usage("sim", &registry());
        assert!(usage.contains("--period <arg> <arg>"));
        assert!(usage.contains("Time window"));
        assert!(usage.contains(MISSING_DESCRIPTION), "alpha has no description");
    }

    #[test]
    fn descriptions_are_aligned() {
        let usage = render_usage("sim", &registry());
        let columns: Vec<usize> = usage
            .lines()
            .filter(|line| line.starts_with(INDENT))
            .map(|line| {
                let synopsis_end = line[INDENT.len()..].find("  ").expect("gap") + INDENT.len();
                synopsis_end + line[synopsis_end..].find(|c: char| c != ' ').expect("description")
            })
            .collect();

        assert_eq!(columns.len(), 5);
        assert!(columns.windows(2).all(|pair| pair[0] == pair[1]));
    }
}
