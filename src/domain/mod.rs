//! Core data types shared by the registry, the scanner and retrieval.

use serde::Serialize;
use std::fmt;

/// Name of the built-in help flag.
pub const HELP_OPTION: &str = "help";

/// Name of the built-in configuration-file option.
pub const LOAD_OPTION: &str = "load";

/// Separator used to join the sub-values of a multi-argument option.
pub const SUB_VALUE_SEPARATOR: &str = ", ";

/// Behaviour of a zero-argument option when its flag is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BooleanAction {
    /// Present means `true`; the default is `"0"`.
    StoreTrue,
    /// Present means `false`; the default is `"1"`.
    StoreFalse,
}

impl BooleanAction {
    /// Default marker stored for a flag with this action.
    pub fn default_marker(self) -> &'static str {
        match self {
            BooleanAction::StoreTrue => "0",
            BooleanAction::StoreFalse => "1",
        }
    }
}

/// A declared option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionDefinition {
    /// Number of sub-values consumed; `0` makes the option a boolean flag.
    pub nargs: usize,
    /// Default value, comma-joined for multi-argument options. Empty means no default.
    pub default_value: String,
    pub description: String,
    user_option: bool,
}

impl OptionDefinition {
    /// Create a user option with no default and no description.
    pub fn new(nargs: usize) -> Self {
        Self { nargs, default_value: String::new(), description: String::new(), user_option: true }
    }

    pub(crate) fn builtin(nargs: usize, description: &str) -> Self {
        Self { description: description.to_string(), user_option: false, ..Self::new(nargs) }
    }

    /// Set the description shown in the usage listing
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the default value
    pub fn default_value(mut self, default_value: impl Into<String>) -> Self {
        self.default_value = default_value.into();
        self
    }

    pub fn is_flag(&self) -> bool {
        self.nargs == 0
    }

    pub fn has_default(&self) -> bool {
        !self.default_value.is_empty()
    }

    /// `false` only for the built-in `help` and `load` options.
    pub fn is_user_option(&self) -> bool {
        self.user_option
    }
}

/// Value of a flag given its default marker and whether it was present.
///
/// Presence flips the default polarity (`"0"` becomes `"1"`, anything else
/// becomes `"0"`). Absence normalizes the default to `"0"` or `"1"`.
pub fn flag_value(default_marker: &str, present: bool) -> &'static str {
    let default_is_false = default_marker == "0";
    if default_is_false == present {
        "1"
    } else {
        "0"
    }
}

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueSource {
    CommandLine,
    ConfigFile,
    Default,
}

impl fmt::Display for ValueSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ValueSource::CommandLine => "command line",
            ValueSource::ConfigFile => "config file",
            ValueSource::Default => "default",
        };
        f.write_str(label)
    }
}

/// Raw value chosen for an option during one parse pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedValue {
    pub raw: String,
    pub source: ValueSource,
}

impl ResolvedValue {
    pub fn new(raw: impl Into<String>, source: ValueSource) -> Self {
        Self { raw: raw.into(), source }
    }
}
