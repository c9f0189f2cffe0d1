//! Option registry
//!
//! Holds every declared option keyed by name. Declarations are append-only:
//! a name can be registered once and never removed.

use crate::domain::{BooleanAction, OptionDefinition, HELP_OPTION, LOAD_OPTION};
use crate::error::{OptionError, Result};
use std::collections::BTreeMap;

/// Declared options, iterated in name order.
#[derive(Debug, Clone)]
pub struct Registry {
    options: BTreeMap<String, OptionDefinition>,
}

impl Registry {
    /// Create a registry holding only the built-in `help` and `load` options.
    pub fn new() -> Self {
        let mut options = BTreeMap::new();
        options.insert(HELP_OPTION.to_string(), OptionDefinition::builtin(0, "Print this message"));
        options.insert(
            LOAD_OPTION.to_string(),
            OptionDefinition::builtin(1, "Load settings from configuration file"),
        );
        Self { options }
    }

    /// Declare a user option.
    ///
    /// `default_value` is comma-joined for multi-argument options; an empty
    /// default makes the option mandatory.
    pub fn declare(
        &mut self,
        name: impl Into<String>,
        nargs: usize,
        description: impl Into<String>,
        default_value: impl Into<String>,
    ) -> Result<()> {
        let definition =
            OptionDefinition::new(nargs).description(description).default_value(default_value);
        self.insert(name.into(), definition)
    }

    /// Declare a zero-argument flag whose presence stores `true` or `false`.
    pub fn declare_boolean(
        &mut self,
        name: impl Into<String>,
        action: BooleanAction,
        description: impl Into<String>,
    ) -> Result<()> {
        self.declare(name, 0, description, action.default_marker())
    }

    /// Register a fully built definition.
    pub fn insert(&mut self, name: String, definition: OptionDefinition) -> Result<()> {
        if self.options.contains_key(&name) {
            return Err(OptionError::DuplicateOption(name));
        }
        tracing::trace!(option = %name, nargs = definition.nargs, "declared option");
        self.options.insert(name, definition);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&OptionDefinition> {
        self.options.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.options.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionDefinition)> {
        self.options.iter().map(|(name, def)| (name.as_str(), def))
    }

    /// User-declared options, in name order.
    pub fn user_options(&self) -> impl Iterator<Item = (&str, &OptionDefinition)> {
        self.iter().filter(|(_, def)| def.is_user_option())
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether `name` is one of the built-in options.
pub fn is_builtin(name: &str) -> bool {
    name == HELP_OPTION || name == LOAD_OPTION
}
