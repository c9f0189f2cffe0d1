//! Scanner that turns option tokens into raw values

use crate::domain::{flag_value, HELP_OPTION};
use crate::error::{OptionError, Result};
use crate::registry::Registry;
use crate::utils::join_sub_values;
use std::collections::BTreeMap;

/// Result of walking the argument vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanResult {
    /// `help` was found; scanning stopped at that token.
    HelpRequested,
    /// Every token was consumed. Maps option name to its raw value.
    Completed(BTreeMap<String, String>),
}

/// Walks option tokens against a registry.
pub struct CommandLineScanner<'a> {
    registry: &'a Registry,
}

impl<'a> CommandLineScanner<'a> {
    pub fn new(registry: &'a Registry) -> Self {
        Self { registry }
    }

    /// Scan `tokens`, which must not include the program name.
    ///
    /// Each option is introduced by one or more dashes. Flags take the
    /// inverted default marker; other options consume exactly `nargs`
    /// following tokens verbatim, joined with `", "`.
    pub fn scan<S: AsRef<str>>(&self, tokens: &[S]) -> Result<ScanResult> {
        let mut values = BTreeMap::new();
        let mut i = 0;

        while i < tokens.len() {
            let token = tokens[i].as_ref();
            let key = token.trim_start_matches('-');

            if key.len() == token.len() {
                return Err(OptionError::MalformedArgument(token.to_string()));
            }

            if key == HELP_OPTION {
                tracing::debug!("help requested, stopping scan");
                return Ok(ScanResult::HelpRequested);
            }

            let Some(definition) = self.registry.get(key) else {
                return Err(OptionError::UnknownOption(key.to_string()));
            };

            let value = if definition.is_flag() {
                flag_value(&definition.default_value, true).to_string()
            } else {
                let available = tokens.len() - i - 1;
                if available < definition.nargs {
                    return Err(OptionError::InsufficientArguments {
                        option: key.to_string(),
                        expected: definition.nargs,
                        available,
                    });
                }
                let consumed = &tokens[i + 1..i + 1 + definition.nargs];
                i += definition.nargs;
                join_sub_values(consumed)
            };

            if values.contains_key(key) {
                return Err(OptionError::DuplicateInvocation(key.to_string()));
            }
            tracing::debug!(option = key, value = %value, "scanned option");
            values.insert(key.to_string(), value);
            i += 1;
        }

        Ok(ScanResult::Completed(values))
    }
}
