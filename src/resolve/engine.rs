//! The option parser and its merge pass.

use super::outcome::ParseOutcome;
use crate::config::load_config;
use crate::domain::{BooleanAction, OptionDefinition, ResolvedValue, ValueSource, LOAD_OPTION};
use crate::error::{OptionError, Result};
use crate::registry::{is_builtin, Registry};
use crate::render::{render_failure, render_usage, write_dump};
use crate::scan::{scan_arguments, ScanResult};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Declares options and resolves their values from the argument vector, an
/// optional configuration file and the declared defaults.
///
/// Command-line values win over configuration-file values, which win over
/// defaults. Defaults are not copied into [`values`](Self::values); they are
/// consulted at retrieval time.
#[derive(Debug, Clone, Default)]
pub struct OptionParser {
    registry: Registry,
    values: BTreeMap<String, ResolvedValue>,
    program_name: String,
}

impl OptionParser {
    /// Create a parser with only the built-in `help` and `load` options.
    pub fn new() -> Self {
        Self::with_registry(Registry::new())
    }

    /// Create a parser over an already populated registry.
    pub fn with_registry(registry: Registry) -> Self {
        Self { registry, values: BTreeMap::new(), program_name: String::new() }
    }

    /// Declare an option taking `nargs` values. See [`Registry::declare`].
    pub fn declare(
        &mut self,
        name: impl Into<String>,
        nargs: usize,
        description: impl Into<String>,
        default_value: impl Into<String>,
    ) -> Result<()> {
        self.registry.declare(name, nargs, description, default_value)
    }

    /// Declare a boolean flag. See [`Registry::declare_boolean`].
    pub fn declare_boolean(
        &mut self,
        name: impl Into<String>,
        action: BooleanAction,
        description: impl Into<String>,
    ) -> Result<()> {
        self.registry.declare_boolean(name, action, description)
    }

    /// Parse a full argument vector (element 0 is the program name), writing
    /// usage and failure messages to stderr.
    pub fn parse<I, S>(&mut self, args: I) -> ParseOutcome
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stderr = io::stderr();
        let mut diagnostics = stderr.lock();
        self.parse_with_diagnostics(args, &mut diagnostics)
    }

    /// Parse a full argument vector, writing usage and failure messages to
    /// `diagnostics`.
    ///
    /// Resolved values from any earlier call are discarded first. Errors in
    /// the arguments or the configuration file never escape: they become a
    /// [`ParseOutcome::Failure`] and leave no resolved values behind.
    pub fn parse_with_diagnostics<I, S, W>(&mut self, args: I, diagnostics: &mut W) -> ParseOutcome
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        W: Write,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        self.values.clear();
        self.program_name = args.first().cloned().unwrap_or_default();
        let tokens = args.get(1..).unwrap_or_default();

        let outcome = match self.resolve(tokens) {
            Ok(Some(values)) => {
                self.values = values;
                ParseOutcome::Success
            }
            Ok(None) => ParseOutcome::Help,
            Err(err) => ParseOutcome::Failure(err),
        };

        let rendered = match &outcome {
            ParseOutcome::Success => None,
            ParseOutcome::Help => Some(self.usage()),
            ParseOutcome::Failure(err) => Some(render_failure(err, &self.usage())),
        };
        if let Some(text) = rendered {
            if let Err(e) = diagnostics.write_all(text.as_bytes()).and_then(|()| diagnostics.flush())
            {
                tracing::warn!("Failed to write usage: {}", e);
            }
        }

        tracing::debug!(code = outcome.exit_code(), resolved = self.values.len(), "parse finished");
        outcome
    }

    /// Scan, merge the configuration file and check mandatory options.
    /// Returns `None` when help was requested.
    fn resolve(&self, tokens: &[String]) -> Result<Option<BTreeMap<String, ResolvedValue>>> {
        let scanned = match scan_arguments(&self.registry, tokens)? {
            ScanResult::HelpRequested => return Ok(None),
            ScanResult::Completed(values) => values,
        };

        let mut values: BTreeMap<String, ResolvedValue> = scanned
            .into_iter()
            .map(|(name, raw)| (name, ResolvedValue::new(raw, ValueSource::CommandLine)))
            .collect();

        if let Some(load) = values.remove(LOAD_OPTION) {
            let path = PathBuf::from(load.raw);
            let file_values = load_config(&path, &self.registry)?;
            merge_config_values(&mut values, file_values);
        }

        self.check_mandatory(&values)?;
        Ok(Some(values))
    }

    fn check_mandatory(&self, values: &BTreeMap<String, ResolvedValue>) -> Result<()> {
        for (name, definition) in self.registry.iter() {
            if !definition.is_user_option() {
                continue;
            }
            if !values.contains_key(name) && !definition.has_default() {
                return Err(OptionError::MissingMandatoryOption(name.to_string()));
            }
        }
        Ok(())
    }

    /// Usage listing for the declared options.
    pub fn usage(&self) -> String {
        render_usage(&self.program_name, &self.registry)
    }

    /// Append the current user option values to `path`, creating it if needed.
    pub fn dump(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| OptionError::file_access(path, e))?;
        self.dump_to(&mut file).map_err(|e| OptionError::file_access(path, e))?;
        tracing::debug!(file = %path.display(), "dumped option values");
        Ok(())
    }

    /// Write the same block as [`dump`](Self::dump) to any writer.
    pub fn dump_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        write_dump(writer, &self.registry, &self.values)
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn definition(&self, name: &str) -> Option<&OptionDefinition> {
        self.registry.get(name)
    }

    /// Values resolved by the last successful parse.
    pub fn values(&self) -> &BTreeMap<String, ResolvedValue> {
        &self.values
    }

    pub fn value(&self, name: &str) -> Option<&ResolvedValue> {
        self.values.get(name)
    }

    /// Program name captured from the first argument of the last parse.
    pub fn program_name(&self) -> &str {
        &self.program_name
    }

    /// Where the effective value of `name` comes from, if it has one.
    pub fn source_of(&self, name: &str) -> Option<ValueSource> {
        if let Some(value) = self.values.get(name) {
            return Some(value.source);
        }
        self.registry.get(name).filter(|def| def.has_default()).map(|_| ValueSource::Default)
    }
}

/// Add configuration-file values without overriding command-line ones.
fn merge_config_values(
    values: &mut BTreeMap<String, ResolvedValue>,
    file_values: BTreeMap<String, String>,
) {
    for (name, raw) in file_values {
        if is_builtin(&name) {
            tracing::warn!("Ignoring built-in option '{}' in configuration file", name);
            continue;
        }
        match values.entry(name) {
            Entry::Occupied(entry) => {
                tracing::debug!(option = %entry.key(), "command line overrides config file value");
            }
            Entry::Vacant(entry) => {
                entry.insert(ResolvedValue::new(raw, ValueSource::ConfigFile));
            }
        }
    }
}
