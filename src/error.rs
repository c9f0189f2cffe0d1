//! Error types for option declaration, parsing and retrieval.
//!
//! Errors fall into two groups:
//!
//! - **User input**: anything wrong with the argument vector or the loaded
//!   configuration file. These are raised while parsing and are always
//!   converted into a [`ParseOutcome::Failure`](crate::ParseOutcome::Failure).
//! - **Programmer errors**: a bad schema (duplicate declaration) or a bad
//!   retrieval (unknown name, wrong type, index past the arity). These are
//!   returned to the caller as-is.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, OptionError>;

#[derive(Error, Debug)]
pub enum OptionError {
    /// An option with this name is already registered.
    #[error("option already exists: {0}")]
    DuplicateOption(String),

    /// A command-line token that is not introduced by a dash.
    #[error("options must be introduced by at least one dash: '{0}'")]
    MalformedArgument(String),

    #[error("unknown option: {0}")]
    UnknownOption(String),

    #[error("insufficient number of values for option '{option}': expected {expected}, found {available}")]
    InsufficientArguments { option: String, expected: usize, available: usize },

    /// The same option was given twice on the command line.
    #[error("duplicate option passed by command line: {0}")]
    DuplicateInvocation(String),

    #[error("missing value for mandatory option: {0}")]
    MissingMandatoryOption(String),

    #[error("file '{}' doesn't exist or is not accessible: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file opened but a line could not be read.
    #[error("reading line {line} of configuration file '{}' failed: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        line: usize,
        #[source]
        source: std::io::Error,
    },

    /// A configuration line that has no `key:value` separator.
    #[error("malformed line {line} in configuration file '{}': '{content}'", .path.display())]
    MalformedConfigLine { path: PathBuf, line: usize, content: String },

    #[error("unexpected option in configuration file '{}': {key}", .path.display())]
    UnknownConfigKey { path: PathBuf, key: String },

    #[error("duplicate option in configuration file '{}': {key}", .path.display())]
    DuplicateConfigKey { path: PathBuf, key: String },

    /// A sub-value could not be converted to the requested type.
    #[error("invalid conversion of the argument '{value}' to type {target}")]
    Conversion { value: String, target: &'static str },

    #[error("no value has been passed to option: {0}")]
    NoValueAvailable(String),

    #[error("sub-value index {index} is out of range for option '{option}' ({available} available)")]
    IndexOutOfRange { option: String, index: usize, available: usize },
}

impl OptionError {
    /// Whether the error was caused by user input (arguments or config file)
    /// rather than by the program's schema or its retrieval calls.
    pub fn is_user_input(&self) -> bool {
        !matches!(
            self,
            OptionError::DuplicateOption(_)
                | OptionError::Conversion { .. }
                | OptionError::NoValueAvailable(_)
                | OptionError::IndexOutOfRange { .. }
        )
    }

    pub(crate) fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        OptionError::FileAccess { path: path.into(), source }
    }
}
