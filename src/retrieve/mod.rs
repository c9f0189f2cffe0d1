//! Typed retrieval of resolved option values
//!
//! A value is looked up in the parse results first and falls back to the
//! declared default. Multi-argument values are split on commas and one
//! sub-value is converted to the requested type.

pub mod convert;

pub use convert::{convert, FromOptionValue};

use crate::domain::flag_value;
use crate::error::{OptionError, Result};
use crate::resolve::OptionParser;
use crate::utils::{select_sub_value, sub_value_count};

impl OptionParser {
    /// Retrieve the first sub-value of `name` as `T`.
    pub fn retrieve<T: FromOptionValue>(&self, name: &str) -> Result<T> {
        self.retrieve_at(name, 0)
    }

    /// Retrieve the sub-value at `index` (0-based) of `name` as `T`.
    ///
    /// `index` must be below the option's arity. An index past the last
    /// comma of a shorter value selects the trailing segment.
    pub fn retrieve_at<T: FromOptionValue>(&self, name: &str, index: usize) -> Result<T> {
        let raw = self.raw_value(name)?;

        let arity = self.definition(name).map_or(1, |def| def.nargs.max(1));
        if index >= arity {
            return Err(OptionError::IndexOutOfRange {
                option: name.to_string(),
                index,
                available: arity,
            });
        }

        convert(select_sub_value(raw, index))
    }

    /// Retrieve the first two sub-values of `name` as `(T, U)`.
    pub fn retrieve_pair<T, U>(&self, name: &str) -> Result<(T, U)>
    where
        T: FromOptionValue,
        U: FromOptionValue,
    {
        let available = sub_value_count(self.raw_value(name)?);
        if available < 2 {
            return Err(OptionError::IndexOutOfRange { option: name.to_string(), index: 1, available });
        }
        Ok((self.retrieve_at(name, 0)?, self.retrieve_at(name, 1)?))
    }

    /// Raw value in effect for `name`: the resolved one, else the default.
    /// Flag defaults are reported as `0` or `1`.
    pub fn raw_value(&self, name: &str) -> Result<&str> {
        if let Some(value) = self.value(name) {
            return Ok(&value.raw);
        }
        match self.definition(name) {
            Some(def) if def.has_default() && def.is_flag() => {
                Ok(flag_value(&def.default_value, false))
            }
            Some(def) if def.has_default() => Ok(&def.default_value),
            _ => Err(OptionError::NoValueAvailable(name.to_string())),
        }
    }
}
