//! String to typed value conversion.

use crate::error::{OptionError, Result};
use std::path::PathBuf;

/// Types a sub-value can be converted into.
///
/// Conversion must consume the whole sub-value; partial parses are failures.
pub trait FromOptionValue: Sized {
    fn from_option_value(value: &str) -> Option<Self>;
}

macro_rules! from_str_option_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromOptionValue for $ty {
                fn from_option_value(value: &str) -> Option<Self> {
                    value.parse().ok()
                }
            }
        )*
    };
}

from_str_option_value!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, char,
);

/// Flags resolve to `0`/`1`; `true`/`false` are accepted too.
impl FromOptionValue for bool {
    fn from_option_value(value: &str) -> Option<Self> {
        match value {
            "1" | "true" => Some(true),
            "0" | "false" => Some(false),
            _ => None,
        }
    }
}

impl FromOptionValue for String {
    fn from_option_value(value: &str) -> Option<Self> {
        Some(value.to_string())
    }
}

impl FromOptionValue for PathBuf {
    fn from_option_value(value: &str) -> Option<Self> {
        (!value.is_empty()).then(|| PathBuf::from(value))
    }
}

/// Convert one sub-value, naming the value and target type on failure.
pub fn convert<T: FromOptionValue>(value: &str) -> Result<T> {
    T::from_option_value(value).ok_or_else(|| OptionError::Conversion {
        value: value.to_string(),
        target: std::any::type_name::<T>(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_numbers() {
        assert_eq!(convert::<f64>("0.25").expect("f64"), 0.25);
        assert_eq!(convert::<i32>("-7").expect("i32"), -7);
        assert_eq!(convert::<u64>("42").expect("u64"), 42);
    }

    #[test]
    fn partial_parse_is_rejected() {
        let err = convert::<i32>("12abc").expect_err("partial");
        assert!(matches!(err, OptionError::Conversion { ref value, target: "i32" } if value == "12abc"));
        assert!(convert::<f64>("").is_err());
        assert!(convert::<u8>("-1").is_err());
    }

    #[test]
    fn converts_flags() {
        assert!(convert::<bool>("1").expect("bool"));
        assert!(!convert::<bool>("0").expect("bool"));
        assert!(convert::<bool>("true").expect("bool"));
        assert!(convert::<bool>("yes").is_err());
    }

    #[test]
    fn converts_text_and_paths() {
        assert_eq!(convert::<String>("out.csv").expect("string"), "out.csv");
        assert_eq!(convert::<PathBuf>("out/run.cfg").expect("path"), PathBuf::from("out/run.cfg"));
        assert!(convert::<PathBuf>("").is_err());
        assert_eq!(convert::<char>("x").expect("char"), 'x');
    }
}
