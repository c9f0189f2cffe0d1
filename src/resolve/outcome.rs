//! Terminal outcomes of a parse attempt.

use crate::error::OptionError;

/// How a call to [`OptionParser::parse`](super::OptionParser::parse) ended.
#[derive(Debug)]
pub enum ParseOutcome {
    /// Values are resolved and ready for retrieval.
    Success,
    /// `--help` was given; the usage listing has been written.
    Help,
    /// Arguments or the configuration file were invalid.
    Failure(OptionError),
}

impl ParseOutcome {
    /// Process exit code: `0` success, `1` help, `-1` failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            ParseOutcome::Success => 0,
            ParseOutcome::Help => 1,
            ParseOutcome::Failure(_) => -1,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ParseOutcome::Success)
    }

    /// The failure, if any. Only failures carry a message.
    pub fn error(&self) -> Option<&OptionError> {
        match self {
            ParseOutcome::Failure(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        assert_eq!(ParseOutcome::Success.exit_code(), 0);
        assert_eq!(ParseOutcome::Help.exit_code(), 1);
        assert_eq!(
            ParseOutcome::Failure(OptionError::UnknownOption("x".into())).exit_code(),
            -1
        );
    }

    #[test]
    fn only_failures_carry_errors() {
        assert!(ParseOutcome::Success.error().is_none());
        assert!(ParseOutcome::Help.error().is_none());
        assert!(ParseOutcome::Failure(OptionError::UnknownOption("x".into())).error().is_some());
    }
}
