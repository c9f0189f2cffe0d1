//! Text helpers for raw option values.

use crate::domain::SUB_VALUE_SEPARATOR;

/// Remove every whitespace character, including ones inside the text.
pub fn strip_whitespace(line: &str) -> String {
    line.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Join command-line tokens into one raw value.
pub fn join_sub_values<S: AsRef<str>>(tokens: &[S]) -> String {
    tokens.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(SUB_VALUE_SEPARATOR)
}

/// Pick the sub-value at `index` from a comma-joined raw value.
///
/// An index past the last delimiter selects the trailing segment. The
/// result is trimmed, so `"0, 1"` and `"0,1"` yield the same sub-values.
pub fn select_sub_value(raw: &str, index: usize) -> &str {
    let mut rest = raw;
    for _ in 0..index {
        match rest.split_once(',') {
            Some((_, tail)) => rest = tail,
            None => break,
        }
    }
    rest.split_once(',').map_or(rest, |(head, _)| head).trim()
}

/// Number of comma-separated sub-values in a raw value.
pub fn sub_value_count(raw: &str) -> usize {
    raw.split(',').count()
}
