//! Config file loading

use crate::error::{OptionError, Result};
use crate::registry::Registry;
use crate::utils::strip_whitespace;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read a configuration file into raw `key -> value` pairs.
///
/// Every line is stripped of all whitespace. Empty lines and lines starting
/// with `#` are skipped, the rest are split on the first colon. Keys must be
/// declared in `registry` and may appear only once. Values are kept exactly
/// as written; arity is checked later, at retrieval.
pub fn load_config(path: &Path, registry: &Registry) -> Result<BTreeMap<String, String>> {
    let file = File::open(path).map_err(|e| OptionError::file_access(path, e))?;
    let reader = BufReader::new(file);

    let mut values = BTreeMap::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| OptionError::ConfigRead {
            path: path.to_path_buf(),
            line: index + 1,
            source,
        })?;
        let line = strip_whitespace(&line);

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once(':') else {
            return Err(OptionError::MalformedConfigLine {
                path: path.to_path_buf(),
                line: index + 1,
                content: line.clone(),
            });
        };

        if !registry.contains(key) {
            return Err(OptionError::UnknownConfigKey {
                path: path.to_path_buf(),
                key: key.to_string(),
            });
        }
        if values.contains_key(key) {
            return Err(OptionError::DuplicateConfigKey {
                path: path.to_path_buf(),
                key: key.to_string(),
            });
        }

        tracing::debug!(key, value, file = %path.display(), "read config value");
        values.insert(key.to_string(), value.to_string());
    }

    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn registry() -> Registry {
        let mut registry = Registry::new();
        registry.declare("timestep", 1, "", "0.1").expect("declare");
        registry.declare("period", 2, "", "").expect("declare");
        registry
    }

    #[test]
    fn reads_values_and_skips_comments() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("run.cfg");
        fs::write(&path, "# settings\n\n   \ntimestep: 0.01\n  # indented comment\nperiod: 0, 2.5\n")
            .expect("write");

        let values = load_config(&path, &registry()).expect("load");
        assert_eq!(values.len(), 2);
        assert_eq!(values["timestep"], "0.01");
        assert_eq!(values["period"], "0,2.5");
    }

    #[test]
    fn splits_on_first_colon_only() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("run.cfg");
        fs::write(&path, "timestep: 1:2\n").expect("write");

        let values = load_config(&path, &registry()).expect("load");
        assert_eq!(values["timestep"], "1:2");
    }

    #[test]
    fn unknown_key_is_rejected() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("run.cfg");
        fs::write(&path, "timestep: 0.1\nthreads: 4\n").expect("write");

        let err = load_config(&path, &registry()).expect_err("unknown key");
        assert!(matches!(err, OptionError::UnknownConfigKey { ref key, .. } if key == "threads"));
    }

    #[test]
    fn duplicate_key_is_rejected() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("run.cfg");
        fs::write(&path, "timestep: 0.1\ntimestep: 0.2\n").expect("write");

        let err = load_config(&path, &registry()).expect_err("duplicate key");
        assert!(matches!(err, OptionError::DuplicateConfigKey { ref key, .. } if key == "timestep"));
    }

    #[test]
    fn line_without_colon_is_malformed() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("run.cfg");
        fs::write(&path, "timestep: 0.1\nperiod 0 1\n").expect("write");

        let err = load_config(&path, &registry()).expect_err("malformed");
        assert!(matches!(err, OptionError::MalformedConfigLine { line: 2, .. }));
    }

    #[test]
    fn unreadable_line_reports_its_number() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("run.cfg");
        fs::write(&path, b"timestep: 0.1\nperiod: \xff\xfe\n").expect("write");

        let err = load_config(&path, &registry()).expect_err("invalid utf-8");
        assert!(matches!(err, OptionError::ConfigRead { line: 2, .. }));
        assert!(err.to_string().starts_with("reading line 2 of configuration file"));
        assert!(err.is_user_input());
    }

    #[test]
    fn missing_file_is_an_access_error() {
        let tmp = TempDir::new().expect("tmp");
        let err = load_config(&tmp.path().join("absent.cfg"), &registry()).expect_err("missing");
        assert!(matches!(err, OptionError::FileAccess { .. }));
    }

    #[test]
    fn empty_file_yields_no_values() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("empty.cfg");
        fs::write(&path, "").expect("write");

        assert!(load_config(&path, &registry()).expect("load").is_empty());
    }
}
