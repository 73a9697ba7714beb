//! Config discovery and layered loading.
//!
//! Implements the `Config::load()` algorithm:
//! 1. Parse embedded `defaults.toml` → base
//! 2. Apply `SIGIL_*` environment fallbacks
//! 3. Merge the config file, if one is given and exists
//! 4. Deserialize merged tree → `Config`
//! 5. Validate

use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{ConfigError, ConfigResult};
use crate::types::Config;
use crate::validate;

/// Embedded default configuration.
const DEFAULTS_TOML: &str = include_str!("defaults.toml");

/// Maximum allowed config file size (1 MB).
const MAX_CONFIG_FILE_SIZE: u64 = 1_048_576;

/// Prefix shared by every recognised environment variable.
pub const ENV_PREFIX: &str = "SIGIL_";

#[derive(Clone, Copy)]
enum EnvValue {
    Text,
    Integer,
}

/// `(variable, section, field, value type)`
const ENV_FIELDS: &[(&str, &str, &str, EnvValue)] = &[
    ("SIGIL_DISPATCH_MODE", "dispatch", "mode", EnvValue::Text),
    ("SIGIL_MAX_IN_FLIGHT", "dispatch", "max_in_flight", EnvValue::Integer),
    ("SIGIL_LOG_LEVEL", "logging", "level", EnvValue::Text),
    ("SIGIL_LOG_FORMAT", "logging", "format", EnvValue::Text),
];

/// Load configuration from defaults, the process environment and `path`.
///
/// A `path` that does not exist is skipped, not an error.
///
/// # Errors
///
/// Returns a [`ConfigError`] if the file is malformed, an environment
/// variable has the wrong type, or the merged configuration is invalid.
pub fn load(path: Option<&Path>) -> ConfigResult<Config> {
    load_with_env(path, &collect_env_vars())
}

/// Like [`load`], with an explicit environment map.
///
/// # Errors
///
/// Same as [`load`].
pub fn load_with_env(path: Option<&Path>, env: &HashMap<String, String>) -> ConfigResult<Config> {
    let mut merged = parse(DEFAULTS_TOML, "<embedded defaults>")?;

    let env_count = apply_env_fallbacks(&mut merged, env)?;
    if env_count > 0 {
        debug!(count = env_count, "applied environment variable fallbacks");
    }

    if let Some(path) = path
        && let Some(overlay) = try_load_file(path)?
    {
        deep_merge(&mut merged, &overlay);
        info!(path = %path.display(), "loaded config file");
    }

    finish(merged, "<merged config>")
}

/// Load a config from a specific file path on top of the defaults.
///
/// Unlike [`load`], a missing file is an error and the environment is
/// ignored.
///
/// # Errors
///
/// Returns a [`ConfigError`] if the file cannot be read, parsed, or fails
/// validation.
pub fn load_file(path: &Path) -> ConfigResult<Config> {
    let metadata = std::fs::metadata(path).map_err(|e| ConfigError::ReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    if metadata.len() > MAX_CONFIG_FILE_SIZE {
        return Err(oversized(path, metadata.len()));
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    from_toml_str(&content)
}

/// Parse a TOML document on top of the defaults.
///
/// # Errors
///
/// Returns a [`ConfigError`] if the document is malformed or invalid.
pub fn from_toml_str(content: &str) -> ConfigResult<Config> {
    let mut merged = parse(DEFAULTS_TOML, "<embedded defaults>")?;
    let overlay = parse(content, "<inline>")?;
    deep_merge(&mut merged, &overlay);
    finish(merged, "<inline>")
}

fn finish(merged: toml::Value, origin: &str) -> ConfigResult<Config> {
    let config: Config =
        merged
            .try_into()
            .map_err(|e: toml::de::Error| ConfigError::ParseError {
                path: origin.to_owned(),
                source: e,
            })?;
    validate::validate(&config)?;
    Ok(config)
}

fn parse(content: &str, origin: &str) -> ConfigResult<toml::Value> {
    toml::from_str(content).map_err(|e| ConfigError::ParseError {
        path: origin.to_owned(),
        source: e,
    })
}

fn oversized(path: &Path, len: u64) -> ConfigError {
    ConfigError::ValidationError {
        field: path.display().to_string(),
        message: format!("config file is {len} bytes, exceeding the {MAX_CONFIG_FILE_SIZE} byte limit"),
    }
}

/// Try to load a file, returning `None` if the file doesn't exist.
fn try_load_file(path: &Path) -> ConfigResult<Option<toml::Value>> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "config file not found, skipping");
            return Ok(None);
        },
        Err(e) => {
            return Err(ConfigError::ReadError {
                path: path.display().to_string(),
                source: e,
            });
        },
    };

    if content.len() as u64 > MAX_CONFIG_FILE_SIZE {
        return Err(oversized(path, content.len() as u64));
    }

    parse(&content, &path.display().to_string()).map(Some)
}

/// Recursively deep-merge `overlay` into `base`.
///
/// - Tables merge recursively per-field.
/// - Scalars and arrays from the overlay **replace** the base value.
pub fn deep_merge(base: &mut toml::Value, overlay: &toml::Value) {
    match (base, overlay) {
        (toml::Value::Table(base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                if let Some(base_val) = base_table.get_mut(key) {
                    deep_merge(base_val, overlay_val);
                } else {
                    base_table.insert(key.clone(), overlay_val.clone());
                }
            }
        },
        (base, overlay) => {
            *base = overlay.clone();
        },
    }
}

fn collect_env_vars() -> HashMap<String, String> {
    std::env::vars()
        .filter(|(k, _)| k.starts_with(ENV_PREFIX))
        .collect()
}

fn apply_env_fallbacks(
    merged: &mut toml::Value,
    env: &HashMap<String, String>,
) -> ConfigResult<usize> {
    let mut applied = 0usize;
    for &(var, section, field, kind) in ENV_FIELDS {
        let Some(raw) = env.get(var) else {
            continue;
        };
        let value = match kind {
            EnvValue::Text => toml::Value::String(raw.trim().to_owned()),
            EnvValue::Integer => {
                let n: i64 = raw.trim().parse().map_err(|_| ConfigError::EnvError {
                    var_name: var.to_owned(),
                    message: format!("expected an integer, got '{raw}'"),
                })?;
                toml::Value::Integer(n)
            },
        };
        if let Some(root) = merged.as_table_mut() {
            let entry = root
                .entry(section)
                .or_insert_with(|| toml::Value::Table(toml::map::Map::new()));
            if let Some(table) = entry.as_table_mut() {
                table.insert(field.to_owned(), value);
                applied = applied.saturating_add(1);
            }
        }
    }
    Ok(applied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DispatchMode;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    #[test]
    fn test_defaults_only() {
        let config = load_with_env(None, &HashMap::new()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_missing_file_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let config = load_with_env(Some(&path), &HashMap::new()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sigil.toml");
        std::fs::write(&path, "[dispatch]\nmode = \"blocking\"\n").unwrap();

        let config = load_with_env(Some(&path), &HashMap::new()).unwrap();
        assert_eq!(config.dispatch.mode, DispatchMode::Blocking);
        // Untouched fields keep their defaults
        assert_eq!(config.dispatch.max_in_flight, 256);
    }

    #[test]
    fn test_env_is_fallback_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sigil.toml");
        std::fs::write(&path, "[logging]\nlevel = \"warn\"\n").unwrap();

        let vars = env(&[("SIGIL_LOG_LEVEL", "debug"), ("SIGIL_MAX_IN_FLIGHT", "8")]);
        let config = load_with_env(Some(&path), &vars).unwrap();

        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.dispatch.max_in_flight, 8);
    }

    #[test]
    fn test_env_integer_must_parse() {
        let vars = env(&[("SIGIL_MAX_IN_FLIGHT", "lots")]);
        let err = load_with_env(None, &vars).unwrap_err();
        assert!(matches!(err, ConfigError::EnvError { .. }));
    }

    #[test]
    fn test_env_value_is_validated() {
        let vars = env(&[("SIGIL_DISPATCH_MODE", "threaded")]);
        let err = load_with_env(None, &vars).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn test_from_toml_str_validates() {
        let err = from_toml_str("[dispatch]\nmax_in_flight = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError { .. }));
    }

    #[test]
    fn test_load_file_requires_existence() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_file(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
    }

    #[test]
    fn test_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[dispatch\nmode = ").unwrap();
        let err = load_with_env(Some(&path), &HashMap::new()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn test_deep_merge_replaces_arrays() {
        let mut base: toml::Value = toml::from_str("[logging]\ndirectives = [\"a\"]\nlevel = \"info\"").unwrap();
        let overlay: toml::Value = toml::from_str("[logging]\ndirectives = [\"b\", \"c\"]").unwrap();
        deep_merge(&mut base, &overlay);
        let directives = base["logging"]["directives"].as_array().unwrap();
        assert_eq!(directives.len(), 2);
        assert_eq!(base["logging"]["level"].as_str(), Some("info"));
    }
}
