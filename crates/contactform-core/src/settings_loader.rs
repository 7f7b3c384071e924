//! Settings loading from configuration files.
//!
//! This module provides functions to load [`Settings`] from TOML files, JSON
//! files, and to apply environment variable overrides.
//!
//! ## Loading Order
//!
//! 1. Start with default settings.
//! 2. Load from a TOML or JSON file (overriding defaults).
//! 3. Apply environment variable overrides (highest priority).
//!
//! ## Environment Variable Mapping
//!
//! | Env Var | Setting |
//! |---|---|
//! | `CONTACTFORM_DEBUG` | `debug` |
//! | `CONTACTFORM_LOG_LEVEL` | `log_level` |
//! | `CONTACTFORM_SUBMIT_DELAY_MS` | `timing.submit_delay_ms` |
//! | `CONTACTFORM_SUCCESS_DISPLAY_MS` | `timing.success_display_ms` |
//!
//! ## Examples
//!
//! ```rust,no_run
//! use contactform_core::settings_loader;
//!
//! let settings = settings_loader::from_toml_file("config/contactform.toml").unwrap();
//! let settings = settings_loader::from_toml_file_with_env("config/contactform.toml").unwrap();
//! ```

use std::path::Path;

use crate::error::{ContactFormError, ContactFormResult};
use crate::settings::Settings;

/// Loads settings from a TOML string.
///
/// Any setting not present in the TOML keeps its default value, including
/// individual keys inside a partially specified table.
pub fn from_toml_str(toml_str: &str) -> ContactFormResult<Settings> {
    // Deserialize into a generic value first so it can be merged over the
    // defaults; nested tables may be partial.
    let toml_value: toml::Value = toml::from_str(toml_str)
        .map_err(|e| ContactFormError::Configuration(format!("Failed to parse TOML: {e}")))?;

    merge_over_defaults(toml_to_json(toml_value), "TOML")
}

/// Loads settings from a TOML file.
pub fn from_toml_file(path: impl AsRef<Path>) -> ContactFormResult<Settings> {
    let content = read_config(path.as_ref(), "TOML")?;
    from_toml_str(&content)
}

/// Loads settings from a TOML file and then applies environment variable overrides.
pub fn from_toml_file_with_env(path: impl AsRef<Path>) -> ContactFormResult<Settings> {
    let mut settings = from_toml_file(path)?;
    apply_env_overrides(&mut settings);
    Ok(settings)
}

/// Loads settings from a JSON string.
pub fn from_json_str(json_str: &str) -> ContactFormResult<Settings> {
    let json_value: serde_json::Value = serde_json::from_str(json_str)
        .map_err(|e| ContactFormError::Configuration(format!("Failed to parse JSON: {e}")))?;

    merge_over_defaults(json_value, "JSON")
}

/// Loads settings from a JSON file.
pub fn from_json_file(path: impl AsRef<Path>) -> ContactFormResult<Settings> {
    let content = read_config(path.as_ref(), "JSON")?;
    from_json_str(&content)
}

/// Loads settings from just environment variables (starting from defaults).
pub fn from_env() -> Settings {
    let mut settings = Settings::default();
    apply_env_overrides(&mut settings);
    settings
}

/// Applies environment variable overrides to a settings struct.
///
/// - `CONTACTFORM_DEBUG` -> `debug` ("true"/"1"/"yes" => true, anything else => false)
/// - `CONTACTFORM_LOG_LEVEL` -> `log_level`
/// - `CONTACTFORM_SUBMIT_DELAY_MS` -> `timing.submit_delay_ms`
/// - `CONTACTFORM_SUCCESS_DISPLAY_MS` -> `timing.success_display_ms`
///
/// Numeric overrides that fail to parse are ignored.
pub fn apply_env_overrides(settings: &mut Settings) {
    apply_overrides(settings, |key| std::env::var(key).ok());
}

fn apply_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(val) = lookup("CONTACTFORM_DEBUG") {
        settings.debug = matches!(val.to_lowercase().as_str(), "true" | "1" | "yes");
    }

    if let Some(val) = lookup("CONTACTFORM_LOG_LEVEL") {
        settings.log_level = val;
    }

    if let Some(val) = lookup("CONTACTFORM_SUBMIT_DELAY_MS") {
        if let Ok(ms) = val.trim().parse::<u64>() {
            settings.timing.submit_delay_ms = ms;
        }
    }

    if let Some(val) = lookup("CONTACTFORM_SUCCESS_DISPLAY_MS") {
        if let Ok(ms) = val.trim().parse::<u64>() {
            settings.timing.success_display_ms = ms;
        }
    }
}

// ============================================================
// Helpers
// ============================================================

fn read_config(path: &Path, format: &str) -> ContactFormResult<String> {
    tracing::debug!(path = %path.display(), format, "reading settings file");
    Ok(std::fs::read_to_string(path)?)
}

fn merge_over_defaults(
    value: serde_json::Value,
    format: &str,
) -> ContactFormResult<Settings> {
    let default_json = serde_json::to_value(Settings::default()).map_err(|e| {
        ContactFormError::Configuration(format!("Failed to serialize default settings: {e}"))
    })?;

    let merged = merge_json(default_json, value);
    serde_json::from_value(merged).map_err(|e| {
        ContactFormError::Configuration(format!("Failed to deserialize settings from {format}: {e}"))
    })
}

/// Converts a TOML value to a `serde_json::Value`.
fn toml_to_json(value: toml::Value) -> serde_json::Value {
    match value {
        toml::Value::String(s) => serde_json::Value::String(s),
        toml::Value::Integer(i) => serde_json::json!(i),
        toml::Value::Float(f) => serde_json::json!(f),
        toml::Value::Boolean(b) => serde_json::Value::Bool(b),
        toml::Value::Datetime(dt) => serde_json::Value::String(dt.to_string()),
        toml::Value::Array(arr) => {
            serde_json::Value::Array(arr.into_iter().map(toml_to_json).collect())
        }
        toml::Value::Table(table) => {
            let map: serde_json::Map<String, serde_json::Value> = table
                .into_iter()
                .map(|(k, v)| (k, toml_to_json(v)))
                .collect();
            serde_json::Value::Object(map)
        }
    }
}

/// Deep-merges two JSON values. The `override_val` takes precedence.
fn merge_json(base: serde_json::Value, override_val: serde_json::Value) -> serde_json::Value {
    match (base, override_val) {
        (serde_json::Value::Object(mut base_map), serde_json::Value::Object(override_map)) => {
            for (key, override_v) in override_map {
                let merged = if let Some(base_v) = base_map.remove(&key) {
                    merge_json(base_v, override_v)
                } else {
                    override_v
                };
                base_map.insert(key, merged);
            }
            serde_json::Value::Object(base_map)
        }
        (_, override_val) => override_val,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    // ── TOML loading ────────────────────────────────────────────────

    #[test]
    fn test_from_toml_str_basic() {
        let toml = r#"
            debug = false
            log_level = "debug"
        "#;

        let settings = from_toml_str(toml).unwrap();
        assert!(!settings.debug);
        assert_eq!(settings.log_level, "debug");
        // Defaults preserved
        assert_eq!(settings.timing.submit_delay_ms, 1500);
    }

    #[test]
    fn test_from_toml_str_partial_table() {
        let toml = r#"
            [timing]
            submit_delay_ms = 250

            [counter]
            danger_color = "red"
        "#;

        let settings = from_toml_str(toml).unwrap();
        assert_eq!(settings.timing.submit_delay_ms, 250);
        assert_eq!(settings.timing.success_display_ms, 5000);
        assert_eq!(settings.counter.danger_color, "red");
        assert_eq!(settings.counter.warning_color, "#f39c12");
    }

    #[test]
    fn test_from_toml_str_labels() {
        let toml = r#"
            [labels]
            submit_idle = "Send"
        "#;

        let settings = from_toml_str(toml).unwrap();
        assert_eq!(settings.labels.submit_idle, "Send");
        assert_eq!(settings.labels.submit_sending, "Sending...");
    }

    #[test]
    fn test_from_toml_str_empty() {
        let settings = from_toml_str("").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_from_toml_str_invalid() {
        let result = from_toml_str("[[invalid toml content");
        assert!(matches!(result, Err(ContactFormError::Configuration(_))));
    }

    #[test]
    fn test_from_toml_str_wrong_type() {
        let result = from_toml_str("[timing]\nsubmit_delay_ms = \"soon\"");
        assert!(result.is_err());
    }

    // ── JSON loading ────────────────────────────────────────────────

    #[test]
    fn test_from_json_str_basic() {
        let json = r#"{
            "debug": false,
            "timing": { "success_display_ms": 1000 }
        }"#;

        let settings = from_json_str(json).unwrap();
        assert!(!settings.debug);
        assert_eq!(settings.timing.success_display_ms, 1000);
        assert_eq!(settings.timing.submit_delay_ms, 1500);
    }

    #[test]
    fn test_from_json_str_invalid() {
        assert!(from_json_str("{not json").is_err());
    }

    // ── Files ───────────────────────────────────────────────────────

    #[test]
    fn test_from_toml_file() {
        let path = std::env::temp_dir().join(format!(
            "contactform-settings-{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "log_level = \"warn\"\n").unwrap();

        let settings = from_toml_file(&path).unwrap();
        assert_eq!(settings.log_level, "warn");

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_from_json_file_missing() {
        let result = from_json_file("/nonexistent/contactform.json");
        match result {
            Err(ContactFormError::Io(err)) => {
                assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected I/O error, got {other:?}"),
        }
    }

    // ── Environment overrides ───────────────────────────────────────

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_overrides_applied() {
        let mut settings = Settings::default();
        apply_overrides(
            &mut settings,
            lookup_from(&[
                ("CONTACTFORM_DEBUG", "0"),
                ("CONTACTFORM_LOG_LEVEL", "trace"),
                ("CONTACTFORM_SUBMIT_DELAY_MS", " 10 "),
                ("CONTACTFORM_SUCCESS_DISPLAY_MS", "20"),
            ]),
        );
        assert!(!settings.debug);
        assert_eq!(settings.log_level, "trace");
        assert_eq!(settings.timing.submit_delay_ms, 10);
        assert_eq!(settings.timing.success_display_ms, 20);
    }

    #[test]
    fn test_overrides_debug_truthy_values() {
        for value in ["true", "TRUE", "1", "yes"] {
            let mut settings = Settings::default();
            settings.debug = false;
            apply_overrides(&mut settings, lookup_from(&[("CONTACTFORM_DEBUG", value)]));
            assert!(settings.debug, "{value} should enable debug");
        }
    }

    #[test]
    fn test_overrides_unparsable_number_ignored() {
        let mut settings = Settings::default();
        apply_overrides(
            &mut settings,
            lookup_from(&[("CONTACTFORM_SUBMIT_DELAY_MS", "fast")]),
        );
        assert_eq!(settings.timing.submit_delay_ms, 1500);
    }

    #[test]
    fn test_overrides_absent_keeps_settings() {
        let mut settings = Settings::default();
        apply_overrides(&mut settings, lookup_from(&[]));
        assert_eq!(settings, Settings::default());
    }
}
