//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::DepscreenConfig;
use crate::domain::errors::MeasureError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::LazyLock;

static ENV_PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .unwrap_or_else(|e| panic!("invalid placeholder pattern: {e}"))
});

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into DepscreenConfig
/// 4. Applies environment variable overrides (DEPSCREEN_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns [`MeasureError::Configuration`] if the file cannot be read or
/// parsed, a referenced environment variable is not set, an override has
/// the wrong type, or validation fails.
///
/// # Examples
///
/// ```no_run
/// use depscreen::config::loader::load_config;
///
/// let config = load_config("depscreen.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<DepscreenConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(MeasureError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        MeasureError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    load_config_from_str(&contents)
}

/// Loads configuration from TOML text
///
/// Applies the same substitution, overrides, and validation as
/// [`load_config`].
pub fn load_config_from_str(contents: &str) -> Result<DepscreenConfig> {
    let contents = substitute_env_vars(contents)?;

    let mut config: DepscreenConfig = toml::from_str(&contents)
        .map_err(|e| MeasureError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        MeasureError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are copied unchanged.
///
/// # Errors
///
/// Returns an error naming every referenced variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let mut result = String::with_capacity(input.len());
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let processed_line = ENV_PLACEHOLDER.replace_all(line, |cap: &regex::Captures<'_>| {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => value,
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                    String::new()
                }
            }
        });
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(MeasureError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

fn env_override<T: FromStr>(name: &str) -> Result<Option<T>> {
    match std::env::var(name) {
        Ok(value) => value.trim().parse().map(Some).map_err(|_| {
            MeasureError::Configuration(format!("Invalid value '{value}' for {name}"))
        }),
        Err(_) => Ok(None),
    }
}

/// Applies environment variable overrides using DEPSCREEN_* prefix
///
/// Environment variables follow the pattern: DEPSCREEN_<SECTION>_<KEY>
/// For example: DEPSCREEN_INPUT_HTML_DIR, DEPSCREEN_PROCESSING_PARALLEL_DOCUMENTS
fn apply_env_overrides(config: &mut DepscreenConfig) -> Result<()> {
    // Application overrides
    if let Some(val) = env_override("DEPSCREEN_APPLICATION_LOG_LEVEL")? {
        config.application.log_level = val;
    }

    // Input overrides
    if let Some(val) = env_override::<PathBuf>("DEPSCREEN_INPUT_HTML_DIR")? {
        config.input.html_dir = val;
    }
    if let Some(val) = env_override::<PathBuf>("DEPSCREEN_INPUT_JSON_DIR")? {
        config.input.json_dir = val;
    }

    // Output overrides
    if let Some(val) = env_override::<PathBuf>("DEPSCREEN_OUTPUT_JSON_DIR")? {
        config.output.json_dir = val;
    }
    if let Some(val) = env_override::<PathBuf>("DEPSCREEN_OUTPUT_REPORT_PATH")? {
        config.output.report_path = Some(val);
    }
    if let Some(val) = env_override("DEPSCREEN_OUTPUT_WRITE_REPORT")? {
        config.output.write_report = val;
    }

    // Processing overrides
    if let Some(val) = env_override("DEPSCREEN_PROCESSING_PARALLEL_DOCUMENTS")? {
        config.processing.parallel_documents = val;
    }

    // Structure overrides
    if let Some(val) = env_override("DEPSCREEN_STRUCTURE_LEGACY_SECTION_MARKERS")? {
        config.structure.legacy_section_markers = val;
    }

    // Logging overrides
    if let Some(val) = env_override("DEPSCREEN_LOGGING_LOCAL_ENABLED")? {
        config.logging.local_enabled = val;
    }
    if let Some(val) = env_override("DEPSCREEN_LOGGING_LOCAL_PATH")? {
        config.logging.local_path = val;
    }
    if let Some(val) = env_override("DEPSCREEN_LOGGING_LOCAL_ROTATION")? {
        config.logging.local_rotation = val;
    }

    Ok(())
}
