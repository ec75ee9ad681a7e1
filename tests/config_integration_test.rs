//! Integration tests for configuration loading and validation
//!
//! Tests that modify environment variables hold `ENV_MUTEX` so they do not
//! interfere with each other.

use depscreen::config::load_config;
use depscreen::core::pipeline::BatchConfig;
use depscreen::core::structure::SectionMarkers;
use depscreen::domain::MeasureError;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use tempfile::NamedTempFile;

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Helper function to clean up environment variables
fn cleanup_env_vars() {
    std::env::remove_var("DEPSCREEN_APPLICATION_LOG_LEVEL");
    std::env::remove_var("DEPSCREEN_INPUT_HTML_DIR");
    std::env::remove_var("DEPSCREEN_OUTPUT_WRITE_REPORT");
    std::env::remove_var("DEPSCREEN_PROCESSING_PARALLEL_DOCUMENTS");
    std::env::remove_var("DEPSCREEN_STRUCTURE_LEGACY_SECTION_MARKERS");
    std::env::remove_var("TEST_DEPSCREEN_DATA");
}

fn write_config(contents: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(contents.as_bytes()).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let temp_file = write_config(
        r#"
[application]
log_level = "debug"

[input]
html_dir = "/srv/summaries/html"
json_dir = "/srv/summaries/json"

[output]
json_dir = "/srv/out/json"
report_path = "/srv/out/measure.xml"
write_report = true

[processing]
parallel_documents = 16

[structure]
legacy_section_markers = true

[logging]
local_enabled = true
local_path = "/var/log/depscreen"
local_rotation = "hourly"
"#,
    );

    let config = load_config(temp_file.path()).unwrap();

    assert_eq!(config.application.log_level, "debug");
    assert_eq!(config.input.html_dir, PathBuf::from("/srv/summaries/html"));
    assert_eq!(config.input.json_dir, PathBuf::from("/srv/summaries/json"));
    assert_eq!(config.output.json_dir, PathBuf::from("/srv/out/json"));
    assert_eq!(config.output.report_path, Some(PathBuf::from("/srv/out/measure.xml")));
    assert!(config.output.write_report);
    assert_eq!(config.processing.parallel_documents, 16);
    assert!(config.structure.legacy_section_markers);
    assert!(config.logging.local_enabled);
    assert_eq!(config.logging.local_rotation, "hourly");

    let batch = BatchConfig::from_config(&config);
    assert_eq!(batch.parallel_documents, 16);
    assert_eq!(batch.markers, SectionMarkers::legacy());
}

#[test]
fn test_load_minimal_config_with_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let temp_file = write_config("[application]\nlog_level = \"warn\"\n");
    let config = load_config(temp_file.path()).unwrap();

    assert_eq!(config.application.log_level, "warn");
    assert_eq!(config.input.html_dir, PathBuf::from("data/html"));
    assert_eq!(config.output.json_dir, PathBuf::from("data/json"));
    assert_eq!(config.output.report_path, None);
    assert_eq!(config.processing.parallel_documents, 4);
    assert!(!config.structure.legacy_section_markers);
    assert!(!config.logging.local_enabled);
    assert_eq!(BatchConfig::from_config(&config).markers, SectionMarkers::default());
}

#[test]
fn test_env_var_substitution() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("TEST_DEPSCREEN_DATA", "/mnt/cohort");

    let temp_file = write_config(
        r#"
# Data root: ${TEST_DEPSCREEN_UNSET_IN_COMMENT}
[input]
html_dir = "${TEST_DEPSCREEN_DATA}/html"
json_dir = "${TEST_DEPSCREEN_DATA}/json"
"#,
    );
    let config = load_config(temp_file.path()).unwrap();

    assert_eq!(config.input.html_dir, PathBuf::from("/mnt/cohort/html"));
    assert_eq!(config.input.json_dir, PathBuf::from("/mnt/cohort/json"));

    cleanup_env_vars();
}

#[test]
fn test_missing_env_var_is_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let temp_file = write_config("[input]\nhtml_dir = \"${TEST_DEPSCREEN_DATA}/html\"\n");
    let result = load_config(temp_file.path());

    match result {
        Err(MeasureError::Configuration(message)) => {
            assert!(message.contains("TEST_DEPSCREEN_DATA"));
        }
        other => panic!("expected configuration error, got {other:?}"),
    }
}

#[test]
fn test_env_var_overrides() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("DEPSCREEN_APPLICATION_LOG_LEVEL", "trace");
    std::env::set_var("DEPSCREEN_INPUT_HTML_DIR", "/override/html");
    std::env::set_var("DEPSCREEN_PROCESSING_PARALLEL_DOCUMENTS", "12");
    std::env::set_var("DEPSCREEN_STRUCTURE_LEGACY_SECTION_MARKERS", "true");

    let temp_file = write_config(
        r#"
[application]
log_level = "info"

[input]
html_dir = "data/html"

[processing]
parallel_documents = 2
"#,
    );
    let config = load_config(temp_file.path()).unwrap();

    assert_eq!(config.application.log_level, "trace");
    assert_eq!(config.input.html_dir, PathBuf::from("/override/html"));
    assert_eq!(config.processing.parallel_documents, 12);
    assert!(config.structure.legacy_section_markers);

    cleanup_env_vars();
}

#[test]
fn test_malformed_override_is_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("DEPSCREEN_PROCESSING_PARALLEL_DOCUMENTS", "many");

    let temp_file = write_config("");
    let result = load_config(temp_file.path());
    assert!(matches!(result, Err(MeasureError::Configuration(_))));

    cleanup_env_vars();
}

#[test]
fn test_invalid_config_validation() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let cases = [
        "[application]\nlog_level = \"verbose\"\n",
        "[processing]\nparallel_documents = 0\n",
        "[processing]\nparallel_documents = 65\n",
        "[output]\nwrite_report = true\n",
        "[logging]\nlocal_rotation = \"weekly\"\n",
        "[processing\nparallel_documents = 2\n",
    ];

    for contents in cases {
        let temp_file = write_config(contents);
        let result = load_config(temp_file.path());
        assert!(
            matches!(result, Err(MeasureError::Configuration(_))),
            "expected rejection of {contents:?}"
        );
    }
}
