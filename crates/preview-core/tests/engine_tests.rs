use std::fs;
use std::path::{Path, PathBuf};

use preview_core::config::PreviewConfig;
use preview_core::engine::{default_output_path, EngineError, PreviewEngine};
use preview_render::{render_document, RenderOptions};
use preview_views::build_views;
use preview_views::status::StatusLevel;

const FIXTURE: &str = include_str!("../../preview-ir/tests/fixtures/operator_day.json");

fn write_input(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_generate_writes_document() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "operator_day.json", FIXTURE);
    let output = dir.path().join("out.html");

    let engine = PreviewEngine::new(PreviewConfig::default());
    let outcome = engine.generate(&input, Some(&output)).unwrap();

    assert!(outcome.output_path.is_absolute());
    assert!(outcome.views_path.is_none());
    let html = fs::read_to_string(&output).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Harbor Credit Desk"));
}

#[test]
fn test_generate_summary_counts() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "operator_day.json", FIXTURE);
    let output = dir.path().join("out.html");

    let engine = PreviewEngine::new(PreviewConfig::default());
    let summary = engine.generate(&input, Some(&output)).unwrap().summary;

    assert_eq!(summary.events, 12);
    assert_eq!(summary.decisions, 8);
    assert_eq!(summary.audit_records, 2);
    assert_eq!(summary.dropped, 2);
    assert_eq!(summary.status, StatusLevel::Warning);
    assert_eq!(summary.warning_count, 2);
    assert!(summary.has_highlighted_action);
}

#[test]
fn test_missing_input_is_fatal_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.html");

    let engine = PreviewEngine::new(PreviewConfig::default());
    let result = engine.generate(&dir.path().join("absent.json"), Some(&output));

    assert!(matches!(result, Err(EngineError::NotFound { .. })));
    assert!(!output.exists());
}

#[test]
fn test_invalid_json_is_fatal_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "broken.json", "{ \"system_name\": ");
    let output = dir.path().join("out.html");

    let engine = PreviewEngine::new(PreviewConfig::default());
    let result = engine.generate(&input, Some(&output));

    assert!(matches!(result, Err(EngineError::Parse(_))));
    assert!(!output.exists());
}

#[test]
fn test_missing_events_path_renders_empty_day() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "bare.json", r#"{ "system_name": "Bare", "version": "0.1" }"#);
    let output = dir.path().join("out.html");

    let engine = PreviewEngine::new(PreviewConfig::default());
    let outcome = engine.generate(&input, Some(&output)).unwrap();

    assert_eq!(outcome.summary.events, 0);
    assert_eq!(outcome.summary.status, StatusLevel::Ok);
    assert!(!outcome.summary.has_highlighted_action);
    let html = fs::read_to_string(&output).unwrap();
    assert_eq!(html.matches("No data recorded").count(), 3);
}

#[test]
fn test_input_size_limit() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "operator_day.json", FIXTURE);
    let output = dir.path().join("out.html");

    let config = PreviewConfig {
        max_input_bytes: 64,
        ..Default::default()
    };
    let result = PreviewEngine::new(config).generate(&input, Some(&output));
    match result {
        Err(EngineError::InputTooLarge { limit, size, .. }) => {
            assert_eq!(limit, 64);
            assert!(size > 64);
        }
        other => panic!("expected size limit error, got {other:?}"),
    }
    assert!(!output.exists());
}

#[test]
fn test_emit_views_writes_json() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "operator_day.json", FIXTURE);
    let output = dir.path().join("out.html");
    let views = dir.path().join("views.json");

    let config = PreviewConfig {
        emit_views: Some(views.clone()),
        ..Default::default()
    };
    let outcome = PreviewEngine::new(config).generate(&input, Some(&output)).unwrap();
    assert!(outcome.views_path.is_some());

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&views).unwrap()).unwrap();
    assert_eq!(value["system_name"], "Harbor Credit Desk");
    assert_eq!(value["status"]["level"], "Warning");
    assert_eq!(value["status"]["warning_count"], 2);
    assert_eq!(value["signals"].as_array().unwrap().len(), 4);
    assert_eq!(value["history"].as_array().unwrap().len(), 5);
    assert_eq!(value["audit"]["sections"].as_array().unwrap().len(), 3);
}

#[test]
fn test_generate_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "operator_day.json", FIXTURE);
    let first = dir.path().join("first.html");
    let second = dir.path().join("second.html");

    let engine = PreviewEngine::new(PreviewConfig::default());
    engine.generate(&input, Some(&first)).unwrap();
    engine.generate(&input, Some(&second)).unwrap();

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn test_render_matches_written_document() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "operator_day.json", FIXTURE);
    let output = dir.path().join("out.html");

    let engine = PreviewEngine::new(PreviewConfig::default());
    engine.generate(&input, Some(&output)).unwrap();
    let directive = engine.load(&input).unwrap();
    let expected = render_document(&build_views(&directive), &RenderOptions::default());

    assert_eq!(expected, fs::read_to_string(&output).unwrap());
}

#[test]
fn test_failed_views_write_removes_document() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "operator_day.json", FIXTURE);
    let output = dir.path().join("out.html");

    let config = PreviewConfig {
        emit_views: Some(dir.path().join("missing").join("views.json")),
        ..Default::default()
    };
    let result = PreviewEngine::new(config).generate(&input, Some(&output));

    assert!(matches!(result, Err(EngineError::Write { .. })));
    assert!(!output.exists());
}

#[test]
fn test_failed_document_write_skips_views() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "operator_day.json", FIXTURE);
    let views = dir.path().join("views.json");

    let config = PreviewConfig {
        emit_views: Some(views.clone()),
        ..Default::default()
    };
    let output = dir.path().join("missing").join("out.html");
    let result = PreviewEngine::new(config).generate(&input, Some(&output));

    assert!(matches!(result, Err(EngineError::Write { .. })));
    assert!(!views.exists());
}

#[test]
fn test_mistyped_event_fields_still_render() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(
        dir.path(),
        "loose.json",
        r#"{ "system_name": "Loose", "preview_directive": { "events": [
            { "stage": 3.0, "title": 90210, "progress": "80", "human_gate": 1 },
            { "stage": 9, "title": "Check", "safety_trigger": "no" }
        ] } }"#,
    );
    let output = dir.path().join("out.html");

    let outcome = PreviewEngine::new(PreviewConfig::default())
        .generate(&input, Some(&output))
        .unwrap();

    assert_eq!(outcome.summary.decisions, 1);
    assert_eq!(outcome.summary.audit_records, 1);
    assert_eq!(outcome.summary.warning_count, 1);
    assert!(fs::read_to_string(&output).unwrap().contains("90210"));
}

#[test]
fn test_default_output_path() {
    assert_eq!(
        default_output_path(Path::new("designs/desk.json"), "_preview.html"),
        PathBuf::from("desk_preview.html")
    );
    assert_eq!(
        default_output_path(Path::new("plain"), "_preview.html"),
        PathBuf::from("plain_preview.html")
    );
}

#[test]
fn test_config_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_input(
        dir.path(),
        "config.json",
        r#"{ "output_suffix": ".html", "render": { "include_timeline": true, "dev_query_key": "audit" } }"#,
    );
    let config = PreviewConfig::load(&path).unwrap();
    assert_eq!(config.output_suffix, ".html");
    assert!(config.render.include_timeline);
    assert_eq!(config.render.dev_query_key, "audit");
    assert_eq!(config.render.lang, "en");

    let bad = write_input(dir.path(), "bad.json", "{ nope");
    assert!(PreviewConfig::load(&bad).is_err());
}
