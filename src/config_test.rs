// Unit tests for the config module

use super::*;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[test]
fn test_defaults() {
    let config = RecorderConfig::default();
    assert!(!config.debug_mode);
    assert_eq!(config.output_dir, PathBuf::from("_results_"));
    assert_eq!(config.raw_path, "rawSeleniumVideoGrabs");
    assert_eq!(config.video_render_timeout, 5);
}

#[test]
fn test_load_full_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("recorder.json");
    fs::write(
        &path,
        r#"{
            "debugMode": true,
            "outputDir": "/tmp/recordings",
            "rawPath": "frames",
            "videoRenderTimeout": 30
        }"#,
    )
    .unwrap();

    let config = RecorderConfig::load(&path).unwrap();
    assert!(config.debug_mode);
    assert_eq!(config.output_dir, PathBuf::from("/tmp/recordings"));
    assert_eq!(config.raw_path, "frames");
    assert_eq!(config.video_render_timeout, 30);
}

#[test]
fn test_load_partial_file_falls_back_to_defaults() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("recorder.json");
    fs::write(&path, r#"{"videoRenderTimeout": 1}"#).unwrap();

    let config = RecorderConfig::load(&path).unwrap();
    assert_eq!(config.video_render_timeout, 1);
    assert!(!config.debug_mode);
    assert_eq!(config.raw_path, "rawSeleniumVideoGrabs");
}

#[test]
fn test_load_missing_file() {
    let tmp = TempDir::new().unwrap();
    let err = RecorderConfig::load(&tmp.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, RecorderError::ConfigRead { .. }));
}

#[test]
fn test_load_invalid_json() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("recorder.json");
    fs::write(&path, "not json at all").unwrap();

    let err = RecorderConfig::load(&path).unwrap_err();
    assert!(matches!(err, RecorderError::ConfigParse { .. }));
}

#[test]
fn test_round_trips_through_json() {
    let config = RecorderConfig {
        debug_mode: true,
        output_dir: PathBuf::from("out"),
        raw_path: "raw".to_string(),
        video_render_timeout: 10,
    };

    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("\"debugMode\":true"));
    assert!(json.contains("\"videoRenderTimeout\":10"));

    let back: RecorderConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back.raw_path, "raw");
    assert_eq!(back.output_dir, PathBuf::from("out"));
}
