use photogate_core::checker::QualityChecker;
use photogate_core::config::QualityConfig;
use photogate_core::error::GateError;

#[test]
fn test_defaults() {
    let c = QualityConfig::default();
    assert_eq!(c.blur_threshold, 100.0);
    assert_eq!(c.darkness_threshold, 50.0);
    assert_eq!(c.focus_threshold, 0.3);
    assert!(c.validate().is_ok());
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let c = QualityConfig::from_toml_str("blur_threshold = 250.0\n").unwrap();
    assert_eq!(c.blur_threshold, 250.0);
    assert_eq!(c.darkness_threshold, 50.0);
    assert_eq!(c.focus_threshold, 0.3);
}

#[test]
fn test_empty_toml_is_default() {
    let c = QualityConfig::from_toml_str("").unwrap();
    assert_eq!(c, QualityConfig::default());
}

#[test]
fn test_toml_roundtrip() {
    let c = QualityConfig {
        blur_threshold: 80.0,
        darkness_threshold: 35.5,
        focus_threshold: 0.15,
    };
    let s = toml::to_string(&c).unwrap();
    assert_eq!(QualityConfig::from_toml_str(&s).unwrap(), c);
}

#[test]
fn test_malformed_toml_rejected() {
    let err = QualityConfig::from_toml_str("blur_threshold = \"high\"").unwrap_err();
    assert!(matches!(err, GateError::ConfigParse(_)), "got: {err}");
}

#[test]
fn test_negative_threshold_rejected() {
    let c = QualityConfig {
        darkness_threshold: -1.0,
        ..Default::default()
    };
    let err = c.validate().unwrap_err();
    assert!(err.to_string().contains("darkness_threshold"), "got: {err}");
}

#[test]
fn test_focus_above_one_rejected() {
    let c = QualityConfig {
        focus_threshold: 1.5,
        ..Default::default()
    };
    assert!(matches!(c.validate(), Err(GateError::InvalidConfig(_))));
    assert!(QualityChecker::try_new(c).is_err());
}

#[test]
fn test_nan_threshold_rejected() {
    let c = QualityConfig {
        blur_threshold: f64::NAN,
        ..Default::default()
    };
    assert!(c.validate().is_err());
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gate.toml");
    std::fs::write(&path, "focus_threshold = 0.2\n").unwrap();
    let c = QualityConfig::load(&path).unwrap();
    assert_eq!(c.focus_threshold, 0.2);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = QualityConfig::load(&dir.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, GateError::Io(_)), "got: {err}");
}
