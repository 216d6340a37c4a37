use trader_quiz::{logging, Config};

#[test]
fn init_logging_creates_nested_log_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logs").join("quiz.log");
    let config = Config {
        log_file: Some(path.clone()),
        log_level: "not a [valid filter".to_string(),
        ..Config::default()
    };

    let written = logging::init_logging(&config).unwrap();
    assert_eq!(written, path);
    assert!(path.exists());

    // A second call keeps the installed subscriber and still succeeds.
    assert!(logging::init_logging(&config).is_ok());
}
