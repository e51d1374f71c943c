use cptg_logger::{LevelFilter, Logger};
use serial_test::serial;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
#[serial]
fn file_logging_creates_json_log_file() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");

    let logger = Logger::builder()
        .name("cptg-file-logging")
        .console(false)
        .level(LevelFilter::INFO)
        .path(&log_dir)
        .json(true)
        .init()?;

    assert!(logger.guard().is_some());
    tracing::info!(type_key = "movie", "definition stored");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    let contents = fs::read_to_string(&log_file)?;
    assert!(contents.contains("\"type_key\":\"movie\""), "json fields expected: {contents}");

    Ok(())
}
