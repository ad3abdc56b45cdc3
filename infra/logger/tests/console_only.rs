use pricing_logger::{LevelFilter, Logger};
use tracing::Level;

#[test]
fn console_logger_applies_filter_without_file_writer() {
    let logger = Logger::builder()
        .name("pricing-console")
        .console(true)
        .level(LevelFilter::WARN)
        .env_filter("pricing_cards=debug")
        .init()
        .expect("console logger should initialize");

    assert!(logger.guard().is_none(), "no file output, so nothing to flush");
    assert!(tracing::enabled!(target: "pricing_cards", Level::DEBUG));
    assert!(!tracing::enabled!(target: "pricing_desktop", Level::INFO), "falls back to WARN");
    assert!(tracing::enabled!(target: "pricing_desktop", Level::WARN));
}
