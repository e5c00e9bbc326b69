#![cfg(feature = "std")]

use fivetwelve::parse_level;
use log::LevelFilter;

#[test]
fn test_parse_level_names() {
    assert_eq!(parse_level("debug"), Some(LevelFilter::Debug));
    assert_eq!(parse_level("WARN"), Some(LevelFilter::Warn));
    assert_eq!(parse_level(" off "), Some(LevelFilter::Off));
    assert_eq!(parse_level("loud"), None);
}

#[test]
fn test_parse_level_numbers() {
    assert_eq!(parse_level("0"), Some(LevelFilter::Off));
    assert_eq!(parse_level("3"), Some(LevelFilter::Info));
    assert_eq!(parse_level("5"), Some(LevelFilter::Trace));
    assert_eq!(parse_level("6"), None);
}
