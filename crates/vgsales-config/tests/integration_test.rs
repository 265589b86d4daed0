//! Integration tests for vgsales-config crate.

use std::io::Write;
use vgsales_config::{Config, ConfigLoader, ImageFormat};

fn write_yaml(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_full_yaml_file() {
    let file = write_yaml(
        r##"
data:
  path: data/sales.csv
filters:
  default_platforms: [Wii, DS]
  default_genres: [Puzzle]
graphs:
  width: 1200
  height: 500
  scatter_alpha: 0.4
  styling:
    background_color: "#FAFAFA"
    palette: ["#1F77B4", "#FF7F0E", "#2CA02C"]
output:
  directory: out
  format: svg
logging:
  level: debug
  spans: true
"##,
    );

    let config = ConfigLoader::load_from_file(file.path()).unwrap();

    assert_eq!(config.data.path.to_str(), Some("data/sales.csv"));
    assert_eq!(config.filters.default_platforms, ["Wii", "DS"]);
    assert_eq!(config.filters.default_genres, ["Puzzle"]);
    assert_eq!(config.graphs.width, 1200);
    assert_eq!(config.graphs.styling.palette.len(), 3);
    assert_eq!(config.graphs.styling.font_family, "sans-serif");
    assert_eq!(config.output.format, ImageFormat::Svg);
    assert_eq!(config.logging.level, "debug");

    let logging = config.logging.to_logging_config();
    assert_eq!(logging.level, "debug");
    assert!(logging.include_spans);
    assert!(logging.include_targets);
}

#[test]
fn test_invalid_values_fail_validation() {
    let file = write_yaml("graphs:\n  scatter_alpha: 1.5\n");

    let err = ConfigLoader::load_from_file(file.path()).unwrap_err();

    assert!(err.to_string().contains("Configuration error"));
    assert!(err.to_string().contains("alpha"));
}

#[test]
fn test_malformed_yaml_is_a_config_error() {
    let file = write_yaml("graphs: [unterminated\n");

    let err = ConfigLoader::load_from_file(file.path()).unwrap_err();

    assert!(err.to_string().contains("parse YAML"));
}

#[test]
fn test_default_config_round_trips_through_yaml() {
    let yaml = serde_yaml::to_string(&Config::default()).unwrap();
    assert_eq!(ConfigLoader::parse(&yaml).unwrap(), Config::default());
}
