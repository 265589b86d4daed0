//! Configuration schema definitions using serde.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure for the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Dataset location.
    pub data: DataConfig,
    /// Sidebar filter presets.
    pub filters: FiltersConfig,
    /// Chart rendering settings.
    pub graphs: GraphsConfig,
    /// Where and how the rendered page is written.
    pub output: OutputConfig,
    /// Logging configuration.
    pub logging: LoggingSettings,
}

/// Dataset configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Path of the sales CSV file.
    pub path: PathBuf,
}

/// Preset selections of the sidebar multiselects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FiltersConfig {
    /// Platforms selected before any user input, if present in the data.
    pub default_platforms: Vec<String>,
    /// Genres selected before any user input, if present in the data.
    pub default_genres: Vec<String>,
}

/// Graph configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphsConfig {
    /// Chart width in pixels.
    pub width: u32,
    /// Chart height in pixels.
    pub height: u32,
    /// Opacity of the critic score scatter points.
    pub scatter_alpha: f64,
    /// Radius of line markers and scatter points in pixels.
    pub marker_size: u32,
    /// Rotate category labels on the bar charts.
    pub rotate_labels: bool,
    /// Styling configuration.
    pub styling: StylingConfig,
}

/// Styling configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StylingConfig {
    /// Background color (hex format).
    pub background_color: String,
    /// Series colors (hex format); empty uses the built-in palette.
    pub palette: Vec<String>,
    /// Font family for all chart text.
    pub font_family: String,
    /// Chart title font size.
    pub title_font_size: u32,
    /// Axis label font size.
    pub label_font_size: u32,
}

/// Output configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory receiving `index.html` and chart images.
    pub directory: PathBuf,
    /// Chart image format.
    pub format: ImageFormat,
}

/// Chart image format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    /// PNG files referenced from the page.
    Png,
    /// SVG markup inlined into the page.
    Svg,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Filter directive, e.g. `info` or `vgsales_data=debug`.
    pub level: String,
    /// Emit JSON lines.
    pub json: bool,
    /// Optional log file.
    pub file: Option<PathBuf>,
    /// Log span open and close events of the load, filter and render stages.
    pub spans: bool,
}

impl LoggingSettings {
    /// Converts into the logging layer's configuration.
    pub fn to_logging_config(&self) -> vgsales_common::LoggingConfig {
        vgsales_common::LoggingConfig {
            level: self.level.clone(),
            json_format: self.json,
            file_path: self.file.clone(),
            include_spans: self.spans,
            ..vgsales_common::LoggingConfig::default()
        }
    }
}
