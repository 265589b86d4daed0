//! Runtime validation of loaded configuration.

use crate::schema::Config;
use vgsales_common::{Result, VgSalesError};

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

impl Config {
    /// Checks value ranges and formats, reporting the first offending field.
    pub fn validate(&self) -> Result<()> {
        if self.data.path.as_os_str().is_empty() {
            return Err(VgSalesError::validation_field(
                "Dataset path cannot be empty",
                "data.path",
            ));
        }

        let graphs = &self.graphs;
        check_range("graphs.width", graphs.width, 100, 4000)?;
        check_range("graphs.height", graphs.height, 100, 4000)?;
        check_range("graphs.marker_size", graphs.marker_size, 1, 50)?;
        check_range("graphs.styling.title_font_size", graphs.styling.title_font_size, 8, 72)?;
        check_range("graphs.styling.label_font_size", graphs.styling.label_font_size, 8, 72)?;

        if !(graphs.scatter_alpha > 0.0 && graphs.scatter_alpha <= 1.0) {
            return Err(VgSalesError::validation_field(
                format!("Scatter alpha must be in (0, 1], got {}", graphs.scatter_alpha),
                "graphs.scatter_alpha",
            ));
        }

        if !is_hex_color(&graphs.styling.background_color) {
            return Err(VgSalesError::validation_field(
                "Background color must be a hex color like #FFFFFF",
                "graphs.styling.background_color",
            ));
        }

        if let Some(bad) = graphs.styling.palette.iter().find(|c| !is_hex_color(c)) {
            return Err(VgSalesError::validation_field(
                format!("Palette entry '{bad}' is not a hex color"),
                "graphs.styling.palette",
            ));
        }

        if graphs.styling.font_family.trim().is_empty() {
            return Err(VgSalesError::validation_field(
                "Font family cannot be empty",
                "graphs.styling.font_family",
            ));
        }

        if self.output.directory.as_os_str().is_empty() {
            return Err(VgSalesError::validation_field(
                "Output directory cannot be empty",
                "output.directory",
            ));
        }

        if !is_log_filter(&self.logging.level) {
            return Err(VgSalesError::validation_field(
                format!("Unknown log level '{}'", self.logging.level),
                "logging.level",
            ));
        }

        Ok(())
    }
}

fn check_range(field: &str, value: u32, min: u32, max: u32) -> Result<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(VgSalesError::validation_field(
            format!("Value {value} must be between {min} and {max}"),
            field,
        ))
    }
}

/// Whether `value` is a `#RRGGBB` color.
pub fn is_hex_color(value: &str) -> bool {
    value
        .strip_prefix('#')
        .is_some_and(|hex| hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()))
}

/// Whether every comma separated directive ends in a known level.
fn is_log_filter(filter: &str) -> bool {
    !filter.trim().is_empty()
        && filter.split(',').all(|directive| {
            let level = directive.rsplit('=').next().unwrap_or_default().trim();
            LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str())
        })
}
