//! Default values.

use crate::schema::*;

/// Dataset path used when nothing else is configured.
pub const DEFAULT_DATA_PATH: &str = "../data/Video_Game_Sales_as_of_Jan_2017.csv";

/// Platforms preselected in the sidebar.
pub const DEFAULT_PLATFORMS: [&str; 2] = ["PS2", "X360"];

/// Genres preselected in the sidebar.
pub const DEFAULT_GENRES: [&str; 2] = ["Action", "Sports"];

impl Default for Config {
    fn default() -> Self {
        Self {
            data: DataConfig::default(),
            filters: FiltersConfig::default(),
            graphs: GraphsConfig::default(),
            output: OutputConfig::default(),
            logging: LoggingSettings::default(),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_DATA_PATH.into(),
        }
    }
}

impl Default for FiltersConfig {
    fn default() -> Self {
        Self {
            default_platforms: DEFAULT_PLATFORMS.iter().map(ToString::to_string).collect(),
            default_genres: DEFAULT_GENRES.iter().map(ToString::to_string).collect(),
        }
    }
}

impl Default for GraphsConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 400,
            scatter_alpha: 0.6,
            marker_size: 4,
            rotate_labels: true,
            styling: StylingConfig::default(),
        }
    }
}

impl Default for StylingConfig {
    fn default() -> Self {
        Self {
            background_color: "#FFFFFF".to_string(),
            palette: Vec::new(),
            font_family: "sans-serif".to_string(),
            title_font_size: 20,
            label_font_size: 14,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: "dashboard".into(),
            format: ImageFormat::Png,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file: None,
            spans: false,
        }
    }
}
