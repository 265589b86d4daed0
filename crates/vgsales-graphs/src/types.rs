//! Graph types and data structures

use serde::{Deserialize, Serialize};
use vgsales_config::GraphsConfig;

/// The five dashboard charts, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    /// Line chart of global sales per year.
    SalesOverTime,
    /// Bar chart of global sales per platform.
    PlatformTotals,
    /// Bar chart of global sales per genre.
    GenreTotals,
    /// Stacked bar chart of regional sales per genre.
    GenreByRegion,
    /// Scatter of critic score against global sales.
    CriticScores,
}

impl ChartKind {
    /// All charts in the order the page shows them.
    pub const ALL: [Self; 5] = [
        Self::SalesOverTime,
        Self::PlatformTotals,
        Self::GenreTotals,
        Self::GenreByRegion,
        Self::CriticScores,
    ];

    /// Heading of the page section holding the chart.
    pub const fn section_title(self) -> &'static str {
        match self {
            Self::SalesOverTime => "Global Video Game Sales Over Time",
            Self::PlatformTotals => "Top Platforms by Global Sales",
            Self::GenreTotals => "Top Genres by Global Sales",
            Self::GenreByRegion => "Genre Performance Across Regions",
            Self::CriticScores => "Critic Score vs Global Sales",
        }
    }

    /// Caption drawn on the chart itself.
    pub const fn chart_title(self) -> &'static str {
        match self {
            Self::SalesOverTime => "Global Sales Trend",
            Self::PlatformTotals => "Top Platforms by Global Sales",
            Self::GenreTotals => "Top Genres by Global Sales",
            Self::GenreByRegion => "Genre-wise Sales Distribution Across Regions",
            Self::CriticScores => "Relationship Between Critic Scores and Global Sales",
        }
    }

    /// X axis description.
    pub const fn x_label(self) -> &'static str {
        match self {
            Self::SalesOverTime => "Year of Release",
            Self::PlatformTotals => "Platform",
            Self::GenreTotals | Self::GenreByRegion => "Genre",
            Self::CriticScores => "Critic Score",
        }
    }

    /// Y axis description.
    pub const fn y_label(self) -> &'static str {
        match self {
            Self::GenreByRegion => "Sales (Million Units)",
            _ => "Global Sales (Million Units)",
        }
    }

    /// File name stem for image output.
    pub const fn file_stem(self) -> &'static str {
        match self {
            Self::SalesOverTime => "sales_over_time",
            Self::PlatformTotals => "platform_totals",
            Self::GenreTotals => "genre_totals",
            Self::GenreByRegion => "genre_by_region",
            Self::CriticScores => "critic_scores",
        }
    }
}

/// Graph configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Caption drawn above the plot.
    pub title: String,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// X axis description.
    pub x_label: Option<String>,
    /// Y axis description.
    pub y_label: Option<String>,
    /// Colours, fonts and spacing.
    pub style: StyleConfig,
}

impl GraphConfig {
    /// Fixed titles and axis labels of `kind` with the given style.
    pub fn for_chart(kind: ChartKind, width: u32, height: u32, style: StyleConfig) -> Self {
        Self {
            title: kind.chart_title().to_string(),
            width,
            height,
            x_label: Some(kind.x_label().to_string()),
            y_label: Some(kind.y_label().to_string()),
            style,
        }
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            title: "Graph".to_string(),
            width: 1000,
            height: 400,
            x_label: None,
            y_label: None,
            style: StyleConfig::default(),
        }
    }
}

/// Color scheme for graphs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ColorScheme {
    /// Built-in eight-colour palette.
    Default,
    /// Hex colours from configuration.
    Custom(Vec<String>),
}

/// Font configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FontConfig {
    /// Font family name.
    pub family: String,
    /// Size in points.
    pub size: u32,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            family: "sans-serif".to_string(),
            size: 14,
        }
    }
}

impl FontConfig {
    /// Family and size in the tuple form plotters accepts as a text style.
    pub fn text_style(&self) -> (&str, f64) {
        (self.family.as_str(), f64::from(self.size))
    }
}

/// Margin configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarginConfig {
    /// Space around the whole chart.
    pub outer: u32,
    /// Height reserved for x tick labels and description.
    pub x_label_area: u32,
    /// Width reserved for y tick labels and description.
    pub y_label_area: u32,
}

impl Default for MarginConfig {
    fn default() -> Self {
        Self {
            outer: 15,
            x_label_area: 60,
            y_label_area: 70,
        }
    }
}

/// Comprehensive styling configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleConfig {
    /// Series colours.
    pub color_scheme: ColorScheme,
    /// Hex background colour; white when unset.
    pub background_color: Option<String>,
    /// Caption font.
    pub title_font: FontConfig,
    /// Tick label, axis description and legend font.
    pub label_font: FontConfig,
    /// Chart spacing.
    pub margins: MarginConfig,
    /// Rotate category labels by 90 degrees.
    pub rotate_labels: bool,
    /// Radius of markers and scatter points.
    pub marker_size: u32,
    /// Scatter point opacity.
    pub scatter_alpha: f64,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            color_scheme: ColorScheme::Default,
            background_color: Some("#FFFFFF".to_string()),
            title_font: FontConfig {
                family: "sans-serif".to_string(),
                size: 20,
            },
            label_font: FontConfig::default(),
            margins: MarginConfig::default(),
            rotate_labels: true,
            marker_size: 4,
            scatter_alpha: 0.6,
        }
    }
}

impl From<&GraphsConfig> for StyleConfig {
    fn from(config: &GraphsConfig) -> Self {
        let styling = &config.styling;
        let color_scheme = if styling.palette.is_empty() {
            ColorScheme::Default
        } else {
            ColorScheme::Custom(styling.palette.clone())
        };
        let margins = MarginConfig {
            // Vertical labels need room for the longest names.
            x_label_area: if config.rotate_labels { 110 } else { 60 },
            ..MarginConfig::default()
        };

        Self {
            color_scheme,
            background_color: Some(styling.background_color.clone()),
            title_font: FontConfig {
                family: styling.font_family.clone(),
                size: styling.title_font_size,
            },
            label_font: FontConfig {
                family: styling.font_family.clone(),
                size: styling.label_font_size,
            },
            margins,
            rotate_labels: config.rotate_labels,
            marker_size: config.marker_size,
            scatter_alpha: config.scatter_alpha,
        }
    }
}
