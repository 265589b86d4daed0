//! Chart rendering trait and shared drawing helpers

use crate::{ColorScheme, GraphConfig};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontTransform;
use std::path::Path;
use tracing::{debug, info};
use vgsales_common::{truncate_string, Result};

/// Longest category label drawn under a bar.
const MAX_LABEL_CHARS: usize = 20;

/// A chart that can draw its dataset onto any plotters backend.
pub trait ChartRenderer {
    /// Aggregated rows this chart consumes.
    type Data: ?Sized;

    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Draws the chart onto an already filled drawing area.
    ///
    /// Empty data must produce axes and a title, never an error.
    fn draw<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
        config: &GraphConfig,
        data: &Self::Data,
    ) -> Result<()>
    where
        DB::ErrorType: 'static;

    /// Render the chart as a PNG file at `path`.
    fn render_to_file(&self, config: &GraphConfig, data: &Self::Data, path: &Path) -> Result<()> {
        let root = BitMapBackend::new(path, (config.width, config.height)).into_drawing_area();
        root.fill(&self.get_background_color(config))?;
        self.draw(&root, config, data)?;
        root.present()?;

        info!("Successfully rendered {} chart to {}", self.name(), path.display());
        Ok(())
    }

    /// Render the chart as an SVG document.
    fn render_to_svg(&self, config: &GraphConfig, data: &Self::Data) -> Result<String> {
        let mut svg = String::new();
        {
            let root =
                SVGBackend::with_string(&mut svg, (config.width, config.height)).into_drawing_area();
            root.fill(&self.get_background_color(config))?;
            self.draw(&root, config, data)?;
            root.present()?;
        }

        debug!(chart = self.name(), bytes = svg.len(), "Rendered SVG chart");
        Ok(svg)
    }

    /// Get colors from color scheme
    fn get_colors(&self, scheme: &ColorScheme) -> Vec<RGBColor> {
        match scheme {
            ColorScheme::Default => vec![
                RGBColor(31, 119, 180),  // Blue
                RGBColor(255, 127, 14),  // Orange
                RGBColor(44, 160, 44),   // Green
                RGBColor(214, 39, 40),   // Red
                RGBColor(148, 103, 189), // Purple
                RGBColor(140, 86, 75),   // Brown
                RGBColor(227, 119, 194), // Pink
                RGBColor(127, 127, 127), // Gray
            ],
            ColorScheme::Custom(colors) if !colors.is_empty() => {
                colors.iter().map(|color| self.parse_color(color)).collect()
            }
            ColorScheme::Custom(_) => self.get_colors(&ColorScheme::Default),
        }
    }

    /// Parse a `#RRGGBB` string, falling back to black.
    fn parse_color(&self, color_str: &str) -> RGBColor {
        if let Some(hex) = color_str.strip_prefix('#') {
            if hex.len() == 6 && hex.is_ascii() {
                if let (Ok(r), Ok(g), Ok(b)) = (
                    u8::from_str_radix(&hex[0..2], 16),
                    u8::from_str_radix(&hex[2..4], 16),
                    u8::from_str_radix(&hex[4..6], 16),
                ) {
                    return RGBColor(r, g, b);
                }
            }
        }
        RGBColor(0, 0, 0)
    }

    /// Get background color from style config
    fn get_background_color(&self, config: &GraphConfig) -> RGBColor {
        config
            .style
            .background_color
            .as_ref()
            .map(|color| self.parse_color(color))
            .unwrap_or(WHITE)
    }
}

/// Upper bound of a sales axis: 10% headroom, at least 1.
///
/// Non-finite values are skipped so the axis range stays drawable.
pub(crate) fn sales_axis_max(values: impl Iterator<Item = f64>) -> f64 {
    let max = values.filter(|v| v.is_finite()).fold(0.0_f64, f64::max);
    if max > 0.0 {
        max * 1.1
    } else {
        1.0
    }
}

/// Number of slots on a category axis; never zero so empty charts still lay out.
pub(crate) fn category_slots(len: usize) -> u32 {
    u32::try_from(len.max(1)).unwrap_or(u32::MAX)
}

/// Text of the category whose slot centre is `value`.
pub(crate) fn category_label(labels: &[String], value: &SegmentValue<u32>) -> String {
    match value {
        SegmentValue::CenterOf(index) => labels
            .get(*index as usize)
            .map(|label| truncate_string(label, MAX_LABEL_CHARS))
            .unwrap_or_default(),
        _ => String::new(),
    }
}

/// Tick label style for category axes, rotated when configured.
pub(crate) fn category_label_style(config: &GraphConfig) -> TextStyle<'_> {
    let style = TextStyle::from(config.style.label_font.text_style().into_font());
    if config.style.rotate_labels {
        style.transform(FontTransform::Rotate90)
    } else {
        style
    }
}

/// One filled bar spanning category slot `index` from `bottom` to `top`.
pub(crate) fn category_bar(
    index: usize,
    bottom: f64,
    top: f64,
    color: RGBColor,
) -> Rectangle<(SegmentValue<u32>, f64)> {
    let slot = u32::try_from(index).unwrap_or(u32::MAX - 1);
    let mut bar = Rectangle::new(
        [
            (SegmentValue::Exact(slot), bottom),
            (SegmentValue::Exact(slot + 1), top),
        ],
        color.filled(),
    );
    bar.set_margin(0, 0, 6, 6);
    bar
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockRenderer;

    impl ChartRenderer for MockRenderer {
        type Data = [f64];

        fn name(&self) -> &'static str {
            "mock"
        }

        fn draw<DB: DrawingBackend>(
            &self,
            _root: &DrawingArea<DB, Shift>,
            _config: &GraphConfig,
            _data: &Self::Data,
        ) -> Result<()>
        where
            DB::ErrorType: 'static,
        {
            Ok(())
        }
    }

    #[test]
    fn test_color_schemes() {
        let renderer = MockRenderer;

        let default_colors = renderer.get_colors(&ColorScheme::Default);
        assert_eq!(default_colors[0], RGBColor(31, 119, 180));

        let custom = ColorScheme::Custom(vec!["#FF0000".to_string(), "#00FF00".to_string()]);
        assert_eq!(
            renderer.get_colors(&custom),
            [RGBColor(255, 0, 0), RGBColor(0, 255, 0)]
        );

        // An empty palette falls back instead of leaving charts colourless.
        assert_eq!(
            renderer.get_colors(&ColorScheme::Custom(Vec::new())),
            default_colors
        );
    }

    #[test]
    fn test_color_parsing() {
        let renderer = MockRenderer;

        assert_eq!(renderer.parse_color("#0000FF"), RGBColor(0, 0, 255));
        assert_eq!(renderer.parse_color("invalid"), RGBColor(0, 0, 0));
        assert_eq!(renderer.parse_color("#ZZ0000"), RGBColor(0, 0, 0));
    }

    #[test]
    fn test_background_color() {
        let renderer = MockRenderer;
        let mut config = GraphConfig::default();
        assert_eq!(renderer.get_background_color(&config), RGBColor(255, 255, 255));

        config.style.background_color = Some("#FF0000".to_string());
        assert_eq!(renderer.get_background_color(&config), RGBColor(255, 0, 0));

        config.style.background_color = None;
        assert_eq!(renderer.get_background_color(&config), WHITE);
    }

    #[test]
    fn test_sales_axis_max() {
        assert_eq!(sales_axis_max(std::iter::empty()), 1.0);
        assert_eq!(sales_axis_max([0.0, 0.0].into_iter()), 1.0);
        assert!((sales_axis_max([2.0, 10.0].into_iter()) - 11.0).abs() < 1e-9);
    }

    #[test]
    fn test_sales_axis_max_skips_non_finite_values() {
        let values = [2.0, f64::INFINITY, f64::NAN, 10.0, f64::NEG_INFINITY];
        assert!((sales_axis_max(values.into_iter()) - 11.0).abs() < 1e-9);
        assert_eq!(sales_axis_max([f64::INFINITY].into_iter()), 1.0);
    }

    #[test]
    fn test_category_labels() {
        let labels = vec!["PS2".to_string(), "A".repeat(30)];

        assert_eq!(category_label(&labels, &SegmentValue::CenterOf(0)), "PS2");
        assert!(category_label(&labels, &SegmentValue::CenterOf(1)).chars().count() <= 20);
        assert_eq!(category_label(&labels, &SegmentValue::CenterOf(2)), "");
        assert_eq!(category_label(&labels, &SegmentValue::Exact(0)), "");
        assert_eq!(category_slots(0), 1);
        assert_eq!(category_slots(6), 6);
    }
}
