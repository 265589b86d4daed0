//! Critic score against global sales scatter plot.

use crate::renderer::{sales_axis_max, ChartRenderer};
use crate::GraphConfig;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::ops::Range;
use vgsales_common::Result;
use vgsales_data::CriticScorePoint;

/// Semi-transparent points, one per rated title.
#[derive(Debug, Clone, Copy, Default)]
pub struct CriticScoreChart;

impl CriticScoreChart {
    /// Creates the renderer.
    pub fn new() -> Self {
        Self
    }

    /// Score axis covering the data with a small margin; 0..100 when empty.
    fn score_range(data: &[CriticScorePoint]) -> Range<f64> {
        let (low, high) = data
            .iter()
            .map(|p| p.critic_score)
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), s| {
                (lo.min(s), hi.max(s))
            });
        if low > high {
            return 0.0..100.0;
        }
        let pad = ((high - low) * 0.05).max(1.0);
        (low - pad)..(high + pad)
    }
}

impl ChartRenderer for CriticScoreChart {
    type Data = [CriticScorePoint];

    fn name(&self) -> &'static str {
        "critic_scores"
    }

    fn draw<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
        config: &GraphConfig,
        data: &Self::Data,
    ) -> Result<()>
    where
        DB::ErrorType: 'static,
    {
        let style = &config.style;
        let y_max = sales_axis_max(data.iter().map(|p| p.global_sales));

        let mut chart = ChartBuilder::on(root)
            .caption(&config.title, style.title_font.text_style())
            .margin(style.margins.outer as i32)
            .x_label_area_size(style.margins.x_label_area as i32)
            .y_label_area_size(style.margins.y_label_area as i32)
            .build_cartesian_2d(Self::score_range(data), 0.0..y_max)?;

        chart
            .configure_mesh()
            .x_desc(config.x_label.as_deref().unwrap_or(""))
            .y_desc(config.y_label.as_deref().unwrap_or(""))
            .label_style(style.label_font.text_style())
            .axis_desc_style(style.label_font.text_style())
            .draw()?;

        let point_style = self.get_colors(&style.color_scheme)[0]
            .mix(style.scatter_alpha)
            .filled();
        let radius = style.marker_size as i32;

        chart.draw_series(
            data.iter()
                .map(|p| Circle::new((p.critic_score, p.global_sales), radius, point_style)),
        )?;

        Ok(())
    }
}
