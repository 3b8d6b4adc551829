//! Static Chart Renderer
//! Draws a [`BarChart`] with plotters into an RGB buffer and saves it as PNG.
//!
//! Layout:
//! 1. Caption centered on top
//! 2. Value axis starting at zero, one labelled segment per category
//! 3. Vertical charts list categories left to right, horizontal charts top to bottom

use crate::charts::{BarChart, Orientation};
use image::RgbImage;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::error::Error as StdError;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

type DrawResult = Result<(), Box<dyn StdError>>;

const BACKGROUND: RGBColor = RGBColor(255, 255, 255);
const CAPTION_FONT: (&str, u32) = ("sans-serif", 28);
const LABEL_FONT: (&str, u32) = ("sans-serif", 16);
const BAR_GAP: u32 = 10;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to draw chart: {0}")]
    Draw(String),
    #[error("Chart buffer does not match image size")]
    Buffer,
    #[error("Failed to write chart to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

pub struct BarChartRenderer;

impl BarChartRenderer {
    /// Render the chart to an in-memory image.
    pub fn render_image(chart: &BarChart) -> Result<RgbImage, RenderError> {
        let (width, height) = chart.size;
        let mut buffer = vec![0u8; width as usize * height as usize * 3];

        {
            let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
            let drawn = match chart.orientation {
                Orientation::Vertical => Self::draw_vertical(&root, chart),
                Orientation::Horizontal => Self::draw_horizontal(&root, chart),
            };
            drawn.map_err(|e| RenderError::Draw(e.to_string()))?;
            root.present()
                .map_err(|e| RenderError::Draw(e.to_string()))?;
        }

        RgbImage::from_raw(width, height, buffer).ok_or(RenderError::Buffer)
    }

    /// Render and write a PNG. The parent directory must already exist.
    pub fn save_png(chart: &BarChart, path: &Path) -> Result<(), RenderError> {
        let image = Self::render_image(chart)?;
        image.save(path).map_err(|source| RenderError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bars = chart.bars.len(), "chart written");
        Ok(())
    }

    /// Category label for a segment; horizontal charts count rows from the top.
    fn segment_label(chart: &BarChart, value: &SegmentValue<u32>) -> String {
        let SegmentValue::CenterOf(idx) = value else {
            return String::new();
        };
        let n = chart.bars.len();
        let idx = *idx as usize;
        let bar_idx = match chart.orientation {
            Orientation::Vertical => Some(idx),
            Orientation::Horizontal => n.checked_sub(idx + 1),
        };
        bar_idx
            .and_then(|i| chart.bars.get(i))
            .map(|bar| bar.label.clone())
            .unwrap_or_default()
    }

    fn draw_vertical(root: &DrawingArea<BitMapBackend<'_>, Shift>, chart: &BarChart) -> DrawResult {
        root.fill(&BACKGROUND)?;
        let n = chart.bars.len() as u32;
        let segments = n.max(1);

        let mut ctx = ChartBuilder::on(root)
            .caption(&chart.title, CAPTION_FONT)
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(70)
            .build_cartesian_2d((0u32..segments).into_segmented(), 0f64..chart.value_axis_max())?;

        let label_fmt = |v: &SegmentValue<u32>| Self::segment_label(chart, v);
        ctx.configure_mesh()
            .disable_x_mesh()
            .x_labels(chart.bars.len().max(1))
            .x_label_formatter(&label_fmt)
            .y_label_formatter(&|v| format!("{:.1}", v))
            .x_desc(chart.x_desc.as_str())
            .y_desc(chart.y_desc.as_str())
            .label_style(LABEL_FONT)
            .axis_desc_style(LABEL_FONT)
            .draw()?;

        ctx.draw_series(chart.bars.iter().enumerate().map(|(i, bar)| {
            let i = i as u32;
            let mut rect = Rectangle::new(
                [
                    (SegmentValue::Exact(i), 0.0),
                    (SegmentValue::Exact(i + 1), bar.value),
                ],
                bar.color.filled(),
            );
            rect.set_margin(0, 0, BAR_GAP, BAR_GAP);
            rect
        }))?;

        Ok(())
    }

    fn draw_horizontal(root: &DrawingArea<BitMapBackend<'_>, Shift>, chart: &BarChart) -> DrawResult {
        root.fill(&BACKGROUND)?;
        let n = chart.bars.len() as u32;
        let segments = n.max(1);

        let mut ctx = ChartBuilder::on(root)
            .caption(&chart.title, CAPTION_FONT)
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(200)
            .build_cartesian_2d(0f64..chart.value_axis_max(), (0u32..segments).into_segmented())?;

        let label_fmt = |v: &SegmentValue<u32>| Self::segment_label(chart, v);
        ctx.configure_mesh()
            .disable_y_mesh()
            .y_labels(chart.bars.len().max(1))
            .y_label_formatter(&label_fmt)
            .x_label_formatter(&|v| format!("{:.1}", v))
            .x_desc(chart.x_desc.as_str())
            .y_desc(chart.y_desc.as_str())
            .label_style(LABEL_FONT)
            .axis_desc_style(LABEL_FONT)
            .draw()?;

        ctx.draw_series(chart.bars.iter().enumerate().map(|(i, bar)| {
            // first bar occupies the top row
            let row = n - 1 - i as u32;
            let mut rect = Rectangle::new(
                [
                    (0.0, SegmentValue::Exact(row)),
                    (bar.value, SegmentValue::Exact(row + 1)),
                ],
                bar.color.filled(),
            );
            rect.set_margin(BAR_GAP / 2, BAR_GAP / 2, 0, 0);
            rect
        }))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::{GRAY, STEEL_BLUE};
    use crate::stats::CategoryCounter;

    fn chart(orientation: Orientation) -> BarChart {
        let table = CategoryCounter::frequency(["a", "a", "a", "b", "b", "c"]);
        let mut chart = BarChart::new("t", "x", "y").with_counts(&table, str::to_string, |_| GRAY);
        chart.orientation = orientation;
        chart
    }

    #[test]
    fn test_vertical_segment_labels() {
        let chart = chart(Orientation::Vertical);
        let label = |i| BarChartRenderer::segment_label(&chart, &SegmentValue::CenterOf(i));
        assert_eq!(label(0), "a");
        assert_eq!(label(2), "c");
        assert_eq!(label(3), "");
        assert_eq!(BarChartRenderer::segment_label(&chart, &SegmentValue::Exact(0)), "");
        assert_eq!(BarChartRenderer::segment_label(&chart, &SegmentValue::Last), "");
    }

    #[test]
    fn test_horizontal_segment_labels_top_down() {
        let mut chart = chart(Orientation::Horizontal);
        chart.bars.iter_mut().for_each(|b| b.color = STEEL_BLUE);
        let label = |i| BarChartRenderer::segment_label(&chart, &SegmentValue::CenterOf(i));
        // row 0 is the bottom of the plot
        assert_eq!(label(0), "c");
        assert_eq!(label(2), "a");
        assert_eq!(label(3), "");
    }
}
