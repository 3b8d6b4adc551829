//! Chart Plotter Module
//! Describes bar charts (labels, scaled values, colours) independently of drawing.

use crate::stats::CountTable;
use plotters::style::RGBColor;

/// Named colours used by the registry charts.
pub const LIGHT_BLUE: RGBColor = RGBColor(173, 216, 230);
pub const PINK: RGBColor = RGBColor(255, 192, 203);
pub const GRAY: RGBColor = RGBColor(128, 128, 128);
pub const LIGHT_GREEN: RGBColor = RGBColor(144, 238, 144);
pub const SALMON: RGBColor = RGBColor(250, 128, 114);
pub const STEEL_BLUE: RGBColor = RGBColor(70, 130, 180);
pub const SEA_GREEN: RGBColor = RGBColor(46, 139, 87);

/// Default label used on the value axis.
pub const COUNT_AXIS: &str = "Count (Thousands)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Categories along the x axis.
    Vertical,
    /// Categories along the y axis, first bar drawn at the top.
    Horizontal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub color: RGBColor,
}

/// A complete bar chart ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub title: String,
    pub x_desc: String,
    pub y_desc: String,
    pub orientation: Orientation,
    pub size: (u32, u32),
    pub bars: Vec<Bar>,
}

impl BarChart {
    pub fn new(title: &str, x_desc: &str, y_desc: &str) -> Self {
        Self {
            title: title.to_string(),
            x_desc: x_desc.to_string(),
            y_desc: y_desc.to_string(),
            orientation: Orientation::Vertical,
            size: (800, 600),
            bars: Vec::new(),
        }
    }

    pub fn horizontal(mut self) -> Self {
        self.orientation = Orientation::Horizontal;
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    /// Fill bars from a count table, scaled to thousands, in table order.
    ///
    /// `label_fn` turns a category into its axis label and `color_fn` picks
    /// the bar colour for a category.
    pub fn with_counts<L, C>(mut self, table: &CountTable, label_fn: L, color_fn: C) -> Self
    where
        L: Fn(&str) -> String,
        C: Fn(&str) -> RGBColor,
    {
        self.bars = table
            .scaled()
            .into_iter()
            .map(|(category, value)| Bar {
                label: label_fn(&category),
                value,
                color: color_fn(&category),
            })
            .collect();
        self
    }

    pub fn labels(&self) -> Vec<&str> {
        self.bars.iter().map(|b| b.label.as_str()).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.value).collect()
    }

    /// Upper bound of the value axis: 10% headroom, or 1.0 when nothing is
    /// above zero.
    pub fn value_axis_max(&self) -> f64 {
        let max = self.bars.iter().map(|b| b.value).fold(0.0_f64, f64::max);
        if max > 0.0 {
            max * 1.1
        } else {
            1.0
        }
    }
}
