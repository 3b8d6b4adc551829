//! Charts module - Chart description and rendering

mod plotter;
mod renderer;

pub use plotter::{
    Bar, BarChart, Orientation, COUNT_AXIS, GRAY, LIGHT_BLUE, LIGHT_GREEN, PINK, SALMON,
    SEA_GREEN, STEEL_BLUE,
};
pub use renderer::{BarChartRenderer, RenderError};
