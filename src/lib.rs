//! Registry Charts - cancer registry CSV analysis & static bar charts
//!
//! Two pipelines (patient demographics, tumour sites/stages) load a CSV extract,
//! collapse raw codes into canonical categories, count them and render PNG
//! bar charts into a results directory.

pub mod analysis;
pub mod charts;
pub mod config;
pub mod data;
pub mod logging;
pub mod stats;

pub use analysis::{AnalysisError, AnalysisOutcome};
pub use config::AnalysisConfig;
