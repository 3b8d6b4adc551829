//! Analysis pipelines: load -> normalize -> count -> render.
//!
//! Each pipeline owns its table for the whole run. A missing input file stops
//! the pipeline before any chart is written; a missing column only skips the
//! analysis that needs it.

pub mod patient;
pub mod tumour;

use crate::charts::{BarChart, BarChartRenderer, RenderError};
use crate::config::AnalysisConfig;
use crate::data::{DataLoader, LoaderError};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error(transparent)]
    Load(#[from] LoaderError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

impl AnalysisError {
    pub fn is_missing_input(&self) -> bool {
        matches!(self, AnalysisError::Load(LoaderError::FileNotFound(_)))
    }
}

/// Result of one analysis within a pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisOutcome {
    Saved {
        analysis: &'static str,
        path: PathBuf,
    },
    /// The required column is not in the extract.
    Skipped {
        analysis: &'static str,
        column: String,
    },
}

impl AnalysisOutcome {
    pub fn analysis(&self) -> &'static str {
        match self {
            AnalysisOutcome::Saved { analysis, .. } | AnalysisOutcome::Skipped { analysis, .. } => {
                *analysis
            }
        }
    }

    pub fn saved_path(&self) -> Option<&Path> {
        match self {
            AnalysisOutcome::Saved { path, .. } => Some(path.as_path()),
            AnalysisOutcome::Skipped { .. } => None,
        }
    }
}

fn load_table(path: &Path) -> Result<DataLoader, AnalysisError> {
    info!("Loading data from {}", path.display());
    let mut loader = DataLoader::new();
    loader.load_csv(path)?;
    info!("Loaded {} records", loader.get_row_count());
    Ok(loader)
}

/// Render `chart` (or record the skip) for one analysis.
fn finish(
    analysis: &'static str,
    chart: Option<BarChart>,
    column: &str,
    file_name: &str,
    config: &AnalysisConfig,
) -> Result<AnalysisOutcome, AnalysisError> {
    let Some(chart) = chart else {
        info!("No {} column found. Skipping {} plot.", column, analysis);
        return Ok(AnalysisOutcome::Skipped {
            analysis,
            column: column.to_string(),
        });
    };

    let path = config.output_path(file_name);
    BarChartRenderer::save_png(&chart, &path)?;
    info!("{} plot saved to {}", analysis, path.display());
    Ok(AnalysisOutcome::Saved { analysis, path })
}
