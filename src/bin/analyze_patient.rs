//! Patient demographics charts: gender and vital status.

use anyhow::{Context, Result};
use registry_charts::{analysis::patient, logging, AnalysisConfig};
use tracing::info;

fn main() -> Result<()> {
    logging::init();
    let config = AnalysisConfig::from_env()?;

    let outcomes = patient::run(&config)
        .with_context(|| format!("patient analysis of {}", config.patient_csv.display()))?;
    for outcome in &outcomes {
        if let Some(path) = outcome.saved_path() {
            info!("{}: {}", outcome.analysis(), path.display());
        }
    }
    Ok(())
}
