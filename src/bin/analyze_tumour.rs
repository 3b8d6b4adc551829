//! Tumour charts: top 10 invasive sites and stage distribution.

use anyhow::{Context, Result};
use registry_charts::{analysis::tumour, logging, AnalysisConfig};
use tracing::info;

fn main() -> Result<()> {
    logging::init();
    let config = AnalysisConfig::from_env()?;

    let outcomes = tumour::run(&config)
        .with_context(|| format!("tumour analysis of {}", config.tumour_csv.display()))?;
    for outcome in &outcomes {
        if let Some(path) = outcome.saved_path() {
            info!("{}: {}", outcome.analysis(), path.display());
        }
    }
    Ok(())
}
