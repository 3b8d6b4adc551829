//! Tumour analyses: top invasive cancer sites and stage distribution.

use super::{finish, load_table, AnalysisError, AnalysisOutcome};
use crate::charts::{BarChart, COUNT_AXIS, SEA_GREEN, STEEL_BLUE};
use crate::config::AnalysisConfig;
use crate::data::{DataLoader, LoaderError, Normalizer, STAGE_ORDER};
use crate::stats::CategoryCounter;
use tracing::info;

pub const SITE_COLUMN: &str = "SITE_ICD10_O2";
/// Any column whose name contains this marker holds the stage.
pub const STAGE_COLUMN_MARKER: &str = "STAGE";

pub const TOP_SITES: usize = 10;

pub const SITES_CHART_FILE: &str = "top_10_cancer_sites.png";
pub const STAGE_CHART_FILE: &str = "stage_distribution.png";

/// Ten most frequent invasive sites, excluding non-melanoma skin cancer.
pub fn top_sites_chart(loader: &DataLoader) -> Result<Option<BarChart>, LoaderError> {
    let Some(values) = loader.text_values(SITE_COLUMN)? else {
        return Ok(None);
    };

    let codes = values
        .iter()
        .filter_map(|v| Normalizer::site_code(v.as_deref()));
    let counts = CategoryCounter::top_n(codes, TOP_SITES);

    let chart = BarChart::new(
        "Top 10 Invasive Cancer Sites (Excl. NMSC)",
        COUNT_AXIS,
        "ICD-10 Site",
    )
    .horizontal()
    .with_size(1000, 600)
    .with_counts(&counts, Normalizer::site_label, |_| STEEL_BLUE);
    Ok(Some(chart))
}

/// Stage counts in the fixed order 1, 2, 3, 4, Unknown, zero-filled.
///
/// The first column containing `STAGE` is used when several match.
pub fn stage_chart(loader: &DataLoader) -> Result<Option<BarChart>, LoaderError> {
    let Some(column) = loader.find_column_containing(STAGE_COLUMN_MARKER) else {
        return Ok(None);
    };
    info!("Using column '{}' for staging.", column);

    let Some(values) = loader.text_values(&column)? else {
        return Ok(None);
    };

    let stages = values.iter().map(|v| Normalizer::stage(v.as_deref()));
    let counts = CategoryCounter::fixed_order(stages, &STAGE_ORDER);

    let chart = BarChart::new("Distribution of Cancer Stages", "Stage", COUNT_AXIS).with_counts(
        &counts,
        str::to_string,
        |_| SEA_GREEN,
    );
    Ok(Some(chart))
}

/// Run both tumour analyses against `config.tumour_csv`.
pub fn run(config: &AnalysisConfig) -> Result<Vec<AnalysisOutcome>, AnalysisError> {
    let loader = load_table(&config.tumour_csv)?;
    let mut outcomes = Vec::with_capacity(2);

    info!("Analyzing Cancer Sites...");
    let chart = top_sites_chart(&loader)?;
    outcomes.push(finish("Top 10 sites", chart, SITE_COLUMN, SITES_CHART_FILE, config)?);

    info!("Analyzing Stages...");
    let chart = stage_chart(&loader)?;
    outcomes.push(finish(
        "Stage",
        chart,
        STAGE_COLUMN_MARKER,
        STAGE_CHART_FILE,
        config,
    )?);

    Ok(outcomes)
}
