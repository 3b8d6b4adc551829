//! Patient demographics: gender and vital status distributions.

use super::{finish, load_table, AnalysisError, AnalysisOutcome};
use crate::charts::{BarChart, COUNT_AXIS, GRAY, LIGHT_BLUE, LIGHT_GREEN, PINK, SALMON};
use crate::config::AnalysisConfig;
use crate::data::{DataLoader, LoaderError, Normalizer};
use crate::stats::CategoryCounter;
use plotters::style::RGBColor;
use tracing::info;

pub const GENDER_COLUMN: &str = "GENDER";
pub const VITAL_STATUS_COLUMN: &str = "VITALSTATUS";

pub const GENDER_CHART_FILE: &str = "gender_distribution.png";
pub const VITAL_STATUS_CHART_FILE: &str = "vital_status_distribution.png";

fn gender_color(label: &str) -> RGBColor {
    match label {
        "Male" => LIGHT_BLUE,
        "Female" => PINK,
        _ => GRAY,
    }
}

fn vital_status_color(label: &str) -> RGBColor {
    if label == "Alive" {
        LIGHT_GREEN
    } else {
        SALMON
    }
}

/// Gender counts; unmapped codes are left out. `None` without a gender column.
pub fn gender_chart(loader: &DataLoader) -> Result<Option<BarChart>, LoaderError> {
    let Some(codes) = loader.code_values(GENDER_COLUMN)? else {
        return Ok(None);
    };

    let labels = codes
        .into_iter()
        .filter_map(Normalizer::gender_label);
    let counts = CategoryCounter::frequency(labels);

    let chart = BarChart::new("Patient Gender Distribution", "Gender", COUNT_AXIS).with_counts(
        &counts,
        str::to_string,
        gender_color,
    );
    Ok(Some(chart))
}

/// Alive/Deceased counts; other statuses are discarded before counting.
pub fn vital_status_chart(loader: &DataLoader) -> Result<Option<BarChart>, LoaderError> {
    let Some(values) = loader.text_values(VITAL_STATUS_COLUMN)? else {
        return Ok(None);
    };

    let labels = values
        .iter()
        .filter_map(|v| Normalizer::vital_status(v.as_deref()).label());
    let counts = CategoryCounter::frequency(labels);

    let chart = BarChart::new("Patient Vital Status", "Status", COUNT_AXIS).with_counts(
        &counts,
        str::to_string,
        vital_status_color,
    );
    Ok(Some(chart))
}

/// Run both patient analyses against `config.patient_csv`.
pub fn run(config: &AnalysisConfig) -> Result<Vec<AnalysisOutcome>, AnalysisError> {
    let loader = load_table(&config.patient_csv)?;
    let mut outcomes = Vec::with_capacity(2);

    info!("Analyzing Gender...");
    let chart = gender_chart(&loader)?;
    outcomes.push(finish("Gender", chart, GENDER_COLUMN, GENDER_CHART_FILE, config)?);

    info!("Analyzing Vital Status...");
    let chart = vital_status_chart(&loader)?;
    outcomes.push(finish(
        "Vital status",
        chart,
        VITAL_STATUS_COLUMN,
        VITAL_STATUS_CHART_FILE,
        config,
    )?);

    Ok(outcomes)
}
