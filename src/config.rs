//! Analysis configuration: input extracts and the results directory.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming an optional JSON config file.
pub const CONFIG_ENV: &str = "REGISTRY_CHARTS_CONFIG";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub patient_csv: PathBuf,
    pub tumour_csv: PathBuf,
    /// Must exist before a pipeline runs; charts are written here.
    pub results_dir: PathBuf,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            patient_csv: PathBuf::from("data/sim_av_patient.csv"),
            tumour_csv: PathBuf::from("data/sim_av_tumour.csv"),
            results_dir: PathBuf::from("results"),
        }
    }
}

impl AnalysisConfig {
    /// Load from a JSON file; absent fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Use the file named by [`CONFIG_ENV`] when set, defaults otherwise.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.results_dir.join(file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = AnalysisConfig::default();
        assert_eq!(config.patient_csv, PathBuf::from("data/sim_av_patient.csv"));
        assert_eq!(config.tumour_csv, PathBuf::from("data/sim_av_tumour.csv"));
        assert_eq!(
            config.output_path("stage_distribution.png"),
            PathBuf::from("results/stage_distribution.png")
        );
    }

    #[test]
    fn test_partial_override() {
        let mut tmp = NamedTempFile::new().unwrap();
        write!(tmp, r#"{{"results_dir": "out/charts"}}"#).unwrap();

        let config = AnalysisConfig::load(tmp.path()).unwrap();
        assert_eq!(config.results_dir, PathBuf::from("out/charts"));
        assert_eq!(config.patient_csv, AnalysisConfig::default().patient_csv);
    }

    #[test]
    fn test_invalid_and_missing_files() {
        let mut tmp = NamedTempFile::new().unwrap();
        write!(tmp, "not json").unwrap();
        assert!(matches!(
            AnalysisConfig::load(tmp.path()),
            Err(ConfigError::Parse { .. })
        ));
        assert!(matches!(
            AnalysisConfig::load(Path::new("no/such/config.json")),
            Err(ConfigError::Read { .. })
        ));
    }
}
