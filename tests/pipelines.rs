use registry_charts::analysis::{patient, tumour};
use registry_charts::{AnalysisConfig, AnalysisError, AnalysisOutcome};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn config_in(dir: &Path) -> AnalysisConfig {
    let results_dir = dir.join("results");
    fs::create_dir_all(&results_dir).unwrap();
    AnalysisConfig {
        patient_csv: dir.join("sim_av_patient.csv"),
        tumour_csv: dir.join("sim_av_tumour.csv"),
        results_dir,
    }
}

fn result_files(config: &AnalysisConfig) -> usize {
    fs::read_dir(&config.results_dir).unwrap().count()
}

#[test]
fn missing_patient_file_stops_before_any_output() {
    let dir = tempdir().unwrap();
    let config = config_in(dir.path());

    let err = patient::run(&config).unwrap_err();
    assert!(err.is_missing_input());
    assert_eq!(result_files(&config), 0);
}

#[test]
fn missing_tumour_file_stops_before_any_output() {
    let dir = tempdir().unwrap();
    let config = config_in(dir.path());

    let err = tumour::run(&config).unwrap_err();
    assert!(err.is_missing_input());
    assert!(err.to_string().contains("sim_av_tumour.csv"));
    assert_eq!(result_files(&config), 0);
}

#[test]
fn patient_analyses_skip_missing_columns() {
    let dir = tempdir().unwrap();
    let config = config_in(dir.path());
    fs::write(&config.patient_csv, "PATIENTID,ETHNICITY\n1,A\n2,B\n").unwrap();

    let outcomes = patient::run(&config).unwrap();
    assert_eq!(
        outcomes,
        vec![
            AnalysisOutcome::Skipped {
                analysis: "Gender",
                column: "GENDER".to_string(),
            },
            AnalysisOutcome::Skipped {
                analysis: "Vital status",
                column: "VITALSTATUS".to_string(),
            },
        ]
    );
    assert_eq!(result_files(&config), 0);
}

#[test]
fn tumour_analyses_skip_missing_columns() {
    let dir = tempdir().unwrap();
    let config = config_in(dir.path());
    fs::write(&config.tumour_csv, "TUMOURID,GRADE\n1,G1\n").unwrap();

    let outcomes = tumour::run(&config).unwrap();
    assert_eq!(outcomes.len(), 2);
    assert!(outcomes.iter().all(|o| o.saved_path().is_none()));
    assert_eq!(outcomes[0].analysis(), "Top 10 sites");
    assert_eq!(outcomes[1].analysis(), "Stage");
    assert_eq!(result_files(&config), 0);
}

#[test]
fn unwritable_results_dir_is_fatal() {
    let dir = tempdir().unwrap();
    let mut config = config_in(dir.path());
    config.results_dir = dir.path().join("missing");
    fs::write(&config.patient_csv, "PATIENTID,GENDER\n1,1\n2,2\n").unwrap();

    let err = patient::run(&config).unwrap_err();
    assert!(matches!(err, AnalysisError::Render(_)));
    assert!(!config.results_dir.exists());
}

fn saved_files(outcomes: &[AnalysisOutcome]) -> Vec<PathBuf> {
    outcomes
        .iter()
        .map(|o| o.saved_path().expect("chart saved").to_path_buf())
        .collect()
}

#[test]
fn patient_pipeline_writes_both_charts() {
    let dir = tempdir().unwrap();
    let config = config_in(dir.path());
    fs::write(
        &config.patient_csv,
        "PATIENTID,GENDER,VITALSTATUS\n1,1,A\n2,2,D3\n3,2,D\n4,9,X\n",
    )
    .unwrap();

    let outcomes = patient::run(&config).unwrap();
    let files = saved_files(&outcomes);
    assert_eq!(
        files,
        vec![
            config.results_dir.join("gender_distribution.png"),
            config.results_dir.join("vital_status_distribution.png"),
        ]
    );
    assert_eq!(outcomes[0].analysis(), "Gender");
    for file in &files {
        let png = image::open(file).unwrap();
        assert_eq!((png.width(), png.height()), (800, 600));
    }
    assert_eq!(result_files(&config), 2);
}

#[test]
fn tumour_pipeline_writes_both_charts() {
    let dir = tempdir().unwrap();
    let config = config_in(dir.path());
    fs::write(
        &config.tumour_csv,
        "TUMOURID,SITE_ICD10_O2,STAGE_BEST\n1,C500,2C\n2,C441,?\n3,C619,1A\n",
    )
    .unwrap();

    let outcomes = tumour::run(&config).unwrap();
    let files = saved_files(&outcomes);
    assert_eq!(
        files,
        vec![
            config.results_dir.join("top_10_cancer_sites.png"),
            config.results_dir.join("stage_distribution.png"),
        ]
    );

    let sites = image::open(&files[0]).unwrap();
    assert_eq!((sites.width(), sites.height()), (1000, 600));
    let stages = image::open(&files[1]).unwrap();
    assert_eq!((stages.width(), stages.height()), (800, 600));
    assert_eq!(result_files(&config), 2);
}
