//! Data Normalizer Module
//! Maps raw registry codes to canonical category labels.

/// Gender code lookup. Codes outside this table have no label.
pub const GENDER_LABELS: [(i64, &str); 4] = [
    (0, "Not known"),
    (1, "Male"),
    (2, "Female"),
    (9, "Not specified"),
];

/// Human-readable names for common invasive ICD-10 sites.
pub const ICD10_SITE_NAMES: [(&str, &str); 13] = [
    ("C50", "Breast"),
    ("C61", "Prostate"),
    ("C34", "Lung"),
    ("C18", "Colon"),
    ("C19", "Rectosigmoid"),
    ("C20", "Rectum"),
    ("C43", "Melanoma"),
    ("C67", "Bladder"),
    ("C25", "Pancreas"),
    ("C64", "Kidney"),
    ("C90", "Mult. Myeloma"),
    ("C92", "Myeloid Leukemia"),
    ("C54", "Uterus"),
];

/// Non-melanoma skin cancer, excluded from the site ranking.
pub const NMSC_SITE: &str = "C44";

/// Display order of the stage distribution.
pub const STAGE_ORDER: [&str; 5] = ["1", "2", "3", "4", "Unknown"];

pub const STAGE_UNKNOWN: &str = "Unknown";

const STAGE_UNKNOWN_MARKERS: [&str; 3] = ["?", "U", "NAN"];

/// Collapsed vital status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VitalStatus {
    Alive,
    Deceased,
    /// Anything unrecognised; never counted.
    Other,
}

impl VitalStatus {
    /// Chart label, `None` for [`VitalStatus::Other`].
    pub fn label(self) -> Option<&'static str> {
        match self {
            VitalStatus::Alive => Some("Alive"),
            VitalStatus::Deceased => Some("Deceased"),
            VitalStatus::Other => None,
        }
    }
}

/// Stateless normalization policies, one per analysis.
pub struct Normalizer;

impl Normalizer {
    pub fn gender_label(code: Option<i64>) -> Option<&'static str> {
        let code = code?;
        GENDER_LABELS
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, label)| *label)
    }

    /// `D*` collapses to deceased, exactly `A` is alive, everything else
    /// (including a missing value) is [`VitalStatus::Other`].
    pub fn vital_status(raw: Option<&str>) -> VitalStatus {
        match raw {
            Some(v) if v.starts_with('D') => VitalStatus::Deceased,
            Some("A") => VitalStatus::Alive,
            _ => VitalStatus::Other,
        }
    }

    /// Three-character site prefix for invasive, non-NMSC codes.
    pub fn site_code(raw: Option<&str>) -> Option<String> {
        let prefix: String = raw?.chars().take(3).collect();
        if prefix.starts_with('C') && prefix != NMSC_SITE {
            Some(prefix)
        } else {
            None
        }
    }

    pub fn site_name(code: &str) -> &str {
        ICD10_SITE_NAMES
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, name)| *name)
            .unwrap_or(code)
    }

    /// Axis label such as `C50 (Breast)`.
    pub fn site_label(code: &str) -> String {
        format!("{} ({})", code, Self::site_name(code))
    }

    /// Reduce a raw stage to one of [`STAGE_ORDER`].
    ///
    /// Sub-stages collapse to their leading digit (`2C` -> `2`); a missing
    /// value counts as unknown.
    pub fn stage(raw: Option<&str>) -> &'static str {
        let Some(raw) = raw else {
            return STAGE_UNKNOWN;
        };
        let stage = raw.trim().to_uppercase();
        if STAGE_UNKNOWN_MARKERS.contains(&stage.as_str()) {
            return STAGE_UNKNOWN;
        }

        match stage.chars().next() {
            Some('1') => STAGE_ORDER[0],
            Some('2') => STAGE_ORDER[1],
            Some('3') => STAGE_ORDER[2],
            Some('4') => STAGE_ORDER[3],
            _ => STAGE_UNKNOWN,
        }
    }
}
