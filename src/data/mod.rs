//! Data module - CSV loading and category normalization

mod loader;
mod normalizer;

pub use loader::{DataLoader, LoaderError};
pub use normalizer::{
    Normalizer, VitalStatus, GENDER_LABELS, ICD10_SITE_NAMES, NMSC_SITE, STAGE_ORDER,
    STAGE_UNKNOWN,
};
