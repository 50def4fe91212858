pub mod patient;

pub use patient::{ClinicalFeatures, PatientRecord};
