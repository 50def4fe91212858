pub mod health;
pub mod patients;

pub use health::{health_check, metrics_endpoint, readiness_check, root};
pub use patients::create_patient;
