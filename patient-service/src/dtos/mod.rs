pub mod patients;

pub use patients::PredictResponse;
