//! Metrics collection for patient-service.
//!
//! Provides gateway outcome counters and standard Prometheus metrics.

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use prometheus::{IntCounterVec, Opts, Registry};
use std::sync::OnceLock;

pub static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();
pub static PROMETHEUS_REGISTRY: OnceLock<Registry> = OnceLock::new();
pub static PATIENT_PREDICTIONS_TOTAL: OnceLock<IntCounterVec> = OnceLock::new();
pub static PREDICTOR_CALLS_TOTAL: OnceLock<IntCounterVec> = OnceLock::new();

/// Initialize metrics collection.
pub fn init_metrics() {
    let builder = PrometheusBuilder::new();
    let handle = builder
        .install_recorder()
        .expect("failed to install Prometheus recorder");

    if METRICS_HANDLE.set(handle).is_err() {
        panic!("failed to set metrics handle: already initialized");
    }

    // Initialize Prometheus registry for custom metrics
    let registry = Registry::new();

    // Gateway outcomes: stored, upstream_error, write_error
    let predictions_counter = IntCounterVec::new(
        Opts::new(
            "patient_predictions_total",
            "Total prediction requests by outcome",
        ),
        &["status"],
    )
    .expect("Failed to create patient_predictions_total metric");

    // Upstream call counter for monitoring the prediction service
    let predictor_calls_counter = IntCounterVec::new(
        Opts::new(
            "predictor_calls_total",
            "Total prediction service calls by status",
        ),
        &["status"],
    )
    .expect("Failed to create predictor_calls_total metric");

    registry
        .register(Box::new(predictions_counter.clone()))
        .expect("Failed to register patient_predictions_total");
    registry
        .register(Box::new(predictor_calls_counter.clone()))
        .expect("Failed to register predictor_calls_total");

    PROMETHEUS_REGISTRY
        .set(registry)
        .expect("Failed to set prometheus registry");
    PATIENT_PREDICTIONS_TOTAL
        .set(predictions_counter)
        .expect("Failed to set patient_predictions_total");
    PREDICTOR_CALLS_TOTAL
        .set(predictor_calls_counter)
        .expect("Failed to set predictor_calls_total");
}

/// Get metrics output in Prometheus text format.
pub fn get_metrics() -> String {
    let mut output = METRICS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized\n".to_string());

    // Append custom prometheus metrics
    if let Some(registry) = PROMETHEUS_REGISTRY.get() {
        use prometheus::Encoder;
        let encoder = prometheus::TextEncoder::new();
        let metric_families = registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer).ok();
        if let Ok(custom_metrics) = String::from_utf8(buffer) {
            output.push_str(&custom_metrics);
        }
    }

    output
}

/// Record the outcome of a prediction request.
pub fn record_prediction(status: &str) {
    if let Some(counter) = PATIENT_PREDICTIONS_TOTAL.get() {
        counter.with_label_values(&[status]).inc();
    }
}

/// Record a call to the prediction service.
pub fn record_predictor_call(status: &str) {
    if let Some(counter) = PREDICTOR_CALLS_TOTAL.get() {
        counter.with_label_values(&[status]).inc();
    }
}
