use mongodb::bson::Bson;
use patient_service::models::{ClinicalFeatures, PatientRecord};
use serde_json::json;

#[test]
fn features_serialize_with_model_wire_names() {
    let features: ClinicalFeatures = serde_json::from_value(json!({
        "age": 34,
        "heartRate": 88,
        "respRate": 20,
        "cd4rslt": 180,
        "cultureResult": 1,
        "afbMicroscopy": 2,
        "tbHistory": 1,
        "weightLoss": 1,
        "hivStatus": 1,
        "hivCd4Low": 1
    }))
    .expect("Failed to deserialize features");

    assert_eq!(features.heart_rate, Some(88.0));
    assert_eq!(features.hiv_cd4_low, Some(1.0));

    let value = serde_json::to_value(&features).unwrap();
    let obj = value.as_object().unwrap();
    for key in [
        "age",
        "heartRate",
        "respRate",
        "cd4rslt",
        "cultureResult",
        "afbMicroscopy",
        "tbHistory",
        "weightLoss",
        "hivStatus",
        "hivCd4Low",
    ] {
        assert!(obj.contains_key(key), "missing key {}", key);
    }
}

#[test]
fn absent_features_are_omitted_from_the_wire() {
    let features = ClinicalFeatures::default();
    let value = serde_json::to_value(&features).unwrap();
    assert_eq!(value, json!({}));
}

#[test]
fn record_carries_verdict_and_timestamp_together() {
    let first = PatientRecord::new(ClinicalFeatures::default(), 1, "Resistant".to_string());
    let second = PatientRecord::new(ClinicalFeatures::default(), 0, "Sensitive".to_string());

    assert!(!first.id.is_empty());
    assert_ne!(first.id, second.id);
    assert_eq!(first.prediction, 1);
    assert_eq!(first.result, "Resistant");
    // Wall-clock stamping keeps timestamps non-decreasing with creation order
    assert!(first.created_at <= second.created_at);
}

#[test]
fn record_document_flattens_features_beside_the_verdict() {
    let features: ClinicalFeatures =
        serde_json::from_value(json!({ "age": 34, "heartRate": 88 })).unwrap();
    let record = PatientRecord::new(features, 1, "MDR-TB".to_string());

    let doc = mongodb::bson::to_document(&record).expect("Failed to encode record");

    assert_eq!(doc.get_str("_id").unwrap(), record.id);
    assert_eq!(doc.get_f64("age").unwrap(), 34.0);
    assert_eq!(doc.get_f64("heartRate").unwrap(), 88.0);
    assert_eq!(doc.get_i32("prediction").unwrap(), 1);
    assert_eq!(doc.get_str("result").unwrap(), "MDR-TB");
    assert!(matches!(doc.get("createdAt"), Some(Bson::DateTime(_))));
    assert!(!doc.contains_key("cultureResult"));
}
