use crate::{parse_inference_csv, parse_training_csv};

use serde_json::json;

const TRAIN_CSV: &[u8] = b"feature1,feature2,label\n1.0,0.1,0\n2.0,0.2,1\n3.0,0.3,0\n";
const PREDICT_CSV: &[u8] = b"feature1,feature2\n1.5,0.15\n2.5,0.25\n";

#[test]
fn test_parse_training_csv_splits_target() {
    let frame = parse_training_csv(TRAIN_CSV, "label").unwrap();

    assert_eq!(frame.feature_count(), 2);
    assert_eq!(frame.sample_count(), 3);
    assert_eq!(
        frame.feature_names,
        Some(vec!["feature1".to_string(), "feature2".to_string()])
    );
    assert_eq!(frame.target, vec![json!(0), json!(1), json!(0)]);
    assert_eq!(frame.features[0], vec![json!(1.0), json!(0.1)]);
}

#[test]
fn test_parse_training_csv_target_column_missing() {
    let err = parse_training_csv(TRAIN_CSV, "nonexistent_column").unwrap_err();
    let message = err.to_string();
    assert!(message.to_lowercase().contains("target column"));
    assert!(message.contains("nonexistent_column"));
}

#[test]
fn test_parse_training_csv_only_target_column() {
    let err = parse_training_csv(b"label\n0\n1\n", "label").unwrap_err();
    assert!(err.to_string().contains("at least one feature column"));
}

#[test]
fn test_parse_training_csv_empty_cells() {
    let malformed = b"feature1,feature2,label\n1.0,0.1,\n2.0,,0\n";
    let err = parse_training_csv(malformed, "label").unwrap_err();
    assert!(err.to_string().contains("empty cell"));
}

#[test]
fn test_parse_training_csv_no_data_rows() {
    let err = parse_training_csv(b"feature1,label\n", "label").unwrap_err();
    assert!(err.to_string().contains("no data rows"));
}

#[test]
fn test_parse_inference_csv() {
    let (headers, frame) = parse_inference_csv(PREDICT_CSV).unwrap();

    assert_eq!(headers, vec!["feature1".to_string(), "feature2".to_string()]);
    assert_eq!(frame.feature_count(), 2);
    assert_eq!(frame.features.len(), 2);
}

#[test]
fn test_parse_cell_types() {
    let csv = b"a,b,c\n42,2.5,hello\n";
    let (_, frame) = parse_inference_csv(csv).unwrap();
    assert_eq!(frame.features[0], vec![json!(42), json!(2.5), json!("hello")]);
}
