//! CSV to frame conversion for the upload endpoints.
//!
//! Cells are converted to JSON values: integers and floats are parsed when
//! the whole cell parses cleanly, everything else stays a string. Empty
//! cells are rejected - the upstream service has no missing-value contract
//! through this wrapper.

use crate::{CoreError, ErrorLocation, InferenceFrame, Result as CoreErrorResult, TrainingFrame};

use std::panic::Location;

use serde_json::Value;

/// Parse an uploaded CSV into a training frame, splitting off the named
/// target column. The remaining columns become features, in header order.
#[track_caller]
pub fn parse_training_csv(data: &[u8], target_column: &str) -> CoreErrorResult<TrainingFrame> {
    let (headers, rows) = read_csv(data)?;

    let target_index = headers
        .iter()
        .position(|h| h == target_column)
        .ok_or_else(|| {
            CoreError::validation_field(
                format!(
                    "Target column '{}' not found in CSV (available: {})",
                    target_column,
                    headers.join(", ")
                ),
                "target_column",
            )
        })?;

    let feature_names: Vec<String> = headers
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != target_index)
        .map(|(_, h)| h.clone())
        .collect();

    if feature_names.is_empty() {
        return Err(CoreError::validation(
            "CSV must contain at least one feature column besides the target",
        ));
    }

    let mut features = Vec::with_capacity(rows.len());
    let mut target = Vec::with_capacity(rows.len());

    for row in rows {
        let mut feature_row = Vec::with_capacity(row.len() - 1);
        for (i, cell) in row.into_iter().enumerate() {
            if i == target_index {
                target.push(cell);
            } else {
                feature_row.push(cell);
            }
        }
        features.push(feature_row);
    }

    TrainingFrame::new(features, target, Some(feature_names))
}

/// Parse an uploaded CSV into an inference frame. All columns are features;
/// the header order defines the column order sent upstream.
#[track_caller]
pub fn parse_inference_csv(data: &[u8]) -> CoreErrorResult<(Vec<String>, InferenceFrame)> {
    let (headers, rows) = read_csv(data)?;
    let frame = InferenceFrame::new(rows)?;
    Ok((headers, frame))
}

fn read_csv(data: &[u8]) -> CoreErrorResult<(Vec<String>, Vec<Vec<Value>>)> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(data);

    let headers: Vec<String> = reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    if headers.is_empty() {
        return Err(CoreError::validation("CSV has no header row"));
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        let mut row = Vec::with_capacity(headers.len());
        for (i, cell) in record.iter().enumerate() {
            let cell = cell.trim();
            if cell.is_empty() {
                return Err(CoreError::validation(format!(
                    "CSV row {} has an empty cell in column '{}'",
                    rows.len() + 1,
                    headers.get(i).map(String::as_str).unwrap_or("?")
                )));
            }
            row.push(parse_cell(cell));
        }
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(CoreError::validation("CSV contains no data rows"));
    }

    Ok((headers, rows))
}

fn parse_cell(cell: &str) -> Value {
    if let Ok(int) = cell.parse::<i64>() {
        return Value::from(int);
    }
    if let Ok(float) = cell.parse::<f64>() {
        if float.is_finite() {
            return Value::from(float);
        }
    }
    Value::from(cell)
}

#[track_caller]
fn csv_error(e: csv::Error) -> CoreError {
    CoreError::Csv {
        message: e.to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}
