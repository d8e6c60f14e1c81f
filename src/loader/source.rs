// Record loader: one result file -> flat record list

use crate::error::VizError;
use crate::models::{Palette, ResultRecord, StepDetail, StepEntry, MISSING_RESULT};
use log::debug;
use serde_json::{Map, Value};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Loads one result file into a flat list of records.
///
/// Every subject/pipeline-key pair in the document becomes one record
/// labeled `<file_label>-<pipeline_key>`. Colors are consumed per subject
/// from the palette's last entry backward. The file is never mutated.
pub fn load_file(
    path: &Path,
    file_label: &str,
    palette: &Palette,
) -> Result<Vec<ResultRecord>, VizError> {
    let file = File::open(path).map_err(|e| VizError::io(path, e))?;
    let doc: Value = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| VizError::malformed(path, e.to_string()))?;
    let subjects = doc
        .as_object()
        .ok_or_else(|| VizError::malformed(path, "top level is not an object"))?;

    let mut records = Vec::new();
    for (subject, steps) in subjects {
        let steps = steps.as_object().ok_or_else(|| {
            VizError::malformed(path, format!("subject '{}' is not an object", subject))
        })?;
        for (step_index, (step_key, raw)) in steps.iter().enumerate() {
            let fields = raw.as_object().ok_or_else(|| {
                VizError::malformed(
                    path,
                    format!("record '{}/{}' is not an object", subject, step_key),
                )
            })?;
            records.push(ResultRecord {
                subject: subject.clone(),
                dataset_pipeline: format!("{}-{}", file_label, step_key),
                result: extract_result(path, subject, step_key, fields)?,
                metadata: parse_metadata(path, subject, step_key, fields)?,
                color: palette.color_for(step_index).to_string(),
            });
        }
    }
    debug!("loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Pulls `Result.result` out of a pipeline record, coercing null to the
/// missing sentinel.
fn extract_result(
    path: &Path,
    subject: &str,
    step_key: &str,
    fields: &Map<String, Value>,
) -> Result<f64, VizError> {
    let outcome = fields.get("Result").ok_or_else(|| {
        VizError::malformed(path, format!("record '{}/{}' has no Result entry", subject, step_key))
    })?;
    let outcome = outcome.as_object().ok_or_else(|| {
        VizError::malformed(
            path,
            format!("Result entry of '{}/{}' is not an object", subject, step_key),
        )
    })?;
    let raw = outcome.get("result").ok_or_else(|| {
        VizError::malformed(
            path,
            format!("Result entry of '{}/{}' has no result field", subject, step_key),
        )
    })?;
    match raw {
        Value::Null => Ok(MISSING_RESULT),
        Value::Number(n) => n.as_f64().ok_or_else(|| VizError::ResultFormat {
            subject: subject.to_string(),
            step: step_key.to_string(),
            value: n.to_string(),
        }),
        other => Err(VizError::ResultFormat {
            subject: subject.to_string(),
            step: step_key.to_string(),
            value: other.to_string(),
        }),
    }
}

/// Reads the full pipeline record as ordered step entries, the trailing
/// file-level outcome entry included. Each entry must match the
/// step-detail schema (unknown fields are ignored, so the outcome entry
/// parses to an empty detail).
fn parse_metadata(
    path: &Path,
    subject: &str,
    step_key: &str,
    fields: &Map<String, Value>,
) -> Result<Vec<StepEntry>, VizError> {
    let mut entries = Vec::with_capacity(fields.len());
    for (name, value) in fields {
        let detail: StepDetail = serde_json::from_value(value.clone()).map_err(|e| {
            VizError::malformed(
                path,
                format!("step '{}' of record '{}/{}': {}", name, subject, step_key, e),
            )
        })?;
        entries.push(StepEntry {
            name: name.clone(),
            detail,
        });
    }
    Ok(entries)
}
