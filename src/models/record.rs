use crate::error::VizError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel stored in place of a missing (null) result value.
///
/// Reserved: genuine results never take this value, so completeness
/// queries can compare against it directly. Loaded results are either
/// this sentinel or a finite number, never NaN.
pub const MISSING_RESULT: f64 = -1.0;

/// An identifier appearing in step metadata.
///
/// CBRAIN serves ids as JSON numbers, but older exports carry them as
/// strings; both deserialize to the same display form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IdValue {
    Num(i64),
    Text(String),
}

impl fmt::Display for IdValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdValue::Num(n) => write!(f, "{}", n),
            IdValue::Text(s) => f.write_str(s),
        }
    }
}

/// Per-step processing details attached to a record.
///
/// Every field is optional; absent fields render as "N/A" ("Incomplete"
/// for status). Unknown fields in the source are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StepDetail {
    pub status: Option<String>,
    #[serde(rename = "inputID")]
    pub input_id: Option<IdValue>,
    #[serde(rename = "outputID")]
    pub output_id: Option<IdValue>,
    #[serde(rename = "taskID")]
    pub task_id: Option<IdValue>,
    #[serde(rename = "toolConfigID")]
    pub tool_config_id: Option<IdValue>,
}

/// One named entry of a record's ordered step history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepEntry {
    pub name: String,
    #[serde(flatten)]
    pub detail: StepDetail,
}

/// One row of the tabular dataset: a single subject's outcome for one
/// dataset-pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub subject: String,
    /// `"<fileLabel>-<stepKey>"`; not unique per subject.
    pub dataset_pipeline: String,
    /// The computed value, or [`MISSING_RESULT`] when the source was null.
    pub result: f64,
    /// Step entries in document order, including the trailing
    /// file-level outcome entry.
    pub metadata: Vec<StepEntry>,
    /// Opaque color token from the originating file's palette.
    pub color: String,
}

impl ResultRecord {
    pub fn is_missing(&self) -> bool {
        self.result == MISSING_RESULT
    }
}

/// The unified tabular dataset handed to the chart layer.
///
/// Built once per session and read-only afterwards; rows keep the order
/// they were produced in (files sorted by path, document order within a
/// file).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub records: Vec<ResultRecord>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Appends all rows of `other`, preserving both row orders.
    pub fn extend(&mut self, other: Dataset) {
        self.records.extend(other.records);
    }

    /// Distinct dataset-pipeline labels in first-seen order.
    pub fn pipelines(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for record in &self.records {
            if !seen.contains(&record.dataset_pipeline.as_str()) {
                seen.push(&record.dataset_pipeline);
            }
        }
        seen
    }

    /// First row in dataset order matching both pipeline and result.
    ///
    /// Duplicate `(pipeline, result)` pairs resolve to the earliest row;
    /// no match is a [`VizError::LookupMismatch`].
    pub fn find_match(&self, pipeline: &str, result: f64) -> Result<&ResultRecord, VizError> {
        self.records
            .iter()
            .find(|r| r.dataset_pipeline == pipeline && r.result == result)
            .ok_or_else(|| VizError::LookupMismatch {
                pipeline: pipeline.to_string(),
                result,
            })
    }
}
