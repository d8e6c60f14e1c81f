use crate::models::Dataset;
use serde::Serialize;

/// Aggregate completeness statistics over one dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryReport {
    pub total: usize,
    pub missing: usize,
    /// Per-pipeline missing counts, pipelines in first-seen order.
    pub per_pipeline: Vec<PipelineSummary>,
}

/// Missing-datapoint count for a single dataset-pipeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineSummary {
    pub pipeline: String,
    pub missing: usize,
}

/// Counts datapoints and missing datapoints, overall and per pipeline.
/// Pure function of the dataset.
pub fn summarize(dataset: &Dataset) -> SummaryReport {
    let missing = dataset.records.iter().filter(|r| r.is_missing()).count();
    let per_pipeline = dataset
        .pipelines()
        .into_iter()
        .map(|pipeline| PipelineSummary {
            missing: dataset
                .records
                .iter()
                .filter(|r| r.dataset_pipeline == pipeline && r.is_missing())
                .count(),
            pipeline: pipeline.to_string(),
        })
        .collect();
    SummaryReport {
        total: dataset.len(),
        missing,
        per_pipeline,
    }
}
