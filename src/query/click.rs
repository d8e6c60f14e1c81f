// Click-event resolution: chart coordinates -> metadata cards

use crate::models::{Dataset, IdValue, StepEntry, MISSING_RESULT};
use log::warn;
use serde::Serialize;

// CBRAIN portal cross-reference templates. Opaque string construction,
// never validated against the live portal.
const USERFILES_URL: &str = "https://portal.cbrain.mcgill.ca/userfiles/";
const TASKS_URL: &str = "https://portal.cbrain.mcgill.ca/tasks/";

/// A click on a histogram bar.
///
/// The chart layer attaches the record's subject, pipeline, result, and
/// step history to every plotted point, so resolution needs no dataset
/// lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramClick {
    pub subject: String,
    pub pipeline: String,
    pub result: f64,
    pub metadata: Vec<StepEntry>,
}

/// A click on a scatter point: bare coordinates, resolved against the
/// dataset row whose result matches each axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterClick {
    pub x: f64,
    pub y: f64,
}

/// Outcome of resolving a click.
///
/// `NoSelection` covers empty click events and stale coordinates; the
/// rendering layer matches on it instead of receiving a sentinel value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ClickResult {
    NoSelection,
    Selected(MetadataBlock),
}

/// Formatted metadata card displayed next to a chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetadataBlock {
    /// One section per resolved record: a single section for histogram
    /// clicks, the x then y sections for scatter clicks.
    pub sections: Vec<RecordSection>,
}

/// One record's portion of a metadata card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordSection {
    pub subject: String,
    pub pipeline: String,
    /// Display form of the result; the missing sentinel renders as "N/A".
    pub result: String,
    pub steps: Vec<StepPanel>,
}

/// One pipeline step's rendered fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepPanel {
    pub name: String,
    pub status: String,
    pub input: FieldRef,
    pub output: FieldRef,
    pub task: FieldRef,
    pub tool_config: String,
}

/// A step field that may cross-reference a portal page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum FieldRef {
    Absent,
    Linked { label: String, url: String },
}

/// Resolves a histogram click into a one-section card.
/// `None` (no point under the click) resolves to `NoSelection`.
pub fn resolve_histogram_click(click: Option<&HistogramClick>) -> ClickResult {
    let Some(click) = click else {
        return ClickResult::NoSelection;
    };
    ClickResult::Selected(MetadataBlock {
        sections: vec![RecordSection {
            subject: click.subject.clone(),
            pipeline: click.pipeline.clone(),
            result: format_result(click.result),
            steps: step_panels(&click.metadata),
        }],
    })
}

/// Resolves a scatter click into a two-section card, x side then y side.
///
/// Unset axis labels default to the first and last distinct pipelines in
/// first-seen order. A coordinate that no longer matches any row (a stale
/// click after the dataset was rebuilt) degrades to `NoSelection`.
pub fn resolve_scatter_click(
    click: Option<&ScatterClick>,
    x_axis: Option<&str>,
    y_axis: Option<&str>,
    dataset: &Dataset,
) -> ClickResult {
    let Some(click) = click else {
        return ClickResult::NoSelection;
    };
    let pipelines = dataset.pipelines();
    if pipelines.is_empty() {
        return ClickResult::NoSelection;
    }
    let x_label = x_axis.unwrap_or(pipelines[0]);
    let y_label = y_axis.unwrap_or(pipelines[pipelines.len() - 1]);

    let mut sections = Vec::with_capacity(2);
    for (label, coordinate) in [(x_label, click.x), (y_label, click.y)] {
        match dataset.find_match(label, coordinate) {
            Ok(record) => sections.push(RecordSection {
                subject: record.subject.clone(),
                pipeline: label.to_string(),
                result: format_result(coordinate),
                steps: step_panels(&record.metadata),
            }),
            Err(e) => {
                warn!("dropping click: {}", e);
                return ClickResult::NoSelection;
            }
        }
    }
    ClickResult::Selected(MetadataBlock { sections })
}

/// Renders every step except the trailing entry, which holds the
/// file-level outcome rather than a step.
fn step_panels(metadata: &[StepEntry]) -> Vec<StepPanel> {
    let shown = metadata.len().saturating_sub(1);
    metadata[..shown]
        .iter()
        .map(|entry| {
            let d = &entry.detail;
            StepPanel {
                name: entry.name.clone(),
                status: d
                    .status
                    .clone()
                    .unwrap_or_else(|| "Incomplete".to_string()),
                input: linked(d.input_id.as_ref(), USERFILES_URL),
                output: linked(d.output_id.as_ref(), USERFILES_URL),
                task: linked(d.task_id.as_ref(), TASKS_URL),
                tool_config: d
                    .tool_config_id
                    .as_ref()
                    .map(|id| id.to_string())
                    .unwrap_or_else(|| "N/A".to_string()),
            }
        })
        .collect()
}

fn linked(id: Option<&IdValue>, base: &str) -> FieldRef {
    match id {
        None => FieldRef::Absent,
        Some(id) => FieldRef::Linked {
            label: id.to_string(),
            url: format!("{}{}", base, id),
        },
    }
}

fn format_result(value: f64) -> String {
    if value == MISSING_RESULT {
        "N/A".to_string()
    } else {
        value.to_string()
    }
}
