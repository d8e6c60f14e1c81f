// Output formatting utilities

use crate::models::{Dataset, PaletteSet};
use crate::query::{FieldRef, MetadataBlock, SummaryReport};
use std::io::IsTerminal;

// ANSI escape codes for terminal formatting
const ANSI_BOLD: &str = "\x1b[1m";
const ANSI_RESET: &str = "\x1b[0m";

/// Check if stdout is a terminal (TTY)
pub fn is_tty() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width dynamically
///
/// Uses the `terminal_size` crate for reliable detection, with fallback to
/// COLUMNS environment variable and a sensible default.
pub fn get_terminal_width() -> usize {
    if let Some((terminal_size::Width(w), _)) = terminal_size::terminal_size() {
        if w > 0 {
            return w as usize;
        }
    }

    // Fallback to COLUMNS environment variable (set by most shells)
    if let Ok(cols) = std::env::var("COLUMNS") {
        if let Ok(width) = cols.parse::<usize>() {
            if width > 0 && width < 10000 {
                return width;
            }
        }
    }

    120
}

/// Apply bold formatting if in TTY mode
fn bold_if_tty(text: &str, is_tty: bool) -> String {
    if is_tty {
        format!("{}{}{}", ANSI_BOLD, text, ANSI_RESET)
    } else {
        text.to_string()
    }
}

/// Render a completeness summary as the dashboard's summary card text.
pub fn format_summary(report: &SummaryReport) -> String {
    let tty = is_tty();
    let mut out = String::new();
    out.push_str(&bold_if_tty("Summary", tty));
    out.push('\n');
    out.push_str(&format!("Total number of datapoints: {}\n", report.total));
    out.push_str(&format!(
        "Total number of missing datapoints: {}\n",
        report.missing
    ));
    for entry in &report.per_pipeline {
        out.push_str(&format!("{}: {}\n", entry.pipeline, entry.missing));
    }
    out
}

/// Render a resolved click as the dashboard's metadata card text.
pub fn format_metadata_block(block: &MetadataBlock) -> String {
    let tty = is_tty();
    let mut out = String::new();
    out.push_str(&bold_if_tty("Metadata", tty));
    out.push('\n');
    for (i, section) in block.sections.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!("Subject: {}\n", section.subject));
        out.push_str(&format!("Dataset-Pipeline: {}\n", section.pipeline));
        out.push_str(&format!("Result: {}\n", section.result));
        out.push_str("Pipeline steps:\n");
        for panel in &section.steps {
            out.push('\n');
            out.push_str(&bold_if_tty(&panel.name, tty));
            out.push('\n');
            out.push_str(&format!("  Status: {}\n", panel.status));
            out.push_str(&format!("  Input ID: {}\n", format_field(&panel.input)));
            out.push_str(&format!("  Output ID: {}\n", format_field(&panel.output)));
            out.push_str(&format!("  Task ID: {}\n", format_field(&panel.task)));
            out.push_str(&format!(
                "  Tool Configuration ID: {}\n",
                panel.tool_config
            ));
        }
    }
    out
}

fn format_field(value: &FieldRef) -> String {
    match value {
        FieldRef::Absent => "N/A".to_string(),
        FieldRef::Linked { label, url } => format!("{} <{}>", label, url),
    }
}

/// Render dataset rows as an aligned table bounded by the terminal width.
pub fn format_dataset_table(dataset: &Dataset, limit: Option<usize>) -> String {
    let tty = is_tty();
    let term_width = get_terminal_width();
    let shown = limit.unwrap_or(dataset.len()).min(dataset.len());

    let headers = ["Subject", "Dataset-Pipeline", "Result", "Steps", "Color"];
    let mut rows: Vec<[String; 5]> = Vec::with_capacity(shown);
    for record in &dataset.records[..shown] {
        rows.push([
            record.subject.clone(),
            record.dataset_pipeline.clone(),
            if record.is_missing() {
                "N/A".to_string()
            } else {
                record.result.to_string()
            },
            record.metadata.len().saturating_sub(1).to_string(),
            record.color.clone(),
        ]);
    }

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    // Shrink the widest column until the table fits.
    let padding = 2 * (headers.len() - 1);
    while widths.iter().sum::<usize>() + padding > term_width {
        let widest = widths
            .iter()
            .enumerate()
            .max_by_key(|(_, w)| **w)
            .map(|(i, _)| i)
            .unwrap();
        if widths[widest] <= 8 {
            break;
        }
        widths[widest] -= 1;
    }

    let mut out = String::new();
    let header_line = headers
        .iter()
        .enumerate()
        .map(|(i, h)| format!("{:<width$}", truncate(h, widths[i]), width = widths[i]))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(&bold_if_tty(header_line.trim_end(), tty));
    out.push('\n');
    for row in &rows {
        let line = row
            .iter()
            .enumerate()
            .map(|(i, cell)| format!("{:<width$}", truncate(cell, widths[i]), width = widths[i]))
            .collect::<Vec<_>>()
            .join("  ");
        out.push_str(line.trim_end());
        out.push('\n');
    }
    if shown < dataset.len() {
        out.push_str(&format!("... {} more rows\n", dataset.len() - shown));
    }
    out
}

/// Render the configured palette table.
pub fn format_palettes(set: &PaletteSet) -> String {
    let tty = is_tty();
    let mut out = String::new();
    out.push_str(&bold_if_tty("Palettes", tty));
    out.push('\n');
    for palette in &set.palettes {
        out.push_str(&format!(
            "{} ({} colors): {}\n",
            palette.name,
            palette.colors.len(),
            palette.colors.join(" ")
        ));
    }
    out
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}
