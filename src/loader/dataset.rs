// Dataset builder: directory scan + per-file load + concatenation

use crate::error::VizError;
use crate::loader::source::load_file;
use crate::models::{Dataset, PaletteSet};
use log::info;
use serde::Serialize;
use std::path::{Path, PathBuf};

const RESULT_FILE_EXT: &str = "json";

/// One subdirectory's dataset in grouped mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupedDataset {
    pub label: String,
    pub dataset: Dataset,
}

/// Lists result files directly under `dir` as `(path, file label)` pairs,
/// the label being the file stem.
///
/// Directory-listing order is filesystem-dependent, so entries are sorted
/// lexicographically by path to keep row order stable.
pub fn discover_files(dir: &Path) -> Result<Vec<(PathBuf, String)>, VizError> {
    let entries = std::fs::read_dir(dir).map_err(|e| VizError::io(dir, e))?;
    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| VizError::io(dir, e))?;
        let path = entry.path();
        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some(RESULT_FILE_EXT) {
            continue;
        }
        let label = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string();
        files.push((path, label));
    }
    files.sort();
    Ok(files)
}

/// Builds the unified dataset for one directory of result files.
///
/// Each file takes a palette by its enumeration position (cycling over
/// the table) and contributes a contiguous run of rows.
pub fn build_dataset(dir: &Path, palettes: &PaletteSet) -> Result<Dataset, VizError> {
    let files = discover_files(dir)?;
    if files.is_empty() {
        return Err(VizError::EmptyDataset {
            path: dir.to_path_buf(),
        });
    }
    let mut dataset = Dataset::new();
    for (index, (path, label)) in files.iter().enumerate() {
        let records = load_file(path, label, palettes.for_file(index))?;
        dataset.records.extend(records);
    }
    info!(
        "built dataset of {} records from {}",
        dataset.len(),
        dir.display()
    );
    Ok(dataset)
}

/// Builds one dataset per subdirectory of `root`, labeled by directory
/// name, subdirectories in lexicographic order.
pub fn build_grouped_datasets(
    root: &Path,
    palettes: &PaletteSet,
) -> Result<Vec<GroupedDataset>, VizError> {
    let entries = std::fs::read_dir(root).map_err(|e| VizError::io(root, e))?;
    let mut dirs = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| VizError::io(root, e))?;
        let path = entry.path();
        if path.is_dir() {
            dirs.push(path);
        }
    }
    dirs.sort();
    if dirs.is_empty() {
        return Err(VizError::EmptyDataset {
            path: root.to_path_buf(),
        });
    }
    let mut groups = Vec::with_capacity(dirs.len());
    for dir in dirs {
        let label = dir
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string();
        let dataset = build_dataset(&dir, palettes)?;
        groups.push(GroupedDataset { label, dataset });
    }
    Ok(groups)
}
