use crate::cli::output::{
    format_dataset_table, format_metadata_block, format_palettes, format_summary,
};
use crate::config::PaletteConfig;
use crate::loader::{build_dataset, build_grouped_datasets};
use crate::models::PaletteSet;
use crate::query::{resolve_scatter_click, summarize, ClickResult, ScatterClick, SummaryReport};
use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "resviz")]
#[command(about = "Loads pipeline result files and inspects the datasets behind dashboard charts")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Palette definition file (JSON); defaults to the built-in table
    #[arg(long, global = true, value_name = "FILE")]
    pub palettes: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print completeness statistics for a directory of result files
    Summary {
        /// Directory containing .json result files
        path: PathBuf,
        /// Treat PATH as a root of per-group subdirectories
        #[arg(long)]
        grouped: bool,
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
    /// List the rows of the dataset built from a directory
    List {
        /// Directory containing .json result files
        path: PathBuf,
        /// Treat PATH as a root of per-group subdirectories
        #[arg(long)]
        grouped: bool,
        /// Output the full records in JSON format
        #[arg(long)]
        json: bool,
        /// Show at most N rows per dataset
        #[arg(long, value_name = "N")]
        limit: Option<usize>,
    },
    /// Show the metadata card for one scatter-style datapoint
    Inspect {
        /// Directory containing .json result files
        path: PathBuf,
        /// Result value on the x axis
        #[arg(long, value_name = "VALUE", allow_negative_numbers = true)]
        x_result: f64,
        /// Result value on the y axis
        #[arg(long, value_name = "VALUE", allow_negative_numbers = true)]
        y_result: f64,
        /// Dataset-pipeline of the x axis (default: first pipeline)
        #[arg(short = 'x', long, value_name = "PIPELINE")]
        x_pipeline: Option<String>,
        /// Dataset-pipeline of the y axis (default: last pipeline)
        #[arg(short = 'y', long, value_name = "PIPELINE")]
        y_pipeline: Option<String>,
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
    /// List the configured color palettes
    Palettes {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
}

pub fn run() -> Result<()> {
    // Restores escape-sequence handling on older Windows consoles;
    // a no-op elsewhere.
    let _ = enable_ansi_support::enable_ansi_support();
    env_logger::init();

    let cli = Cli::parse();
    let palettes = PaletteConfig::resolve(cli.palettes.as_deref())?;

    match cli.command {
        Commands::Summary {
            path,
            grouped,
            json,
        } => handle_summary(&path, grouped, json, &palettes),
        Commands::List {
            path,
            grouped,
            json,
            limit,
        } => handle_list(&path, grouped, json, limit, &palettes),
        Commands::Inspect {
            path,
            x_result,
            y_result,
            x_pipeline,
            y_pipeline,
            json,
        } => handle_inspect(
            &path,
            ScatterClick {
                x: x_result,
                y: y_result,
            },
            x_pipeline.as_deref(),
            y_pipeline.as_deref(),
            json,
            &palettes,
        ),
        Commands::Palettes { json } => handle_palettes(json, &palettes),
    }
}

#[derive(Serialize)]
struct GroupSummary<'a> {
    label: &'a str,
    #[serde(flatten)]
    report: SummaryReport,
}

fn handle_summary(path: &Path, grouped: bool, json: bool, palettes: &PaletteSet) -> Result<()> {
    if grouped {
        let groups = build_grouped_datasets(path, palettes)?;
        if json {
            let reports: Vec<GroupSummary> = groups
                .iter()
                .map(|g| GroupSummary {
                    label: &g.label,
                    report: summarize(&g.dataset),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&reports)?);
        } else {
            for (i, group) in groups.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                println!("[{}]", group.label);
                print!("{}", format_summary(&summarize(&group.dataset)));
            }
        }
    } else {
        let dataset = build_dataset(path, palettes)?;
        let report = summarize(&dataset);
        if json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            print!("{}", format_summary(&report));
        }
    }
    Ok(())
}

fn handle_list(
    path: &Path,
    grouped: bool,
    json: bool,
    limit: Option<usize>,
    palettes: &PaletteSet,
) -> Result<()> {
    if grouped {
        let groups = build_grouped_datasets(path, palettes)?;
        if json {
            println!("{}", serde_json::to_string_pretty(&groups)?);
        } else {
            for (i, group) in groups.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                println!("[{}]", group.label);
                print!("{}", format_dataset_table(&group.dataset, limit));
            }
        }
    } else {
        let dataset = build_dataset(path, palettes)?;
        if json {
            println!("{}", serde_json::to_string_pretty(&dataset)?);
        } else {
            print!("{}", format_dataset_table(&dataset, limit));
        }
    }
    Ok(())
}

fn handle_inspect(
    path: &Path,
    click: ScatterClick,
    x_pipeline: Option<&str>,
    y_pipeline: Option<&str>,
    json: bool,
    palettes: &PaletteSet,
) -> Result<()> {
    let dataset = build_dataset(path, palettes)?;
    let resolved = resolve_scatter_click(Some(&click), x_pipeline, y_pipeline, &dataset);
    if json {
        println!("{}", serde_json::to_string_pretty(&resolved)?);
        return Ok(());
    }
    match resolved {
        ClickResult::Selected(block) => print!("{}", format_metadata_block(&block)),
        ClickResult::NoSelection => println!("No matching datapoint."),
    }
    Ok(())
}

fn handle_palettes(json: bool, palettes: &PaletteSet) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(palettes)?);
    } else {
        print!("{}", format_palettes(palettes));
    }
    Ok(())
}
