//! Resviz - loads pipeline result files into tabular datasets for dashboard charts
//!
//! This library provides the data core behind the results dashboard, including:
//! - Typed models for result records, datasets, and color palettes
//! - A loader that reshapes CBRAIN result files into flat record tables
//! - Completeness summaries over a loaded dataset
//! - Click-event resolution back to per-datapoint metadata cards
//! - CLI command parsing and terminal output formatting
//!
//! # Example
//!
//! ```no_run
//! use resviz::cli::run;
//!
//! fn main() {
//!     if let Err(e) = run() {
//!         eprintln!("Error: {}", e);
//!         std::process::exit(1);
//!     }
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod query;
