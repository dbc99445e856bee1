//! Somnoplot - descriptive figures and summary statistics for sleep studies
//!
//! This library provides the core functionality for somnoplot, including:
//! - Configuration resolution for dataset and hypnogram locations
//! - A tabular loader for numeric assessment CSVs
//! - Sleep-stage models and the hypnogram timeline builder
//! - Figure rendering (histograms, pie charts, paired before/after plots,
//!   and hypnograms)
//! - Summary statistics with Shapiro-Wilk normality testing
//! - CLI command parsing and execution
//!
//! # Example
//!
//! ```no_run
//! use somnoplot::cli::run;
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
pub mod dataset;
pub mod figures;
pub mod hypnogram;
pub mod models;
pub mod stats;
