//! Command-line argument definitions for the ÄKTA processor
//!
//! This module defines the complete CLI interface using the clap derive API.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::ParseConfig;

/// CLI arguments for the ÄKTA export processor
///
/// Converts ÄKTA/UNICORN chromatography export files into structured curve
/// datasets and reports their structural consistency.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "akta-processor",
    version,
    about = "Inspect ÄKTA/UNICORN chromatography export files",
    long_about = "Parses tab-delimited chromatography export files into typed per-curve \
                  datasets, reporting column-width and parity diagnostics, and resolves \
                  collection-fraction ranges to volume ranges for shading."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all logging except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands for the ÄKTA processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse export files and report curves and consistency diagnostics
    Inspect(InspectArgs),
    /// List fraction labels and resolve fraction ranges to volume ranges
    Fractions(FractionsArgs),
}

/// Arguments for the inspect command
#[derive(Debug, Clone, Parser)]
pub struct InspectArgs {
    /// Export files or directories to inspect
    ///
    /// Directories are traversed recursively; only files with the
    /// conventional export extensions (.txt, .asc, .csv) are considered.
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<PathBuf>,

    #[command(flatten)]
    pub layout: LayoutArgs,
}

/// Arguments for the fractions command
#[derive(Debug, Clone, Parser)]
pub struct FractionsArgs {
    /// Export file containing a fraction curve
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Start fraction number for volume range resolution
    #[arg(long, requires = "stop")]
    pub start: Option<u32>,

    /// Stop fraction number for volume range resolution
    #[arg(long, requires = "start")]
    pub stop: Option<u32>,

    #[command(flatten)]
    pub layout: LayoutArgs,
}

/// Export layout overrides shared by all subcommands
#[derive(Debug, Clone, Parser)]
pub struct LayoutArgs {
    /// Zero-based line index of the curve-name header row
    #[arg(long, value_name = "LINE")]
    pub curve_header_line: Option<usize>,

    /// Zero-based line index of the axis-unit header row
    #[arg(long, value_name = "LINE")]
    pub axis_header_line: Option<usize>,

    /// Name of the fraction curve
    #[arg(long, value_name = "NAME")]
    pub fraction_curve: Option<String>,
}

impl LayoutArgs {
    /// Apply CLI overrides onto the default parse configuration
    pub fn to_config(&self) -> ParseConfig {
        let mut config = ParseConfig::default();
        if let Some(line) = self.curve_header_line {
            config.curve_header_line = line;
        }
        if let Some(line) = self.axis_header_line {
            config.axis_header_line = line;
        }
        if let Some(name) = &self.fraction_curve {
            config.fraction_curve = name.clone();
        }
        config
    }
}

impl Args {
    /// Log level derived from the verbosity flags
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "info"
        }
    }
}
