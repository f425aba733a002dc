//! Command implementations for the ÄKTA processor CLI
//!
//! This module contains the command execution logic, progress reporting,
//! and error handling for the CLI interface.

use std::path::{Path, PathBuf};
use std::time::Instant;

use colored::Colorize;
use indicatif::{HumanDuration, ProgressBar, ProgressStyle};
use tracing::{debug, error, info};

use crate::app::services::export_parser::{ExportParser, ParseResult};
use crate::app::services::fraction_mapper::FractionMap;
use crate::cli::args::{Args, Commands, FractionsArgs, InspectArgs};
use crate::{Error, Result};

/// Inspection statistics for reporting
#[derive(Debug, Clone, Default)]
pub struct InspectStats {
    /// Number of files parsed successfully
    pub files_parsed: usize,
    /// Number of files that failed to load or parse
    pub files_failed: usize,
    /// Number of files with width or parity issues
    pub files_with_issues: usize,
}

/// Main command runner for the ÄKTA processor
pub fn run(args: Args) -> Result<()> {
    setup_logging(&args);

    info!("Starting ÄKTA processor");
    debug!("Command line arguments: {:?}", args);

    match &args.command {
        Some(Commands::Inspect(inspect_args)) => run_inspect(inspect_args),
        Some(Commands::Fractions(fractions_args)) => run_fractions(fractions_args),
        None => {
            // Handled by the caller showing help
            Ok(())
        }
    }
}

/// Set up structured logging based on CLI arguments
fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("akta_processor={}", args.log_level())));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    debug!("Logging initialized at level: {}", args.log_level());
}

/// Run the inspect command over every resolved export file
fn run_inspect(args: &InspectArgs) -> Result<()> {
    let start_time = Instant::now();
    let config = args.layout.to_config();
    config.validate()?;

    let files = input::collect_export_files(&args.paths)
        .map_err(|e| Error::configuration(format!("{e:#}")))?;

    if files.is_empty() {
        return Err(Error::configuration(
            "no export files found under the given paths",
        ));
    }

    info!("Inspecting {} export files", files.len());

    let progress_bar = if files.len() > 1 {
        let pb = ProgressBar::new(files.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
                )
                .unwrap()
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let parser = ExportParser::new(config);
    let mut stats = InspectStats::default();

    for (i, file) in files.iter().enumerate() {
        if let Some(pb) = &progress_bar {
            pb.set_position(i as u64);
            pb.set_message(file.display().to_string());
        }

        match parser.parse_file(file) {
            Ok(result) => {
                stats.files_parsed += 1;
                if !result.consistency.is_clean() {
                    stats.files_with_issues += 1;
                }
                report_file(file, &result);
            }
            Err(e) => {
                error!("Failed to parse {}: {}", file.display(), e);
                stats.files_failed += 1;
            }
        }
    }

    if let Some(pb) = &progress_bar {
        pb.finish_with_message("Inspection complete");
    }

    println!();
    println!(
        "{} {} parsed, {} failed, {} with structural issues in {}",
        "Summary:".bright_green().bold(),
        stats.files_parsed,
        stats.files_failed,
        stats.files_with_issues,
        HumanDuration(start_time.elapsed())
    );

    Ok(())
}

/// Print the per-file curve inventory and structural verdict
fn report_file(path: &Path, result: &ParseResult) {
    println!();
    println!("{}", path.display().to_string().bright_cyan().bold());

    for (name, curve) in result.curves.iter() {
        let (x_key, y_key) = curve.axis_keys();
        println!(
            "  {:<24} {:>7} points  [{} / {}]",
            name,
            curve.len(),
            x_key,
            y_key
        );
    }

    let consistency = &result.consistency;
    let widths = verdict(consistency.all_widths_consistent);
    let parity = verdict(consistency.no_parity_errors);
    println!(
        "  {} columns expected, {} lines checked, widths {}, parity {}",
        consistency.expected_columns, consistency.lines_checked, widths, parity
    );
}

fn verdict(ok: bool) -> colored::ColoredString {
    if ok {
        "consistent".bright_green()
    } else {
        "inconsistent".bright_red()
    }
}

/// Run the fractions command against a single export file
fn run_fractions(args: &FractionsArgs) -> Result<()> {
    let config = args.layout.to_config();
    let fraction_curve = config.fraction_curve.clone();

    let parser = ExportParser::new(config);
    let result = parser.parse_file(&args.path)?;
    let fractions = FractionMap::from_curves(&result.curves, &fraction_curve)?;

    if fractions.is_empty() {
        println!("No fraction records in {}", args.path.display());
        return Ok(());
    }

    println!(
        "{} ({} records)",
        "Fractions".bright_green().bold(),
        fractions.len()
    );
    for record in fractions.records() {
        let label = if record.is_waste() {
            record.label.bright_black()
        } else {
            record.label.normal()
        };
        println!("  {:>10.2}  {}", record.boundary, label);
    }

    if let (Some(start), Some(stop)) = (args.start, args.stop) {
        let (start_volume, stop_volume) = fractions.volume_span(start, stop)?;
        println!();
        println!(
            "Fractions {}..{} span volumes {:.2} to {:.2}",
            start, stop, start_volume, stop_volume
        );
    }

    Ok(())
}

/// Input path resolution helpers
pub mod input {
    use super::*;
    use anyhow::{Context, Result};

    use crate::constants::EXPORT_FILE_EXTENSIONS;

    /// Expand files and directories into a sorted list of export files
    ///
    /// Files are accepted as given; directories are walked recursively and
    /// filtered to the conventional export extensions.
    pub fn collect_export_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for path in paths {
            if path.is_dir() {
                for entry in walkdir::WalkDir::new(path) {
                    let entry = entry.context("Failed to walk directory")?;
                    if entry.file_type().is_file() && has_export_extension(entry.path()) {
                        files.push(entry.path().to_path_buf());
                    }
                }
            } else if path.exists() {
                files.push(path.clone());
            } else {
                anyhow::bail!("Path does not exist: {}", path.display());
            }
        }

        files.sort();
        files.dedup();
        Ok(files)
    }

    /// True when the path carries one of the conventional export extensions
    pub fn has_export_extension(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                EXPORT_FILE_EXTENSIONS
                    .iter()
                    .any(|accepted| ext.eq_ignore_ascii_case(accepted))
            })
    }
}
