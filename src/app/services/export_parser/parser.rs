//! Core export parser implementation
//!
//! This module provides the main parser orchestration, coordinating file
//! loading, header indexing, series population, and consistency tracking
//! into a single entry point for collaborators.

use std::path::Path;

use tracing::{debug, info, warn};

use super::consistency::{ConsistencySummary, ConsistencyTracker};
use super::header::{curve_names, initialize_series};
use super::loader::load_lines;
use super::populator::populate_row;
use super::tokenizer::tokenize;
use crate::app::models::CurveSet;
use crate::config::ParseConfig;
use crate::{Error, Result};

/// Parsing result: the typed dataset plus its structural verdict
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// The complete parsed curve dataset
    pub curves: CurveSet,

    /// Advisory structural diagnostics accumulated across every line
    pub consistency: ConsistencySummary,
}

/// Parser for ÄKTA/UNICORN tab-delimited export files
///
/// This parser focuses on essential functionality:
/// - Typed numeric/text cell coercion with blank-pair skipping
/// - Parity recovery for odd column counts
/// - Best-effort tolerance: structural issues are recorded, never fatal
/// - Width and parity diagnostics surfaced alongside the dataset
#[derive(Debug, Clone)]
pub struct ExportParser {
    config: ParseConfig,
}

impl ExportParser {
    /// Create a parser with the given layout configuration
    pub fn new(config: ParseConfig) -> Self {
        Self { config }
    }

    /// The active configuration
    pub fn config(&self) -> &ParseConfig {
        &self.config
    }

    /// Load and parse an export file
    pub fn parse_file(&self, file_path: &Path) -> Result<ParseResult> {
        info!("Parsing export file: {}", file_path.display());

        let lines = load_lines(file_path)?;
        self.parse_lines(&lines)
    }

    /// Parse an already-loaded sequence of raw lines
    ///
    /// Tokenizes the configured curve-name and axis-unit header rows, then
    /// populates every following line as data, feeding each tokenization
    /// result into the consistency tracker. The preamble before the curve
    /// header is ignored.
    pub fn parse_lines(&self, lines: &[String]) -> Result<ParseResult> {
        self.config.validate()?;

        let curve_header = lines.get(self.config.curve_header_line).ok_or_else(|| {
            Error::malformed_header(
                self.config.curve_header_line,
                format!("file has only {} lines", lines.len()),
            )
        })?;
        let axis_header = lines.get(self.config.axis_header_line).ok_or_else(|| {
            Error::malformed_header(
                self.config.axis_header_line,
                format!("file has only {} lines", lines.len()),
            )
        })?;

        let mut tracker = ConsistencyTracker::new();

        let curve_row = tokenize(curve_header);
        let names = curve_names(&curve_row, self.config.curve_header_line)?;
        tracker.record(&curve_row);

        let axis_row = tokenize(axis_header);
        let mut curves = initialize_series(&axis_row, &names);
        tracker.record(&axis_row);

        if axis_row.column_count != curve_row.column_count {
            warn!(
                "Axis-unit row width {} disagrees with curve header width {}",
                axis_row.column_count, curve_row.column_count
            );
        }

        for line in &lines[self.config.axis_header_line + 1..] {
            let row = tokenize(line);
            populate_row(&row, &names, &mut curves);
            tracker.record(&row);
        }

        let consistency = tracker.summarize();
        if !consistency.is_clean() {
            warn!(
                "Structural issues detected: widths consistent = {}, parity clean = {}",
                consistency.all_widths_consistent, consistency.no_parity_errors
            );
        }

        info!(
            "Parsed {} curves from {} lines",
            curves.len(),
            consistency.lines_checked
        );
        debug!("Curve names: {:?}", curves.names());

        Ok(ParseResult {
            curves,
            consistency,
        })
    }
}

impl Default for ExportParser {
    fn default() -> Self {
        Self::new(ParseConfig::default())
    }
}
