//! Per-line structural diagnostics and their aggregate
//!
//! Real-world exports from different instrument-software versions drift in
//! column width, and the format is parsed best-effort rather than strictly.
//! Every tokenized line is recorded here, and the tracker reduces the records
//! into advisory verdicts the caller can surface to the user. Nothing in this
//! module aborts a load.

use serde::Serialize;

use super::tokenizer::TokenRow;

/// Structural observations for one processed line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineReport {
    /// Logical column count after parity recovery
    pub column_count: usize,
    /// True if the line's original token count was odd
    pub parity_error: bool,
}

/// Aggregate structural verdict for one parsed file
#[derive(Debug, Clone, Serialize)]
pub struct ConsistencySummary {
    /// True iff every recorded line matched the first recorded width
    pub all_widths_consistent: bool,
    /// True iff no recorded line had an odd column count
    pub no_parity_errors: bool,
    /// Column width of the first recorded line (the header row)
    pub expected_columns: usize,
    /// Number of lines recorded
    pub lines_checked: usize,
}

impl ConsistencySummary {
    /// True when the file was structurally clean throughout
    pub fn is_clean(&self) -> bool {
        self.all_widths_consistent && self.no_parity_errors
    }
}

/// Accumulator fed with every tokenization result during one parse
#[derive(Debug, Default)]
pub struct ConsistencyTracker {
    reports: Vec<LineReport>,
}

impl ConsistencyTracker {
    /// Create an empty tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one tokenized line
    pub fn record(&mut self, row: &TokenRow) {
        self.reports.push(LineReport {
            column_count: row.column_count,
            parity_error: row.parity_error,
        });
    }

    /// Recorded per-line reports, in processing order
    pub fn reports(&self) -> &[LineReport] {
        &self.reports
    }

    /// Reduce the recorded reports into the aggregate verdict
    pub fn summarize(&self) -> ConsistencySummary {
        let expected_columns = self.reports.first().map_or(0, |r| r.column_count);

        ConsistencySummary {
            all_widths_consistent: self
                .reports
                .iter()
                .all(|r| r.column_count == expected_columns),
            no_parity_errors: self.reports.iter().all(|r| !r.parity_error),
            expected_columns,
            lines_checked: self.reports.len(),
        }
    }
}
