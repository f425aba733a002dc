//! Parser for ÄKTA/UNICORN tab-delimited export files
//!
//! This module converts the paired-column curve tables produced by
//! instrument-control software into a typed [`CurveSet`], tolerating the
//! structural quirks of real-world exports (odd column counts, blank cells,
//! width drift between software versions) and reporting them as diagnostics
//! rather than failures.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`parser`] - Core parsing orchestration and file handling
//! - [`loader`] - File reading with UTF-8/UTF-16 encoding fallback
//! - [`tokenizer`] - Tab splitting, trimming, and parity recovery per line
//! - [`header`] - Curve-name and axis-unit header row indexing
//! - [`populator`] - Per-row series population with blank-cell skipping
//! - [`consistency`] - Per-line width/parity reports and their aggregate
//!
//! ## Usage
//!
//! ```rust,no_run
//! use akta_processor::app::services::export_parser::ExportParser;
//! use akta_processor::config::ParseConfig;
//!
//! # fn example() -> akta_processor::Result<()> {
//! let parser = ExportParser::new(ParseConfig::default());
//! let result = parser.parse_file(std::path::Path::new("run.asc"))?;
//!
//! println!("Parsed {} curves, widths consistent: {}",
//!          result.curves.len(),
//!          result.consistency.all_widths_consistent);
//! # Ok(())
//! # }
//! ```

pub mod consistency;
pub mod header;
pub mod loader;
pub mod parser;
pub mod populator;
pub mod tokenizer;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use consistency::{ConsistencySummary, ConsistencyTracker, LineReport};
pub use parser::{ExportParser, ParseResult};
pub use tokenizer::TokenRow;
