//! Configuration management and validation.
//!
//! Provides the parsing parameters that vary between instrument-software
//! export layouts: which lines carry the two header rows, and the name of
//! the fraction curve.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{DEFAULT_AXIS_HEADER_LINE, DEFAULT_CURVE_HEADER_LINE, FRACTION_CURVE_NAME};
use crate::{Error, Result};

/// Parsing configuration for one export layout
///
/// The standard UNICORN export places the curve-name row on the second line
/// and the axis-unit row on the third, but some software versions shift the
/// preamble; both indices are caller-configurable. Indices are zero-based.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseConfig {
    /// Zero-based index of the curve-name header line
    pub curve_header_line: usize,

    /// Zero-based index of the axis-unit header line
    pub axis_header_line: usize,

    /// Name of the curve holding fraction boundaries and labels
    pub fraction_curve: String,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            curve_header_line: DEFAULT_CURVE_HEADER_LINE,
            axis_header_line: DEFAULT_AXIS_HEADER_LINE,
            fraction_curve: FRACTION_CURVE_NAME.to_string(),
        }
    }
}

impl ParseConfig {
    /// Validate the configuration
    ///
    /// The parser assumes nothing about the preamble beyond "the axis-unit
    /// header follows the curve-name header"; that ordering is the one hard
    /// requirement.
    pub fn validate(&self) -> Result<()> {
        if self.axis_header_line <= self.curve_header_line {
            return Err(Error::configuration(format!(
                "axis header line {} must follow curve header line {}",
                self.axis_header_line, self.curve_header_line
            )));
        }

        if self.fraction_curve.is_empty() {
            return Err(Error::configuration(
                "fraction curve name must not be empty",
            ));
        }

        debug!(
            "Validated parse config: curve header at line {}, axis header at line {}",
            self.curve_header_line, self.axis_header_line
        );
        Ok(())
    }
}
