//! Application constants for the ÄKTA processor
//!
//! This module contains the default values and format conventions used
//! throughout the export parser and fraction mapper.

// =============================================================================
// Export File Format Conventions
// =============================================================================

/// File extensions conventionally produced by instrument-control exports
pub const EXPORT_FILE_EXTENSIONS: &[&str] = &["txt", "asc", "csv"];

/// Zero-based line index of the curve-name header row in a standard export
pub const DEFAULT_CURVE_HEADER_LINE: usize = 1;

/// Zero-based line index of the axis-unit header row in a standard export
pub const DEFAULT_AXIS_HEADER_LINE: usize = 2;

/// Field delimiter used by the export format
pub const FIELD_DELIMITER: char = '\t';

// =============================================================================
// Fraction Curve Conventions
// =============================================================================

/// Name of the curve holding collection-fraction boundaries and labels
pub const FRACTION_CURVE_NAME: &str = "Fraction";

/// Sentinel label for discarded fractions, excluded from labelling and shading
pub const WASTE_LABEL: &str = "Waste";

/// Characters stripped from both ends of a raw fraction label
///
/// UNICORN quotes fraction labels and prefixes tube identifiers with `T`,
/// e.g. `T"12"` for tube 12.
pub const LABEL_QUOTE_CHARS: &[char] = &['T', '"'];
