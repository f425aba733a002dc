//! Test utilities and fixtures for export parser testing
//!
//! This module provides the synthetic export builders and helpers shared
//! across the parser test modules.

use std::io::Write;

use tempfile::NamedTempFile;

// Test modules
mod consistency_tests;
mod tokenizer_tests;

/// Turn a literal into the owned line sequence the parser consumes
pub fn to_lines(text: &str) -> Vec<String> {
    text.lines().map(|line| line.to_string()).collect()
}

/// A realistic three-curve export: UV, conductivity, and fractions
///
/// Line 0 is preamble, line 1 the curve-name header, line 2 the axis-unit
/// header. The final row's fraction pair is blank, as exports typically stop
/// collecting fractions before the run ends.
pub fn sample_export() -> String {
    [
        "Chrom.1",
        "UV 1_280\t\tCond\t\tFraction\t",
        "ml\tmAU\tml\tmS/cm\tml\tFraction",
        "0.00\t0.5\t0.00\t12.1\t10.0\tT\"1\"",
        "0.50\t1.2\t0.50\t12.0\t12.0\tT\"2\"",
        "1.00\t5.6\t1.00\t11.8\t14.0\tT\"3\"",
        "1.50\t3.1\t1.50\t11.7\t16.0\tT\"Waste\"",
        "2.00\t1.0\t2.00\t11.6\t\t",
    ]
    .join("\n")
}

/// Minimal single-curve export with no preamble offset beyond line 0
pub fn minimal_export() -> String {
    ["preamble", "A\tB", "ml\tAU", "0\t1.0", "1\t2.0", "2\t3.0"].join("\n")
}

/// Write content to a temporary file for parse_file tests
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file
}
