//! Integration tests for the export parser with on-disk files
//!
//! These tests write synthetic ÄKTA-style exports to temporary files and
//! verify end-to-end parsing, encoding fallback, and fraction mapping
//! through the public API.

use std::io::Write;

use tempfile::NamedTempFile;

use akta_processor::{ExportParser, FractionMap, ParseConfig, Value};

/// A three-curve export in the standard layout: preamble on line 0,
/// curve-name header on line 1, axis-unit header on line 2.
const SAMPLE_EXPORT: &str = "Chrom.1  Result file\n\
UV 1_280\t\tCond\t\tFraction\t\n\
ml\tmAU\tml\tmS/cm\tml\tFraction\n\
0.00\t0.5\t0.00\t12.1\t10.0\tT\"1\"\n\
0.50\t1.2\t0.50\t12.0\t12.0\tT\"2\"\n\
1.00\t5.6\t1.00\t11.8\t14.0\tT\"3\"\n\
1.50\t3.1\t1.50\t11.7\t16.0\tT\"Waste\"\n\
2.00\t1.0\t2.00\t11.6\t\t\n";

fn write_temp(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(bytes).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn parses_utf8_export_end_to_end() {
    let file = write_temp(SAMPLE_EXPORT.as_bytes());

    let parser = ExportParser::new(ParseConfig::default());
    let result = parser.parse_file(file.path()).unwrap();

    assert_eq!(result.curves.names(), &["UV 1_280", "Cond", "Fraction"]);
    assert!(result.consistency.all_widths_consistent);
    assert!(result.consistency.no_parity_errors);

    let uv = result.curves.curve("UV 1_280").unwrap();
    assert_eq!(uv.axis_keys(), ("ml", "mAU"));
    assert_eq!(uv.independent().len(), 5);
    assert_eq!(uv.dependent()[2], Value::Number(5.6));
}

#[test]
fn parses_utf16_export_via_fallback() {
    // UTF-16LE with BOM: the 0xFF lead byte guarantees UTF-8 decoding fails
    let mut bytes = vec![0xFF, 0xFE];
    for unit in SAMPLE_EXPORT.encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    let file = write_temp(&bytes);

    let result = ExportParser::default().parse_file(file.path()).unwrap();

    assert_eq!(result.curves.len(), 3);
    let cond = result.curves.curve("Cond").unwrap();
    assert_eq!(cond.dependent()[0], Value::Number(12.1));
}

#[test]
fn fraction_mapping_end_to_end() {
    let file = write_temp(SAMPLE_EXPORT.as_bytes());
    let result = ExportParser::default().parse_file(file.path()).unwrap();

    let fractions = FractionMap::from_curves(&result.curves, "Fraction").unwrap();
    assert_eq!(fractions.len(), 4);

    // Waste is excluded from annotation
    assert_eq!(fractions.boundary_markers(), vec![10.0, 12.0, 14.0]);
    let labels: Vec<String> = fractions
        .label_positions()
        .into_iter()
        .map(|p| p.label)
        .collect();
    assert_eq!(labels, vec!["1", "2", "3"]);

    // Shading 1..2 extends to the start of fraction 3
    assert_eq!(fractions.volume_span(1, 2).unwrap(), (10.0, 14.0));
    // The final numeric fraction has a following Waste boundary
    assert_eq!(fractions.volume_span(1, 3).unwrap(), (10.0, 16.0));
}

#[test]
fn structurally_inconsistent_export_still_yields_dataset() {
    let export = "preamble\n\
A\t\tB\t\n\
ml\tAU\tml\tS\n\
1\t2\t3\t4\n\
5\t6\n\
7\t8\t9\t10\t11\n";
    let file = write_temp(export.as_bytes());

    let result = ExportParser::default().parse_file(file.path()).unwrap();

    assert!(!result.consistency.all_widths_consistent);
    assert!(!result.consistency.no_parity_errors);
    assert_eq!(result.curves.curve("A").unwrap().len(), 3);
    assert_eq!(result.curves.curve("B").unwrap().len(), 2);
}
