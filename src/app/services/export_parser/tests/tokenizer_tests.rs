//! Tests for line tokenization and parity recovery

use super::super::tokenizer::tokenize;

#[test]
fn test_even_row_splits_cleanly() {
    let row = tokenize("0.00\t0.5\t1.00\t12.1");

    assert_eq!(row.column_count, 4);
    assert!(!row.parity_error);
    assert_eq!(row.tokens(), &["0.00", "0.5", "1.00", "12.1"]);
}

#[test]
fn test_odd_row_drops_trailing_token() {
    let row = tokenize("1\t2\t3");

    assert_eq!(row.column_count, 2);
    assert!(row.parity_error);
    // The unmatched trailing token is not emitted
    assert_eq!(row.tokens(), &["1", "2"]);
}

#[test]
fn test_trailing_whitespace_stripped() {
    let row = tokenize("10.0 \tT\"1\"\r\n");

    assert_eq!(row.token(0), "10.0");
    assert_eq!(row.token(1), "T\"1\"");
}

#[test]
fn test_empty_cells_preserved() {
    let row = tokenize("\t5.0\t\t");

    assert_eq!(row.column_count, 4);
    assert_eq!(row.token(0), "");
    assert_eq!(row.token(1), "5.0");
    assert_eq!(row.token(2), "");
    assert_eq!(row.token(3), "");
}

#[test]
fn test_empty_line_is_parity_error() {
    // A line with no tab splits into one token, an odd count
    let row = tokenize("");

    assert_eq!(row.column_count, 0);
    assert!(row.parity_error);
    assert!(row.tokens().is_empty());
}

#[test]
fn test_out_of_range_token_reads_empty() {
    let row = tokenize("a\tb");

    assert_eq!(row.token(5), "");
}
