//! Tests for consistency tracking and the aggregate verdict

use super::super::consistency::ConsistencyTracker;
use super::super::tokenizer::tokenize;

#[test]
fn test_uniform_widths_are_consistent() {
    let mut tracker = ConsistencyTracker::new();
    tracker.record(&tokenize("a\tb\tc\td"));
    tracker.record(&tokenize("1\t2\t3\t4"));
    tracker.record(&tokenize("5\t6\t7\t8"));

    let summary = tracker.summarize();
    assert!(summary.all_widths_consistent);
    assert!(summary.no_parity_errors);
    assert!(summary.is_clean());
    assert_eq!(summary.expected_columns, 4);
    assert_eq!(summary.lines_checked, 3);
}

#[test]
fn test_width_drift_flagged() {
    let mut tracker = ConsistencyTracker::new();
    tracker.record(&tokenize("a\tb\tc\td"));
    tracker.record(&tokenize("1\t2"));

    let summary = tracker.summarize();
    assert!(!summary.all_widths_consistent);
    assert!(summary.no_parity_errors);
    assert!(!summary.is_clean());
}

#[test]
fn test_parity_error_flagged_per_line() {
    let mut tracker = ConsistencyTracker::new();
    tracker.record(&tokenize("a\tb"));
    tracker.record(&tokenize("1\t2\t3"));

    let summary = tracker.summarize();
    // Parity recovery reduced the odd row to the header width
    assert!(summary.all_widths_consistent);
    assert!(!summary.no_parity_errors);

    assert_eq!(tracker.reports().len(), 2);
    assert!(!tracker.reports()[0].parity_error);
    assert!(tracker.reports()[1].parity_error);
}

#[test]
fn test_empty_tracker_summary() {
    let summary = ConsistencyTracker::new().summarize();

    assert!(summary.all_widths_consistent);
    assert!(summary.no_parity_errors);
    assert_eq!(summary.expected_columns, 0);
    assert_eq!(summary.lines_checked, 0);
}
