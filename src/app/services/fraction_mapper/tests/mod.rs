//! Tests for fraction-to-volume mapping
