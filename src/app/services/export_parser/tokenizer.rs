//! Line tokenization for tab-delimited export rows
//!
//! Columns are always consumed in pairs (independent axis, dependent axis),
//! so an odd token count violates the format. Rather than rejecting the
//! line, the unmatched trailing token is dropped and the row is flagged with
//! a parity error for the consistency diagnostics.

use crate::constants::FIELD_DELIMITER;

/// The tab-split, trimmed form of one raw export line
#[derive(Debug, Clone)]
pub struct TokenRow {
    tokens: Vec<String>,
    /// Logical column count after parity recovery (always even)
    pub column_count: usize,
    /// True if the original token count was odd
    pub parity_error: bool,
}

impl TokenRow {
    /// Token at the given column index, or the empty string beyond the row
    ///
    /// Out-of-range reads are deliberate: rows narrower than the header are
    /// treated as blank-padded so population stays tolerant, with the width
    /// mismatch surfacing through the consistency summary instead.
    pub fn token(&self, index: usize) -> &str {
        self.tokens.get(index).map(String::as_str).unwrap_or("")
    }

    /// Tokens within the logical column count
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

/// Split one raw line into column tokens
///
/// Pure and stateless: splits on the tab character, drops the trailing
/// unmatched token when the count is odd, and strips trailing whitespace and
/// line terminators from every emitted token.
pub fn tokenize(line: &str) -> TokenRow {
    let raw: Vec<&str> = line.split(FIELD_DELIMITER).collect();

    let mut column_count = raw.len();
    let parity_error = column_count % 2 != 0;
    if parity_error {
        column_count -= 1;
    }

    let tokens = raw[..column_count]
        .iter()
        .map(|token| token.trim_end().to_string())
        .collect();

    TokenRow {
        tokens,
        column_count,
        parity_error,
    }
}
