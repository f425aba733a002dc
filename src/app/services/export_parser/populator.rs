//! Per-row series population
//!
//! Fills the curve series from tokenized data rows. An empty cell means "no
//! value for this axis on this row"; numeric-looking cells become numbers and
//! everything else is retained as text, which is how non-numeric fraction
//! labels coexist with numeric curves in the same file.

use super::tokenizer::TokenRow;
use crate::app::models::{CurveSet, Value};

/// Append one tokenized data row to each curve's series
///
/// Per curve `i` (token pair at `2i`, `2i + 1`):
/// - both cells blank: the curve is skipped entirely for this row
/// - otherwise each non-blank cell is coerced and appended to its own axis
///
/// A row with exactly one blank cell therefore appends to only one of the
/// curve's two series, which can leave the axes at different lengths. That
/// matches the instrument-export semantics this parser reproduces; it is
/// deliberately not "repaired" here.
pub fn populate_row(row: &TokenRow, names: &[String], curves: &mut CurveSet) {
    for (index, name) in names.iter().enumerate() {
        let independent_token = row.token(index * 2);
        let dependent_token = row.token(index * 2 + 1);

        if independent_token.is_empty() && dependent_token.is_empty() {
            continue;
        }

        let Some(curve) = curves.get_mut(name) else {
            continue;
        };

        if !independent_token.is_empty() {
            curve
                .independent_mut()
                .push(Value::from_token(independent_token));
        }
        if !dependent_token.is_empty() {
            curve
                .dependent_mut()
                .push(Value::from_token(dependent_token));
        }
    }
}
