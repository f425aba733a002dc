//! Header row indexing for curve names and axis units
//!
//! A standard export carries two header rows: the curve-name row, where
//! every even-indexed token names one curve, and the axis-unit row, where
//! each token pair gives the unit labels for one curve's two series.

use tracing::debug;

use super::tokenizer::TokenRow;
use crate::app::models::{Curve, CurveSet};
use crate::{Error, Result};

/// Extract the ordered curve names from the tokenized curve-name header row
///
/// Each curve owns a pair of columns, so names sit at token indices
/// 0, 2, 4, ... A header with zero usable columns is fatal for the load.
pub fn curve_names(row: &TokenRow, line_number: usize) -> Result<Vec<String>> {
    if row.column_count == 0 {
        return Err(Error::malformed_header(
            line_number,
            "curve-name header row has no usable columns",
        ));
    }

    let names = (0..row.column_count)
        .step_by(2)
        .map(|i| row.token(i).to_string())
        .collect::<Vec<_>>();

    debug!("Indexed {} curves from header row", names.len());
    Ok(names)
}

/// Build the curve shell from the tokenized axis-unit header row
///
/// For curve `i` the tokens at `2i` and `2i + 1` become its independent and
/// dependent axis keys, each with an initially empty series. A width
/// disagreement between the two header rows is not an immediate failure:
/// missing axis keys read as empty strings, and the mismatch is reported
/// through the consistency summary so the caller can see which lines
/// disagree.
pub fn initialize_series(row: &TokenRow, names: &[String]) -> CurveSet {
    let mut curves = CurveSet::new();

    for (index, name) in names.iter().enumerate() {
        let independent_key = row.token(index * 2).to_string();
        let dependent_key = row.token(index * 2 + 1).to_string();
        curves.insert(name.clone(), Curve::new(independent_key, dependent_key));
    }

    curves
}
