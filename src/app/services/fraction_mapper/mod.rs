//! Fraction-to-volume mapping for chromatogram annotation
//!
//! The "Fraction" curve records collection-fraction boundaries (volume) and
//! their labels. This module normalizes the labels, computes label placement
//! midpoints, excludes waste fractions, and resolves a fraction-number range
//! to the volume range used for shading a region of the chromatogram.
//!
//! All operations are pure functions over the already-parsed dataset; no
//! state survives beyond the [`FractionMap`] itself.

#[cfg(test)]
pub mod tests;

use tracing::debug;

use crate::app::models::{CurveSet, Value};
use crate::constants::{LABEL_QUOTE_CHARS, WASTE_LABEL};
use crate::{Error, Result};

/// One collection fraction: its boundary volume and normalized label
#[derive(Debug, Clone, PartialEq)]
pub struct FractionRecord {
    /// Volume at which this fraction starts
    pub boundary: f64,
    /// Label with quoting artifacts stripped (e.g. `T"12"` becomes `12`)
    pub label: String,
}

impl FractionRecord {
    /// True for the sentinel label of a discarded fraction
    pub fn is_waste(&self) -> bool {
        self.label == WASTE_LABEL
    }
}

/// A fraction's label midpoint position for on-plot text placement
#[derive(Debug, Clone, PartialEq)]
pub struct LabelPosition {
    /// Arithmetic mean of the fraction's two boundary volumes
    pub volume: f64,
    /// Normalized fraction label
    pub label: String,
}

/// Derived view over a dataset's fraction curve
#[derive(Debug, Clone)]
pub struct FractionMap {
    records: Vec<FractionRecord>,
}

impl FractionMap {
    /// Build the map from a parsed dataset's fraction curve
    ///
    /// Fails with [`Error::MissingCurve`] when the dataset holds no curve
    /// of the given name; a run with no fractions collected is a normal
    /// condition for the caller to handle. Records whose boundary cell did
    /// not parse as a number are dropped.
    pub fn from_curves(curves: &CurveSet, curve_name: &str) -> Result<Self> {
        let curve = curves.curve(curve_name)?;

        let records = curve
            .independent()
            .iter()
            .zip(curve.dependent())
            .filter_map(|(volume, label)| match volume.as_number() {
                Some(boundary) => Some(FractionRecord {
                    boundary,
                    label: normalize_label(label),
                }),
                None => {
                    debug!("Dropping fraction record with non-numeric boundary {volume:?}");
                    None
                }
            })
            .collect::<Vec<_>>();

        debug!("Built fraction map with {} records", records.len());
        Ok(Self { records })
    }

    /// Fraction records in elution order
    pub fn records(&self) -> &[FractionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Boundary volumes eligible for tick-mark drawing
    ///
    /// Waste fractions are excluded from annotation.
    pub fn boundary_markers(&self) -> Vec<f64> {
        self.records
            .iter()
            .filter(|record| !record.is_waste())
            .map(|record| record.boundary)
            .collect()
    }

    /// Midpoint placement for each fraction's text label
    ///
    /// Fraction `i` spans from boundary `i` to boundary `i + 1`, so its label
    /// sits at the mean of the two. The last record has no following boundary
    /// and gets no label; waste fractions are skipped.
    pub fn label_positions(&self) -> Vec<LabelPosition> {
        self.records
            .windows(2)
            .filter(|pair| !pair[0].is_waste())
            .map(|pair| LabelPosition {
                volume: (pair[0].boundary + pair[1].boundary) / 2.0,
                label: pair[0].label.clone(),
            })
            .collect()
    }

    /// Resolve a start/stop fraction-number pair to a shading volume range
    ///
    /// Only purely numeric labels participate; well-plate-style alphanumeric
    /// labels cannot be addressed by number, and a dataset without any
    /// numeric labels fails with [`Error::NonNumericFractionLabels`] rather
    /// than a misleading not-found error. The range covers up to the start of
    /// the fraction *after* `stop` (or `stop`'s own boundary when it is the
    /// last record), so shading spans the stop fraction's full width.
    pub fn volume_span(&self, start: u32, stop: u32) -> Result<(f64, f64)> {
        let numeric: Vec<(u32, usize)> = self
            .records
            .iter()
            .enumerate()
            .filter_map(|(index, record)| {
                parse_fraction_number(&record.label).map(|number| (number, index))
            })
            .collect();

        if numeric.is_empty() {
            return Err(Error::NonNumericFractionLabels);
        }

        let index_of = |fraction: u32| -> Result<usize> {
            numeric
                .iter()
                .find(|(number, _)| *number == fraction)
                .map(|(_, index)| *index)
                .ok_or_else(|| Error::fraction_not_found(fraction))
        };

        let start_index = index_of(start)?;
        let stop_index = index_of(stop)?;

        let start_volume = self.records[start_index].boundary;
        let stop_volume = match self.records.get(stop_index + 1) {
            Some(next) => next.boundary,
            None => self.records[stop_index].boundary,
        };

        Ok((start_volume, stop_volume))
    }
}

/// Strip quoting artifacts from a raw fraction label
///
/// UNICORN writes tube labels as `T"12"`; the leading `T` and the double
/// quotes are presentation, not content.
fn normalize_label(value: &Value) -> String {
    match value {
        Value::Text(text) => text.trim_matches(LABEL_QUOTE_CHARS).to_string(),
        // An unquoted numeric label was coerced during parsing
        Value::Number(number) => format!("{number}"),
    }
}

/// Parse a normalized label as a fraction number, if purely numeric
fn parse_fraction_number(label: &str) -> Option<u32> {
    if !label.is_empty() && label.chars().all(|c| c.is_ascii_digit()) {
        label.parse().ok()
    } else {
        None
    }
}
