//! Core data model for parsed export datasets
//!
//! An export file yields a [`CurveSet`]: an ordered mapping from curve name
//! to a [`Curve`] holding two positionally-ordered series (independent axis
//! first, dependent axis second). Each series element is a tagged [`Value`]
//! so consumers branch explicitly on numeric versus textual cells instead of
//! relying on runtime coercion.

use std::collections::HashMap;

use serde::Serialize;

use crate::{Error, Result};

/// A single parsed cell value
///
/// Numeric-looking tokens parse to `Number`; everything else is retained as
/// `Text`. Fraction labels and annotation rows coexist with numeric curves in
/// the same file, so both kinds appear in ordinary datasets.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Value {
    Number(f64),
    Text(String),
}

impl Value {
    /// Coerce a non-empty token to its numeric or textual form
    pub fn from_token(token: &str) -> Self {
        match token.parse::<f64>() {
            Ok(number) => Value::Number(number),
            Err(_) => Value::Text(token.to_string()),
        }
    }

    /// Numeric payload, if this value is a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Text(_) => None,
        }
    }

    /// Textual payload, if this value is text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Number(_) => None,
            Value::Text(s) => Some(s.as_str()),
        }
    }
}

/// An ordered, growable sequence of parsed cell values for one axis
pub type Series = Vec<Value>;

/// One named pair of data series extracted from one pair of export columns
///
/// Axis keys are the unit labels from the axis-unit header row (e.g. `ml`,
/// `mAU`). They vary between instrument-software versions, so consumers
/// should prefer the positional [`Curve::independent`] / [`Curve::dependent`]
/// accessors over literal key strings.
#[derive(Debug, Clone, Serialize)]
pub struct Curve {
    keys: [String; 2],
    series: [Series; 2],
}

impl Curve {
    /// Create an empty curve with the given independent and dependent axis keys
    pub fn new(independent_key: String, dependent_key: String) -> Self {
        Self {
            keys: [independent_key, dependent_key],
            series: [Series::new(), Series::new()],
        }
    }

    /// Axis keys in header order (independent first)
    pub fn axis_keys(&self) -> (&str, &str) {
        (&self.keys[0], &self.keys[1])
    }

    /// The independent-axis series (conventionally volume)
    pub fn independent(&self) -> &Series {
        &self.series[0]
    }

    /// The dependent-axis series (conventionally signal)
    pub fn dependent(&self) -> &Series {
        &self.series[1]
    }

    pub(crate) fn independent_mut(&mut self) -> &mut Series {
        &mut self.series[0]
    }

    pub(crate) fn dependent_mut(&mut self) -> &mut Series {
        &mut self.series[1]
    }

    /// Look up a series by its axis key
    ///
    /// Resolves positionally when both axes carry the same key, preferring
    /// the independent axis.
    pub fn series(&self, axis_key: &str) -> Option<&Series> {
        self.keys
            .iter()
            .position(|k| k == axis_key)
            .map(|i| &self.series[i])
    }

    /// Number of points on the longer of the two axes
    ///
    /// Axis lengths can legitimately diverge (one-sided blank cells append
    /// one-sidedly), so there is no single point count.
    pub fn len(&self) -> usize {
        self.series[0].len().max(self.series[1].len())
    }

    pub fn is_empty(&self) -> bool {
        self.series[0].is_empty() && self.series[1].is_empty()
    }
}

/// The complete parsed dataset: curve name to curve, in header order
#[derive(Debug, Clone, Default, Serialize)]
pub struct CurveSet {
    names: Vec<String>,
    curves: HashMap<String, Curve>,
}

impl CurveSet {
    /// Create an empty dataset
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a curve, preserving first-seen header order
    ///
    /// A repeated name replaces the earlier curve without duplicating the
    /// ordering entry, matching the last-wins behavior of a keyed header row.
    pub fn insert(&mut self, name: String, curve: Curve) {
        if !self.curves.contains_key(&name) {
            self.names.push(name.clone());
        }
        self.curves.insert(name, curve);
    }

    /// Curve names in header order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Look up a curve by name
    pub fn get(&self, name: &str) -> Option<&Curve> {
        self.curves.get(name)
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut Curve> {
        self.curves.get_mut(name)
    }

    /// Look up a curve by name, failing if absent
    ///
    /// Absence of optional curves (e.g. no fractions collected during a run)
    /// is a normal condition, so this error is raised at access time rather
    /// than during parsing.
    pub fn curve(&self, name: &str) -> Result<&Curve> {
        self.get(name).ok_or_else(|| Error::missing_curve(name))
    }

    /// Number of curves in the dataset
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate curves in header order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Curve)> {
        self.names
            .iter()
            .filter_map(|name| self.curves.get(name).map(|c| (name.as_str(), c)))
    }
}
