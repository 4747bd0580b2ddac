// Copyright 2025 the Tally Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Series rows and the scale checks shared by both renderers.

extern crate alloc;

use alloc::string::String;

use crate::error::ChartError;

/// One group of the grouped bar chart: `(label, valueA, valueB)`.
///
/// The label is carried for callers but does not affect geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct BarRow {
    /// Row label (for example a day name).
    pub label: String,
    /// The two bar magnitudes, drawn left to right.
    pub values: [f64; 2],
}

impl BarRow {
    /// Creates a bar row.
    pub fn new(label: impl Into<String>, a: f64, b: f64) -> Self {
        Self {
            label: label.into(),
            values: [a, b],
        }
    }
}

impl<S: Into<String>> From<(S, f64, f64)> for BarRow {
    fn from((label, a, b): (S, f64, f64)) -> Self {
        Self::new(label, a, b)
    }
}

/// One sample of the area chart: `(label, value)`.
#[derive(Clone, Debug, PartialEq)]
pub struct AreaRow {
    /// Row label (for example a date).
    pub label: String,
    /// Sample magnitude.
    pub value: f64,
}

impl AreaRow {
    /// Creates an area row.
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

impl<S: Into<String>> From<(S, f64)> for AreaRow {
    fn from((label, value): (S, f64)) -> Self {
        Self::new(label, value)
    }
}

/// Returns the largest value, rejecting invalid values and an all-zero table.
///
/// `values` yields `(row, value)` pairs.
pub(crate) fn max_magnitude(
    values: impl IntoIterator<Item = (usize, f64)>,
) -> Result<f64, ChartError> {
    let mut max = 0.0_f64;
    for (row, value) in values {
        if !value.is_finite() || value < 0.0 {
            return Err(ChartError::InvalidValue { row, value });
        }
        max = max.max(value);
    }
    if max == 0.0 {
        return Err(ChartError::ZeroMagnitude);
    }
    Ok(max)
}

/// Checks that a logical width or height is finite and positive.
pub(crate) fn checked_extent(field: &'static str, value: f64) -> Result<f64, ChartError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ChartError::InvalidConfig { field, value })
    }
}

/// Checks that an edge inset is finite and not negative.
pub(crate) fn checked_inset(value: f64) -> Result<f64, ChartError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ChartError::InvalidConfig {
            field: "edge_inset",
            value,
        })
    }
}
