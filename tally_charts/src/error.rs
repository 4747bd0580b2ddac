// Copyright 2025 the Tally Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors returned by the chart renderers.

/// Reasons a series table cannot be rendered with a given config.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ChartError {
    /// The table has no rows.
    #[error("series table is empty")]
    EmptySeries,
    /// The table has fewer rows than the chart needs.
    #[error("series table has {got} row(s), at least {required} required")]
    TooFewRows {
        /// Minimum number of rows.
        required: usize,
        /// Number of rows supplied.
        got: usize,
    },
    /// Every value in the table is zero, so there is nothing to scale against.
    #[error("every value in the series table is zero")]
    ZeroMagnitude,
    /// A value is negative, infinite or NaN.
    #[error("row {row} holds invalid value {value}")]
    InvalidValue {
        /// Index of the offending row.
        row: usize,
        /// The offending value.
        value: f64,
    },
    /// A chart dimension is non-finite or out of range.
    #[error("chart {field} must be finite and in range, got {value}")]
    InvalidConfig {
        /// Name of the offending setting.
        field: &'static str,
        /// The offending value.
        value: f64,
    },
}

impl ChartError {
    /// Returns `true` for tables that are well formed but too small or flat to draw.
    pub fn is_degenerate(&self) -> bool {
        matches!(
            self,
            Self::EmptySeries | Self::TooFewRows { .. } | Self::ZeroMagnitude
        )
    }
}
