// Copyright 2025 the Tally Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grouped bar chart generation.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Rect;
use tally_core::{Canvas, ChartConfig, Palette, Primitive, RectPrimitive, RenderedGeometry};
use tracing::{debug, warn};

use crate::error::ChartError;
use crate::series::{BarRow, checked_extent, max_magnitude};

/// Horizontal slots per group: two bars and a gap.
const SLOTS_PER_GROUP: usize = 3;

/// Scale factors for a grouped bar chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GroupedBarLayout {
    /// Largest value across both columns of every row.
    pub max_value: f64,
    /// Width of a single bar (and of the gap after each group).
    pub col_width: f64,
    /// Number of groups.
    pub groups: usize,
}

impl GroupedBarLayout {
    /// Returns the left edge of column `col` in group `group`.
    pub fn h_offset(&self, group: usize, col: usize) -> f64 {
        self.col_width * (SLOTS_PER_GROUP * group + col) as f64
    }
}

/// A grouped bar chart.
///
/// Each row becomes a group of two adjacent bars, colored by column from the palette. Groups
/// are laid out left to right in row order and separated by a one-bar gap; the last group has
/// no trailing gap, so a table of `N` rows divides the width into `3N - 1` slots. Bar heights
/// are proportional to the table-wide maximum, which spans the full height.
#[derive(Clone, Debug)]
pub struct GroupedBarChartSpec {
    /// Logical width of the chart.
    pub width: f64,
    /// Logical height of the chart; bars stand on `y = height`.
    pub height: f64,
    /// Fill paints, indexed by column.
    pub palette: Palette,
}

impl GroupedBarChartSpec {
    /// Creates a chart from a chart config.
    pub fn new(config: &ChartConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            palette: config.palette.clone(),
        }
    }

    /// Sets the palette.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Computes the scale factors for `rows`.
    ///
    /// Fails if the logical size is not finite and positive, or if the table cannot be drawn.
    pub fn layout(&self, rows: &[BarRow]) -> Result<GroupedBarLayout, ChartError> {
        let width = checked_extent("width", self.width)?;
        checked_extent("height", self.height)?;
        if rows.is_empty() {
            return Err(ChartError::EmptySeries);
        }
        let max_value = max_magnitude(
            rows.iter()
                .enumerate()
                .flat_map(|(i, row)| row.values.iter().map(move |&v| (i, v))),
        )?;
        let groups = rows.len();
        let slots = SLOTS_PER_GROUP * groups - 1;
        Ok(GroupedBarLayout {
            max_value,
            col_width: width / slots as f64,
            groups,
        })
    }

    /// Generates one rectangle per value, group by group.
    pub fn primitives(&self, rows: &[BarRow]) -> Result<Vec<Primitive>, ChartError> {
        let layout = self.layout(rows)?;
        let height = self.height;

        let mut out = Vec::with_capacity(rows.len() * 2);
        for (group, row) in rows.iter().enumerate() {
            for (col, &value) in row.values.iter().enumerate() {
                let col_height = value / layout.max_value * height;
                let h_offset = layout.h_offset(group, col);
                let v_offset = height - col_height;
                out.push(Primitive::Rect(RectPrimitive {
                    rect: Rect::from_origin_size(
                        (h_offset, v_offset),
                        (layout.col_width, col_height),
                    ),
                    fill: self.palette.get(col),
                    stroke: None,
                }));
            }
        }
        Ok(out)
    }
}

/// Renders a grouped bar chart of `rows` into `canvas`.
///
/// On error the canvas is left untouched.
pub fn render_bar_chart(
    canvas: &mut Canvas,
    rows: &[BarRow],
    config: &ChartConfig,
) -> Result<RenderedGeometry, ChartError> {
    let spec = GroupedBarChartSpec::new(config);
    let primitives = spec.primitives(rows).inspect_err(|err| {
        warn!(rows = rows.len(), %err, "rejected grouped bar chart input");
    })?;
    debug!(
        rows = rows.len(),
        rects = primitives.len(),
        "rendered grouped bar chart"
    );
    canvas.extend(primitives.iter().cloned());
    Ok(RenderedGeometry::new(primitives))
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    #[test]
    fn gap_slot_follows_each_group() {
        let spec = GroupedBarChartSpec::new(&ChartConfig::default());
        let rows = vec![
            BarRow::new("a", 1.0, 1.0),
            BarRow::new("b", 1.0, 1.0),
            BarRow::new("c", 1.0, 1.0),
        ];
        let layout = spec.layout(&rows).expect("valid rows");
        assert_eq!(layout.groups, 3);
        assert!((layout.col_width - 125.0).abs() < 1e-9, "{layout:?}");
        assert!((layout.h_offset(1, 0) - 375.0).abs() < 1e-9, "{layout:?}");
        assert!((layout.h_offset(2, 1) - 875.0).abs() < 1e-9, "{layout:?}");
    }

    #[test]
    fn last_bar_ends_at_right_edge() {
        let spec = GroupedBarChartSpec::new(&ChartConfig::default());
        let rows = vec![BarRow::new("a", 3.0, 1.0), BarRow::new("b", 2.0, 5.0)];
        let prims = spec.primitives(&rows).expect("valid rows");
        let last = prims.last().and_then(Primitive::as_rect).expect("rect");
        assert!((last.rect.x1 - 1000.0).abs() < 1e-9, "{last:?}");
    }

    #[test]
    fn bars_use_palette_by_column() {
        let config = ChartConfig::default();
        let spec = GroupedBarChartSpec::new(&config);
        let rows = vec![BarRow::new("a", 1.0, 2.0), BarRow::new("b", 3.0, 4.0)];
        let prims = spec.primitives(&rows).expect("valid rows");
        for (i, p) in prims.iter().enumerate() {
            let rect = p.as_rect().expect("bar charts emit rects");
            assert_eq!(rect.fill, config.palette.get(i % 2), "bar {i}");
            assert!(rect.stroke.is_none(), "bars are not stroked");
        }
    }

    #[test]
    fn layout_rejects_bad_tables() {
        let spec = GroupedBarChartSpec::new(&ChartConfig::default());
        assert_eq!(spec.layout(&[]), Err(ChartError::EmptySeries));
        assert_eq!(
            spec.layout(&[BarRow::new("a", 0.0, 0.0)]),
            Err(ChartError::ZeroMagnitude)
        );
        assert_eq!(
            spec.layout(&[BarRow::new("a", 1.0, 1.0), BarRow::new("b", 2.0, f64::NEG_INFINITY)]),
            Err(ChartError::InvalidValue {
                row: 1,
                value: f64::NEG_INFINITY
            })
        );
    }

    #[test]
    fn layout_rejects_bad_size_before_rows() {
        let mut spec = GroupedBarChartSpec::new(&ChartConfig::default());
        spec.height = -1.0;
        assert_eq!(
            spec.layout(&[]),
            Err(ChartError::InvalidConfig {
                field: "height",
                value: -1.0
            })
        );
    }
}
