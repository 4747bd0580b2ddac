// Copyright 2025 the Tally Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Filled area chart generation.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{BezPath, Point};
use peniko::Brush;
use tally_core::{Canvas, ChartConfig, PathPrimitive, Primitive, RenderedGeometry, StrokeStyle};
use tracing::{debug, warn};

use crate::error::ChartError;
use crate::series::{AreaRow, checked_extent, checked_inset, max_magnitude};

/// Minimum number of rows an area chart can span.
const MIN_ROWS: usize = 2;

/// Boundary of a filled area chart, in logical coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct AreaOutline {
    /// Largest value in the table.
    pub max_value: f64,
    /// Horizontal distance between consecutive samples.
    pub h_offset: f64,
    /// Distance the outline is carried past the left, right and bottom edges.
    pub edge_inset: f64,
    /// One point per row, in row order.
    pub points: Vec<Point>,
    /// Every vertex of the closed boundary, in drawing order.
    ///
    /// This is `points` with a lead-in vertex before the first sample, a lead-out vertex
    /// after the last, and two closing vertices below the bottom edge.
    pub vertices: Vec<Point>,
}

impl AreaOutline {
    /// Builds the closed path through [`AreaOutline::vertices`].
    pub fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        let mut it = self.vertices.iter().copied();
        if let Some(first) = it.next() {
            path.move_to(first);
            for p in it {
                path.line_to(p);
            }
            path.close_path();
        }
        path
    }
}

/// A filled area chart.
///
/// Samples are spaced evenly across the full width, the first at `x = 0` and the last at
/// `x = width`, with the table-wide maximum reaching `y = 0`. The area below the samples is
/// filled and its boundary stroked.
///
/// The stroke is centered on the boundary. To keep only the top polyline visible, the
/// boundary is extended `edge_inset` past the left and right edges at the height of the
/// first and last samples, and closed `edge_inset` below the bottom edge. The samples
/// themselves are not shifted, so the first and last top segments are horizontal.
#[derive(Clone, Debug)]
pub struct AreaChartSpec {
    /// Logical width of the chart.
    pub width: f64,
    /// Logical height of the chart; the baseline sits at `y = height`.
    pub height: f64,
    /// Outline stroke.
    pub stroke: StrokeStyle,
    /// Fill paint.
    pub fill: Brush,
    /// Edge compensation distance.
    pub edge_inset: f64,
}

impl AreaChartSpec {
    /// Creates a chart from a chart config.
    pub fn new(config: &ChartConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            stroke: config.area_stroke.clone(),
            fill: config.area_fill.clone(),
            edge_inset: config.edge_inset(),
        }
    }

    /// Sets the outline stroke. The edge inset is left unchanged.
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = stroke;
        self
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the edge compensation distance.
    pub fn with_edge_inset(mut self, edge_inset: f64) -> Self {
        self.edge_inset = edge_inset;
        self
    }

    /// Computes the closed boundary for `rows`.
    ///
    /// Fails if the logical size is not finite and positive, if the inset is not finite and
    /// non-negative, or if the table cannot be drawn.
    pub fn outline(&self, rows: &[AreaRow]) -> Result<AreaOutline, ChartError> {
        let width = checked_extent("width", self.width)?;
        let height = checked_extent("height", self.height)?;
        let inset = checked_inset(self.edge_inset)?;
        if rows.len() < MIN_ROWS {
            return Err(ChartError::TooFewRows {
                required: MIN_ROWS,
                got: rows.len(),
            });
        }
        let max_value = max_magnitude(rows.iter().map(|r| r.value).enumerate())?;
        let h_offset = width / (rows.len() - 1) as f64;

        let points: Vec<Point> = rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let y = height - row.value / max_value * height;
                Point::new(h_offset * i as f64, y)
            })
            .collect();

        let first = points[0];
        let last = points[points.len() - 1];
        let mut vertices = Vec::with_capacity(points.len() + 4);
        vertices.push(Point::new(first.x - inset, first.y));
        vertices.extend_from_slice(&points);
        vertices.push(Point::new(last.x + inset, last.y));
        vertices.push(Point::new(width + inset, height + inset));
        vertices.push(Point::new(-inset, height + inset));

        Ok(AreaOutline {
            max_value,
            h_offset,
            edge_inset: inset,
            points,
            vertices,
        })
    }

    /// Generates the single filled and stroked path.
    pub fn primitives(&self, rows: &[AreaRow]) -> Result<Vec<Primitive>, ChartError> {
        let outline = self.outline(rows)?;
        Ok(alloc::vec![Primitive::Path(PathPrimitive {
            path: outline.to_path(),
            fill: self.fill.clone(),
            stroke: Some(self.stroke.clone()),
        })])
    }
}

/// Renders a filled area chart of `rows` into `canvas`.
///
/// On error the canvas is left untouched.
pub fn render_area_chart(
    canvas: &mut Canvas,
    rows: &[AreaRow],
    config: &ChartConfig,
) -> Result<RenderedGeometry, ChartError> {
    let spec = AreaChartSpec::new(config);
    let primitives = spec.primitives(rows).inspect_err(|err| {
        warn!(rows = rows.len(), %err, "rejected area chart input");
    })?;
    debug!(
        rows = rows.len(),
        edge_inset = spec.edge_inset,
        "rendered area chart"
    );
    canvas.extend(primitives.iter().cloned());
    Ok(RenderedGeometry::new(primitives))
}
