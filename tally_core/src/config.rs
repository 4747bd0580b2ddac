// Copyright 2025 the Tally Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart configuration shared by the canvas factory and the chart renderers.

use kurbo::{Rect, Size};
use peniko::{Brush, Color};
use smallvec::SmallVec;

/// Default logical width of a chart.
pub const DEFAULT_WIDTH: f64 = 1000.0;
/// Default logical height of a chart.
pub const DEFAULT_HEIGHT: f64 = 1000.0;
/// Default stroke width of the area chart outline, in logical units.
pub const DEFAULT_STROKE_WIDTH: f64 = 10.0;

const RED: Color = Color::from_rgb8(0xe6, 0x3a, 0x16);
const NAVY: Color = Color::from_rgb8(0x15, 0x3b, 0x5f);
const RUST: Color = Color::from_rgb8(0x5f, 0x1a, 0x0a);

/// Stroke styling for outlines.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in logical units.
    pub stroke_width: f64,
}

impl StrokeStyle {
    /// Convenience for a solid stroke.
    pub fn solid(brush: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            brush: brush.into(),
            stroke_width,
        }
    }
}

/// An ordered set of fill paints, indexed by series column.
///
/// Lookups wrap around, so a palette shorter than the number of columns repeats.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    brushes: SmallVec<[Brush; 2]>,
}

impl Palette {
    /// Creates a palette from the given paints.
    pub fn new<B: Into<Brush>>(brushes: impl IntoIterator<Item = B>) -> Self {
        Self {
            brushes: brushes.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the paint for column `index`.
    ///
    /// An empty palette yields `Brush::default()`.
    pub fn get(&self, index: usize) -> Brush {
        if self.brushes.is_empty() {
            return Brush::default();
        }
        self.brushes[index % self.brushes.len()].clone()
    }

    /// Returns the number of distinct paints.
    pub fn len(&self) -> usize {
        self.brushes.len()
    }

    /// Returns `true` if the palette holds no paints.
    pub fn is_empty(&self) -> bool {
        self.brushes.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new([RED, NAVY])
    }
}

/// Logical size and styling shared by the canvas factory and both chart renderers.
///
/// All fields have defaults matching the dashboard look: a `1000 x 1000` logical grid, a
/// red/navy bar palette, and a red `10`-unit outline over a dark fill for the area chart.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartConfig {
    /// Logical width of the drawing space.
    pub width: f64,
    /// Logical height of the drawing space.
    pub height: f64,
    /// Fill paints for the two bars of each group.
    pub palette: Palette,
    /// Outline of the area chart.
    pub area_stroke: StrokeStyle,
    /// Fill of the area chart.
    pub area_fill: Brush,
    /// Distance the area outline is pushed past the canvas edges.
    ///
    /// `None` uses the outline's stroke width.
    pub edge_inset: Option<f64>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            palette: Palette::default(),
            area_stroke: StrokeStyle::solid(RED, DEFAULT_STROKE_WIDTH),
            area_fill: RUST.into(),
            edge_inset: None,
        }
    }
}

impl ChartConfig {
    /// Sets the logical size.
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the bar palette.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Sets the area outline.
    pub fn with_area_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.area_stroke = stroke;
        self
    }

    /// Sets only the width of the area outline.
    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.area_stroke.stroke_width = stroke_width;
        self
    }

    /// Sets the area fill paint.
    pub fn with_area_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.area_fill = fill.into();
        self
    }

    /// Overrides the edge inset of the area outline.
    pub fn with_edge_inset(mut self, inset: f64) -> Self {
        self.edge_inset = Some(inset);
        self
    }

    /// Returns the stroke width of the area outline.
    pub fn stroke_width(&self) -> f64 {
        self.area_stroke.stroke_width
    }

    /// Returns the effective edge inset of the area outline.
    pub fn edge_inset(&self) -> f64 {
        self.edge_inset.unwrap_or(self.area_stroke.stroke_width)
    }

    /// Returns the logical size.
    pub fn logical_size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Returns the logical drawing space, anchored at the origin.
    pub fn logical_rect(&self) -> Rect {
        Rect::from_origin_size((0.0, 0.0), self.logical_size())
    }
}
