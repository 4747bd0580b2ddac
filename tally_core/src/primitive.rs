// Copyright 2025 the Tally Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vector primitives emitted by chart renderers.

use kurbo::{BezPath, PathEl, Point, Rect, Shape as _};
use peniko::Brush;

use crate::config::StrokeStyle;

/// A filled rectangle in logical coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct RectPrimitive {
    /// Rectangle geometry.
    pub rect: Rect,
    /// Fill paint.
    pub fill: Brush,
    /// Optional outline. `None` draws with a stroke width of zero.
    pub stroke: Option<StrokeStyle>,
}

/// A filled and/or stroked path in logical coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct PathPrimitive {
    /// Path geometry.
    pub path: BezPath,
    /// Fill paint.
    pub fill: Brush,
    /// Optional outline.
    pub stroke: Option<StrokeStyle>,
}

impl PathPrimitive {
    /// Returns the on-curve points of the path, in drawing order.
    ///
    /// `ClosePath` contributes no vertex; curve control points are skipped.
    pub fn vertices(&self) -> impl Iterator<Item = Point> + '_ {
        self.path.elements().iter().filter_map(|el| match *el {
            PathEl::MoveTo(p) | PathEl::LineTo(p) => Some(p),
            PathEl::QuadTo(_, p) | PathEl::CurveTo(_, _, p) => Some(p),
            PathEl::ClosePath => None,
        })
    }

    /// Returns `true` if the path ends with `ClosePath`.
    pub fn is_closed(&self) -> bool {
        matches!(self.path.elements().last(), Some(PathEl::ClosePath))
    }
}

/// A single drawable primitive.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    /// A rectangle.
    Rect(RectPrimitive),
    /// A path.
    Path(PathPrimitive),
}

impl Primitive {
    /// Returns the rectangle payload, if this is a rectangle.
    pub fn as_rect(&self) -> Option<&RectPrimitive> {
        match self {
            Self::Rect(r) => Some(r),
            Self::Path(_) => None,
        }
    }

    /// Returns the path payload, if this is a path.
    pub fn as_path(&self) -> Option<&PathPrimitive> {
        match self {
            Self::Path(p) => Some(p),
            Self::Rect(_) => None,
        }
    }

    /// Returns the logical-space bounding box, ignoring stroke width.
    pub fn bounds(&self) -> Rect {
        match self {
            Self::Rect(r) => r.rect,
            Self::Path(p) => p.path.bounding_box(),
        }
    }
}

impl From<RectPrimitive> for Primitive {
    fn from(value: RectPrimitive) -> Self {
        Self::Rect(value)
    }
}

impl From<PathPrimitive> for Primitive {
    fn from(value: PathPrimitive) -> Self {
        Self::Path(value)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn triangle() -> PathPrimitive {
        let mut path = BezPath::new();
        path.move_to((0.0, 10.0));
        path.line_to((5.0, 0.0));
        path.line_to((10.0, 10.0));
        path.close_path();
        PathPrimitive {
            path,
            fill: Brush::default(),
            stroke: None,
        }
    }

    #[test]
    fn path_vertices_skip_close() {
        let tri = triangle();
        let pts: std::vec::Vec<_> = tri.vertices().collect();
        assert_eq!(
            pts,
            [
                Point::new(0.0, 10.0),
                Point::new(5.0, 0.0),
                Point::new(10.0, 10.0)
            ]
        );
        assert!(tri.is_closed(), "triangle should be closed");
    }

    #[test]
    fn bounds_cover_payload() {
        let rect = Primitive::from(RectPrimitive {
            rect: Rect::new(1.0, 2.0, 3.0, 4.0),
            fill: Brush::default(),
            stroke: None,
        });
        assert_eq!(rect.bounds(), Rect::new(1.0, 2.0, 3.0, 4.0));
        assert!(rect.as_path().is_none(), "rect is not a path");

        let path = Primitive::from(triangle());
        assert_eq!(path.bounds(), Rect::new(0.0, 0.0, 10.0, 10.0));
        assert!(path.as_rect().is_none(), "path is not a rect");
    }
}
