// Copyright 2025 the Tally Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The chart drawing surface and its factory.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::config::ChartConfig;
use crate::primitive::{PathPrimitive, Primitive, RectPrimitive};

/// Maps a logical drawing space onto a mount's pixel box.
///
/// Scaling is independent per axis: the logical space is stretched to fill the mount
/// exactly, so the aspect ratio is not preserved.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    logical: Rect,
    mount: Rect,
}

impl Viewport {
    /// Creates a viewport mapping `logical` onto `mount`.
    pub fn new(logical: Rect, mount: Rect) -> Self {
        Self { logical, mount }
    }

    /// Returns the logical drawing space.
    pub fn logical(&self) -> Rect {
        self.logical
    }

    /// Returns the mount's pixel box.
    pub fn mount(&self) -> Rect {
        self.mount
    }

    /// Returns the per-axis scale factors from logical units to pixels.
    ///
    /// An axis with an empty logical extent scales to `0`.
    pub fn scale(&self) -> Vec2 {
        Vec2::new(
            axis_scale(self.logical.width(), self.mount.width()),
            axis_scale(self.logical.height(), self.mount.height()),
        )
    }

    /// Returns the affine transform from logical coordinates to device pixels.
    pub fn transform(&self) -> Affine {
        let s = self.scale();
        Affine::translate(self.mount.origin().to_vec2())
            * Affine::scale_non_uniform(s.x, s.y)
            * Affine::translate(-self.logical.origin().to_vec2())
    }
}

fn axis_scale(logical: f64, mount: f64) -> f64 {
    if logical == 0.0 { 0.0 } else { mount / logical }
}

/// A drawing surface with a fixed logical coordinate system.
///
/// Renderers insert [`Primitive`]s in logical coordinates; the canvas keeps them in insertion
/// order. Device-space placement is described by [`Canvas::viewport`].
#[derive(Clone, Debug)]
pub struct Canvas {
    viewport: Viewport,
    primitives: Vec<Primitive>,
}

/// Creates a canvas for a mount occupying `mount` (in pixels), with the logical space from
/// `config`.
pub fn create_chart(mount: Rect, config: &ChartConfig) -> Canvas {
    Canvas::new(Viewport::new(config.logical_rect(), mount))
}

impl Canvas {
    /// Creates an empty canvas for the given viewport.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            primitives: Vec::new(),
        }
    }

    /// Returns the viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Returns the logical size.
    pub fn logical_size(&self) -> Size {
        self.viewport.logical.size()
    }

    /// Moves or resizes the mount box. Inserted primitives are kept as is.
    pub fn set_mount(&mut self, mount: Rect) {
        self.viewport.mount = mount;
    }

    /// Returns the transform from logical coordinates to device pixels.
    pub fn device_transform(&self) -> Affine {
        self.viewport.transform()
    }

    /// Maps a logical point to device pixels.
    pub fn to_device(&self, p: Point) -> Point {
        self.device_transform() * p
    }

    /// Inserts a rectangle.
    pub fn insert_rect(&mut self, rect: RectPrimitive) {
        self.primitives.push(Primitive::Rect(rect));
    }

    /// Inserts a path.
    pub fn insert_path(&mut self, path: PathPrimitive) {
        self.primitives.push(Primitive::Path(path));
    }

    /// Inserts a batch of primitives, preserving their order.
    pub fn extend(&mut self, primitives: impl IntoIterator<Item = Primitive>) {
        self.primitives.extend(primitives);
    }

    /// Returns the inserted primitives, in insertion order.
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Returns the number of inserted primitives.
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Returns `true` if nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Removes every primitive, keeping the viewport.
    ///
    /// Callers redrawing a chart on new data clear first and render again.
    pub fn clear(&mut self) {
        self.primitives.clear();
    }
}

/// The primitives produced by a single render call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderedGeometry {
    /// Emitted primitives, in drawing order.
    pub primitives: Vec<Primitive>,
}

impl RenderedGeometry {
    /// Wraps a list of primitives.
    pub fn new(primitives: Vec<Primitive>) -> Self {
        Self { primitives }
    }

    /// Returns the emitted rectangles, in drawing order.
    pub fn rects(&self) -> impl Iterator<Item = &RectPrimitive> + '_ {
        self.primitives.iter().filter_map(Primitive::as_rect)
    }

    /// Returns the emitted paths, in drawing order.
    pub fn paths(&self) -> impl Iterator<Item = &PathPrimitive> + '_ {
        self.primitives.iter().filter_map(Primitive::as_path)
    }

    /// Returns the number of emitted primitives.
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Returns `true` if nothing was emitted.
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}
