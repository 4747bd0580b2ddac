// Copyright 2025 the Tally Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Logical-space drawing surface for Tally charts.
//!
//! Chart geometry is computed in a fixed logical coordinate space (by default a
//! `1000 x 1000` grid) rather than in device pixels. A [`Canvas`] pairs that logical space
//! with the pixel box of the element it is mounted in, and stretches one onto the other
//! independently in x and y (the aspect ratio is not preserved).
//!
//! This crate provides:
//! - [`ChartConfig`]: the logical size, palette and stroke settings shared by the chart
//!   renderers,
//! - [`Canvas`] and [`create_chart`]: the drawing surface and its factory,
//! - [`Primitive`]: the rectangles and paths a renderer inserts into a canvas.

#![no_std]

extern crate alloc;

mod canvas;
mod config;
mod primitive;

pub use canvas::{Canvas, RenderedGeometry, Viewport, create_chart};
pub use config::{
    ChartConfig, DEFAULT_HEIGHT, DEFAULT_STROKE_WIDTH, DEFAULT_WIDTH, Palette, StrokeStyle,
};
pub use primitive::{PathPrimitive, Primitive, RectPrimitive};
