// Copyright 2025 the Tally Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG output for `tally_core` canvases.
//!
//! A canvas is written as an `<svg>` element whose `viewBox` is the canvas's logical space
//! and whose `preserveAspectRatio` is `none`, so the browser stretches the chart to fill its
//! mount element independently in x and y. Primitives are written in insertion order.

use std::fmt::{self, Write as _};

use peniko::Brush;
use tally_core::{Canvas, PathPrimitive, Primitive, RectPrimitive, StrokeStyle};

/// How the `<svg>` element is sized in its host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SvgSize {
    /// `width="100%" height="100%"`: fill whatever element the markup is inserted into.
    #[default]
    Fill,
    /// Explicit pixel size taken from the canvas's mount box.
    Mount,
}

/// An SVG rendering of a canvas.
///
/// Implements [`fmt::Display`]; use `to_string()` for an owned string.
#[derive(Clone, Copy, Debug)]
pub struct SvgDocument<'a> {
    canvas: &'a Canvas,
    size: SvgSize,
}

impl<'a> SvgDocument<'a> {
    /// Creates a document that fills its host element.
    pub fn new(canvas: &'a Canvas) -> Self {
        Self {
            canvas,
            size: SvgSize::Fill,
        }
    }

    /// Sets how the `<svg>` element is sized.
    pub fn with_size(mut self, size: SvgSize) -> Self {
        self.size = size;
        self
    }
}

impl fmt::Display for SvgDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let viewport = self.canvas.viewport();
        let logical = viewport.logical();

        f.write_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#)?;
        write!(
            f,
            r#"viewBox="{} {} {} {}" preserveAspectRatio="none" "#,
            logical.x0,
            logical.y0,
            logical.width(),
            logical.height()
        )?;
        match self.size {
            SvgSize::Fill => f.write_str(r#"width="100%" height="100%">"#)?,
            SvgSize::Mount => {
                let mount = viewport.mount();
                write!(f, r#"width="{}" height="{}">"#, mount.width(), mount.height())?;
            }
        }
        f.write_char('\n')?;

        for primitive in self.canvas.primitives() {
            match primitive {
                Primitive::Rect(r) => write_rect(f, r)?,
                Primitive::Path(p) => write_path(f, p)?,
            }
        }

        f.write_str("</svg>\n")
    }
}

/// Writes `canvas` as SVG markup sized to fill its host element.
pub fn to_svg_string(canvas: &Canvas) -> String {
    SvgDocument::new(canvas).to_string()
}

fn write_rect(f: &mut fmt::Formatter<'_>, r: &RectPrimitive) -> fmt::Result {
    write!(
        f,
        r#"<rect x="{}" y="{}" width="{}" height="{}""#,
        r.rect.x0,
        r.rect.y0,
        r.rect.width(),
        r.rect.height(),
    )?;
    write_paint_attr(f, "fill", &r.fill)?;
    write_stroke(f, r.stroke.as_ref())?;
    f.write_str("/>\n")
}

fn write_path(f: &mut fmt::Formatter<'_>, p: &PathPrimitive) -> fmt::Result {
    write!(f, r#"<path d="{}""#, p.path.to_svg())?;
    write_paint_attr(f, "fill", &p.fill)?;
    write_stroke(f, p.stroke.as_ref())?;
    f.write_str("/>\n")
}

fn write_stroke(f: &mut fmt::Formatter<'_>, stroke: Option<&StrokeStyle>) -> fmt::Result {
    match stroke {
        Some(s) if s.stroke_width > 0.0 => {
            write_paint_attr(f, "stroke", &s.brush)?;
            write!(f, r#" stroke-width="{}""#, s.stroke_width)
        }
        _ => f.write_str(r#" stroke-width="0""#),
    }
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let fill = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (fill, opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(f: &mut fmt::Formatter<'_>, name: &str, brush: &Brush) -> fmt::Result {
    let (value, opacity) = svg_paint(brush);
    write!(f, r#" {name}="{value}""#)?;
    if let Some(o) = opacity {
        write!(f, r#" {name}-opacity="{o}""#)?;
    }
    Ok(())
}
