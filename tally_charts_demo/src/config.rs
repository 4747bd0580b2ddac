// Copyright 2025 the Tally Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON dashboard configuration.

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use peniko::Color;
use peniko::color::{Srgb, parse_color};
use serde::Deserialize;
use tally_core::{ChartConfig, Palette};

/// Overrides for [`ChartConfig`]. Every field is optional; omitted fields keep the defaults.
///
/// Colors are CSS color strings (`"#e63a16"`, `"navy"`, `"rgb(...)"`).
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub(crate) struct DashboardConfig {
    width: Option<f64>,
    height: Option<f64>,
    stroke_width: Option<f64>,
    edge_inset: Option<f64>,
    palette: Option<Vec<String>>,
    area_stroke: Option<String>,
    area_fill: Option<String>,
}

impl DashboardConfig {
    pub(crate) fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&json).with_context(|| format!("parsing {}", path.display()))
    }

    pub(crate) fn into_chart_config(self) -> Result<ChartConfig> {
        let mut config = ChartConfig::default();
        if let Some(width) = self.width {
            config.width = positive("width", width)?;
        }
        if let Some(height) = self.height {
            config.height = positive("height", height)?;
        }
        if let Some(stroke_width) = self.stroke_width {
            config.area_stroke.stroke_width = non_negative("strokeWidth", stroke_width)?;
        }
        if let Some(inset) = self.edge_inset {
            config.edge_inset = Some(non_negative("edgeInset", inset)?);
        }
        if let Some(palette) = self.palette {
            if palette.is_empty() {
                return Err(anyhow!("palette must list at least one color"));
            }
            let colors = palette
                .iter()
                .map(String::as_str)
                .map(color)
                .collect::<Result<Vec<_>>>()?;
            config.palette = Palette::new(colors);
        }
        if let Some(stroke) = self.area_stroke {
            config.area_stroke.brush = color(&stroke)?.into();
        }
        if let Some(fill) = self.area_fill {
            config.area_fill = color(&fill)?.into();
        }
        Ok(config)
    }
}

fn color(s: &str) -> Result<Color> {
    let parsed = parse_color(s).map_err(|e| anyhow!("invalid color {s:?}: {e}"))?;
    Ok(parsed.to_alpha_color::<Srgb>())
}

fn positive(name: &str, v: f64) -> Result<f64> {
    if v.is_finite() && v > 0.0 {
        Ok(v)
    } else {
        Err(anyhow!("{name} must be a positive number, got {v}"))
    }
}

fn non_negative(name: &str, v: f64) -> Result<f64> {
    if v.is_finite() && v >= 0.0 {
        Ok(v)
    } else {
        Err(anyhow!("{name} must be a non-negative number, got {v}"))
    }
}
