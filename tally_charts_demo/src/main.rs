// Copyright 2025 the Tally Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renders the review dashboard charts into a standalone HTML page.
mod config;
mod data;
mod html;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use kurbo::{Rect, Size};
use tally_charts::{ChartError, render_area_chart, render_bar_chart};
use tally_core::{Canvas, ChartConfig, RenderedGeometry, create_chart};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::DashboardConfig;
use crate::data::HostStats;

/// Render the review-rate and open-review charts to an HTML page.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Host statistics JSON with `openCloseStats` and `openCountStats` tables.
    ///
    /// The bundled sample statistics are used when omitted.
    #[arg(long)]
    data: Option<PathBuf>,
    /// Dashboard config JSON overriding sizes and colors.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Output HTML file.
    #[arg(long, default_value = "tally_dashboard.html")]
    out: PathBuf,
    /// Mount width in pixels.
    #[arg(long, default_value_t = 480.0)]
    width: f64,
    /// Mount height in pixels.
    #[arg(long, default_value_t = 160.0)]
    height: f64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let stats = match &args.data {
        Some(path) => HostStats::load(path)?,
        None => HostStats::sample()?,
    };
    let config = match &args.config {
        Some(path) => DashboardConfig::load(path)?.into_chart_config()?,
        None => ChartConfig::default(),
    };

    let sections = dashboard_sections(&stats, &config, Size::new(args.width, args.height));
    let html = html::render_report("Code review dashboard", &sections);
    std::fs::write(&args.out, html).with_context(|| format!("writing {}", args.out.display()))?;
    info!(path = %args.out.display(), "wrote dashboard");
    Ok(())
}

fn dashboard_sections(
    stats: &HostStats,
    config: &ChartConfig,
    mount: Size,
) -> Vec<html::HtmlSection> {
    vec![
        chart_section("Reviews opened / closed", mount, config, |canvas| {
            render_bar_chart(canvas, &stats.review_rate, config)
        }),
        chart_section("Open reviews", mount, config, |canvas| {
            render_area_chart(canvas, &stats.open_reviews, config)
        }),
    ]
}

/// Renders one chart into a fresh canvas. A rejected table leaves the mount blank.
fn chart_section(
    title: &str,
    mount: Size,
    config: &ChartConfig,
    render: impl FnOnce(&mut Canvas) -> Result<RenderedGeometry, ChartError>,
) -> html::HtmlSection {
    let mut canvas = create_chart(Rect::from_origin_size((0.0, 0.0), mount), config);
    let svg = match render(&mut canvas) {
        Ok(geometry) => {
            info!(chart = title, primitives = geometry.len(), "rendered chart");
            Some(tally_svg::to_svg_string(&canvas))
        }
        Err(err) => {
            warn!(chart = title, %err, "chart left blank");
            None
        }
    };
    html::HtmlSection {
        title: title.to_string(),
        mount,
        svg,
    }
}
