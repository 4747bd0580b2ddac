// Copyright 2025 the Tally Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Review-dashboard chart renderers for `tally_core`.
//!
//! Two fixed chart shapes are provided, each driven by a pre-computed series table:
//! - a **grouped bar chart** ([`GroupedBarChartSpec`], [`render_bar_chart`]): two adjacent
//!   bars per [`BarRow`], separated from the next group by a one-bar gap, and
//! - a **filled area chart** ([`AreaChartSpec`], [`render_area_chart`]): one closed path whose
//!   top edge runs through the [`AreaRow`] values.
//!
//! Geometry is computed in the logical space of a [`tally_core::ChartConfig`] and scaled so
//! the largest value spans the full logical height. Rendering is a pure function of the
//! table and the config; callers re-render when their data changes.
//!
//! Inputs are validated up front. Tables that would produce non-finite or empty geometry
//! are rejected with a [`ChartError`] and nothing is drawn.

#![no_std]

extern crate alloc;

mod area_chart;
mod bar_chart;
mod error;
mod series;

pub use area_chart::{AreaChartSpec, AreaOutline, render_area_chart};
pub use bar_chart::{GroupedBarChartSpec, GroupedBarLayout, render_bar_chart};
pub use error::ChartError;
pub use series::{AreaRow, BarRow};
