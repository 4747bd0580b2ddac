// Copyright 2025 the Tally Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-supplied statistics.
//!
//! The host page publishes pre-aggregated review statistics as JSON. Only the two chart
//! tables are read here; everything else in the document is ignored.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tally_charts::{AreaRow, BarRow};

const SAMPLE: &str = include_str!("../data/leader_stats.json");

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawStats {
    open_close_stats: Vec<(String, f64, f64)>,
    open_count_stats: Vec<(String, f64)>,
}

/// The two series tables shown on the dashboard.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct HostStats {
    /// Reviews opened and closed per period, for the grouped bar chart.
    pub(crate) review_rate: Vec<BarRow>,
    /// Open review count over time, for the area chart.
    pub(crate) open_reviews: Vec<AreaRow>,
}

impl HostStats {
    pub(crate) fn from_json(json: &str) -> Result<Self> {
        let raw: RawStats = serde_json::from_str(json).context("parsing host statistics")?;
        Ok(Self {
            review_rate: raw.open_close_stats.into_iter().map(BarRow::from).collect(),
            open_reviews: raw.open_count_stats.into_iter().map(AreaRow::from).collect(),
        })
    }

    pub(crate) fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("loading {}", path.display()))
    }

    /// The bundled sample statistics.
    pub(crate) fn sample() -> Result<Self> {
        Self::from_json(SAMPLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_parses() {
        let stats = HostStats::sample().expect("bundled sample is valid");
        assert_eq!(stats.review_rate.len(), 5, "five weekdays");
        assert_eq!(stats.review_rate[0], BarRow::new("Mon", 12.0, 9.0));
        assert_eq!(stats.open_reviews.len(), 8, "eight samples");
        assert_eq!(stats.open_reviews[7], AreaRow::new("2025-06-11", 42.0));
    }

    #[test]
    fn unrelated_fields_are_ignored() {
        let stats = HostStats::from_json(
            r#"{
                "fame": [["x", 1]],
                "openCloseStats": [["a", 1, 2]],
                "openCountStats": [["a", 3], ["b", 4]]
            }"#,
        )
        .expect("valid");
        assert_eq!(stats.review_rate, vec![BarRow::new("a", 1.0, 2.0)]);
        assert_eq!(stats.open_reviews.len(), 2, "two samples");
    }

    #[test]
    fn wrong_arity_is_rejected() {
        let err = HostStats::from_json(
            r#"{ "openCloseStats": [["a", 1]], "openCountStats": [] }"#,
        )
        .expect_err("bar rows need two values");
        assert!(
            format!("{err:#}").contains("parsing host statistics"),
            "{err:#}"
        );
    }
}
