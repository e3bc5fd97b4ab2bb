/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! The end-to-end build: read both sources, parse, merge with the solar
//! system table, sort, write.

use std::path::PathBuf;

use serde_json::Value;
use skylog_core::CelestialRecord;
use skylog_hangul::Transliterator;

use crate::config::{Config, MagnitudeLimit, DEFAULT_OUTPUT};
use crate::error::Result;
use crate::io::{load_rows, to_pretty_json, write_atomic, write_report};
use crate::merge::CatalogMerger;
use crate::report::BuildReport;
use crate::sources::bright_star::{parse_bright_stars, BrightStarFilter};
use crate::sources::messier::parse_messier;
use crate::sources::solar_system::solar_system;

/// Fully resolved build settings.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildOptions {
    pub messier: PathBuf,
    pub bright_stars: PathBuf,
    pub output: PathBuf,
    pub magnitude_limit: MagnitudeLimit,
    pub common_names_only: bool,
    pub report: Option<PathBuf>,
}

impl BuildOptions {
    /// Input paths with every other setting at its default.
    pub fn new(messier: impl Into<PathBuf>, bright_stars: impl Into<PathBuf>) -> Self {
        Self {
            messier: messier.into(),
            bright_stars: bright_stars.into(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            magnitude_limit: MagnitudeLimit::default(),
            common_names_only: false,
            report: None,
        }
    }

    /// Fills settings the caller left unset from `config`.
    pub fn with_config(
        mut self,
        config: &Config,
        output: Option<PathBuf>,
        magnitude_limit: Option<MagnitudeLimit>,
        common_names_only: bool,
    ) -> Self {
        if let Some(output) = output.or_else(|| config.build.output.clone()) {
            self.output = output;
        }
        if let Some(limit) = magnitude_limit.or(config.build.magnitude_threshold) {
            self.magnitude_limit = limit;
        }
        self.common_names_only =
            common_names_only || config.build.common_names_only.unwrap_or(false);
        self
    }

    pub fn filter(&self) -> BrightStarFilter {
        BrightStarFilter {
            max_magnitude: self.magnitude_limit.max_magnitude(),
            common_names_only: self.common_names_only,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CatalogBuild {
    pub records: Vec<CelestialRecord>,
    pub report: BuildReport,
}

#[derive(Debug)]
pub struct CatalogBuilder {
    transliterator: Transliterator,
    filter: BrightStarFilter,
}

impl CatalogBuilder {
    pub fn new(transliterator: Transliterator, filter: BrightStarFilter) -> Self {
        Self {
            transliterator,
            filter,
        }
    }

    pub fn transliterator(&self) -> &Transliterator {
        &self.transliterator
    }

    /// Builds the catalog from already-loaded source rows.
    pub fn build_from_rows(&self, messier_rows: &[Value], bright_rows: &[Value]) -> CatalogBuild {
        let messier = parse_messier(messier_rows, &self.transliterator);
        let bright = parse_bright_stars(bright_rows, &self.filter, &self.transliterator);
        let solar = solar_system();

        let mut report = BuildReport {
            messier_parsed: messier.counts.parsed,
            messier_degraded: messier.counts.degraded,
            bright_parsed: bright.counts.parsed,
            bright_skipped: bright.counts.skipped,
            bright_filtered_magnitude: bright.counts.filtered_magnitude,
            bright_filtered_common_names: bright.counts.filtered_common_names,
            solar: solar.counts.parsed,
            ..Default::default()
        };

        let mut merger = CatalogMerger::new();
        for batch in [messier, bright, solar] {
            report.issues.extend(batch.issues);
            merger.extend(batch.records);
        }
        report.merged_duplicates = merger.duplicates();
        report.skipped_empty_id = merger.skipped_empty_id();

        let records = merger.finish();
        report.written = records.len();
        CatalogBuild { records, report }
    }

    /// Reads the inputs named in `options`, builds, and writes the catalog
    /// (and the report, when requested). Nothing is written if an input
    /// cannot be read, and the catalog is left untouched if the report
    /// cannot be serialized or written.
    pub fn run(&self, options: &BuildOptions) -> Result<CatalogBuild> {
        let messier_rows = load_rows(&options.messier)?;
        let bright_rows = load_rows(&options.bright_stars)?;
        tracing::info!(
            messier = messier_rows.len(),
            bright = bright_rows.len(),
            backend = self.transliterator.backend_name(),
            "loaded source rows"
        );

        let build = self.build_from_rows(&messier_rows, &bright_rows);
        let catalog = to_pretty_json(&build.records)?;
        if let Some(report_path) = &options.report {
            write_report(report_path, &build.report)?;
        }
        write_atomic(&options.output, &catalog)?;
        build.report.log();
        Ok(build)
    }
}
