/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Per-source parsers. Each turns raw JSON rows into canonical records.

pub mod bright_star;
pub mod messier;
pub mod solar_system;

use skylog_core::{Catalog, CelestialRecord};

use crate::report::RecordIssue;

/// Row tallies for one source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchCounts {
    pub parsed: usize,
    pub degraded: usize,
    pub skipped: usize,
    pub filtered_magnitude: usize,
    pub filtered_common_names: usize,
}

/// Records produced from one source, plus what happened to the rest.
#[derive(Debug, Clone)]
pub struct SourceBatch {
    pub catalog: Catalog,
    pub records: Vec<CelestialRecord>,
    pub counts: BatchCounts,
    pub issues: Vec<RecordIssue>,
}

impl SourceBatch {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            records: Vec::new(),
            counts: BatchCounts::default(),
            issues: Vec::new(),
        }
    }
}
