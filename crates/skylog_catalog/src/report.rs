/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Build statistics and per-record diagnostics.

use serde::Serialize;
use skylog_core::Catalog;

use crate::error::ParseIssue;

/// What happened to a row that raised a [`ParseIssue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueAction {
    /// Replaced by a minimal record.
    Degraded,
    /// Left out of the catalog.
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordIssue {
    pub catalog: Catalog,
    /// Zero-based position of the row in its input file.
    pub index: usize,
    /// Best-effort identifier of the affected row.
    pub id: Option<String>,
    pub action: IssueAction,
    pub issue: ParseIssue,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildReport {
    pub messier_parsed: usize,
    pub messier_degraded: usize,
    pub bright_parsed: usize,
    pub bright_skipped: usize,
    pub bright_filtered_magnitude: usize,
    pub bright_filtered_common_names: usize,
    pub solar: usize,
    pub merged_duplicates: usize,
    pub skipped_empty_id: usize,
    pub written: usize,
    pub issues: Vec<RecordIssue>,
}

impl BuildReport {
    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    /// Emits the summary through `tracing`.
    pub fn log(&self) {
        tracing::info!(
            parsed = self.messier_parsed,
            degraded = self.messier_degraded,
            "Messier rows"
        );
        tracing::info!(
            parsed = self.bright_parsed,
            skipped = self.bright_skipped,
            filtered_magnitude = self.bright_filtered_magnitude,
            filtered_common_names = self.bright_filtered_common_names,
            "bright-star rows"
        );
        tracing::info!(
            solar = self.solar,
            duplicates = self.merged_duplicates,
            empty_ids = self.skipped_empty_id,
            written = self.written,
            "merged catalog"
        );
        for issue in &self.issues {
            tracing::warn!(
                catalog = %issue.catalog,
                index = issue.index,
                id = issue.id.as_deref().unwrap_or("?"),
                action = ?issue.action,
                "{}",
                issue.issue
            );
        }
    }
}
