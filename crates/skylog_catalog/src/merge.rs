/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Merging source batches into one catalog.
//!
//! Records are keyed by `id`. The first record seen for an id is kept and
//! later ones only fill its gaps, so feeding sources in priority order
//! (Messier, bright stars, solar system) makes the earlier source win.

use indexmap::IndexMap;
use skylog_core::CelestialRecord;

#[derive(Debug, Default)]
pub struct CatalogMerger {
    by_id: IndexMap<String, CelestialRecord>,
    duplicates: usize,
    skipped_empty_id: usize,
}

impl CatalogMerger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: CelestialRecord) {
        if record.id.is_empty() {
            self.skipped_empty_id += 1;
            return;
        }

        match self.by_id.get_mut(&record.id) {
            Some(existing) => {
                let filled = existing.fill_missing(record);
                self.duplicates += 1;
                tracing::trace!(id = %existing.id, filled, "merged duplicate id");
            }
            None => {
                self.by_id.insert(record.id.clone(), record);
            }
        }
    }

    pub fn extend<I: IntoIterator<Item = CelestialRecord>>(&mut self, records: I) {
        for record in records {
            self.push(record);
        }
    }

    /// Records that shared an id with an earlier one.
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    pub fn skipped_empty_id(&self) -> usize {
        self.skipped_empty_id
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// The merged records in output order.
    pub fn finish(self) -> Vec<CelestialRecord> {
        let mut records: Vec<CelestialRecord> = self.by_id.into_values().collect();
        records.sort_by(CelestialRecord::catalog_order);
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skylog_core::Catalog;

    fn record(id: &str, catalog: Catalog, name: &str, magnitude: Option<f64>) -> CelestialRecord {
        let mut record = CelestialRecord::new(id, catalog, name, name);
        record.magnitude = magnitude;
        record
    }

    #[test]
    fn test_first_record_wins_and_gaps_are_filled() {
        let mut first = record("M45", Catalog::Messier, "Pleiades", None);
        first.ra = Some("03:47:00.00".to_string());

        let mut second = record("M45", Catalog::BrightStar, "Seven Sisters", Some(1.6));
        second.ra = Some("00:00:00.00".to_string());
        second.spectral_type = Some("B7III".to_string());

        let mut merger = CatalogMerger::new();
        merger.extend([first, second]);
        assert_eq!(merger.duplicates(), 1);

        let merged = merger.finish();
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].catalog, Catalog::Messier);
        assert_eq!(merged[0].name_en, "Pleiades");
        assert_eq!(merged[0].ra.as_deref(), Some("03:47:00.00"));
        assert_eq!(merged[0].magnitude, Some(1.6));
        assert_eq!(merged[0].spectral_type.as_deref(), Some("B7III"));
    }

    #[test]
    fn test_empty_ids_are_skipped() {
        let mut merger = CatalogMerger::new();
        merger.push(record("", Catalog::Messier, "Nameless", None));
        assert!(merger.is_empty());
        assert_eq!(merger.skipped_empty_id(), 1);
    }

    #[test]
    fn test_output_order() {
        let mut merger = CatalogMerger::new();
        merger.extend([
            record("planet:mars", Catalog::SolarSystem, "Mars", None),
            record("M31", Catalog::Messier, "Andromeda Galaxy", Some(3.4)),
            record("M1", Catalog::Messier, "Crab Nebula", Some(8.4)),
            record("HD 2", Catalog::BrightStar, "Zeta", None),
            record("HD 1", Catalog::BrightStar, "Alpha", None),
            record("HD 3", Catalog::BrightStar, "Vega", Some(0.03)),
        ]);

        let ids: Vec<String> = merger.finish().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["HD 3", "HD 1", "HD 2", "M31", "M1", "planet:mars"]);
    }
}
