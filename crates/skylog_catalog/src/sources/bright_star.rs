/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Bright-star catalog rows.
//!
//! Rows carry structured J2000 coordinates, a visual magnitude, a handful of
//! catalog designations and a `namesAlt` list whose `NAME ...` entries are
//! the star's common names.

use serde_json::{Map, Value};
use skylog_core::{
    float_or_none, format_dms, format_hms, int_or_none, normalize_str, normalize_value,
    value_kind, value_text, Catalog, CelestialRecord,
};
use skylog_hangul::{NameTable, Transliterator};

use super::SourceBatch;
use crate::error::ParseIssue;
use crate::report::{IssueAction, RecordIssue};

/// Substrings that mark a common name as descriptive rather than proper.
pub const GENERIC_MARKERS: &[&str] = &[
    " star", " nebula", " cluster", " galaxy", " variable", " a ", " b ",
];

const COMMON_NAME_PREFIX: &str = "NAME ";

/// Row filters applied before a star becomes a record.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrightStarFilter {
    /// Stars fainter than this are dropped. Unknown magnitudes always pass.
    pub max_magnitude: Option<f64>,
    /// Drop stars without any common name.
    pub common_names_only: bool,
}

/// What became of one row.
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    Star(Box<CelestialRecord>),
    TooFaint(f64),
    NoCommonName,
}

fn text(fields: &Map<String, Value>, key: &str) -> Option<String> {
    fields.get(key).and_then(normalize_value)
}

/// The first available designation: Bayer/Flamsteed, HD, SAO, DM, ADS, and
/// finally the row's line number.
pub fn star_id(fields: &Map<String, Value>) -> String {
    [
        text(fields, "bayerAndOrFlamsteed"),
        text(fields, "hdId").map(|hd| format!("HD {hd}")),
        text(fields, "saoId").map(|sao| format!("SAO {sao}")),
        text(fields, "dmId"),
        text(fields, "adsId"),
    ]
    .into_iter()
    .flatten()
    .next()
    .unwrap_or_else(|| {
        let line = text(fields, "lineNumber").unwrap_or_else(|| "?".to_string());
        format!("line:{line}")
    })
}

/// Common names from `namesAlt`: entries starting with `NAME `
/// (case-insensitive), prefix removed, deduplicated in first-seen order.
pub fn extract_common_names(names_alt: Option<&Value>) -> Vec<String> {
    let Some(Value::Array(entries)) = names_alt else {
        return Vec::new();
    };

    let mut names: Vec<String> = Vec::new();
    for entry in entries.iter().filter_map(value_text) {
        let entry = entry.trim();
        let is_common = entry
            .get(..COMMON_NAME_PREFIX.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(COMMON_NAME_PREFIX));
        if !is_common {
            continue;
        }
        let name = entry[COMMON_NAME_PREFIX.len()..].trim();
        if !name.is_empty() && !names.iter().any(|seen| seen == name) {
            names.push(name.to_string());
        }
    }
    names
}

fn is_generic(name: &str) -> bool {
    let lower = name.to_lowercase();
    GENERIC_MARKERS.iter().any(|marker| lower.contains(marker))
}

/// Picks the display name among a star's common names.
///
/// A name in the curated table wins outright. Otherwise the shortest
/// non-generic name wins (fewest words, then fewest characters; earlier
/// candidates win ties). Without candidates the first non-empty fallback is
/// used, and the result is empty when there is none.
pub fn choose_primary_name(candidates: &[String], fallbacks: &[&str], names: &NameTable) -> String {
    let present = candidates.iter().filter(|name| !name.is_empty());

    if let Some(curated) = present.clone().find(|name| names.contains(name)) {
        return curated.clone();
    }

    let best = present
        .enumerate()
        .min_by_key(|(index, name)| {
            (
                is_generic(name),
                name.split_whitespace().count(),
                name.chars().count(),
                *index,
            )
        })
        .map(|(_, name)| name.clone());

    best.or_else(|| {
        fallbacks
            .iter()
            .find(|fallback| !fallback.is_empty())
            .map(|fallback| fallback.to_string())
    })
    .unwrap_or_default()
}

fn right_ascension(fields: &Map<String, Value>) -> Option<String> {
    let hours = int_or_none(fields.get("hoursRaJ2000")?)?;
    let minutes = int_or_none(fields.get("minutesRaJ2000")?)?;
    let seconds = float_or_none(fields.get("secondsRaJ2000")?)?;
    Some(format_hms(hours, minutes, seconds))
}

fn declination(fields: &Map<String, Value>) -> Option<String> {
    let negative = fields
        .get("signDecJ2000")
        .and_then(value_text)
        .is_some_and(|sign| sign.trim() == "-");
    let degrees = int_or_none(fields.get("degreesDecJ2000")?)?;
    let minutes = int_or_none(fields.get("minutesDecJ2000")?)?;
    let seconds = float_or_none(fields.get("secondsDecJ2000")?)?;
    Some(format_dms(if negative { -1 } else { 1 }, degrees, minutes, seconds))
}

/// Parses one bright-star row, applying `filter`.
///
/// # Errors
///
/// Returns [`ParseIssue::NotAnObject`] for rows that are not JSON objects.
pub fn parse_bright_star_row(
    row: &Value,
    filter: &BrightStarFilter,
    transliterator: &Transliterator,
) -> Result<RowOutcome, ParseIssue> {
    let fields = row.as_object().ok_or(ParseIssue::NotAnObject {
        found: value_kind(row),
    })?;

    let magnitude = fields.get("visualMagnitude").and_then(float_or_none);
    if let (Some(limit), Some(magnitude)) = (filter.max_magnitude, magnitude) {
        if magnitude > limit {
            return Ok(RowOutcome::TooFaint(magnitude));
        }
    }

    let bayer = text(fields, "bayerAndOrFlamsteed");
    let id = star_id(fields);

    let common = extract_common_names(fields.get("namesAlt"));
    if filter.common_names_only && common.is_empty() {
        return Ok(RowOutcome::NoCommonName);
    }

    let fallbacks = [bayer.as_deref().unwrap_or_default(), id.as_str()];
    let chosen = choose_primary_name(&common, &fallbacks, transliterator.names());
    let primary = normalize_str(&chosen)
        .or_else(|| bayer.clone())
        .unwrap_or_else(|| id.clone());

    let mut aliases_en: Vec<String> = Vec::with_capacity(common.len());
    if !common.is_empty() {
        aliases_en.push(primary.clone());
        for name in common {
            if !aliases_en.contains(&name) {
                aliases_en.push(name);
            }
        }
    }
    let mut aliases_kr: Vec<String> = Vec::with_capacity(aliases_en.len());
    for alias in &aliases_en {
        let hangul = transliterator.transliterate(alias);
        if !aliases_kr.contains(&hangul) {
            aliases_kr.push(hangul);
        }
    }

    let name_kr = transliterator.transliterate(&primary);
    let mut record = CelestialRecord::new(id, Catalog::BrightStar, primary, name_kr);
    record.aliases_en = Some(aliases_en);
    record.aliases_kr = Some(aliases_kr);
    record.ra = right_ascension(fields);
    record.dec = declination(fields);
    record.magnitude = magnitude;
    record.spectral_type = text(fields, "spectralType");
    record.bayer_flamsteed = bayer;
    Ok(RowOutcome::Star(Box::new(record)))
}

pub fn parse_bright_stars(
    rows: &[Value],
    filter: &BrightStarFilter,
    transliterator: &Transliterator,
) -> SourceBatch {
    let mut batch = SourceBatch::new(Catalog::BrightStar);

    for (index, row) in rows.iter().enumerate() {
        match parse_bright_star_row(row, filter, transliterator) {
            Ok(RowOutcome::Star(record)) => {
                batch.counts.parsed += 1;
                batch.records.push(*record);
            }
            Ok(RowOutcome::TooFaint(magnitude)) => {
                tracing::trace!(index, magnitude, "bright star below magnitude limit");
                batch.counts.filtered_magnitude += 1;
            }
            Ok(RowOutcome::NoCommonName) => {
                batch.counts.filtered_common_names += 1;
            }
            Err(issue) => {
                tracing::debug!(index, %issue, "skipped bright-star row");
                batch.counts.skipped += 1;
                batch.issues.push(RecordIssue {
                    catalog: Catalog::BrightStar,
                    index,
                    id: None,
                    action: IssueAction::Skipped,
                    issue,
                });
            }
        }
    }

    batch
}
