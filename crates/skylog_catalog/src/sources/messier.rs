/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Messier catalog rows.
//!
//! Rows look like `{"name": "M1, Crab Nebula.", "coordinates": "RA 05h 34.5m,
//! Dec +22° 01'", "magnitude": 8.4}`, optionally with explicit `name_en` and
//! `name_kr` fields. Coordinates are free text and are scanned with
//! tolerant patterns; anything they do not recognize is left null.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde_json::{Map, Value};
use skylog_core::{
    float_or_none, format_dms, format_hms, normalize_value, value_kind, Catalog, CelestialRecord,
};
use skylog_hangul::Transliterator;

use super::SourceBatch;
use crate::error::ParseIssue;
use crate::report::{IssueAction, RecordIssue};

/// Identifier used when a row carries no recognizable Messier number.
pub const UNKNOWN_ID: &str = "M?";

static MESSIER_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bM\s*([0-9]{1,3})\b").expect("valid Messier id pattern"));

static RIGHT_ASCENSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)RA\s*([0-9]{1,2})h\s*([0-9]{1,2}(?:\.[0-9]+)?)m(?:\s*([0-9]{1,2}(?:\.[0-9]+)?)s)?")
        .expect("valid right ascension pattern")
});

static DECLINATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)(?:Dec|LD\.?)\s*([+\-−–]?)\s*([0-9]{1,2})[°º]\s*([0-9]{1,2})['’]?(?:\s*([0-9]{1,2}(?:\.[0-9]+)?)"?)?"#,
    )
    .expect("valid declination pattern")
});

/// `"M<n>"` without leading zeros, or `"M?"`.
pub fn messier_id(name: Option<&str>) -> String {
    name.and_then(|name| MESSIER_ID.captures(name))
        .and_then(|caps| caps[1].parse::<u32>().ok())
        .map_or_else(|| UNKNOWN_ID.to_string(), |n| format!("M{n}"))
}

/// The common name from `"M<n>, <Common Name>."`: the second comma segment,
/// trailing periods stripped, when the first segment starts with `M`.
fn common_name(raw: &str) -> Option<String> {
    let mut parts = raw.split(',').map(str::trim);
    let designation = parts.next()?;
    if !designation.starts_with(['M', 'm']) {
        return None;
    }
    parts
        .next()
        .map(|name| name.trim_end_matches('.'))
        .filter(|name| !name.is_empty())
        .map(str::to_string)
}

/// Right ascension and declination found in a free-text coordinate field.
pub fn parse_coordinates(raw: &str) -> (Option<String>, Option<String>) {
    let text = raw
        .replace("LD.", "Dec")
        .replace("ld.", "Dec")
        .replace(['–', '−'], "-")
        .replace('º', "°");

    let ra = RIGHT_ASCENSION.captures(&text).and_then(|caps| ra_from(&caps));
    let dec = DECLINATION.captures(&text).and_then(|caps| dec_from(&caps));
    (ra, dec)
}

fn ra_from(caps: &Captures<'_>) -> Option<String> {
    let hours: i64 = caps[1].parse().ok()?;
    let minutes: f64 = caps[2].parse().ok()?;
    let mut seconds: f64 = match caps.get(3) {
        Some(s) => s.as_str().parse().ok()?,
        None => 0.0,
    };
    let whole_minutes = minutes.trunc();
    seconds += (minutes - whole_minutes) * 60.0;
    Some(format_hms(hours, whole_minutes as i64, seconds))
}

fn dec_from(caps: &Captures<'_>) -> Option<String> {
    let sign = if caps[1].starts_with(['-', '−', '–']) { -1 } else { 1 };
    let degrees: i64 = caps[2].parse().ok()?;
    let minutes: i64 = caps[3].parse().ok()?;
    let seconds: f64 = match caps.get(4) {
        Some(s) => s.as_str().parse().ok()?,
        None => 0.0,
    };
    Some(format_dms(sign, degrees, minutes, seconds))
}

/// A text field that must be a JSON scalar when present.
fn text_field(fields: &Map<String, Value>, field: &'static str) -> Result<Option<String>, ParseIssue> {
    match fields.get(field) {
        Some(value @ (Value::Array(_) | Value::Object(_))) => Err(ParseIssue::UnexpectedType {
            field,
            found: value_kind(value),
        }),
        Some(value) => Ok(normalize_value(value)),
        None => Ok(None),
    }
}

/// Parses one Messier row.
///
/// # Errors
///
/// Returns a [`ParseIssue`] when the row is not a JSON object or when `name`
/// or `coordinates` holds an array or object.
pub fn parse_messier_row(
    row: &Value,
    transliterator: &Transliterator,
) -> Result<CelestialRecord, ParseIssue> {
    let fields = row.as_object().ok_or(ParseIssue::NotAnObject {
        found: value_kind(row),
    })?;

    let raw_name = text_field(fields, "name")?;
    let coordinates = text_field(fields, "coordinates")?;
    let explicit_en = fields.get("name_en").and_then(normalize_value);
    let explicit_kr = fields.get("name_kr").and_then(normalize_value);

    let id = messier_id(raw_name.as_deref());
    let name_en = explicit_en
        .or_else(|| raw_name.as_deref().and_then(common_name))
        .unwrap_or_else(|| id.clone());
    let name_kr = explicit_kr.unwrap_or_else(|| transliterator.transliterate(&name_en));

    let (ra, dec) = coordinates
        .as_deref()
        .map(parse_coordinates)
        .unwrap_or_default();

    let mut record = CelestialRecord::new(id, Catalog::Messier, name_en, name_kr);
    record.ra = ra;
    record.dec = dec;
    record.magnitude = fields.get("magnitude").and_then(float_or_none);
    Ok(record)
}

/// The minimal record that stands in for a row [`parse_messier_row`]
/// rejected: best-effort id and names, raw magnitude, no coordinates.
pub fn degraded_record(row: &Value, transliterator: &Transliterator) -> CelestialRecord {
    let field = |key: &str| row.as_object().and_then(|fields| fields.get(key));

    let raw_name = field("name").and_then(normalize_value);
    let id = messier_id(raw_name.as_deref());
    let name_en = field("name_en")
        .and_then(normalize_value)
        .or(raw_name)
        .unwrap_or_else(|| id.clone());
    let name_kr = field("name_kr")
        .and_then(normalize_value)
        .unwrap_or_else(|| transliterator.transliterate(&name_en));

    let mut record = CelestialRecord::new(id, Catalog::Messier, name_en, name_kr);
    record.magnitude = field("magnitude").and_then(float_or_none);
    record
}

/// Parses every row. Rejected rows are replaced by a [`degraded_record`] and
/// reported; the batch itself never fails.
pub fn parse_messier(rows: &[Value], transliterator: &Transliterator) -> SourceBatch {
    let mut batch = SourceBatch::new(Catalog::Messier);

    for (index, row) in rows.iter().enumerate() {
        match parse_messier_row(row, transliterator) {
            Ok(record) => {
                batch.counts.parsed += 1;
                batch.records.push(record);
            }
            Err(issue) => {
                let record = degraded_record(row, transliterator);
                tracing::debug!(index, id = %record.id, %issue, "degraded Messier row");
                batch.counts.degraded += 1;
                batch.issues.push(RecordIssue {
                    catalog: Catalog::Messier,
                    index,
                    id: Some(record.id.clone()),
                    action: IssueAction::Degraded,
                    issue,
                });
                batch.records.push(record);
            }
        }
    }

    batch
}
