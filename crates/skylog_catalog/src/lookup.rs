/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Name search over a built catalog.
//!
//! Queries and fields are compared lowercased with all whitespace removed,
//! so `"m 31"`, `"M31"` and `"안드로메다은하"` all find Andromeda.

use serde::Serialize;
use skylog_core::CelestialRecord;

/// How well a record matched a query, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    Exact,
    Prefix,
    Substring,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Match<'a> {
    pub kind: MatchKind,
    pub record: &'a CelestialRecord,
}

pub fn search_key(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

fn searchable(record: &CelestialRecord) -> impl Iterator<Item = &str> {
    [
        record.id.as_str(),
        record.name_en.as_str(),
        record.name_kr.as_str(),
    ]
    .into_iter()
    .chain(record.aliases_en.iter().flatten().map(String::as_str))
    .chain(record.aliases_kr.iter().flatten().map(String::as_str))
}

fn match_kind(record: &CelestialRecord, key: &str) -> Option<MatchKind> {
    searchable(record)
        .filter_map(|field| {
            let field = search_key(field);
            if field == key {
                Some(MatchKind::Exact)
            } else if field.starts_with(key) {
                Some(MatchKind::Prefix)
            } else if field.contains(key) {
                Some(MatchKind::Substring)
            } else {
                None
            }
        })
        .min()
}

/// The first exact match on id, names or aliases; failing that, the first
/// prefix match.
pub fn find<'a>(catalog: &'a [CelestialRecord], query: &str) -> Option<&'a CelestialRecord> {
    let key = search_key(query);
    if key.is_empty() {
        return None;
    }

    catalog
        .iter()
        .find(|record| searchable(record).any(|field| search_key(field) == key))
        .or_else(|| {
            catalog
                .iter()
                .find(|record| searchable(record).any(|field| search_key(field).starts_with(&key)))
        })
}

/// Every exact, prefix or substring match, strongest first. Records of equal
/// strength keep catalog order.
pub fn find_all<'a>(catalog: &'a [CelestialRecord], query: &str) -> Vec<Match<'a>> {
    let key = search_key(query);
    if key.is_empty() {
        return Vec::new();
    }

    let mut matches: Vec<Match<'a>> = catalog
        .iter()
        .filter_map(|record| {
            match_kind(record, &key).map(|kind| Match { kind, record })
        })
        .collect();
    matches.sort_by_key(|m| m.kind);
    matches
}
