/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Curated English → Korean names.
//!
//! These always win over any phonetic rendering. The bright-star parser also
//! uses membership in this table to prefer well-known names when a star has
//! several common names.

use std::collections::HashMap;

const BUILTIN: &[(&str, &str)] = &[
    // Messier objects
    ("Andromeda Galaxy", "안드로메다 은하"),
    ("Orion Nebula", "오리온 대성운"),
    ("Pleiades", "플레이아데스 성단"),
    ("Lagoon Nebula", "라군 성운"),
    ("Ring Nebula", "링 성운"),
    ("Dumbbell Nebula", "덤벨 성운"),
    ("Hercules Globular Cluster", "헤라클레스 구상성단"),
    ("Omega Nebula", "오메가 성운"),
    ("Trifid Nebula", "트리피드 성운"),
    ("Sombrero Galaxy", "솜브레로 은하"),
    // Bright stars
    ("Sirius", "시리우스"),
    ("Canopus", "카노푸스"),
    ("Arcturus", "아크투루스"),
    ("Vega", "베가"),
    ("Capella", "카펠라"),
    ("Rigel", "리겔"),
    ("Procyon", "프로키온"),
    ("Achernar", "아케르나르"),
    ("Betelgeuse", "베텔지우스"),
    ("Altair", "알타이르"),
    ("Deneb", "데네브"),
    ("Polaris", "폴라리스"),
    ("Rigel Kentaurus", "리겔 케타우루스"),
    ("Aldebaran", "알데바란"),
    ("Antares", "안타레스"),
    ("Pollux", "폴룩스"),
    ("Fomalhaut", "포말하우트"),
    ("Mimosa", "미모사"),
    ("Regulus", "레굴루스"),
    ("Bellatrix", "벨라트릭스"),
    ("Elnath", "엘나스"),
    ("Alnilam", "알닐람"),
    ("Alnair", "알나이르"),
    ("Alioth", "알리오스"),
    ("Mirfak", "미르팍"),
    ("Alkaid", "알카이드"),
    ("Peacock", "피콕, 공작"),
    ("Mirzam", "미르잠"),
];

/// Exact-match name overrides: the built-in table plus any configured extras.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameTable {
    entries: HashMap<String, String>,
}

impl NameTable {
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN
                .iter()
                .map(|(en, kr)| (en.to_string(), kr.to_string()))
                .collect(),
        }
    }

    /// An empty table, for callers that want phonetic rendering only.
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Adds (or replaces) entries. Blank keys or values are ignored.
    pub fn with_overrides<I, K, V>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (en, kr) in extra {
            let (en, kr) = (en.into(), kr.into());
            if en.trim().is_empty() || kr.trim().is_empty() {
                continue;
            }
            self.entries.insert(en, kr);
        }
        self
    }

    pub fn get(&self, name_en: &str) -> Option<&str> {
        self.entries.get(name_en).map(String::as_str)
    }

    pub fn contains(&self, name_en: &str) -> bool {
        self.entries.contains_key(name_en)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for NameTable {
    fn default() -> Self {
        Self::builtin()
    }
}
