/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! The fixed solar-system table. Positions depend on the observation time,
//! so coordinates and magnitude are always null.

use skylog_core::{Catalog, CelestialRecord};

use super::SourceBatch;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Planet,
    DwarfPlanet,
    Moon,
}

impl BodyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BodyKind::Planet => "Planet",
            BodyKind::DwarfPlanet => "DwarfPlanet",
            BodyKind::Moon => "Moon",
        }
    }
}

pub const BODIES: &[(&str, &str, BodyKind)] = &[
    ("Mercury", "수성", BodyKind::Planet),
    ("Venus", "금성", BodyKind::Planet),
    ("Earth", "지구", BodyKind::Planet),
    ("Mars", "화성", BodyKind::Planet),
    ("Jupiter", "목성", BodyKind::Planet),
    ("Saturn", "토성", BodyKind::Planet),
    ("Uranus", "천왕성", BodyKind::Planet),
    ("Neptune", "해왕성", BodyKind::Planet),
    ("Pluto", "명왕성", BodyKind::DwarfPlanet),
    ("Moon", "달", BodyKind::Planet),
    ("Ganymede", "가니메데", BodyKind::Moon),
    ("Io", "이오", BodyKind::Planet),
    ("Callisto", "칼리스토", BodyKind::Planet),
    ("Europa", "유로파", BodyKind::Planet),
    ("Titan", "타이탄", BodyKind::Moon),
];

pub fn solar_body(name_en: &str, name_kr: &str, kind: BodyKind) -> CelestialRecord {
    let id = format!("planet:{}", name_en.to_lowercase());
    let mut record = CelestialRecord::new(id, Catalog::SolarSystem, name_en, name_kr);
    record.object_type = Some(kind.as_str().to_string());
    record
}

pub fn solar_system() -> SourceBatch {
    let mut batch = SourceBatch::new(Catalog::SolarSystem);
    batch.records = BODIES
        .iter()
        .map(|(en, kr, kind)| solar_body(en, kr, *kind))
        .collect();
    batch.counts.parsed = batch.records.len();
    batch
}
