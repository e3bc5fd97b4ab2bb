/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! The canonical catalog record.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Sort weight for objects without a known magnitude, so they land after
/// every measured object of the same catalog.
pub const UNKNOWN_MAGNITUDE: f64 = 99.0;

/// The source catalog a record was normalized from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub enum Catalog {
    Messier,
    BrightStar,
    SolarSystem,
}

impl Catalog {
    /// The serialized name, which is also the primary sort key of the output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Catalog::Messier => "Messier",
            Catalog::BrightStar => "BrightStar",
            Catalog::SolarSystem => "SolarSystem",
        }
    }
}

impl fmt::Display for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One celestial object as written to the catalog file.
///
/// Optional descriptive fields serialize to `null` when unknown. The alias
/// lists are only produced for bright stars and are omitted entirely for the
/// other catalogs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CelestialRecord {
    pub id: String,
    pub catalog: Catalog,
    pub name_en: String,
    pub name_kr: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aliases_en: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aliases_kr: Option<Vec<String>>,
    #[serde(default)]
    pub ra: Option<String>,
    #[serde(default)]
    pub dec: Option<String>,
    #[serde(default)]
    pub magnitude: Option<f64>,
    #[serde(default, rename = "type")]
    pub object_type: Option<String>,
    #[serde(default)]
    pub constellation: Option<String>,
    #[serde(default, rename = "spectralType")]
    pub spectral_type: Option<String>,
    #[serde(default, rename = "bayerFlamsteed")]
    pub bayer_flamsteed: Option<String>,
}

impl CelestialRecord {
    pub fn new(
        id: impl Into<String>,
        catalog: Catalog,
        name_en: impl Into<String>,
        name_kr: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            catalog,
            name_en: name_en.into(),
            name_kr: name_kr.into(),
            aliases_en: None,
            aliases_kr: None,
            ra: None,
            dec: None,
            magnitude: None,
            object_type: None,
            constellation: None,
            spectral_type: None,
            bayer_flamsteed: None,
        }
    }

    /// Copies every non-empty field of `incoming` into `self` where `self`
    /// is still empty. Values already present are never replaced; `id` and
    /// `catalog` always belong to the first record.
    ///
    /// Returns the number of fields that were filled.
    pub fn fill_missing(&mut self, incoming: CelestialRecord) -> usize {
        let CelestialRecord {
            id: _,
            catalog: _,
            name_en,
            name_kr,
            aliases_en,
            aliases_kr,
            ra,
            dec,
            magnitude,
            object_type,
            constellation,
            spectral_type,
            bayer_flamsteed,
        } = incoming;

        [
            fill(&mut self.name_en, name_en),
            fill(&mut self.name_kr, name_kr),
            fill(&mut self.aliases_en, aliases_en),
            fill(&mut self.aliases_kr, aliases_kr),
            fill(&mut self.ra, ra),
            fill(&mut self.dec, dec),
            fill(&mut self.magnitude, magnitude),
            fill(&mut self.object_type, object_type),
            fill(&mut self.constellation, constellation),
            fill(&mut self.spectral_type, spectral_type),
            fill(&mut self.bayer_flamsteed, bayer_flamsteed),
        ]
        .into_iter()
        .filter(|filled| *filled)
        .count()
    }

    /// Magnitude used for ordering; unknown magnitudes sort last.
    pub fn sort_magnitude(&self) -> f64 {
        self.magnitude.unwrap_or(UNKNOWN_MAGNITUDE)
    }

    /// Output ordering: catalog name, then magnitude (brightest first), then
    /// English name.
    pub fn catalog_order(&self, other: &Self) -> Ordering {
        self.catalog
            .as_str()
            .cmp(other.catalog.as_str())
            .then_with(|| self.sort_magnitude().total_cmp(&other.sort_magnitude()))
            .then_with(|| self.name_en.cmp(&other.name_en))
    }
}

/// A field value that can be "empty" for the purpose of fill-only merging.
trait Blank {
    fn is_blank(&self) -> bool;
}

impl Blank for String {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl Blank for f64 {
    fn is_blank(&self) -> bool {
        false
    }
}

impl<T> Blank for Vec<T> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Blank> Blank for Option<T> {
    fn is_blank(&self) -> bool {
        self.as_ref().map_or(true, Blank::is_blank)
    }
}

fn fill<T: Blank>(slot: &mut T, incoming: T) -> bool {
    if slot.is_blank() && !incoming.is_blank() {
        *slot = incoming;
        true
    } else {
        false
    }
}
