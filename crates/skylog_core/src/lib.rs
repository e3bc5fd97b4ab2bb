/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! skylog core
//!
//! Shared building blocks for the skylog celestial catalog: the canonical
//! [`CelestialRecord`] every source parser produces, the text normalizer used
//! to clean loosely formatted source fields, and the sexagesimal helpers that
//! render right ascension and declination in their canonical string forms.
//!
//! # Example
//!
//! ```rust
//! use skylog_core::{format_dms, format_hms, Catalog, CelestialRecord};
//!
//! let mut crab = CelestialRecord::new("M1", Catalog::Messier, "Crab Nebula", "게 성운");
//! crab.ra = Some(format_hms(5, 34, 30.0));
//! crab.dec = Some(format_dms(1, 22, 1, 0.0));
//!
//! assert_eq!(crab.ra.as_deref(), Some("05:34:30.00"));
//! assert_eq!(crab.dec.as_deref(), Some("+22:01:00.00"));
//! ```

pub mod record;
pub mod sexagesimal;
pub mod text;

pub use record::{Catalog, CelestialRecord, UNKNOWN_MAGNITUDE};
pub use sexagesimal::{dms_to_degrees, format_dms, format_hms, hms_to_degrees};
pub use text::{
    float_or_none, int_or_none, normalize_str, normalize_value, parse_float, value_kind,
    value_text,
};
