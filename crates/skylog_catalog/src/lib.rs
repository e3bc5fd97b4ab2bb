/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! skylog catalog
//!
//! Builds the bilingual (English/Korean) celestial catalog used by the
//! skylog observation logbook from a Messier dump, a bright-star catalog and
//! a fixed solar-system table.
//!
//! ```rust
//! use serde_json::json;
//! use skylog_catalog::{BrightStarFilter, CatalogBuilder};
//! use skylog_hangul::Transliterator;
//!
//! let builder = CatalogBuilder::new(Transliterator::default(), BrightStarFilter::default());
//! let messier = [json!({"name": "M1, Crab Nebula.", "coordinates": "RA 05h 34.5m, Dec +22° 01'"})];
//! let build = builder.build_from_rows(&messier, &[]);
//!
//! let crab = skylog_catalog::find(&build.records, "m1").unwrap();
//! assert_eq!(crab.ra.as_deref(), Some("05:34:30.00"));
//! ```

pub mod config;
pub mod error;
pub mod io;
pub mod lookup;
pub mod merge;
pub mod pipeline;
pub mod report;
pub mod sources;

pub use config::{Config, MagnitudeLimit};
pub use error::{CatalogError, ParseIssue, Result};
pub use lookup::{find, find_all, Match, MatchKind};
pub use merge::CatalogMerger;
pub use pipeline::{BuildOptions, CatalogBuild, CatalogBuilder};
pub use report::{BuildReport, IssueAction, RecordIssue};
pub use sources::bright_star::{choose_primary_name, parse_bright_star_row, BrightStarFilter};
pub use sources::messier::parse_messier_row;
pub use sources::solar_system::solar_system;
