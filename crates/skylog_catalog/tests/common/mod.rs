/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{json, Value};
use skylog_catalog::{BrightStarFilter, CatalogBuilder};
use skylog_hangul::Transliterator;

// --- Source rows ---

pub fn messier_row(name: &str, coordinates: &str, magnitude: f64) -> Value {
    json!({"name": name, "coordinates": coordinates, "magnitude": magnitude})
}

/// A bright-star row with structured coordinates.
pub fn star_row(
    designation: Option<&str>,
    hd: Option<&str>,
    magnitude: Option<f64>,
    names_alt: &[&str],
) -> Value {
    json!({
        "lineNumber": 1,
        "bayerAndOrFlamsteed": designation,
        "hdId": hd,
        "hoursRaJ2000": 1,
        "minutesRaJ2000": 2,
        "secondsRaJ2000": 3.4,
        "signDecJ2000": "+",
        "degreesDecJ2000": 5,
        "minutesDecJ2000": 6,
        "secondsDecJ2000": 7,
        "visualMagnitude": magnitude,
        "namesAlt": names_alt,
    })
}

pub fn sample_messier() -> Vec<Value> {
    vec![
        messier_row("M1, Crab Nebula.", "RA 05h 34.5m, Dec +22° 01'", 8.4),
        messier_row("M31, Andromeda Galaxy.", "RA 00h 42.7m, Dec +41° 16'", 3.4),
        messier_row("M42, Orion Nebula.", "RA 05h 35.4m, Dec −05° 27'", 4.0),
    ]
}

pub fn sample_bright_stars() -> Vec<Value> {
    vec![
        star_row(Some("9Alp CMa"), Some("48915"), Some(-1.46), &["NAME Dog Star", "NAME Sirius"]),
        star_row(Some("3Alp Lyr"), Some("172167"), Some(0.03), &["NAME Vega"]),
        star_row(None, Some("1"), Some(7.9), &["NAME Faint"]),
        star_row(None, None, Some(5.0), &[]),
    ]
}

// --- Builders ---

pub fn builder(filter: BrightStarFilter) -> CatalogBuilder {
    CatalogBuilder::new(Transliterator::default(), filter)
}

pub fn default_filter() -> BrightStarFilter {
    BrightStarFilter {
        max_magnitude: Some(6.5),
        common_names_only: false,
    }
}

// --- Files ---

pub fn write_json(dir: &Path, name: &str, value: &Value) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, serde_json::to_vec(value).unwrap()).unwrap();
    path
}
