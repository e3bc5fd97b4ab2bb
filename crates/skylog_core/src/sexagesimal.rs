/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Canonical right ascension / declination strings.
//!
//! Right ascension is written `HH:MM:SS.ss` and declination `±DD:MM:SS.ss`.
//! Components are formatted as given: a minute value of 61 is written as
//! `61`, not carried into the next unit.

/// Formats right ascension components as `HH:MM:SS.ss`.
pub fn format_hms(hours: i64, minutes: i64, seconds: f64) -> String {
    format!("{:02}:{:02}:{:05.2}", hours, minutes, seconds)
}

/// Formats declination components as `±DD:MM:SS.ss`. A non-negative `sign`
/// is written as `+`.
pub fn format_dms(sign: i32, degrees: i64, minutes: i64, seconds: f64) -> String {
    let sign = if sign >= 0 { '+' } else { '-' };
    format!("{}{:02}:{:02}:{:05.2}", sign, degrees, minutes, seconds)
}

/// Converts a canonical `HH:MM:SS.ss` string to degrees (hours × 15).
pub fn hms_to_degrees(hms: &str) -> Option<f64> {
    let (hours, minutes, seconds) = split_components(hms)?;
    Some((hours + minutes / 60.0 + seconds / 3600.0) * 15.0)
}

/// Converts a canonical `±DD:MM:SS.ss` string to signed degrees.
pub fn dms_to_degrees(dms: &str) -> Option<f64> {
    let dms = dms.trim();
    let (negative, body) = match dms.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, dms.strip_prefix('+').unwrap_or(dms)),
    };
    let (degrees, minutes, seconds) = split_components(body)?;
    let magnitude = degrees + minutes / 60.0 + seconds / 3600.0;
    Some(if negative { -magnitude } else { magnitude })
}

fn split_components(text: &str) -> Option<(f64, f64, f64)> {
    let mut parts = text.trim().split(':').map(|p| p.trim().parse::<f64>().ok());
    let first = parts.next()??;
    let second = parts.next()??;
    let third = parts.next()??;
    if parts.next().is_some() {
        return None;
    }
    Some((first, second, third))
}
