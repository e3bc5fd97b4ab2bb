/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Text normalization for loosely formatted source fields.
//!
//! Source dumps mix typographic punctuation (minus signs, en dashes, curly
//! quotes, masculine ordinals standing in for degree signs) with plain ASCII.
//! Everything the parsers look at goes through [`normalize_str`] first so the
//! coordinate patterns only have to deal with one spelling of each glyph.
//!
//! The numeric helpers never fail: anything that does not look like a number
//! becomes `None`.

use serde_json::Value;

/// Glyph substitutions applied by [`normalize_str`], in order.
const GLYPHS: &[(char, &str)] = &[
    ('\u{2212}', "-"),  // minus sign
    ('\u{2013}', "-"),  // en dash
    ('\u{2014}', "-"),  // em dash
    ('\u{00BA}', "°"),  // masculine ordinal
    ('\u{2019}', "'"),  // right single quote
    ('\u{201C}', "\""), // left double quote
    ('\u{201D}', "\""), // right double quote
    ('\u{2033}', "\""), // double prime
];

/// Trims `raw` and rewrites lookalike punctuation to its canonical form.
///
/// Returns `None` when nothing is left after trimming.
pub fn normalize_str(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut out = String::with_capacity(trimmed.len());
    for ch in trimmed.chars() {
        match GLYPHS.iter().find(|(glyph, _)| *glyph == ch) {
            Some((_, replacement)) => out.push_str(replacement),
            None => out.push(ch),
        }
    }
    Some(out)
}

/// Renders a scalar JSON value as text. Arrays, objects and `null` have no
/// text form.
pub fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// [`normalize_str`] over a JSON value.
pub fn normalize_value(value: &Value) -> Option<String> {
    value_text(value).and_then(|text| normalize_str(&text))
}

/// Parses a float, tolerating a leading `+` and the literal `none`.
///
/// Non-finite results are rejected so that a magnitude is always either a
/// usable number or absent.
pub fn parse_float(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("none") {
        return None;
    }
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    unsigned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// [`parse_float`] over a JSON value; numbers are taken as-is.
pub fn float_or_none(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => parse_float(s),
        _ => None,
    }
}

/// Integer coercion for structured numeric fields.
///
/// Integral JSON numbers are taken as-is, fractional ones are truncated, and
/// strings must hold an integer (surrounding whitespace and a leading `+`
/// are allowed).
pub fn int_or_none(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|v| v.is_finite())
                .map(|v| v.trunc() as i64)
        }),
        Value::String(s) => {
            let trimmed = s.trim();
            let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
            unsigned.parse::<i64>().ok()
        }
        _ => None,
    }
}

/// Short JSON type name, for diagnostics.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_str_trims_and_rejects_empty() {
        assert_eq!(normalize_str("  M31  "), Some("M31".to_string()));
        assert_eq!(normalize_str("   "), None);
        assert_eq!(normalize_str(""), None);
    }

    #[test]
    fn test_normalize_str_rewrites_glyphs() {
        assert_eq!(
            normalize_str("Dec \u{2212}05\u{00BA} 23\u{2019} 28\u{2033}"),
            Some("Dec -05° 23' 28\"".to_string())
        );
        assert_eq!(
            normalize_str("\u{201C}Sirius\u{201D} \u{2013} \u{2014}"),
            Some("\"Sirius\" - -".to_string())
        );
    }

    #[test]
    fn test_normalize_value_scalars() {
        assert_eq!(normalize_value(&json!(" HR 2491 ")), Some("HR 2491".to_string()));
        assert_eq!(normalize_value(&json!(48915)), Some("48915".to_string()));
        assert_eq!(normalize_value(&json!(null)), None);
        assert_eq!(normalize_value(&json!(["a"])), None);
    }

    #[test]
    fn test_parse_float() {
        assert_eq!(parse_float("8.4"), Some(8.4));
        assert_eq!(parse_float("+1.25"), Some(1.25));
        assert_eq!(parse_float(" -1.46 "), Some(-1.46));
        assert_eq!(parse_float("None"), None);
        assert_eq!(parse_float("NONE"), None);
        assert_eq!(parse_float(""), None);
        assert_eq!(parse_float("bright"), None);
        assert_eq!(parse_float("inf"), None);
        assert_eq!(parse_float("NaN"), None);
    }

    #[test]
    fn test_float_or_none_values() {
        assert_eq!(float_or_none(&json!(8.4)), Some(8.4));
        assert_eq!(float_or_none(&json!("6.5")), Some(6.5));
        assert_eq!(float_or_none(&json!(true)), None);
        assert_eq!(float_or_none(&json!(null)), None);
    }

    #[test]
    fn test_int_or_none_values() {
        assert_eq!(int_or_none(&json!(6)), Some(6));
        assert_eq!(int_or_none(&json!(6.9)), Some(6));
        assert_eq!(int_or_none(&json!(" 06 ")), Some(6));
        assert_eq!(int_or_none(&json!("+16")), Some(16));
        assert_eq!(int_or_none(&json!("6.5")), None);
        assert_eq!(int_or_none(&json!(null)), None);
    }
}
