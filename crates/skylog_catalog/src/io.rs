/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;
use skylog_core::{value_kind, CelestialRecord};
use tempfile::NamedTempFile;

use crate::error::{CatalogError, Result};

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> CatalogError + '_ {
    move |source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Loads the rows of a source file.
/// Accepts a JSON array or an object wrapping the array under `data`.
pub fn load_rows(path: &Path) -> Result<Vec<Value>> {
    let bytes = fs::read(path).map_err(io_error(path))?;
    let value: Value = serde_json::from_slice(&bytes).map_err(|source| CatalogError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    rows_from_value(value, path)
}

/// The row list inside a parsed source document. An object without `data`
/// has no rows.
pub fn rows_from_value(value: Value, path: &Path) -> Result<Vec<Value>> {
    match value {
        Value::Array(rows) => Ok(rows),
        Value::Object(mut fields) => match fields.remove("data") {
            Some(Value::Array(rows)) => Ok(rows),
            None => Ok(Vec::new()),
            Some(other) => Err(CatalogError::InputShape {
                path: path.to_path_buf(),
                found: value_kind(&other),
            }),
        },
        other => Err(CatalogError::InputShape {
            path: path.to_path_buf(),
            found: value_kind(&other),
        }),
    }
}

/// Pretty-printed JSON (two-space indent, non-ASCII kept literal) with a
/// trailing newline.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    let mut bytes = serde_json::to_vec_pretty(value)?;
    bytes.push(b'\n');
    Ok(bytes)
}

/// Writes `bytes` through a temporary file in the destination directory and
/// renames it into place, so readers never see a partial file.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir: PathBuf = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let mut file = NamedTempFile::new_in(&dir).map_err(io_error(path))?;
    file.write_all(bytes).map_err(io_error(path))?;
    file.flush().map_err(io_error(path))?;
    file.persist(path).map_err(|e| CatalogError::Io {
        path: path.to_path_buf(),
        source: e.error,
    })?;
    Ok(())
}

pub fn write_catalog(path: &Path, records: &[CelestialRecord]) -> Result<()> {
    write_atomic(path, &to_pretty_json(records)?)
}

pub fn write_report<T: Serialize>(path: &Path, report: &T) -> Result<()> {
    write_atomic(path, &to_pretty_json(report)?)
}

/// Reads a catalog file produced by [`write_catalog`].
pub fn load_catalog(path: &Path) -> Result<Vec<CelestialRecord>> {
    let bytes = fs::read(path).map_err(io_error(path))?;
    serde_json::from_slice(&bytes).map_err(|source| CatalogError::Json {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use skylog_core::Catalog;

    #[test]
    fn test_rows_from_array_and_data_wrapper() {
        let path = Path::new("rows.json");
        let rows = rows_from_value(json!([{"a": 1}, {"b": 2}]), path).unwrap();
        assert_eq!(rows.len(), 2);

        let rows = rows_from_value(json!({"data": [{"a": 1}]}), path).unwrap();
        assert_eq!(rows.len(), 1);

        let rows = rows_from_value(json!({"meta": "none"}), path).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_scalar_document_is_rejected() {
        let err = rows_from_value(json!(42), Path::new("rows.json")).unwrap_err();
        assert!(matches!(err, CatalogError::InputShape { found: "number", .. }));

        let err = rows_from_value(json!({"data": "x"}), Path::new("rows.json")).unwrap_err();
        assert!(matches!(err, CatalogError::InputShape { found: "string", .. }));
    }

    #[test]
    fn test_missing_and_malformed_files() {
        let dir = tempfile::tempdir().unwrap();
        let missing = load_rows(&dir.path().join("absent.json"));
        assert!(matches!(missing, Err(CatalogError::Io { .. })));

        let bad = dir.path().join("bad.json");
        fs::write(&bad, "[{").unwrap();
        assert!(matches!(load_rows(&bad), Err(CatalogError::Json { .. })));
    }

    #[test]
    fn test_write_then_load_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        let records = vec![CelestialRecord::new(
            "planet:mars",
            Catalog::SolarSystem,
            "Mars",
            "화성",
        )];

        write_catalog(&path, &records).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"name_kr\": \"화성\""));
        assert!(text.starts_with("[\n  {"));

        assert_eq!(load_catalog(&path).unwrap(), records);
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("catalog.json");
        assert!(matches!(write_catalog(&path, &[]), Err(CatalogError::Io { .. })));
        assert!(!path.exists());
    }
}
