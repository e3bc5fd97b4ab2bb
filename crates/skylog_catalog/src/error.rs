/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// Run-level failures. Anything below the record boundary is reported as a
/// [`ParseIssue`] instead.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error(
        "unexpected {found} in {}: expected an array or an object with a `data` array",
        .path.display()
    )]
    InputShape { path: PathBuf, found: &'static str },

    #[error("configuration error in {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

/// Why a single source row could not be parsed normally.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParseIssue {
    #[error("record is a JSON {found}, not an object")]
    NotAnObject { found: &'static str },

    #[error("field `{field}` is a JSON {found}, expected text")]
    UnexpectedType {
        field: &'static str,
        found: &'static str,
    },
}
