/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Pronunciation lexicon backend.
//!
//! A lexicon is a flat `word → hangul` map loaded from a JSON object or a
//! TOML table. Lookups are per token and case-insensitive; tokens the lexicon
//! does not know are rendered by the rule-based mapper instead.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::rules;
use crate::PhoneticBackend;

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("failed to read lexicon {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid lexicon {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    words: HashMap<String, String>,
}

impl Lexicon {
    /// Loads a lexicon file; `.toml` files are read as TOML, anything else
    /// as JSON.
    pub fn load(path: &Path) -> Result<Self, LexiconError> {
        let content = fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let is_toml = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("toml"));

        let words: HashMap<String, String> = if is_toml {
            toml::from_str(&content).map_err(|e| LexiconError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?
        } else {
            serde_json::from_str(&content).map_err(|e| LexiconError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?
        };

        let lexicon = Self::from_entries(words);
        tracing::debug!(path = %path.display(), entries = lexicon.len(), "parsed lexicon");
        Ok(lexicon)
    }

    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let words = entries
            .into_iter()
            .filter_map(|(word, hangul)| {
                let key = lexicon_key(word.as_ref());
                let hangul = hangul.into();
                (!key.is_empty() && !hangul.trim().is_empty()).then_some((key, hangul))
            })
            .collect();
        Self { words }
    }

    pub fn lookup(&self, token: &str) -> Option<&str> {
        self.words.get(&lexicon_key(token)).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn lexicon_key(token: &str) -> String {
    token
        .trim_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase()
}

impl PhoneticBackend for Lexicon {
    fn name(&self) -> &str {
        "lexicon"
    }

    fn render(&self, name: &str) -> Option<String> {
        let mut out = String::new();
        for token in rules::tokens(name) {
            match self.lookup(token) {
                Some(hangul) => out.push_str(hangul),
                None => {
                    let fallback = rules::render(token);
                    if fallback.is_empty() {
                        out.push_str(token);
                    } else {
                        out.push_str(&fallback);
                    }
                }
            }
        }
        (!out.is_empty()).then_some(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_lookup_is_case_insensitive_and_ignores_edge_punctuation() {
        let lexicon = Lexicon::from_entries([("Kentaurus", "켄타우루스")]);
        assert_eq!(lexicon.lookup("kentaurus"), Some("켄타우루스"));
        assert_eq!(lexicon.lookup("Kentaurus,"), Some("켄타우루스"));
        assert_eq!(lexicon.lookup("Rigel"), None);
    }

    #[test]
    fn test_render_falls_back_per_token() {
        let lexicon = Lexicon::from_entries([("Kentaurus", "켄타우루스")]);
        assert_eq!(
            lexicon.render("Rigel Kentaurus"),
            Some("르이지르켄타우루스".to_string())
        );
    }

    #[test]
    fn test_render_keeps_unrenderable_tokens() {
        let lexicon = Lexicon::from_entries([("Star", "스타")]);
        assert_eq!(lexicon.render("& Star"), Some("&스타".to_string()));
        assert_eq!(lexicon.render("   "), None);
    }

    #[test]
    fn test_load_json_and_toml() {
        let mut json = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(json, r#"{{"Mizar": "미자르", "": "무시"}}"#).unwrap();
        let lexicon = Lexicon::load(json.path()).unwrap();
        assert_eq!(lexicon.len(), 1);
        assert_eq!(lexicon.lookup("MIZAR"), Some("미자르"));

        let mut toml_file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(toml_file, "Alcor = \"알코르\"").unwrap();
        let lexicon = Lexicon::load(toml_file.path()).unwrap();
        assert_eq!(lexicon.lookup("alcor"), Some("알코르"));
    }

    #[test]
    fn test_load_reports_missing_and_malformed_files() {
        let missing = Lexicon::load(Path::new("/nonexistent/lexicon.json"));
        assert!(matches!(missing, Err(LexiconError::Io { .. })));

        let mut bad = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(bad, "[1, 2").unwrap();
        let malformed = Lexicon::load(bad.path());
        assert!(matches!(malformed, Err(LexiconError::Parse { .. })));
    }
}
