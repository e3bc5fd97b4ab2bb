/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Optional `skylog.toml` configuration.
//!
//! Every setting can also be given on the command line; CLI flags win over
//! the file, and the file wins over built-in defaults.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use skylog_core::parse_float;
use skylog_hangul::{Lexicon, NameTable, Transliterator};

use crate::error::{CatalogError, Result};

pub const DEFAULT_OUTPUT: &str = "catalog_ko_en.json";
pub const DEFAULT_MAGNITUDE_LIMIT: f64 = 6.5;

/// Files looked up in the working directory when no `--config` is given.
pub const PROJECT_CONFIG_FILES: &[&str] = &["skylog.toml", ".skylog.toml"];

/// Faintest bright star kept in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawLimit", into = "RawLimit")]
pub enum MagnitudeLimit {
    Disabled,
    AtMost(f64),
}

impl MagnitudeLimit {
    pub fn max_magnitude(&self) -> Option<f64> {
        match self {
            MagnitudeLimit::Disabled => None,
            MagnitudeLimit::AtMost(limit) => Some(*limit),
        }
    }
}

impl Default for MagnitudeLimit {
    fn default() -> Self {
        MagnitudeLimit::AtMost(DEFAULT_MAGNITUDE_LIMIT)
    }
}

impl FromStr for MagnitudeLimit {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("none") {
            return Ok(MagnitudeLimit::Disabled);
        }
        parse_float(s)
            .map(MagnitudeLimit::AtMost)
            .ok_or_else(|| format!("invalid magnitude limit `{s}`: expected a number or `none`"))
    }
}

impl fmt::Display for MagnitudeLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MagnitudeLimit::Disabled => f.write_str("none"),
            MagnitudeLimit::AtMost(limit) => write!(f, "{limit}"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawLimit {
    Number(f64),
    Text(String),
}

impl TryFrom<RawLimit> for MagnitudeLimit {
    type Error = String;

    fn try_from(raw: RawLimit) -> std::result::Result<Self, Self::Error> {
        match raw {
            RawLimit::Number(limit) if limit.is_finite() => Ok(MagnitudeLimit::AtMost(limit)),
            RawLimit::Number(limit) => Err(format!("invalid magnitude limit `{limit}`")),
            RawLimit::Text(text) => text.parse(),
        }
    }
}

impl From<MagnitudeLimit> for RawLimit {
    fn from(limit: MagnitudeLimit) -> Self {
        match limit {
            MagnitudeLimit::Disabled => RawLimit::Text("none".to_string()),
            MagnitudeLimit::AtMost(limit) => RawLimit::Number(limit),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub names: NamesConfig,

    #[serde(default)]
    pub transliteration: TransliterationConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub magnitude_threshold: Option<MagnitudeLimit>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub common_names_only: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NamesConfig {
    /// Extra English → Korean pairs layered over the built-in table.
    #[serde(default)]
    pub overrides: IndexMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransliterationConfig {
    /// Pronunciation lexicon (JSON or TOML). Relative paths are resolved
    /// against the configuration file's directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lexicon: Option<PathBuf>,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Config = toml::from_str(&content).map_err(|e| CatalogError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        if let (Some(lexicon), Some(base)) = (config.transliteration.lexicon.as_mut(), path.parent()) {
            if lexicon.is_relative() {
                *lexicon = base.join(&*lexicon);
            }
        }
        Ok(config)
    }

    /// The first project configuration file found in `dir`, if any.
    pub fn load_from_dir(dir: &Path) -> Result<Option<Self>> {
        for name in PROJECT_CONFIG_FILES {
            let path = dir.join(name);
            if path.exists() {
                tracing::debug!(path = %path.display(), "using project configuration");
                return Ok(Some(Self::load(&path)?));
            }
        }
        Ok(None)
    }

    pub fn load_from_project() -> Result<Option<Self>> {
        Self::load_from_dir(Path::new("."))
    }

    pub fn name_table(&self) -> NameTable {
        NameTable::builtin().with_overrides(
            self.names
                .overrides
                .iter()
                .map(|(en, kr)| (en.clone(), kr.clone())),
        )
    }

    /// The transliterator this configuration selects. An unreadable lexicon
    /// is logged and replaced by the rule-based mapper.
    pub fn transliterator(&self) -> Transliterator {
        let names = self.name_table();
        let Some(path) = &self.transliteration.lexicon else {
            return Transliterator::rule_based(names);
        };

        match Lexicon::load(path) {
            Ok(lexicon) => {
                tracing::info!(path = %path.display(), entries = lexicon.len(), "loaded lexicon");
                Transliterator::new(names, Box::new(lexicon))
            }
            Err(error) => {
                tracing::warn!(%error, "falling back to rule-based transliteration");
                Transliterator::rule_based(names)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitude_limit_from_str() {
        assert_eq!("6.5".parse::<MagnitudeLimit>(), Ok(MagnitudeLimit::AtMost(6.5)));
        assert_eq!("+4".parse::<MagnitudeLimit>(), Ok(MagnitudeLimit::AtMost(4.0)));
        assert_eq!("None".parse::<MagnitudeLimit>(), Ok(MagnitudeLimit::Disabled));
        assert!("bright".parse::<MagnitudeLimit>().is_err());
        assert!("inf".parse::<MagnitudeLimit>().is_err());
    }

    #[test]
    fn test_default_limit() {
        assert_eq!(MagnitudeLimit::default().max_magnitude(), Some(6.5));
        assert_eq!(MagnitudeLimit::Disabled.max_magnitude(), None);
        assert_eq!(MagnitudeLimit::Disabled.to_string(), "none");
    }

    #[test]
    fn test_parse_full_config() {
        let config: Config = toml::from_str(
            r#"
            [build]
            output = "out/catalog.json"
            magnitude_threshold = "none"
            common_names_only = true

            [names]
            overrides = { "Mizar" = "미자르" }

            [transliteration]
            lexicon = "lexicon.json"
            "#,
        )
        .unwrap();

        assert_eq!(config.build.output, Some(PathBuf::from("out/catalog.json")));
        assert_eq!(config.build.magnitude_threshold, Some(MagnitudeLimit::Disabled));
        assert_eq!(config.build.common_names_only, Some(true));
        assert_eq!(config.names.overrides.get("Mizar").map(String::as_str), Some("미자르"));
        assert_eq!(config.transliteration.lexicon, Some(PathBuf::from("lexicon.json")));
    }

    #[test]
    fn test_numeric_threshold_and_empty_config() {
        let config: Config = toml::from_str("[build]\nmagnitude_threshold = 5\n").unwrap();
        assert_eq!(config.build.magnitude_threshold, Some(MagnitudeLimit::AtMost(5.0)));

        let empty: Config = toml::from_str("").unwrap();
        assert_eq!(empty, Config::default());
    }

    #[test]
    fn test_invalid_threshold_is_rejected() {
        let parsed: std::result::Result<Config, _> =
            toml::from_str("[build]\nmagnitude_threshold = \"dim\"\n");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_name_overrides_reach_transliterator() {
        let mut config = Config::default();
        config
            .names
            .overrides
            .insert("Mizar".to_string(), "미자르".to_string());

        let t = config.transliterator();
        assert_eq!(t.transliterate("Mizar"), "미자르");
        assert_eq!(t.transliterate("Sirius"), "시리우스");
        assert_eq!(t.backend_name(), "rules");
    }

    #[test]
    fn test_missing_lexicon_falls_back_to_rules() {
        let config = Config {
            transliteration: TransliterationConfig {
                lexicon: Some(PathBuf::from("/nonexistent/lexicon.json")),
            },
            ..Default::default()
        };
        assert_eq!(config.transliterator().backend_name(), "rules");
    }
}
