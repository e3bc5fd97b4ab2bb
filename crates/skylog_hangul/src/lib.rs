/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! skylog hangul
//!
//! Korean renderings of English and Latin celestial names. Resolution runs
//! in a fixed order and never fails:
//!
//! 1. an exact match in the curated [`NameTable`];
//! 2. the configured [`PhoneticBackend`] (a [`Lexicon`] or the [`RuleBased`]
//!    mapper);
//! 3. the rule-based mapper;
//! 4. the input unchanged.
//!
//! ```rust
//! use skylog_hangul::{Lexicon, NameTable, Transliterator};
//!
//! let rules = Transliterator::default();
//! assert_eq!(rules.transliterate("Sirius"), "시리우스");
//! assert_eq!(rules.transliterate("Mizar"), "므이즈아르");
//!
//! let lexicon = Lexicon::from_entries([("Mizar", "미자르")]);
//! let curated = Transliterator::new(NameTable::builtin(), Box::new(lexicon));
//! assert_eq!(curated.transliterate("Mizar"), "미자르");
//! ```

use std::fmt;
use std::sync::LazyLock;

pub mod lexicon;
pub mod overrides;
pub mod rules;

pub use lexicon::{Lexicon, LexiconError};
pub use overrides::NameTable;

/// A source of phonetic renderings.
///
/// Returning `None` (or an empty string) hands the name on to the rule-based
/// mapper.
pub trait PhoneticBackend: Send + Sync {
    fn name(&self) -> &str;
    fn render(&self, name: &str) -> Option<String>;
}

/// The deterministic syllable mapper in [`rules`], as a backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBased;

impl PhoneticBackend for RuleBased {
    fn name(&self) -> &str {
        "rules"
    }

    fn render(&self, name: &str) -> Option<String> {
        let rendered = rules::render(name);
        (!rendered.is_empty()).then_some(rendered)
    }
}

pub struct Transliterator {
    names: NameTable,
    backend: Box<dyn PhoneticBackend>,
}

impl Transliterator {
    pub fn new(names: NameTable, backend: Box<dyn PhoneticBackend>) -> Self {
        Self { names, backend }
    }

    pub fn rule_based(names: NameTable) -> Self {
        Self::new(names, Box::new(RuleBased))
    }

    pub fn names(&self) -> &NameTable {
        &self.names
    }

    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    /// Korean rendering of `name`. Empty input yields an empty string; any
    /// other input yields a non-empty string.
    pub fn transliterate(&self, name: &str) -> String {
        if name.is_empty() {
            return String::new();
        }
        if let Some(curated) = self.names.get(name) {
            return curated.to_string();
        }

        self.backend
            .render(name)
            .filter(|rendered| !rendered.is_empty())
            .or_else(|| {
                tracing::trace!(name, backend = self.backend.name(), "no backend rendering");
                RuleBased.render(name)
            })
            .unwrap_or_else(|| name.to_string())
    }
}

impl Default for Transliterator {
    fn default() -> Self {
        Self::rule_based(NameTable::builtin())
    }
}

impl fmt::Debug for Transliterator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transliterator")
            .field("names", &self.names.len())
            .field("backend", &self.backend.name())
            .finish()
    }
}

static DEFAULT: LazyLock<Transliterator> = LazyLock::new(Transliterator::default);

/// [`Transliterator::transliterate`] with the built-in table and the
/// rule-based mapper.
pub fn transliterate(name: &str) -> String {
    DEFAULT.transliterate(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(&'static str);

    impl PhoneticBackend for Fixed {
        fn name(&self) -> &str {
            "fixed"
        }

        fn render(&self, _name: &str) -> Option<String> {
            Some(self.0.to_string())
        }
    }

    struct Unavailable;

    impl PhoneticBackend for Unavailable {
        fn name(&self) -> &str {
            "unavailable"
        }

        fn render(&self, _name: &str) -> Option<String> {
            None
        }
    }

    #[test]
    fn test_override_beats_backend() {
        let t = Transliterator::new(NameTable::builtin(), Box::new(Fixed("엉뚱한 값")));
        assert_eq!(t.transliterate("Sirius"), "시리우스");
        assert_eq!(t.transliterate("Wezen"), "엉뚱한 값");
    }

    #[test]
    fn test_unavailable_backend_falls_back_to_rules() {
        let t = Transliterator::new(NameTable::empty(), Box::new(Unavailable));
        assert_eq!(t.transliterate("Vega"), "브에그아");
    }

    #[test]
    fn test_empty_backend_output_falls_back_to_rules() {
        let t = Transliterator::new(NameTable::empty(), Box::new(Fixed("")));
        assert_eq!(t.transliterate("Vega"), "브에그아");
    }

    #[test]
    fn test_unrenderable_input_is_returned_unchanged() {
        let t = Transliterator::default();
        assert_eq!(t.transliterate("★"), "★");
        assert_eq!(t.transliterate(""), "");
    }

    #[test]
    fn test_free_function_uses_builtin_table() {
        assert_eq!(transliterate("Pleiades"), "플레이아데스 성단");
        assert_eq!(transliterate("Peacock"), "피콕, 공작");
    }

    #[test]
    fn test_debug_names_backend() {
        let rendered = format!("{:?}", Transliterator::default());
        assert!(rendered.contains("rules"));
    }
}
