/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Rule-based syllable mapper.
//!
//! A deliberately small, deterministic approximation: it is the last resort
//! for names that are neither in the override table nor in a lexicon, and it
//! only has to produce something a Korean reader can search for.

/// Multi-letter spellings rewritten before the per-letter scan, in order.
const DIGRAPHS: &[(&str, &str)] = &[
    ("ph", "프"),
    ("ch", "치"),
    ("sh", "시"),
    ("th", "스"),
    ("gh", "그"),
    ("ck", "크"),
    ("qu", "쿠"),
    ("x", "크스"),
    ("ce", "스"),
    ("ci", "시"),
    ("ge", "지"),
    ("gi", "지"),
];

const VOWEL_PAIRS: &[(char, char, &str)] = &[
    ('a', 'a', "아"),
    ('e', 'e', "이"),
    ('o', 'o', "우"),
    ('a', 'i', "아이"),
    ('a', 'u', "아우"),
    ('e', 'i', "에이"),
    ('o', 'u', "오우"),
];

fn vowel(ch: char) -> Option<&'static str> {
    Some(match ch {
        'a' => "아",
        'e' => "에",
        'i' | 'y' => "이",
        'o' => "오",
        'u' => "우",
        _ => return None,
    })
}

fn consonant(ch: char) -> Option<&'static str> {
    Some(match ch {
        'b' | 'v' => "브",
        'c' | 'k' => "크",
        'd' => "드",
        'f' | 'p' => "프",
        'g' => "그",
        'h' => "흐",
        'j' => "지",
        'l' | 'r' => "르",
        'm' => "므",
        'n' => "느",
        'q' => "쿠",
        's' => "스",
        't' => "트",
        'w' => "우",
        'z' => "즈",
        _ => return None,
    })
}

/// Splits a name into the tokens every renderer works on.
pub fn tokens(name: &str) -> impl Iterator<Item = &str> {
    name.split(|c: char| c.is_whitespace() || c == '-')
        .filter(|token| !token.is_empty())
}

/// Renders a whole name. Tokens are concatenated without a separator; an
/// input with no letters or digits renders as the empty string.
pub fn render(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c.is_whitespace() || c == '-' {
                c
            } else {
                ' '
            }
        })
        .collect();

    tokens(&cleaned).map(render_word).collect()
}

fn render_word(word: &str) -> String {
    let mut word = word.to_ascii_lowercase();
    for (from, to) in DIGRAPHS {
        word = word.replace(from, to);
    }

    let chars: Vec<char> = word.chars().collect();
    let mut out = String::with_capacity(word.len() * 2);
    let mut i = 0;
    while i < chars.len() {
        if let Some(&next) = chars.get(i + 1) {
            let pair = VOWEL_PAIRS
                .iter()
                .find(|(first, second, _)| *first == chars[i] && *second == next);
            if let Some((_, _, syllables)) = pair {
                out.push_str(syllables);
                i += 2;
                continue;
            }
        }

        let ch = chars[i];
        match vowel(ch).or_else(|| consonant(ch)) {
            Some(syllable) => out.push_str(syllable),
            None => out.push(ch),
        }
        i += 1;
    }
    out
}
