use skylog_hangul::{Lexicon, NameTable, PhoneticBackend, RuleBased, Transliterator};

#[test]
fn test_configured_override_beats_lexicon() {
    let names = NameTable::builtin().with_overrides([("Mizar", "미자르")]);
    let lexicon = Lexicon::from_entries([("Mizar", "마이자")]);
    let t = Transliterator::new(names, Box::new(lexicon));

    assert_eq!(t.transliterate("Mizar"), "미자르");
    assert_eq!(t.backend_name(), "lexicon");
}

#[test]
fn test_lexicon_renders_known_tokens_and_rules_the_rest() {
    let lexicon = Lexicon::from_entries([("Cygni", "시그니")]);
    let t = Transliterator::new(NameTable::empty(), Box::new(lexicon));

    assert_eq!(t.transliterate("61 Cygni"), "61시그니");
    assert_eq!(t.transliterate("Deneb"), "드에느에브");
}

#[test]
fn test_override_lookup_is_exact_not_per_token() {
    let t = Transliterator::default();

    // "Rigel Kentaurus" is curated as a whole; "Rigel Kentaurus B" is not.
    assert_eq!(t.transliterate("Rigel Kentaurus"), "리겔 케타우루스");
    assert_ne!(t.transliterate("Rigel Kentaurus B"), "리겔 케타우루스");
}

#[test]
fn test_rule_based_backend_matches_rules_module() {
    assert_eq!(
        RuleBased.render("Algol"),
        Some(skylog_hangul::rules::render("Algol"))
    );
    assert_eq!(RuleBased.render("..."), None);
}
