// this_file: crates/univ-bidi/src/tests.rs

use super::*;
use univ_core::TextAnchor;

fn customizer() -> BidiCustomizer {
    BidiCustomizer::default()
}

#[test]
fn test_empty_text() {
    let group = TextGroup::segment("", &CharacterClassifier::default());
    assert!(group.runs().is_empty());

    let corrected = customizer().customize("");
    assert_eq!(corrected.text, "");
}

#[test]
fn test_classification_is_stable() {
    let classifier = CharacterClassifier::default();
    for ch in ['a', 'ש', ' ', '\n', '1'] {
        assert_eq!(classifier.classify(ch), classifier.classify(ch));
    }
}

#[test]
fn test_hebrew_word_reversed_in_rtl_group() {
    let group = TextGroup::segment("שלום", &CharacterClassifier::default());
    assert!(group.is_group_rtl());
    assert_eq!(group.runs()[0].visual(), "םולש");
}

#[test]
fn test_leading_space_migration() {
    let run = Run::new("שלום ", 0..9, true, false);
    assert_eq!(run.visual(), "םולש ");
}

#[test]
fn test_latin_first_is_left_aligned() {
    let corrected = customizer().customize("Hello שלום");
    assert_eq!(corrected.anchor, TextAnchor::MiddleLeft);
    assert_eq!(corrected.text, "Hello םולש");
}

#[test]
fn test_hebrew_first_is_right_aligned() {
    let corrected = customizer().customize("שלום Hello");
    assert_eq!(corrected.anchor, TextAnchor::MiddleRight);
    assert_eq!(corrected.text, "Hello םולש");
}

#[test]
fn test_latin_island_in_hebrew_sentence() {
    // "I love Rust very much" with an English word in the middle
    let corrected = customizer().customize("אני אוהב Rust מאוד");
    // runs: "אני אוהב " | "Rust " | "מאוד", emitted last to first
    assert_eq!(corrected.text, "דואמRust  בהוא ינא");
    assert_eq!(corrected.anchor, TextAnchor::MiddleRight);
}

#[test]
fn test_hebrew_island_in_latin_sentence() {
    let corrected = customizer().customize("Say שלום עולם now");
    assert_eq!(corrected.text, "Say םלוע םולש now");
}

#[test]
fn test_multiline_text_keeps_line_breaks() {
    let corrected = customizer().customize("abc\ndef");
    assert_eq!(corrected.text, "abc\ndef");
}

#[test]
fn test_unknown_scripts_are_ltr() {
    let corrected = customizer().customize("漢字 مرحبا");
    assert_eq!(corrected.text, "漢字 مرحبا");
    assert_eq!(corrected.anchor, TextAnchor::MiddleLeft);
}

#[test]
fn test_custom_alphabet() {
    let config = BidiConfig::default().with_rtl_alphabet("xyz");
    let corrected = BidiCustomizer::new(&config).customize("ab xyz");
    assert_eq!(corrected.text, "ab zyx");
}

#[test]
fn test_correct_matches_customizer() {
    let classifier = CharacterClassifier::default();
    let text = "a אב b גד";
    assert_eq!(correct(text, &classifier), customizer().customize(text));
}
