// this_file: crates/univ-bidi/src/proptests.rs

use super::*;
use proptest::prelude::*;

/// Latin, Hebrew, digits, punctuation and the agnostic whitespace
fn mixed_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9.,!אבגדהוזחטיכךלמםנןסעפףצץקרשת \r\n]{0,40}"
}

// Property: runs partition the source exactly, in order
proptest! {
    #[test]
    fn prop_runs_partition_source(s in mixed_text()) {
        let group = TextGroup::segment(&s, &CharacterClassifier::default());
        let rebuilt: String = group.runs().iter().map(|r| r.text()).collect();
        prop_assert_eq!(&rebuilt, &s);

        let mut expected_start = 0;
        for run in group.runs() {
            prop_assert_eq!(run.range().start, expected_start);
            prop_assert_eq!(&s[run.range()], run.text());
            expected_start = run.range().end;
        }
        prop_assert_eq!(expected_start, s.len());
    }
}

// Property: neighbouring runs never share a direction, and none is empty
proptest! {
    #[test]
    fn prop_runs_alternate(s in mixed_text()) {
        let group = TextGroup::segment(&s, &CharacterClassifier::default());
        for pair in group.runs().windows(2) {
            prop_assert_ne!(pair[0].is_rtl(), pair[1].is_rtl());
        }
        for run in group.runs() {
            prop_assert!(!run.text().is_empty());
        }
    }
}

// Property: the first run always carries the group direction
proptest! {
    #[test]
    fn prop_first_run_matches_group(s in mixed_text()) {
        let group = TextGroup::segment(&s, &CharacterClassifier::default());
        if let Some(first) = group.runs().first() {
            prop_assert_eq!(first.is_rtl(), group.is_group_rtl());
        }
    }
}

// Property: reassembly only reorders characters, never adds or drops any
proptest! {
    #[test]
    fn prop_correction_preserves_characters(s in mixed_text()) {
        let corrected = correct(&s, &CharacterClassifier::default());

        let mut before: Vec<char> = s.chars().collect();
        let mut after: Vec<char> = corrected.text.chars().collect();
        before.sort_unstable();
        after.sort_unstable();
        prop_assert_eq!(before, after);
    }
}

// Property: in an RTL group every RTL run is the exact reverse of its text
proptest! {
    #[test]
    fn prop_rtl_group_runs_are_plain_reversals(s in "[אבגדה][אבגדה ab]{0,20}") {
        let group = TextGroup::segment(&s, &CharacterClassifier::default());
        prop_assert!(group.is_group_rtl());
        for run in group.runs().iter().filter(|r| r.is_rtl()) {
            let reversed: String = run.text().chars().rev().collect();
            prop_assert_eq!(run.visual(), reversed.as_str());
        }
    }
}

// Property: pure Latin text passes through unchanged and left-anchored
proptest! {
    #[test]
    fn prop_latin_unchanged(s in "[a-zA-Z0-9 ]{0,30}") {
        let corrected = correct(&s, &CharacterClassifier::default());
        prop_assert_eq!(&corrected.text, &s);
        prop_assert_eq!(corrected.anchor, univ_core::TextAnchor::MiddleLeft);
    }
}
