// this_file: crates/univ-bidi/src/assemble.rs

//! Glue the runs back together in visual order

use crate::segment::TextGroup;
use univ_core::{types::CorrectedText, TextAnchor};

/// Anchor for a group: RTL text hangs off the right edge
pub fn group_anchor(is_group_rtl: bool) -> TextAnchor {
    if is_group_rtl {
        TextAnchor::MiddleRight
    } else {
        TextAnchor::MiddleLeft
    }
}

/// Produce the string a left-to-right layout engine should draw
///
/// Each run contributes its visual form. RTL groups emit the runs last to
/// first, LTR groups first to last.
pub fn assemble(group: &TextGroup) -> CorrectedText {
    let anchor = group_anchor(group.is_group_rtl());
    let runs = group.runs();
    let capacity = runs.iter().map(|run| run.visual().len()).sum();
    let mut text = String::with_capacity(capacity);

    if group.is_group_rtl() {
        for run in runs.iter().rev() {
            text.push_str(run.visual());
        }
    } else {
        for run in runs {
            text.push_str(run.visual());
        }
    }

    CorrectedText { text, anchor }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::CharacterClassifier;

    fn correct(text: &str) -> CorrectedText {
        assemble(&TextGroup::segment(text, &CharacterClassifier::default()))
    }

    #[test]
    fn empty_group_gives_empty_string() {
        let corrected = correct("");
        assert_eq!(corrected.text, "");
        assert_eq!(corrected.anchor, TextAnchor::MiddleLeft);
    }

    #[test]
    fn ltr_group_keeps_run_order() {
        let corrected = correct("Hello שלום");
        assert_eq!(corrected.text, "Hello םולש");
        assert_eq!(corrected.anchor, TextAnchor::MiddleLeft);
    }

    #[test]
    fn rtl_group_reverses_run_order() {
        let corrected = correct("שלום Hello");
        // runs: "שלום " (rtl) + "Hello"; reversed order, plain reversal
        assert_eq!(corrected.text, "Hello םולש");
        assert_eq!(corrected.anchor, TextAnchor::MiddleRight);
    }

    #[test]
    fn rtl_island_keeps_its_space_on_the_right() {
        let corrected = correct("I said שלום to you");
        // "שלום " reversed is " םולש", the space moves back to the end
        assert_eq!(corrected.text, "I said םולש to you");
    }

    #[test]
    fn latin_only_passes_through() {
        let corrected = correct("Plain text");
        assert_eq!(corrected.text, "Plain text");
    }

    #[test]
    fn hebrew_only_is_fully_reversed() {
        let corrected = correct("שלום עולם");
        assert_eq!(corrected.text, "םלוע םולש");
        assert_eq!(corrected.anchor, TextAnchor::MiddleRight);
    }
}
