// this_file: crates/univ-bidi/src/segment.rs

//! Split a string into alternating-direction runs in one pass

use crate::classify::{CharClass, CharacterClassifier};
use crate::run::Run;

/// A string split into runs, in logical order
///
/// The group takes its direction from the first character. Runs partition
/// the source exactly and neighbouring runs always differ in direction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextGroup {
    runs: Vec<Run>,
    is_group_rtl: bool,
}

impl TextGroup {
    /// Scan `text` once, left to right
    ///
    /// Agnostic characters never open a run; they join whichever run is
    /// open. Leading agnostic characters therefore belong to a run with the
    /// group's direction even if the first real letter disagrees.
    pub fn segment(text: &str, classifier: &CharacterClassifier) -> Self {
        let Some(first) = text.chars().next() else {
            return Self::default();
        };

        let is_group_rtl = classifier.is_rtl(first);
        let mut runs = Vec::new();
        let mut current_rtl = is_group_rtl;
        let mut run_start = 0usize;

        for (idx, ch) in text.char_indices() {
            let is_rtl = match classifier.classify(ch) {
                CharClass::Agnostic => continue,
                CharClass::Rtl => true,
                CharClass::Ltr => false,
            };
            if is_rtl != current_rtl {
                runs.push(Run::new(
                    &text[run_start..idx],
                    run_start..idx,
                    current_rtl,
                    is_group_rtl,
                ));
                run_start = idx;
                current_rtl = is_rtl;
            }
        }

        if run_start < text.len() {
            runs.push(Run::new(
                &text[run_start..],
                run_start..text.len(),
                current_rtl,
                is_group_rtl,
            ));
        }

        log::debug!(
            "Segmented {} bytes into {} runs (group rtl={})",
            text.len(),
            runs.len(),
            is_group_rtl
        );

        Self { runs, is_group_rtl }
    }

    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    pub fn is_group_rtl(&self) -> bool {
        self.is_group_rtl
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }
}
