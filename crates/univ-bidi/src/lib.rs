// this_file: crates/univ-bidi/src/lib.rs

//! Two-class bidi for layout engines that only know left-to-right.
//!
//! This is not the Unicode Bidirectional Algorithm. Characters are either in
//! the configured RTL alphabet (Hebrew by default), direction-neutral
//! whitespace, or left-to-right by elimination. That is enough to draw Hebrew
//! words inside Latin text, and Latin words inside Hebrew text, with a plain
//! left-to-right glyph layout.
//!
//! ```
//! use univ_bidi::{BidiConfig, BidiCustomizer};
//! use univ_core::{TextAnchor, TextCustomizer};
//!
//! let customizer = BidiCustomizer::new(&BidiConfig::default());
//! let corrected = customizer.customize("Hello שלום");
//!
//! assert_eq!(corrected.text, "Hello םולש");
//! assert_eq!(corrected.anchor, TextAnchor::MiddleLeft);
//! ```

pub mod assemble;
pub mod classify;
pub mod config;
pub mod run;
pub mod segment;

pub use assemble::{assemble, group_anchor};
pub use classify::{CharClass, CharacterClassifier};
pub use config::BidiConfig;
pub use run::Run;
pub use segment::TextGroup;

use univ_core::{types::CorrectedText, TextCustomizer};

/// Segment and reassemble in one call
pub fn correct(text: &str, classifier: &CharacterClassifier) -> CorrectedText {
    assemble(&TextGroup::segment(text, classifier))
}

/// The customize-layout hook that puts mixed-direction text in visual order
#[derive(Debug, Clone, Default)]
pub struct BidiCustomizer {
    classifier: CharacterClassifier,
}

impl BidiCustomizer {
    pub fn new(config: &BidiConfig) -> Self {
        Self {
            classifier: CharacterClassifier::new(config),
        }
    }

    pub fn classifier(&self) -> &CharacterClassifier {
        &self.classifier
    }
}

impl TextCustomizer for BidiCustomizer {
    fn name(&self) -> &'static str {
        "bidi"
    }

    fn customize(&self, text: &str) -> CorrectedText {
        correct(text, &self.classifier)
    }
}

#[cfg(test)]
mod tests;

#[cfg(test)]
mod proptests;
