// this_file: crates/univ-bidi/src/classify.rs

//! One character in, one direction class out

use crate::config::BidiConfig;
use std::collections::HashSet;

/// The only three things a character can be
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// Member of the configured RTL alphabet
    Rtl,
    /// No direction of its own: joins whatever run is open
    Agnostic,
    /// Everything else
    Ltr,
}

/// Set-membership classifier built from a [`BidiConfig`]
#[derive(Debug, Clone)]
pub struct CharacterClassifier {
    rtl: HashSet<char>,
    agnostic: HashSet<char>,
}

impl CharacterClassifier {
    pub fn new(config: &BidiConfig) -> Self {
        Self {
            rtl: config.rtl_alphabet.clone(),
            agnostic: config.agnostic.clone(),
        }
    }

    pub fn classify(&self, ch: char) -> CharClass {
        if self.agnostic.contains(&ch) {
            CharClass::Agnostic
        } else if self.rtl.contains(&ch) {
            CharClass::Rtl
        } else {
            CharClass::Ltr
        }
    }

    pub fn is_rtl(&self, ch: char) -> bool {
        self.rtl.contains(&ch)
    }

    pub fn is_agnostic(&self, ch: char) -> bool {
        self.agnostic.contains(&ch)
    }
}

impl Default for CharacterClassifier {
    fn default() -> Self {
        Self::new(&BidiConfig::default())
    }
}
