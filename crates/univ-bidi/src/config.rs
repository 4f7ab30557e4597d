// this_file: crates/univ-bidi/src/config.rs

//! Which characters count as right-to-left, and which have no direction

use std::collections::HashSet;
use univ_core::{Result, UnivError};

/// The 27 Hebrew letters, final forms included
pub const HEBREW_ALPHABET: &str = "אבגדהוזחטיכךלמםנןסעפףצץקרשת";

/// Space, carriage return, line feed
pub const DEFAULT_AGNOSTIC: &str = " \r\n";

/// Overrides the RTL alphabet, e.g. `UNIV_RTL_ALPHABET=אבג`
pub const RTL_ALPHABET_ENV: &str = "UNIV_RTL_ALPHABET";

/// Overrides the direction-neutral characters
pub const AGNOSTIC_ENV: &str = "UNIV_AGNOSTIC_CHARS";

/// Caller-owned character classes
///
/// Resolve once at startup and pass by reference to whatever needs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BidiConfig {
    pub rtl_alphabet: HashSet<char>,
    pub agnostic: HashSet<char>,
}

impl Default for BidiConfig {
    fn default() -> Self {
        Self {
            rtl_alphabet: HEBREW_ALPHABET.chars().collect(),
            agnostic: DEFAULT_AGNOSTIC.chars().collect(),
        }
    }
}

impl BidiConfig {
    pub fn with_rtl_alphabet(mut self, alphabet: &str) -> Self {
        self.rtl_alphabet = alphabet.chars().collect();
        self
    }

    pub fn with_agnostic(mut self, chars: &str) -> Self {
        self.agnostic = chars.chars().collect();
        self
    }

    /// Defaults, overridden by `UNIV_RTL_ALPHABET` / `UNIV_AGNOSTIC_CHARS`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(alphabet) = lookup(RTL_ALPHABET_ENV) {
            log::info!(
                "RTL alphabet overridden via {} ({} chars)",
                RTL_ALPHABET_ENV,
                alphabet.chars().count()
            );
            config = config.with_rtl_alphabet(&alphabet);
        }
        if let Some(agnostic) = lookup(AGNOSTIC_ENV) {
            log::info!("Agnostic characters overridden via {}", AGNOSTIC_ENV);
            config = config.with_agnostic(&agnostic);
        }
        config.validate()?;
        Ok(config)
    }

    /// An empty alphabet or a character in both sets is a configuration error
    pub fn validate(&self) -> Result<()> {
        if self.rtl_alphabet.is_empty() {
            return Err(UnivError::ConfigError("RTL alphabet is empty".into()));
        }
        let mut overlap: Vec<char> = self
            .rtl_alphabet
            .intersection(&self.agnostic)
            .copied()
            .collect();
        if !overlap.is_empty() {
            overlap.sort_unstable();
            return Err(UnivError::ConfigError(format!(
                "characters are both RTL and agnostic: {:?}",
                overlap
            )));
        }
        Ok(())
    }
}
