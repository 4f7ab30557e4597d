//! Throw arbitrary strings at segmentation and reassembly
//!
//! Every string is valid input. The fuzzer checks that nothing panics, that
//! runs still partition the source, and that reassembly neither adds nor
//! drops characters.

#![no_main]

use libfuzzer_sys::fuzz_target;
use univ_bidi::{assemble, CharacterClassifier, TextGroup};

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    if text.len() > 10_000 {
        return;
    }

    let classifier = CharacterClassifier::default();
    let group = TextGroup::segment(&text, &classifier);

    let rebuilt: String = group.runs().iter().map(|run| run.text()).collect();
    assert_eq!(rebuilt, text);

    let corrected = assemble(&group);
    assert_eq!(corrected.text.chars().count(), text.chars().count());
});
