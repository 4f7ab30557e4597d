// this_file: crates/univ-bidi/src/run.rs

//! A single-direction slice of text and the form it is drawn in

use std::ops::Range;

/// A maximal slice of one direction
///
/// The drawn form is fixed at construction: LTR runs draw their text as is,
/// RTL runs draw it reversed. An RTL run inside an LTR group also moves the
/// spaces that reversal pushed to its front over to its back, so the gap
/// between words stays between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    text: String,
    range: Range<usize>,
    is_rtl: bool,
    visual: String,
}

impl Run {
    /// Build a run covering `range` (byte offsets in the source string)
    pub fn new(text: &str, range: Range<usize>, is_rtl: bool, is_group_rtl: bool) -> Self {
        let visual = if is_rtl {
            visual_form(text, is_group_rtl)
        } else {
            text.to_string()
        };
        log::trace!("Run {:?} rtl={} -> {:?}", range, is_rtl, visual);
        Self {
            text: text.to_string(),
            range,
            is_rtl,
            visual,
        }
    }

    /// The source slice, in logical order
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Byte range of this run in the source string
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    pub fn is_rtl(&self) -> bool {
        self.is_rtl
    }

    /// What the layout engine should draw for this run
    pub fn visual(&self) -> &str {
        &self.visual
    }
}

/// Reverse an RTL slice; inside an LTR group, leading spaces move to the end
///
/// Only U+0020 moves. Line breaks stay where reversal put them.
pub fn visual_form(text: &str, is_group_rtl: bool) -> String {
    let reversed: String = text.chars().rev().collect();
    if is_group_rtl {
        return reversed;
    }

    let body = reversed.trim_start_matches(' ');
    let moved = reversed.len() - body.len();
    let mut visual = String::with_capacity(reversed.len());
    visual.push_str(body);
    visual.extend(std::iter::repeat(' ').take(moved));
    visual
}
