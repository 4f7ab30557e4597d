//! The contracts that bind the pass together
//!
//! Four traits, one per collaborator. The pass never knows which
//! implementation it talks to.
//!
//! - [`FontRef`] - Your window into font metrics
//! - [`GlyphLayout`] - Where a string becomes positioned glyph quads
//! - [`TextCustomizer`] - The hook that rewrites text before layout
//! - [`Exporter`] - Where a finished mesh becomes bytes

use crate::{
    error::Result,
    mesh::MeshBuffer,
    types::{CorrectedText, GlyphId, LayoutResult, LayoutSettings},
};
use std::sync::Arc;

/// Font metrics as the layout engine needs them
///
/// ```ignore
/// struct FixedFont;
///
/// impl FontRef for FixedFont {
///     fn units_per_em(&self) -> u16 {
///         1000
///     }
///
///     fn glyph_id(&self, ch: char) -> Option<GlyphId> {
///         Some(ch as u32)
///     }
///
///     fn advance_width(&self, _glyph_id: GlyphId) -> f32 {
///         500.0
///     }
/// }
/// ```
pub trait FontRef: Send + Sync {
    /// The font's internal coordinate system scale
    fn units_per_em(&self) -> u16;

    /// Find the glyph that represents this character
    ///
    /// Returns None when the font doesn't contain this character.
    fn glyph_id(&self, ch: char) -> Option<GlyphId>;

    /// How wide this glyph stands in font units
    fn advance_width(&self, glyph_id: GlyphId) -> f32;

    /// Distance from baseline to the top of the em box, in font units
    fn ascender(&self) -> f32 {
        self.units_per_em() as f32 * 0.8
    }

    /// Distance from baseline to the bottom of the em box, negative, in font units
    fn descender(&self) -> f32 {
        -(self.units_per_em() as f32 * 0.2)
    }
}

/// The glyph layout engine
///
/// Layout engines only know left-to-right. They take the already
/// reordered string and return one quad per glyph in pixels, followed
/// by a four-vertex sentinel quad for the line end.
pub trait GlyphLayout: Send + Sync {
    /// Identify yourself in logs and error messages
    fn name(&self) -> &'static str;

    /// Position every glyph of `text`
    fn layout(
        &self,
        text: &str,
        font: Arc<dyn FontRef>,
        settings: &LayoutSettings,
    ) -> Result<LayoutResult>;
}

/// The "customize layout" hook
///
/// Runs before layout and may rewrite both the string and the anchor the
/// layout engine sees.
pub trait TextCustomizer: Send + Sync {
    fn name(&self) -> &'static str;

    fn customize(&self, text: &str) -> CorrectedText;
}

/// Pass-through customizer: text untouched, anchor as given
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityCustomizer {
    pub anchor: crate::geometry::TextAnchor,
}

impl TextCustomizer for IdentityCustomizer {
    fn name(&self) -> &'static str {
        "identity"
    }

    fn customize(&self, text: &str) -> CorrectedText {
        CorrectedText {
            text: text.to_string(),
            anchor: self.anchor,
        }
    }
}

/// The final step: a mesh becomes bytes
pub trait Exporter: Send + Sync {
    fn name(&self) -> &'static str;

    /// Encode the mesh
    fn export(&self, mesh: &MeshBuffer) -> Result<Vec<u8>>;

    /// What file extension should be used?
    fn extension(&self) -> &'static str;

    /// What MIME type identifies your format?
    fn mime_type(&self) -> &'static str;
}
