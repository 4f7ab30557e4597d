//! Univ - mixed-direction text on a left-to-right layout engine
//!
//! A rendering pass goes through four steps:
//! 1. Customize: reorder the string into visual order, pick the anchor
//! 2. Layout: position one quad per glyph
//! 3. Correct: scale back to local units, snap to the pixel grid
//! 4. Consume: hand the quads to a mesh sink
//!
//! # Example
//!
//! ```ignore
//! use univ::prelude::*;
//!
//! let pass = univ::bidi_text_pass(font, &BidiConfig::default())?;
//! let mut mesh = MeshBuffer::new();
//! pass.populate_mesh("Hello שלום", &PassParams::default(), &mut mesh)?;
//! ```
//!
//! # Feature Flags
//!
//! - `bidi`: the two-class bidi customizer
//! - `layout-mono`: the reference layout engine
//! - `render-json`: JSON mesh exporter
//! - `minimal`: `layout-mono` only
//! - `full`: everything

pub use univ_core::{error, geometry, mesh, traits, types, Color, PassParams, TextPass};

#[cfg(feature = "bidi")]
pub use univ_bidi as bidi;

#[cfg(feature = "layout-mono")]
pub use univ_layout_mono as layout_mono;

#[cfg(feature = "render-json")]
pub use univ_render_json as render_json;

/// A pass with the reference layout and the bidi customizer
#[cfg(all(feature = "bidi", feature = "layout-mono"))]
pub fn bidi_text_pass(
    font: std::sync::Arc<dyn univ_core::FontRef>,
    config: &univ_bidi::BidiConfig,
) -> univ_core::Result<TextPass> {
    use std::sync::Arc;

    config.validate()?;
    log::debug!(
        "Building bidi text pass ({} RTL chars)",
        config.rtl_alphabet.len()
    );
    TextPass::builder()
        .layout(Arc::new(univ_layout_mono::MonoLayout::new()))
        .font(font)
        .customizer(Arc::new(univ_bidi::BidiCustomizer::new(config)))
        .build()
}

/// Common imports for typical usage
pub mod prelude {
    pub use univ_core::{
        error::{Result, UnivError},
        mesh::{MeshBuffer, MeshSink},
        traits::{Exporter, FontRef, GlyphLayout, TextCustomizer},
        types::{CorrectedText, Quad, Vertex},
        Color, PassOutcome, PassParams, Rect, TextAnchor, TextPass, Vec2,
    };

    #[cfg(feature = "bidi")]
    pub use univ_bidi::{BidiConfig, BidiCustomizer};
}
