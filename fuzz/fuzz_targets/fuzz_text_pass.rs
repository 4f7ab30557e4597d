//! Full passes with arbitrary text and geometry
//!
//! The first bytes pick the scale and rectangle, the rest is the text.
//! Invalid scales must come back as errors, never as panics.

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::sync::Arc;
use univ_bidi::BidiCustomizer;
use univ_core::{types::GlyphId, FontRef, MeshBuffer, PassParams, Rect, TextPass};
use univ_layout_mono::MonoLayout;

struct FuzzFont;

impl FontRef for FuzzFont {
    fn units_per_em(&self) -> u16 {
        1000
    }
    fn glyph_id(&self, ch: char) -> Option<GlyphId> {
        Some(ch as u32)
    }
    fn advance_width(&self, glyph_id: GlyphId) -> f32 {
        (glyph_id % 1000) as f32
    }
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 || data.len() > 4_096 {
        return;
    }

    let Ok(pass) = TextPass::builder()
        .layout(Arc::new(MonoLayout::new()))
        .font(Arc::new(FuzzFont))
        .customizer(Arc::new(BidiCustomizer::default()))
        .build()
    else {
        return;
    };

    let params = PassParams {
        rect: Rect::centered(data[0] as f32 * 4.0, data[1] as f32),
        pixels_per_unit: data[2] as f32 / 16.0,
        scale_factor: 1.0 + data[3] as f32 / 64.0,
        pixel_perfect: data[3] % 2 == 0,
        ..Default::default()
    };
    let text = String::from_utf8_lossy(&data[4..]);

    let mut mesh = MeshBuffer::new();
    let _ = pass.populate_mesh(&text, &params, &mut mesh);
    assert!(!pass.is_rebuild_suppressed());
});
