//! Mono Layout - glyphs side by side, left to right, nothing clever
//!
//! The reference layout engine. Every character becomes one quad as wide as
//! its font advance and one line tall. No kerning, no shaping, no wrapping,
//! and no idea that some scripts run the other way: exactly the kind of
//! engine the bidi customizer exists for.

use std::sync::Arc;
use univ_core::{
    error::{LayoutError, Result},
    traits::{FontRef, GlyphLayout},
    types::{LayoutResult, LayoutSettings, Vertex},
    Vec2,
};

/// Advance-based left-to-right layout
pub struct MonoLayout;

impl MonoLayout {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MonoLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl GlyphLayout for MonoLayout {
    fn name(&self) -> &'static str {
        "mono"
    }

    fn layout(
        &self,
        text: &str,
        font: Arc<dyn FontRef>,
        settings: &LayoutSettings,
    ) -> Result<LayoutResult> {
        let upem = font.units_per_em();
        if upem == 0 {
            return Err(LayoutError::InvalidUnitsPerEm.into());
        }
        let extents = settings.extents * settings.scale_factor;
        if extents.x.is_nan() || extents.y.is_nan() || extents.x < 0.0 || extents.y < 0.0 {
            return Err(LayoutError::InvalidExtents {
                width: settings.extents.x,
                height: settings.extents.y,
            }
            .into());
        }

        log::debug!("MonoLayout: laying out {} chars", text.chars().count());

        let scale = settings.font_size / upem as f32 * settings.scale_factor;
        let line_height = settings.font_size * settings.line_spacing * settings.scale_factor;
        let pivot = settings.anchor.pivot();

        // Lines split on '\n'; '\r' never produces a glyph
        let lines: Vec<Vec<f32>> = text
            .split('\n')
            .map(|line| {
                line.chars()
                    .filter(|&ch| ch != '\r')
                    .map(|ch| {
                        let glyph_id = font.glyph_id(ch).unwrap_or(0); // .notdef
                        font.advance_width(glyph_id) * scale
                    })
                    .collect()
            })
            .collect();

        let block_height = lines.len() as f32 * line_height;
        let block_top = -extents.y / 2.0 + block_height + pivot.y * (extents.y - block_height);

        let glyph_count: usize = lines.iter().map(Vec::len).sum();
        let mut vertices = Vec::with_capacity((glyph_count + 1) * 4);
        let mut pen = Vec2::new(-extents.x / 2.0, block_top - line_height);

        for (index, line) in lines.iter().enumerate() {
            let top = block_top - index as f32 * line_height;
            let bottom = top - line_height;
            let width: f32 = line.iter().sum();
            let mut x = -extents.x / 2.0 + pivot.x * (extents.x - width);

            for &advance in line {
                push_quad(&mut vertices, x, x + advance, top, bottom, settings);
                x += advance;
            }
            pen = Vec2::new(x, bottom);
        }

        // Line-end sentinel: zero area at the final pen position
        push_quad(&mut vertices, pen.x, pen.x, pen.y, pen.y, settings);

        Ok(LayoutResult {
            vertices,
            line_count: lines.len(),
        })
    }
}

fn push_quad(
    vertices: &mut Vec<Vertex>,
    left: f32,
    right: f32,
    top: f32,
    bottom: f32,
    settings: &LayoutSettings,
) {
    let corners = [
        (Vec2::new(left, top), Vec2::new(0.0, 1.0)),
        (Vec2::new(right, top), Vec2::new(1.0, 1.0)),
        (Vec2::new(right, bottom), Vec2::new(1.0, 0.0)),
        (Vec2::new(left, bottom), Vec2::new(0.0, 0.0)),
    ];
    vertices.extend(corners.iter().map(|&(position, uv)| Vertex {
        position,
        uv,
        color: settings.color,
    }));
}
