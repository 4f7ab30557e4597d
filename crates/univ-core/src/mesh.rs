//! Where layout output becomes a finished mesh
//!
//! Layout engines hand back a flat vertex list in pixels: four vertices per
//! glyph, followed by four more for the implicit line end. This module drops
//! that tail, scales everything back into local units, nudges the quads onto
//! the pixel grid and hands them to a [`MeshSink`] one quad at a time.

// this_file: crates/univ-core/src/mesh.rs

use crate::geometry::Vec2;
use crate::types::{Quad, Vertex, VERTS_PER_QUAD};

/// Anything that can collect finished quads
pub trait MeshSink {
    /// Drop everything collected so far
    fn clear(&mut self);

    /// Append one quad, vertices in layout order
    fn add_quad(&mut self, quad: &Quad);
}

/// The default mesh consumer: an ordered list of quads
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuffer {
    quads: Vec<Quad>,
}

impl MeshBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quads(&self) -> &[Quad] {
        &self.quads
    }

    pub fn len(&self) -> usize {
        self.quads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quads.is_empty()
    }

    /// All vertices in quad order
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.quads.iter().flat_map(|quad| quad.iter())
    }
}

impl MeshSink for MeshBuffer {
    fn clear(&mut self) {
        self.quads.clear();
    }

    fn add_quad(&mut self, quad: &Quad) {
        self.quads.push(*quad);
    }
}

/// Number of vertices that belong to real glyphs
///
/// The last four vertices of every layout are the line-end sentinel.
pub fn usable_vertex_count(total: usize) -> usize {
    let usable = total.saturating_sub(VERTS_PER_QUAD);
    if total < VERTS_PER_QUAD || usable % VERTS_PER_QUAD != 0 {
        log::warn!(
            "Layout returned {} vertices, expected a multiple of {} plus the sentinel quad",
            total,
            VERTS_PER_QUAD
        );
    }
    usable
}

/// Turn raw layout vertices into local-space quads
///
/// Positions are scaled by `1 / pixels_per_unit`; a non-zero
/// `rounding_offset` is then added to every vertex. Quad boundaries are
/// fixed at `0..4, 4..8, ...`; an incomplete trailing group is dropped.
pub fn correct_quads(
    vertices: &[Vertex],
    pixels_per_unit: f32,
    rounding_offset: Vec2,
) -> Vec<Quad> {
    let usable = usable_vertex_count(vertices.len());
    let units_per_pixel = 1.0 / pixels_per_unit;
    let apply_offset = !rounding_offset.is_zero();

    vertices[..usable]
        .chunks_exact(VERTS_PER_QUAD)
        .map(|chunk| {
            let mut quad = [Vertex::default(); VERTS_PER_QUAD];
            for (slot, vertex) in quad.iter_mut().zip(chunk) {
                *slot = *vertex;
                slot.position = slot.position * units_per_pixel;
                if apply_offset {
                    slot.position = slot.position + rounding_offset;
                }
            }
            quad
        })
        .collect()
}

/// Clear `sink` and refill it with the corrected quads
///
/// Returns how many quads were written.
pub fn fill_mesh<S: MeshSink + ?Sized>(
    sink: &mut S,
    vertices: &[Vertex],
    pixels_per_unit: f32,
    rounding_offset: Vec2,
) -> usize {
    let quads = correct_quads(vertices, pixels_per_unit, rounding_offset);
    sink.clear();
    for quad in &quads {
        sink.add_quad(quad);
    }
    log::trace!("Filled mesh with {} quads", quads.len());
    quads.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    fn vertex(x: f32, y: f32) -> Vertex {
        Vertex {
            position: Vec2::new(x, y),
            uv: Vec2::ZERO,
            color: Color::black(),
        }
    }

    fn glyph_verts(x: f32, width: f32, height: f32) -> Vec<Vertex> {
        vec![
            vertex(x, height),
            vertex(x + width, height),
            vertex(x + width, 0.0),
            vertex(x, 0.0),
        ]
    }

    fn two_glyphs_with_sentinel() -> Vec<Vertex> {
        let mut verts = glyph_verts(0.0, 10.0, 20.0);
        verts.extend(glyph_verts(10.0, 10.0, 20.0));
        verts.extend(glyph_verts(20.0, 0.0, 0.0));
        verts
    }

    #[test]
    fn twelve_vertices_make_two_quads() {
        let quads = correct_quads(&two_glyphs_with_sentinel(), 2.0, Vec2::ZERO);

        assert_eq!(quads.len(), 2);
        assert_eq!(quads[0][1].position, Vec2::new(5.0, 10.0));
        assert_eq!(quads[1][0].position, Vec2::new(5.0, 10.0));
        assert_eq!(quads[1][2].position, Vec2::new(10.0, 0.0));
    }

    #[test]
    fn rounding_offset_shifts_every_vertex() {
        let offset = Vec2::new(0.25, -0.5);
        let plain = correct_quads(&two_glyphs_with_sentinel(), 1.0, Vec2::ZERO);
        let shifted = correct_quads(&two_glyphs_with_sentinel(), 1.0, offset);

        for (a, b) in plain.iter().flatten().zip(shifted.iter().flatten()) {
            assert_eq!(b.position, a.position + offset);
        }
    }

    #[test]
    fn sentinel_only_layout_yields_nothing() {
        let quads = correct_quads(&glyph_verts(0.0, 0.0, 0.0), 1.0, Vec2::ZERO);
        assert!(quads.is_empty());
        assert!(correct_quads(&[], 1.0, Vec2::ZERO).is_empty());
    }

    #[test]
    fn incomplete_tail_is_dropped() {
        let mut verts = two_glyphs_with_sentinel();
        verts.push(vertex(99.0, 99.0));

        // 13 - 4 = 9 usable, only two full quads
        let quads = correct_quads(&verts, 1.0, Vec2::ZERO);
        assert_eq!(quads.len(), 2);
    }

    #[test]
    fn fill_mesh_replaces_previous_contents() {
        let mut mesh = MeshBuffer::new();
        mesh.add_quad(&[vertex(1.0, 1.0); 4]);

        let written = fill_mesh(&mut mesh, &two_glyphs_with_sentinel(), 1.0, Vec2::ZERO);

        assert_eq!(written, 2);
        assert_eq!(mesh.len(), 2);
        assert_eq!(mesh.vertices().count(), 8);
        assert_eq!(mesh.quads()[0][0].position, Vec2::new(0.0, 20.0));
    }
}
