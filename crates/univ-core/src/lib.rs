//! Univ Core: mixed-direction text, one left-to-right layout engine
//!
//! Layout engines that only understand left-to-right happily render Latin
//! text. Hand them Hebrew and every word comes out backwards. This crate
//! holds the pieces that sit around such an engine so it never has to know:
//!
//! 1. **Customize** - a [`TextCustomizer`] rewrites the string into visual
//!    order and picks the anchor (see the `univ-bidi` crate)
//! 2. **Layout** - a [`GlyphLayout`] positions glyph quads in pixels
//! 3. **Correct** - [`mesh::correct_quads`] scales the quads back to local
//!    units and snaps them to the pixel grid
//! 4. **Consume** - a [`MeshSink`] receives the finished quads
//!
//! [`TextPass`] wires the four together for one rendering pass.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use univ_core::{MeshBuffer, PassParams, TextPass};
//! # use univ_core::traits::*;
//! # use univ_core::types::*;
//! # struct MyLayout;
//! # impl GlyphLayout for MyLayout {
//! #     fn name(&self) -> &'static str { "test" }
//! #     fn layout(&self, _: &str, _: Arc<dyn FontRef>, _: &LayoutSettings)
//! #         -> univ_core::Result<LayoutResult> { unimplemented!() }
//! # }
//! # fn load_font() -> Arc<dyn FontRef> { unimplemented!() }
//!
//! let pass = TextPass::builder()
//!     .layout(Arc::new(MyLayout))
//!     .font(load_font())
//!     .build()?;
//!
//! let mut mesh = MeshBuffer::new();
//! pass.populate_mesh("Hello, World!", &PassParams::default(), &mut mesh)?;
//! # Ok::<(), univ_core::UnivError>(())
//! ```

pub mod error;
pub mod geometry;
pub mod mesh;
pub mod pass;
pub mod traits;

pub use error::{Result, UnivError};
pub use geometry::{Rect, TextAnchor, Vec2};
pub use mesh::{MeshBuffer, MeshSink};
pub use pass::{PassOutcome, TextPass, TextPassBuilder};
pub use traits::{Exporter, FontRef, GlyphLayout, TextCustomizer};

/// The data structures that travel through a pass
pub mod types {
    use crate::geometry::{TextAnchor, Vec2};
    use crate::Color;

    /// Unique identifier for a glyph within a font
    pub type GlyphId = u32;

    /// Every glyph is drawn as one quad
    pub const VERTS_PER_QUAD: usize = 4;

    /// One corner of a glyph quad
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Vertex {
        pub position: Vec2,
        pub uv: Vec2,
        pub color: Color,
    }

    impl Default for Vertex {
        fn default() -> Self {
            Self {
                position: Vec2::ZERO,
                uv: Vec2::ZERO,
                color: Color::black(),
            }
        }
    }

    /// Four vertices, clockwise from the top-left corner
    pub type Quad = [Vertex; VERTS_PER_QUAD];

    /// The string the layout engine should see, and how to anchor it
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct CorrectedText {
        pub text: String,
        pub anchor: TextAnchor,
    }

    /// Geometry the layout engine works with
    #[derive(Debug, Clone, PartialEq)]
    pub struct LayoutSettings {
        /// Available area in local units
        pub extents: Vec2,
        pub font_size: f32,
        /// Pixels per local unit; layout output is in pixels
        pub scale_factor: f32,
        pub line_spacing: f32,
        pub anchor: TextAnchor,
        pub color: Color,
    }

    impl Default for LayoutSettings {
        fn default() -> Self {
            Self {
                extents: Vec2::new(160.0, 30.0),
                font_size: 14.0,
                scale_factor: 1.0,
                line_spacing: 1.0,
                anchor: TextAnchor::default(),
                color: Color::black(),
            }
        }
    }

    /// Raw layout output: 4 vertices per glyph, then the 4-vertex line-end sentinel
    #[derive(Debug, Clone, Default)]
    pub struct LayoutResult {
        pub vertices: Vec<Vertex>,
        pub line_count: usize,
    }
}

/// Everything one pass needs besides the text
#[derive(Debug, Clone, PartialEq)]
pub struct PassParams {
    /// The component's rectangle in local units
    pub rect: Rect,
    pub font_size: f32,
    /// Layout happens at this many pixels per local unit
    pub pixels_per_unit: f32,
    /// Device pixels per local unit, used for grid snapping
    pub scale_factor: f32,
    pub pixel_perfect: bool,
    pub line_spacing: f32,
    pub color: Color,
    /// Anchor used when no customizer overrides it
    pub anchor: TextAnchor,
}

impl Default for PassParams {
    fn default() -> Self {
        Self {
            rect: Rect::centered(160.0, 30.0),
            font_size: 14.0,
            pixels_per_unit: 1.0,
            scale_factor: 1.0,
            pixel_perfect: false,
            line_spacing: 1.0,
            color: Color::black(),
            anchor: TextAnchor::default(),
        }
    }
}

impl PassParams {
    /// Reject scales the corrector cannot divide by
    pub fn validate(&self) -> Result<()> {
        if !self.pixels_per_unit.is_finite() || self.pixels_per_unit <= 0.0 {
            return Err(UnivError::ConfigError(format!(
                "pixels_per_unit must be positive, got {}",
                self.pixels_per_unit
            )));
        }
        if !self.scale_factor.is_finite() || self.scale_factor <= 0.0 {
            return Err(UnivError::ConfigError(format!(
                "scale_factor must be positive, got {}",
                self.scale_factor
            )));
        }
        Ok(())
    }

    /// Settings handed to the layout engine for the given anchor
    pub fn layout_settings(&self, anchor: TextAnchor) -> types::LayoutSettings {
        types::LayoutSettings {
            extents: self.rect.size(),
            font_size: self.font_size,
            scale_factor: self.pixels_per_unit,
            line_spacing: self.line_spacing,
            anchor,
            color: self.color,
        }
    }
}

/// Simple RGBA color that works everywhere
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn black() -> Self {
        Self::rgba(0, 0, 0, 255)
    }

    pub const fn white() -> Self {
        Self::rgba(255, 255, 255, 255)
    }
}
