// this_file: crates/univ-core/src/pass.rs

//! One rendering pass: customize, lay out, correct, fill

use crate::{
    error::{Result, UnivError},
    geometry,
    mesh::{self, MeshSink},
    traits::{FontRef, GlyphLayout, IdentityCustomizer, TextCustomizer},
    types::CorrectedText,
    PassParams,
};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

/// Text component composed from capabilities instead of a render base class
///
/// The pass owns no text. Every call to [`TextPass::populate_mesh`] starts
/// from the raw string, so nothing carries over between passes except the
/// font-rebuild bookkeeping.
///
/// ```ignore
/// let pass = TextPass::builder()
///     .layout(Arc::new(MonoLayout::new()))
///     .font(font)
///     .customizer(Arc::new(BidiCustomizer::default()))
///     .build()?;
///
/// let outcome = pass.populate_mesh("Hello שלום", &params, &mut mesh)?;
/// ```
pub struct TextPass {
    layout: Arc<dyn GlyphLayout>,
    font: Option<Arc<dyn FontRef>>,
    customizer: Option<Arc<dyn TextCustomizer>>,
    /// Number of passes currently running
    rebuild_suppressed: AtomicUsize,
    dirty: AtomicBool,
}

/// What a pass did to the mesh
#[derive(Debug, Clone, PartialEq)]
pub enum PassOutcome {
    /// No font: the sink was not touched
    Skipped,
    /// The sink now holds exactly `quad_count` quads
    Populated {
        corrected: CorrectedText,
        quad_count: usize,
    },
}

impl TextPass {
    /// Start building a new pass
    pub fn builder() -> TextPassBuilder {
        TextPassBuilder::new()
    }

    pub fn font(&self) -> Option<Arc<dyn FontRef>> {
        self.font.clone()
    }

    /// Swap the font; `None` turns every following pass into a no-op
    pub fn set_font(&mut self, font: Option<Arc<dyn FontRef>>) {
        self.font = font;
        self.dirty.store(true, Ordering::SeqCst);
    }

    /// Rebuild `sink` from `text`
    pub fn populate_mesh<S: MeshSink + ?Sized>(
        &self,
        text: &str,
        params: &PassParams,
        sink: &mut S,
    ) -> Result<PassOutcome> {
        let Some(font) = self.font.clone() else {
            log::debug!("TextPass: no font, leaving mesh untouched");
            return Ok(PassOutcome::Skipped);
        };
        params.validate()?;

        // Layout output stays valid for this pass even if the font texture
        // is rebuilt underneath it.
        let _guard = RebuildGuard::engage(&self.rebuild_suppressed);

        let corrected = match &self.customizer {
            Some(customizer) => customizer.customize(text),
            None => IdentityCustomizer {
                anchor: params.anchor,
            }
            .customize(text),
        };

        let rounding_offset = geometry::rounding_offset(
            &params.rect,
            corrected.anchor,
            params.scale_factor,
            params.pixel_perfect,
        );

        let settings = params.layout_settings(corrected.anchor);
        let laid_out = self.layout.layout(&corrected.text, font, &settings)?;

        let quad_count = mesh::fill_mesh(
            sink,
            &laid_out.vertices,
            params.pixels_per_unit,
            rounding_offset,
        );

        log::debug!(
            "TextPass: {} chars -> {} quads via {} ({:?})",
            text.chars().count(),
            quad_count,
            self.layout.name(),
            corrected.anchor
        );

        Ok(PassOutcome::Populated {
            corrected,
            quad_count,
        })
    }

    /// Font texture rebuilt notification
    ///
    /// Ignored while a pass is running. Otherwise marks the pass dirty and
    /// returns true.
    pub fn font_texture_changed(&self) -> bool {
        if self.is_rebuild_suppressed() {
            log::trace!("TextPass: font rebuild ignored during pass");
            return false;
        }
        self.dirty.store(true, Ordering::SeqCst);
        true
    }

    /// Whether any pass is currently running
    pub fn is_rebuild_suppressed(&self) -> bool {
        self.rebuild_suppressed.load(Ordering::SeqCst) > 0
    }

    /// Read and clear the dirty flag
    pub fn take_dirty(&self) -> bool {
        self.dirty.swap(false, Ordering::SeqCst)
    }
}

/// Scoped font-rebuild suppression, released on every exit path
///
/// Overlapping passes each hold one level; suppression lasts until the
/// last of them finishes, whatever order they finish in.
struct RebuildGuard<'a> {
    depth: &'a AtomicUsize,
}

impl<'a> RebuildGuard<'a> {
    fn engage(depth: &'a AtomicUsize) -> Self {
        depth.fetch_add(1, Ordering::SeqCst);
        Self { depth }
    }
}

impl Drop for RebuildGuard<'_> {
    fn drop(&mut self) {
        self.depth.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Build passes piece by piece
pub struct TextPassBuilder {
    layout: Option<Arc<dyn GlyphLayout>>,
    font: Option<Arc<dyn FontRef>>,
    customizer: Option<Arc<dyn TextCustomizer>>,
}

impl TextPassBuilder {
    /// Start with a clean slate
    pub fn new() -> Self {
        Self {
            layout: None,
            font: None,
            customizer: None,
        }
    }

    /// Choose who positions the glyphs
    pub fn layout(mut self, layout: Arc<dyn GlyphLayout>) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Choose the font; without one every pass is skipped
    pub fn font(mut self, font: Arc<dyn FontRef>) -> Self {
        self.font = Some(font);
        self
    }

    /// Install the customize-layout hook
    pub fn customizer(mut self, customizer: Arc<dyn TextCustomizer>) -> Self {
        self.customizer = Some(customizer);
        self
    }

    pub fn build(self) -> Result<TextPass> {
        let layout = self
            .layout
            .ok_or_else(|| UnivError::ConfigError("No layout engine configured".into()))?;

        Ok(TextPass {
            layout,
            font: self.font,
            customizer: self.customizer,
            rebuild_suppressed: AtomicUsize::new(0),
            dirty: AtomicBool::new(true),
        })
    }
}

impl Default for TextPassBuilder {
    fn default() -> Self {
        Self::new()
    }
}
