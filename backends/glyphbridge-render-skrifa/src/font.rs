// this_file: backends/glyphbridge-render-skrifa/src/font.rs

//! A face at one fractional size, with the metrics a renderer lays out with

use read_fonts::TableProvider;
use skrifa::instance::{LocationRef, Size};
use skrifa::metrics::Metrics;
use skrifa::{GlyphId as SkrifaGlyphId, MetadataProvider};

use glyphbridge_core::types::GlyphId;
use glyphbridge_core::FontInstantiationError;

use crate::face::RenderFace;

/// Renderer view of a sized font
///
/// Keeps the exact requested size; nothing here is rounded to whole pixels.
#[derive(Debug, Clone)]
pub struct RenderFont {
    face: RenderFace,
    size: f32,
    metrics: Metrics,
}

impl RenderFont {
    pub fn new(face: &RenderFace, size: f32) -> Result<Self, FontInstantiationError> {
        if !size.is_finite() || size <= 0.0 {
            return Err(FontInstantiationError::InvalidSize(size));
        }

        let font = face.font_ref();
        font.hhea()
            .map_err(|e| FontInstantiationError::Metrics(format!("unreadable hhea table: {e}")))?;
        let metrics = font.metrics(Size::new(size), LocationRef::default());

        log::debug!(
            "Sized face {} at {}px: ascent {}, descent {}, leading {}",
            face.face_index(),
            size,
            metrics.ascent,
            metrics.descent,
            metrics.leading
        );

        Ok(Self {
            face: face.clone(),
            size,
            metrics,
        })
    }

    pub fn face(&self) -> &RenderFace {
        &self.face
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn units_per_em(&self) -> u16 {
        self.face.units_per_em()
    }

    pub fn glyph_count(&self) -> u32 {
        self.face.glyph_count()
    }

    /// Distance from baseline to the top of the line, device units
    pub fn ascent(&self) -> f32 {
        self.metrics.ascent
    }

    /// Usually negative: the baseline-relative bottom of the line
    pub fn descent(&self) -> f32 {
        self.metrics.descent
    }

    pub fn leading(&self) -> f32 {
        self.metrics.leading
    }

    /// Scaled horizontal advance, or 0 for a glyph the font has no metrics for
    pub fn advance_width(&self, glyph: GlyphId) -> f32 {
        let advance = self
            .face
            .font_ref()
            .glyph_metrics(Size::new(self.size), LocationRef::default())
            .advance_width(SkrifaGlyphId::new(glyph));

        advance.unwrap_or_else(|| {
            log::warn!("No advance for glyph {}, using 0", glyph);
            0.0
        })
    }
}
