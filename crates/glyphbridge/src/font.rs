// this_file: crates/glyphbridge/src/font.rs

//! Sizing faces

use glyphbridge_core::types::{GlyphId, PositionedGlyph};
use glyphbridge_core::{Result, ShapedText};
use glyphbridge_render_skrifa::RenderFont;
use glyphbridge_shape_hb::ShapingFont;

use crate::face::FontFace;

/// A [`FontFace`] at one size, for both the renderer and HarfBuzz
///
/// The renderer keeps the exact fractional size. HarfBuzz gets the size
/// rounded to whole pixels per em for hinting, and shapes in design units.
#[derive(Debug, Clone)]
pub struct FontInstance {
    face: FontFace,
    render: RenderFont,
    shaping: ShapingFont,
}

impl FontInstance {
    pub fn face(&self) -> &FontFace {
        &self.face
    }

    /// Requested size in points (device units)
    pub fn size(&self) -> f32 {
        self.render.size()
    }

    pub fn glyph_count(&self) -> u32 {
        self.render.glyph_count()
    }

    pub fn units_per_em(&self) -> u16 {
        self.render.units_per_em()
    }

    pub fn ascent(&self) -> f32 {
        self.render.ascent()
    }

    pub fn descent(&self) -> f32 {
        self.render.descent()
    }

    pub fn leading(&self) -> f32 {
        self.render.leading()
    }

    /// Horizontal advance of `glyph` in device units
    pub fn advance_width(&self, glyph: GlyphId) -> f32 {
        self.render.advance_width(glyph)
    }

    pub fn render_font(&self) -> &RenderFont {
        &self.render
    }

    pub fn shaping_font(&self) -> &ShapingFont {
        &self.shaping
    }

    /// Absolute device-unit glyph positions for `shaped`, which must have
    /// been shaped with this font.
    pub fn positioned_glyphs(&self, shaped: &ShapedText) -> Vec<PositionedGlyph> {
        shaped.positioned_glyphs(self.shaping.scale(), self.size())
    }
}

/// Size `face` to `size` points.
///
/// Fails with [`FontInstantiationError::InvalidSize`] unless `size` is finite
/// and positive.
///
/// [`FontInstantiationError::InvalidSize`]: glyphbridge_core::FontInstantiationError::InvalidSize
pub fn create_font(face: &FontFace, size: f32) -> Result<FontInstance> {
    let render = RenderFont::new(face.render_face(), size)?;
    let shaping = ShapingFont::new(face.shaping_face(), size)?;

    log::debug!(
        "Font instance at {}px over face {} ({} glyphs)",
        size,
        face.face_index(),
        face.glyph_count()
    );

    Ok(FontInstance {
        face: face.clone(),
        render,
        shaping,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::face::create_face;
    use glyphbridge_core::testing::TestFontBuilder;
    use glyphbridge_core::{BridgeError, FontInstantiationError};

    fn mono_face() -> FontFace {
        create_face(TestFontBuilder::monospace().build(), 0).unwrap()
    }

    #[test]
    fn test_sides_agree() {
        let font = create_font(&mono_face(), 14.5).unwrap();
        assert_eq!(font.size(), 14.5);
        assert_eq!(font.shaping_font().size(), 14.5);
        assert_eq!(font.shaping_font().ppem(), (15, 15));
        assert_eq!(font.glyph_count(), font.shaping_font().glyph_count());
    }

    #[test]
    fn test_invalid_size() {
        for size in [0.0, f32::NAN, 1e20] {
            let err = create_font(&mono_face(), size).unwrap_err();
            assert!(matches!(
                err,
                BridgeError::FontInstantiation(FontInstantiationError::InvalidSize(_))
            ));
        }
    }

    #[test]
    fn test_metrics_in_device_units() {
        let font = create_font(&mono_face(), 10.0).unwrap();
        assert!((font.ascent() - 8.0).abs() < 1e-4);
        assert!((font.descent() + 2.0).abs() < 1e-4);
        assert!((font.advance_width(2) - 6.0).abs() < 1e-4);
    }
}
