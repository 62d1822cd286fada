// this_file: backends/glyphbridge-shape-hb/src/font.rs

//! Frozen, sized HarfBuzz fonts

use std::fmt;

use harfbuzz_rs::{Font, HarfbuzzObject, Shared};
use harfbuzz_sys::{
    hb_font_get_glyph_extents, hb_font_is_immutable, hb_font_make_immutable, hb_glyph_extents_t,
};

use glyphbridge_core::narrow::try_narrow_f64;
use glyphbridge_core::types::{GlyphExtents, GlyphId};
use glyphbridge_core::{FontInstantiationError, GlyphExtentsSource};

use crate::face::ShapingFace;

/// A [`ShapingFace`] at one size, ready for shaping
///
/// The scale stays at the face's units per em, so shaped positions come out
/// in design units. The size only picks the ppem HarfBuzz hints with, and is
/// what the box math scales by.
#[derive(Clone)]
pub struct ShapingFont {
    face: ShapingFace,
    font: Shared<Font<'static>>,
    size: f32,
}

impl ShapingFont {
    pub fn new(face: &ShapingFace, size: f32) -> Result<Self, FontInstantiationError> {
        if !size.is_finite() || size <= 0.0 {
            return Err(FontInstantiationError::InvalidSize(size));
        }
        let ppem = try_narrow_f64::<u32>(f64::from(size).round())
            .ok_or(FontInstantiationError::InvalidSize(size))?;

        let mut font = Font::new(face.shared());
        font.set_ppem(ppem, ppem);
        // SAFETY: the pointer comes from the font owned right here.
        unsafe { hb_font_make_immutable(font.as_raw()) };

        let font = Self {
            face: face.clone(),
            font: font.into(),
            size,
        };
        let (scale_x, scale_y) = font.scale();
        log::debug!(
            "HarfBuzz font at {}px: ppem {}, scale {}x{}",
            size,
            ppem,
            scale_x,
            scale_y
        );
        Ok(font)
    }

    /// HarfBuzz's shared empty font over the empty face, at size zero
    pub fn empty() -> Self {
        // Static and inert, so already frozen
        let font = Self {
            face: ShapingFace::empty(),
            font: Font::empty().into(),
            size: 0.0,
        };
        font.hb_font();
        font
    }

    /// The HarfBuzz font, checked to be non-null and frozen
    pub fn hb_font(&self) -> &Font<'static> {
        let raw = self.font.as_raw();
        ensure_invariant!(!raw.is_null(), "HarfBuzz font handle is null");
        // SAFETY: non-null and kept alive by `self.font`.
        let frozen = unsafe { hb_font_is_immutable(raw) } != 0;
        ensure_invariant!(frozen, "HarfBuzz font lost its immutability");
        &self.font
    }

    /// Requested size in device units
    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn ppem(&self) -> (u32, u32) {
        self.hb_font().ppem()
    }

    /// Units per em per axis that shaped positions are expressed in
    pub fn scale(&self) -> (i32, i32) {
        self.hb_font().scale()
    }

    pub fn face(&self) -> &ShapingFace {
        &self.face
    }

    pub fn glyph_count(&self) -> u32 {
        self.face.glyph_count()
    }

    /// Ink extents of one glyph in scale units, y-up
    pub fn glyph_extents(&self, glyph: GlyphId) -> Option<GlyphExtents> {
        let raw = self.hb_font().as_raw();
        let mut extents = hb_glyph_extents_t {
            x_bearing: 0,
            y_bearing: 0,
            width: 0,
            height: 0,
        };
        // SAFETY: `raw` was just checked and `extents` is a valid out slot.
        let found = unsafe { hb_font_get_glyph_extents(raw, glyph, &mut extents) } != 0;
        found.then_some(GlyphExtents {
            x_bearing: extents.x_bearing,
            y_bearing: extents.y_bearing,
            width: extents.width,
            height: extents.height,
        })
    }

}

// SAFETY: the HarfBuzz font is frozen before a `ShapingFont` exists and no API
// mutates it afterwards; HarfBuzz reference counts atomically.
unsafe impl Send for ShapingFont {}
// SAFETY: see `Send`.
unsafe impl Sync for ShapingFont {}

impl Default for ShapingFont {
    fn default() -> Self {
        Self::empty()
    }
}

impl GlyphExtentsSource for ShapingFont {
    fn glyph_extents(&self, glyph: GlyphId) -> Option<GlyphExtents> {
        ShapingFont::glyph_extents(self, glyph)
    }

    fn scale(&self) -> (i32, i32) {
        ShapingFont::scale(self)
    }

    fn size(&self) -> f32 {
        self.size
    }
}

impl fmt::Debug for ShapingFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShapingFont")
            .field("size", &self.size)
            .field("ppem", &self.ppem())
            .field("scale", &self.scale())
            .finish()
    }
}
