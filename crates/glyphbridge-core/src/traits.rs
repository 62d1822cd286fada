// this_file: crates/glyphbridge-core/src/traits.rs

//! What the bounding-box math needs from a sized font
//!
//! The shaping backend implements this for its engine font; tests implement
//! it with fixed tables so every edge case is reachable without a font file.

use crate::types::{GlyphExtents, GlyphId};

/// A sized font that can report ink extents in its own scale units
pub trait GlyphExtentsSource {
    /// Ink extents of one glyph, or `None` when the font can't say
    fn glyph_extents(&self, glyph: GlyphId) -> Option<GlyphExtents>;

    /// Units per em the font reports extents and advances in, per axis
    ///
    /// Zero on either axis means there is no usable scale.
    fn scale(&self) -> (i32, i32);

    /// Point size the caller asked for, fractional
    fn size(&self) -> f32;
}

impl<T: GlyphExtentsSource + ?Sized> GlyphExtentsSource for &T {
    fn glyph_extents(&self, glyph: GlyphId) -> Option<GlyphExtents> {
        (**self).glyph_extents(glyph)
    }

    fn scale(&self) -> (i32, i32) {
        (**self).scale()
    }

    fn size(&self) -> f32 {
        (**self).size()
    }
}
