// this_file: backends/glyphbridge-shape-hb/src/shaping.rs

//! One shaping call: text in, [`ShapedText`] out

use glyphbridge_core::bbox::calculate_bounding_box;
use glyphbridge_core::types::{GlyphId, GlyphPlacement, PointI};
use glyphbridge_core::{FontInstantiationError, ShapedText};

use crate::buffer::{SegmentProperties, ShapedGlyphs, ShapingBuffer};
use crate::face::ShapingFace;
use crate::font::ShapingFont;

/// Shape `text` as left-to-right Latin English.
///
/// Never fails: an empty string, or a font without glyphs, still produces a
/// well-formed (possibly empty) result.
pub fn shape(text: &str, font: &ShapingFont) -> ShapedText {
    shape_with_properties(text, font, &SegmentProperties::default())
}

/// Shape `text` with explicit segment properties.
pub fn shape_with_properties(
    text: &str,
    font: &ShapingFont,
    props: &SegmentProperties,
) -> ShapedText {
    if text.is_empty() {
        return ShapedText::default();
    }

    let shaped = ShapingBuffer::with_segment_properties(text, props).shape(font);
    let (glyphs, placements) = extract(&shaped);
    let bounding_box = calculate_bounding_box(&glyphs, &placements, font);

    log::trace!(
        "Shaped {} chars into {} glyphs at {}px, box {:?}",
        text.chars().count(),
        glyphs.len(),
        font.size(),
        bounding_box
    );

    ShapedText::from_parts(glyphs, placements, bounding_box)
}

/// Build a font for `size` on the spot and shape with it.
pub fn shape_with_face(
    text: &str,
    face: &ShapingFace,
    size: f32,
) -> Result<ShapedText, FontInstantiationError> {
    let font = ShapingFont::new(face, size)?;
    Ok(shape(text, &font))
}

fn extract(shaped: &ShapedGlyphs) -> (Vec<GlyphId>, Vec<GlyphPlacement>) {
    shaped
        .infos()
        .iter()
        .zip(shaped.positions())
        .map(|(info, pos)| {
            let placement = GlyphPlacement::new(
                PointI::new(pos.x_offset, pos.y_offset),
                PointI::new(pos.x_advance, pos.y_advance),
            );
            (info.codepoint, placement)
        })
        .unzip()
}
