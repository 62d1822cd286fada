// this_file: crates/glyphbridge-core/src/bbox.rs

//! Bounding box of a shaped line
//!
//! Walk the pen across the placements, drop each glyph's ink box at the
//! pen, and keep the running union. Glyphs without ink (spaces, missing
//! extents) still move the pen. The result is flipped to y-down and
//! converted from the engine's scale units to device units.

use crate::traits::GlyphExtentsSource;
use crate::types::{BoundingBox, GlyphId, GlyphPlacement};

/// Box around all inked glyphs, in device units relative to the baseline
///
/// Returns an all-zero box when nothing has ink, or when the font has no
/// usable scale. `glyphs` and `placements` must be the same length.
pub fn calculate_bounding_box<S>(
    glyphs: &[GlyphId],
    placements: &[GlyphPlacement],
    font: &S,
) -> BoundingBox
where
    S: GlyphExtentsSource + ?Sized,
{
    ensure_invariant!(
        glyphs.len() == placements.len(),
        "{} glyphs but {} placements",
        glyphs.len(),
        placements.len()
    );

    let (scale_x, scale_y) = font.scale();

    let mut origin_x = 0.0_f64;
    let mut origin_y = 0.0_f64;
    let mut ink: Option<BoundingBox> = None;

    for (&glyph, placement) in glyphs.iter().zip(placements) {
        match font.glyph_extents(glyph) {
            Some(extents) if extents.width != 0 && extents.height != 0 => {
                let left = origin_x + f64::from(placement.offset.x) + f64::from(extents.x_bearing);
                let top = origin_y + f64::from(placement.offset.y) + f64::from(extents.y_bearing);

                let glyph_box = BoundingBox {
                    x0: left,
                    y0: -top,
                    x1: left + f64::from(extents.width),
                    y1: -(top + f64::from(extents.height)),
                };

                debug_assert!(glyph_box.x0 <= glyph_box.x1, "glyph {glyph}: {glyph_box:?}");
                debug_assert!(glyph_box.y0 <= glyph_box.y1, "glyph {glyph}: {glyph_box:?}");

                ink = Some(match ink {
                    Some(bounds) => bounds.union(&glyph_box),
                    None => glyph_box,
                });
            }
            _ => log::trace!("Glyph {} has no ink, advancing pen only", glyph),
        }

        origin_x += f64::from(placement.advance.x);
        origin_y += f64::from(placement.advance.y);
    }

    match ink {
        Some(bounds) if scale_x != 0 && scale_y != 0 => {
            let size = f64::from(font.size());
            let sx = f64::from(scale_x);
            let sy = f64::from(scale_y);
            BoundingBox {
                x0: bounds.x0 * size / sx,
                y0: bounds.y0 * size / sy,
                x1: bounds.x1 * size / sx,
                y1: bounds.y1 * size / sy,
            }
        }
        _ => BoundingBox::default(),
    }
}
