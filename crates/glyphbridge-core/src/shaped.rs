// this_file: crates/glyphbridge-core/src/shaped.rs

//! Output of one shaping call

use crate::types::{
    BoundingBox, GlyphId, GlyphPlacement, GlyphRun, PlacementType, PositionedGlyph, Rect,
};

/// Glyphs, their placements and the ink box, frozen after shaping
///
/// The glyph and placement sequences always have the same length. Two
/// `ShapedText`s compare equal when all three parts match exactly.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ShapedText {
    glyphs: Vec<GlyphId>,
    placements: Vec<GlyphPlacement>,
    bounding_box: BoundingBox,
}

impl ShapedText {
    /// Assemble from parallel sequences; mismatched lengths are a bug
    pub fn from_parts(
        glyphs: Vec<GlyphId>,
        placements: Vec<GlyphPlacement>,
        bounding_box: BoundingBox,
    ) -> Self {
        ensure_invariant!(
            glyphs.len() == placements.len(),
            "{} glyphs but {} placements",
            glyphs.len(),
            placements.len()
        );
        Self {
            glyphs,
            placements,
            bounding_box,
        }
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Glyph ids in final rendering order
    pub fn glyphs(&self) -> &[GlyphId] {
        &self.glyphs
    }

    pub fn placements(&self) -> &[GlyphPlacement] {
        &self.placements
    }

    /// The view a rasterizer consumes
    pub fn glyph_run(&self) -> GlyphRun<'_> {
        GlyphRun {
            glyphs: &self.glyphs,
            placements: &self.placements,
            placement_type: PlacementType::AdvanceOffset,
        }
    }

    /// Ink box relative to the baseline, in device units
    pub fn bounding_box(&self) -> BoundingBox {
        self.bounding_box
    }

    /// Same box as origin plus size
    pub fn bounding_rect(&self) -> Rect {
        self.bounding_box.to_rect()
    }

    /// Where the pen ends up after the last glyph, in design units
    pub fn total_advance(&self) -> (i64, i64) {
        self.placements.iter().fold((0, 0), |(x, y), p| {
            (x + i64::from(p.advance.x), y + i64::from(p.advance.y))
        })
    }

    /// Absolute device-unit positions, walking the pen like the box math does
    ///
    /// `scale` is the engine's units per em per axis; a zero axis yields zero
    /// positions on that axis rather than infinities.
    pub fn positioned_glyphs(&self, scale: (i32, i32), size: f32) -> Vec<PositionedGlyph> {
        let factor = |units: i32| {
            if units == 0 {
                0.0
            } else {
                f64::from(size) / f64::from(units)
            }
        };
        let fx = factor(scale.0);
        let fy = factor(scale.1);

        let mut pen_x = 0.0_f64;
        let mut pen_y = 0.0_f64;

        self.glyph_run()
            .iter()
            .map(|(id, placement)| {
                let glyph = PositionedGlyph {
                    id,
                    x: ((pen_x + f64::from(placement.offset.x)) * fx) as f32,
                    y: (-(pen_y + f64::from(placement.offset.y)) * fy) as f32,
                    advance: (f64::from(placement.advance.x) * fx) as f32,
                };
                pen_x += f64::from(placement.advance.x);
                pen_y += f64::from(placement.advance.y);
                glyph
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PointI;

    fn sample() -> ShapedText {
        ShapedText::from_parts(
            vec![2, 3],
            vec![
                GlyphPlacement::new(PointI::default(), PointI::new(600, 0)),
                GlyphPlacement::new(PointI::new(0, 100), PointI::new(600, 0)),
            ],
            BoundingBox::new(0.5, -7.0, 11.5, 0.0),
        )
    }

    #[test]
    fn test_default_is_empty() {
        let shaped = ShapedText::default();
        assert!(shaped.is_empty());
        assert!(shaped.glyph_run().is_empty());
        assert!(shaped.bounding_box().is_empty());
        assert_eq!(shaped.total_advance(), (0, 0));
    }

    #[test]
    fn test_glyph_run_exposes_both_sequences() {
        let shaped = sample();
        let run = shaped.glyph_run();
        assert_eq!(run.len(), 2);
        assert_eq!(run.glyphs, &[2, 3]);
        assert_eq!(run.placements[1].offset, PointI::new(0, 100));
        assert_eq!(run.placement_type, PlacementType::AdvanceOffset);
    }

    #[test]
    fn test_bounding_rect_matches_box() {
        let rect = sample().bounding_rect();
        assert_eq!(rect.x, 0.5);
        assert_eq!(rect.y, -7.0);
        assert_eq!(rect.width, 11.0);
        assert_eq!(rect.height, 7.0);
    }

    #[test]
    fn test_total_advance_sums_placements() {
        assert_eq!(sample().total_advance(), (1200, 0));
    }

    #[test]
    fn test_value_equality() {
        assert_eq!(sample(), sample());
        assert_ne!(sample(), ShapedText::default());
    }

    #[test]
    fn test_positioned_glyphs_walk_the_pen() {
        let positioned = sample().positioned_glyphs((1000, 1000), 10.0);
        assert_eq!(
            positioned,
            vec![
                PositionedGlyph {
                    id: 2,
                    x: 0.0,
                    y: 0.0,
                    advance: 6.0
                },
                PositionedGlyph {
                    id: 3,
                    x: 6.0,
                    y: -1.0,
                    advance: 6.0
                },
            ]
        );
    }

    #[test]
    fn test_positioned_glyphs_with_zero_scale() {
        let positioned = sample().positioned_glyphs((0, 0), 10.0);
        assert!(positioned.iter().all(|g| g.x == 0.0 && g.advance == 0.0));
    }
}
