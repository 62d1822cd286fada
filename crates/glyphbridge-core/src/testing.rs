// this_file: crates/glyphbridge-core/src/testing.rs

//! Synthetic TrueType fonts for tests
//!
//! Just enough of the format for a shaping engine and a font parser to
//! agree on: `cmap`, `glyf`/`loca` with rectangular outlines, `head`,
//! `hhea`, `hmtx` and `maxp`, compiled with `write-fonts`. Fonts come out
//! byte-identical on every run, so shaping results can be compared exactly.

use std::error::Error;

use write_fonts::read::tables::glyf::CurvePoint;
use write_fonts::tables::cmap::Cmap;
use write_fonts::tables::glyf::{Bbox, Contour, GlyfLocaBuilder, Glyph, SimpleGlyph};
use write_fonts::tables::head::{Flags, Head};
use write_fonts::tables::hhea::Hhea;
use write_fonts::tables::hmtx::{Hmtx, LongMetric};
use write_fonts::tables::maxp::Maxp;
use write_fonts::types::{FWord, Fixed, GlyphId, UfWord};
use write_fonts::FontBuilder;

use crate::invariant;
use crate::narrow::narrow;

const SFNT_HEADER_LEN: usize = 12;
const TABLE_RECORD_LEN: usize = 16;

/// Rectangular outline in design units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outline {
    pub x_min: i16,
    pub y_min: i16,
    pub x_max: i16,
    pub y_max: i16,
}

impl Outline {
    pub const fn new(x_min: i16, y_min: i16, x_max: i16, y_max: i16) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }
}

#[derive(Debug, Clone)]
struct TestGlyph {
    ch: Option<char>,
    advance: u16,
    outline: Option<Outline>,
}

/// Units per em of [`TestFontBuilder::monospace`]
pub const MONO_UPEM: u16 = 1000;
/// Advance of every glyph in [`TestFontBuilder::monospace`]
pub const MONO_ADVANCE: u16 = 600;

/// Builds a small font glyph by glyph; glyph 0 is always `.notdef`
#[derive(Debug, Clone)]
pub struct TestFontBuilder {
    units_per_em: u16,
    ascender: i16,
    descender: i16,
    glyphs: Vec<TestGlyph>,
}

impl TestFontBuilder {
    pub fn new(units_per_em: u16, notdef_advance: u16, notdef: Option<Outline>) -> Self {
        Self {
            units_per_em,
            ascender: 800,
            descender: -200,
            glyphs: vec![TestGlyph {
                ch: None,
                advance: notdef_advance,
                outline: notdef,
            }],
        }
    }

    /// Monospace Latin font: `.notdef`, space, `A`, `B`, 600 units each
    pub fn monospace() -> Self {
        Self::new(MONO_UPEM, MONO_ADVANCE, Some(Outline::new(100, 0, 500, 700)))
            .glyph(' ', MONO_ADVANCE, None)
            .glyph('A', MONO_ADVANCE, Some(Outline::new(50, 0, 550, 700)))
            .glyph('B', MONO_ADVANCE, Some(Outline::new(80, 0, 520, 700)))
    }

    /// Append a glyph mapped from `ch`
    pub fn glyph(mut self, ch: char, advance: u16, outline: Option<Outline>) -> Self {
        self.glyphs.push(TestGlyph {
            ch: Some(ch),
            advance,
            outline,
        });
        self
    }

    /// Glyph id `ch` maps to, if the font has it
    pub fn glyph_id(&self, ch: char) -> Option<u32> {
        self.glyphs
            .iter()
            .position(|g| g.ch == Some(ch))
            .and_then(|index| u32::try_from(index).ok())
    }

    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    pub fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    /// A standalone `.ttf`
    pub fn build(&self) -> Vec<u8> {
        match self.compile() {
            Ok(font) => font,
            Err(e) => invariant::violated(format_args!("test font does not compile: {e}")),
        }
    }

    /// A `.ttc` holding this font `faces` times, every face sharing one copy of the tables
    pub fn build_collection(&self, faces: u32) -> Vec<u8> {
        let font = self.build();
        let num_tables = usize::from(u16::from_be_bytes([font[4], font[5]]));
        let directory_len = SFNT_HEADER_LEN + TABLE_RECORD_LEN * num_tables;
        let (directory, tables) = font.split_at(directory_len);

        let face_count: usize = narrow(faces);
        let header_len = 12 + 4 * face_count;
        // Offsets in `font` assume the tables start right after a single directory
        let shift: u32 = narrow(header_len + face_count.saturating_sub(1) * directory_len);

        let mut out = Vec::with_capacity(header_len + face_count * directory_len + tables.len());
        out.extend_from_slice(b"ttcf");
        out.extend_from_slice(&1u16.to_be_bytes());
        out.extend_from_slice(&0u16.to_be_bytes());
        out.extend_from_slice(&faces.to_be_bytes());
        for face in 0..face_count {
            let offset: u32 = narrow(header_len + face * directory_len);
            out.extend_from_slice(&offset.to_be_bytes());
        }
        for _ in 0..face_count {
            let start = out.len() + SFNT_HEADER_LEN;
            out.extend_from_slice(directory);
            for record in out[start..].chunks_exact_mut(TABLE_RECORD_LEN) {
                let offset = u32::from_be_bytes([record[8], record[9], record[10], record[11]]);
                record[8..12].copy_from_slice(&(offset + shift).to_be_bytes());
            }
        }
        out.extend_from_slice(tables);
        out
    }

    fn compile(&self) -> Result<Vec<u8>, Box<dyn Error>> {
        let num_glyphs: u16 = narrow(self.glyphs.len());

        let cmap = Cmap::from_mappings(self.glyphs.iter().enumerate().filter_map(|(gid, g)| {
            Some((g.ch?, GlyphId::new(narrow(gid))))
        }))?;

        let mut glyf_loca = GlyfLocaBuilder::new();
        for glyph in &self.glyphs {
            glyf_loca.add_glyph(&outline_glyph(glyph.outline))?;
        }
        let (glyf, loca, loca_format) = glyf_loca.build();

        let bounds = self.font_bounds();
        let head = Head {
            font_revision: Fixed::ONE,
            flags: Flags::BASELINE_AT_Y_0 | Flags::LSB_AT_X_0,
            units_per_em: self.units_per_em,
            x_min: bounds.x_min,
            y_min: bounds.y_min,
            x_max: bounds.x_max,
            y_max: bounds.y_max,
            lowest_rec_ppem: 8,
            index_to_loc_format: loca_format as i16,
            ..Default::default()
        };

        let max_advance = self.glyphs.iter().map(|g| g.advance).max().unwrap_or(0);
        let hhea = Hhea {
            ascender: FWord::new(self.ascender),
            descender: FWord::new(self.descender),
            advance_width_max: UfWord::new(max_advance),
            min_left_side_bearing: FWord::new(bounds.x_min),
            x_max_extent: FWord::new(bounds.x_max),
            caret_slope_rise: 1,
            number_of_h_metrics: num_glyphs,
            ..Default::default()
        };

        let hmtx = Hmtx::new(
            self.glyphs
                .iter()
                .map(|g| LongMetric::new(g.advance, g.outline.map_or(0, |o| o.x_min)))
                .collect(),
            Vec::new(),
        );

        let has_outlines = self.glyphs.iter().any(|g| g.outline.is_some());
        let maxp = Maxp {
            num_glyphs,
            max_points: Some(if has_outlines { 4 } else { 0 }),
            max_contours: Some(u16::from(has_outlines)),
            max_composite_points: Some(0),
            max_composite_contours: Some(0),
            max_zones: Some(2),
            max_twilight_points: Some(0),
            max_storage: Some(0),
            max_function_defs: Some(0),
            max_instruction_defs: Some(0),
            max_stack_elements: Some(0),
            max_size_of_instructions: Some(0),
            max_component_elements: Some(0),
            max_component_depth: Some(0),
        };

        let mut font = FontBuilder::new();
        font.add_table(&cmap)?
            .add_table(&glyf)?
            .add_table(&head)?
            .add_table(&hhea)?
            .add_table(&hmtx)?
            .add_table(&loca)?
            .add_table(&maxp)?;
        Ok(font.build())
    }

    fn font_bounds(&self) -> Outline {
        self.glyphs
            .iter()
            .filter_map(|g| g.outline)
            .reduce(|a, b| Outline {
                x_min: a.x_min.min(b.x_min),
                y_min: a.y_min.min(b.y_min),
                x_max: a.x_max.max(b.x_max),
                y_max: a.y_max.max(b.y_max),
            })
            .unwrap_or(Outline::new(0, 0, 0, 0))
    }
}

/// One clockwise on-curve contour around `outline`, or an empty glyph
fn outline_glyph(outline: Option<Outline>) -> Glyph {
    let Some(o) = outline else {
        return Glyph::Empty;
    };
    let contour = Contour::from(vec![
        CurvePoint::on_curve(o.x_min, o.y_min),
        CurvePoint::on_curve(o.x_min, o.y_max),
        CurvePoint::on_curve(o.x_max, o.y_max),
        CurvePoint::on_curve(o.x_max, o.y_min),
    ]);
    Glyph::Simple(SimpleGlyph {
        bbox: Bbox {
            x_min: o.x_min,
            y_min: o.y_min,
            x_max: o.x_max,
            y_max: o.y_max,
        },
        contours: vec![contour],
        instructions: Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use read_fonts::{
        types::{GlyphId, Tag},
        FileRef, FontRef, TableProvider,
    };

    #[test]
    fn test_monospace_font_parses() {
        let builder = TestFontBuilder::monospace();
        let data = builder.build();
        let font = FontRef::new(&data).unwrap();

        assert_eq!(font.head().unwrap().units_per_em(), MONO_UPEM);
        assert_eq!(font.maxp().unwrap().num_glyphs(), 4);

        let hmtx = font.hmtx().unwrap();
        for gid in 0..4u32 {
            assert_eq!(hmtx.advance(GlyphId::new(gid)), Some(MONO_ADVANCE));
        }
    }

    #[test]
    fn test_cmap_maps_characters() {
        let builder = TestFontBuilder::monospace();
        let data = builder.build();
        let font = FontRef::new(&data).unwrap();
        let cmap = font.cmap().unwrap();

        for ch in [' ', 'A', 'B'] {
            let expected = builder.glyph_id(ch).unwrap();
            assert_eq!(cmap.map_codepoint(ch).map(|g| g.to_u32()), Some(expected));
        }
        assert_eq!(cmap.map_codepoint('Z'), None);
    }

    #[test]
    fn test_glyph_ids_follow_insertion_order() {
        let builder = TestFontBuilder::monospace();
        assert_eq!(builder.glyph_id(' '), Some(1));
        assert_eq!(builder.glyph_id('A'), Some(2));
        assert_eq!(builder.glyph_id('B'), Some(3));
        assert_eq!(builder.glyph_id('Z'), None);
        assert_eq!(builder.glyph_count(), 4);
    }

    #[test]
    fn test_collection_holds_requested_faces() {
        let data = TestFontBuilder::monospace().build_collection(2);
        match FileRef::new(&data).unwrap() {
            FileRef::Collection(collection) => {
                assert_eq!(collection.len(), 2);
                let second = collection.get(1).unwrap();
                assert_eq!(second.maxp().unwrap().num_glyphs(), 4);
            }
            FileRef::Font(_) => panic!("expected a collection"),
        }
    }

    #[test]
    fn test_outlines_are_compiled_into_glyf() {
        let data = TestFontBuilder::monospace().build();
        let font = FontRef::new(&data).unwrap();
        let loca = font.loca(None).unwrap();
        let glyf = font.glyf().unwrap();

        let a = loca.get_glyf(GlyphId::new(2), &glyf).unwrap().unwrap();
        assert_eq!(a.number_of_contours(), 1);
        assert_eq!((a.x_min(), a.y_min(), a.x_max(), a.y_max()), (50, 0, 550, 700));

        // space has no outline
        assert!(loca.get_glyf(GlyphId::new(1), &glyf).unwrap().is_none());
        assert_eq!(font.head().unwrap().x_max(), 550);
    }

    #[test]
    fn test_maps_characters_outside_the_bmp() {
        let builder = TestFontBuilder::monospace().glyph('\u{1F600}', 1000, None);
        let data = builder.build();
        let cmap = FontRef::new(&data).unwrap().cmap().unwrap();
        assert_eq!(
            cmap.map_codepoint('\u{1F600}').map(|g| g.to_u32()),
            builder.glyph_id('\u{1F600}')
        );
        assert_eq!(cmap.map_codepoint('A').map(|g| g.to_u32()), Some(2));
    }

    #[test]
    fn test_collection_faces_share_tables() {
        let single = TestFontBuilder::monospace().build();
        let data = TestFontBuilder::monospace().build_collection(3);
        let FileRef::Collection(collection) = FileRef::new(&data).unwrap() else {
            panic!("expected a collection");
        };
        let first = collection.get(0).unwrap();
        let last = collection.get(2).unwrap();
        assert_eq!(
            first.table_data(Tag::new(b"glyf")).unwrap().as_bytes().as_ptr(),
            last.table_data(Tag::new(b"glyf")).unwrap().as_bytes().as_ptr()
        );
        assert!(data.len() < 2 * single.len());
        assert_eq!(last.hmtx().unwrap().advance(GlyphId::new(3)), Some(MONO_ADVANCE));
    }

    #[test]
    fn test_build_is_deterministic() {
        let builder = TestFontBuilder::monospace();
        assert_eq!(builder.build(), builder.build());
    }
}
