// this_file: backends/glyphbridge-shape-hb/src/buffer.rs

//! Text going into HarfBuzz and glyphs coming out

use std::fmt;
use std::str::FromStr;

use harfbuzz_rs::{Direction, GlyphBuffer, GlyphInfo, GlyphPosition, Language, Tag, UnicodeBuffer};

use glyphbridge_core::narrow::narrow;

use crate::font::ShapingFont;

/// Direction, script and language HarfBuzz shapes a segment with
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentProperties {
    pub direction: Direction,
    pub script: Tag,
    /// BCP-47 tag; unparseable tags are left to HarfBuzz's guess
    pub language: String,
}

impl Default for SegmentProperties {
    /// Left-to-right Latin English
    fn default() -> Self {
        Self {
            direction: Direction::Ltr,
            script: Tag::new('L', 'a', 't', 'n'),
            language: "en".to_string(),
        }
    }
}

/// UTF-8 text with its segment properties, consumed by one shaping call
pub struct ShapingBuffer {
    buffer: UnicodeBuffer,
}

impl ShapingBuffer {
    pub fn new(text: &str) -> Self {
        Self::with_segment_properties(text, &SegmentProperties::default())
    }

    /// Properties set here win; HarfBuzz only fills in what is still unset.
    pub fn with_segment_properties(text: &str, props: &SegmentProperties) -> Self {
        // HarfBuzz takes the text length as a C int
        let _text_len: i32 = narrow(text.len());

        let mut buffer = UnicodeBuffer::new()
            .add_str(text)
            .set_direction(props.direction)
            .set_script(props.script);
        if let Ok(language) = Language::from_str(&props.language) {
            buffer = buffer.set_language(language);
        }

        Self {
            buffer: buffer.guess_segment_properties(),
        }
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn shape(self, font: &ShapingFont) -> ShapedGlyphs {
        let output = harfbuzz_rs::shape(font.hb_font(), self.buffer, &[]);
        ShapedGlyphs::new(output)
    }
}

/// HarfBuzz's output buffer, with info and position arrays of equal length
///
/// An empty output may not have allocated either array, so it is never read.
pub struct ShapedGlyphs {
    output: GlyphBuffer,
}

impl ShapedGlyphs {
    fn new(output: GlyphBuffer) -> Self {
        if output.is_empty() {
            return Self { output };
        }
        let infos = output.get_glyph_infos().len();
        let positions = output.get_glyph_positions().len();
        ensure_invariant!(
            infos == positions,
            "HarfBuzz returned {} glyph infos but {} positions",
            infos,
            positions
        );
        Self { output }
    }

    pub fn len(&self) -> usize {
        self.output.len()
    }

    pub fn is_empty(&self) -> bool {
        self.output.is_empty()
    }

    /// Glyph ids in `codepoint`, cluster indices into the source text
    pub fn infos(&self) -> &[GlyphInfo] {
        if self.is_empty() {
            return &[];
        }
        self.output.get_glyph_infos()
    }

    pub fn positions(&self) -> &[GlyphPosition] {
        if self.is_empty() {
            return &[];
        }
        self.output.get_glyph_positions()
    }
}

impl fmt::Debug for ShapingBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShapingBuffer").field("len", &self.len()).finish()
    }
}

impl fmt::Debug for ShapedGlyphs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShapedGlyphs").field("len", &self.len()).finish()
    }
}
