// this_file: backends/glyphbridge-render-skrifa/src/face.rs

//! Parsed, validated font faces
//!
//! A `RenderFace` keeps the shared bytes and the face index and creates a
//! `FontRef` on demand, so nothing borrows from a buffer it does not own and
//! collections work the same as single fonts.

use read_fonts::{FileRef, FontRef, TableProvider};
use skrifa::{GlyphId as SkrifaGlyphId, MetadataProvider};

use glyphbridge_core::invariant;
use glyphbridge_core::types::GlyphId;
use glyphbridge_core::{ByteSource, FontLoadError};

/// One face of a font file, checked to parse when it was created
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFace {
    data: ByteSource,
    face_index: u32,
    units_per_em: u16,
    glyph_count: u32,
}

impl RenderFace {
    /// Parse face `face_index` of `data`.
    ///
    /// Fails on empty or truncated bytes, bytes that are not a font, a
    /// face missing `head` or `maxp`, and indices past the end of a
    /// collection. A single font only has face 0.
    pub fn new(data: ByteSource, face_index: u32) -> Result<Self, FontLoadError> {
        if data.is_empty() {
            return Err(FontLoadError::InvalidData("font data is empty".to_string()));
        }

        let (units_per_em, glyph_count) = {
            let font = Self::select_face(&data, face_index)?;
            let head = font
                .head()
                .map_err(|e| FontLoadError::InvalidData(format!("unreadable head table: {e}")))?;
            let maxp = font
                .maxp()
                .map_err(|e| FontLoadError::InvalidData(format!("unreadable maxp table: {e}")))?;
            (head.units_per_em(), u32::from(maxp.num_glyphs()))
        };

        log::debug!(
            "Loaded face {} ({} bytes): {} glyphs, {} units per em",
            face_index,
            data.len(),
            glyph_count,
            units_per_em
        );

        Ok(Self {
            data,
            face_index,
            units_per_em,
            glyph_count,
        })
    }

    fn select_face(data: &[u8], face_index: u32) -> Result<FontRef<'_>, FontLoadError> {
        let file = FileRef::new(data)
            .map_err(|e| FontLoadError::InvalidData(format!("not a font file: {e}")))?;

        match file {
            FileRef::Font(font) if face_index == 0 => Ok(font),
            FileRef::Font(_) => Err(FontLoadError::FaceIndexOutOfRange {
                index: face_index,
                count: 1,
            }),
            FileRef::Collection(collection) => {
                let count = collection.len();
                if face_index >= count {
                    return Err(FontLoadError::FaceIndexOutOfRange {
                        index: face_index,
                        count,
                    });
                }
                collection.get(face_index).map_err(|e| {
                    FontLoadError::InvalidData(format!("collection face {face_index}: {e}"))
                })
            }
        }
    }

    /// Parser view over the shared bytes
    pub fn font_ref(&self) -> FontRef<'_> {
        match FontRef::from_index(self.data.as_bytes(), self.face_index) {
            Ok(font) => font,
            Err(e) => invariant::violated(format_args!(
                "face {} parsed at load time but not now: {}",
                self.face_index, e
            )),
        }
    }

    /// The bytes this face was parsed from
    pub fn data(&self) -> &ByteSource {
        &self.data
    }

    pub fn face_index(&self) -> u32 {
        self.face_index
    }

    pub fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    pub fn glyph_count(&self) -> u32 {
        self.glyph_count
    }

    /// Nominal glyph for `ch` from the character map
    pub fn glyph_for_char(&self, ch: char) -> Option<GlyphId> {
        self.font_ref()
            .charmap()
            .map(ch)
            .map(SkrifaGlyphId::to_u32)
    }
}
