// this_file: crates/glyphbridge/src/face.rs

//! Loading font faces

use std::path::Path;

use glyphbridge_core::{ByteSource, FontLoadError, Result};
use glyphbridge_render_skrifa::RenderFace;
use glyphbridge_shape_hb::ShapingFace;

/// One font program, loaded once for both the renderer and HarfBuzz
///
/// Both sides are built from the same [`ByteSource`], so a glyph id coming
/// out of shaping names the same glyph in the renderer.
#[derive(Debug, Clone)]
pub struct FontFace {
    render: RenderFace,
    shaping: ShapingFace,
}

impl FontFace {
    pub fn data(&self) -> &ByteSource {
        self.render.data()
    }

    pub fn face_index(&self) -> u32 {
        self.render.face_index()
    }

    pub fn glyph_count(&self) -> u32 {
        self.render.glyph_count()
    }

    pub fn units_per_em(&self) -> u16 {
        self.render.units_per_em()
    }

    pub fn render_face(&self) -> &RenderFace {
        &self.render
    }

    pub fn shaping_face(&self) -> &ShapingFace {
        &self.shaping
    }
}

/// Load face `face_index` from font bytes.
///
/// The renderer parses and validates first; HarfBuzz then gets the very same
/// bytes. Corrupt data, missing core tables and out-of-range indices all
/// fail here with [`FontLoadError`].
pub fn create_face(data: impl Into<ByteSource>, face_index: u32) -> Result<FontFace> {
    let data = data.into();
    let render = RenderFace::new(data.clone(), face_index)?;
    let shaping = ShapingFace::new(&data, face_index)?;

    if shaping.glyph_count() != render.glyph_count() {
        return Err(FontLoadError::EngineRejected(format!(
            "HarfBuzz sees {} glyphs in face {} but the font declares {}",
            shaping.glyph_count(),
            face_index,
            render.glyph_count()
        ))
        .into());
    }

    Ok(FontFace { render, shaping })
}

/// Read `path` once and load face `face_index` from it.
pub fn create_face_from_file(path: impl AsRef<Path>, face_index: u32) -> Result<FontFace> {
    let data = ByteSource::from_file(path)?;
    create_face(data, face_index)
}
