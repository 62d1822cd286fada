// this_file: backends/glyphbridge-shape-hb/src/face.rs

//! Frozen HarfBuzz faces

use std::fmt;

use harfbuzz_rs::{Face, HarfbuzzObject, Owned, Shared};
use harfbuzz_sys::{hb_face_is_immutable, hb_face_make_immutable};

use glyphbridge_core::{ByteSource, FontLoadError};

use crate::blob::ShapingBlob;

/// One font program inside HarfBuzz, immutable from construction on
///
/// Clones share the same HarfBuzz face through its reference count; the
/// last clone to drop releases it. Equality is identity of that face.
#[derive(Clone)]
pub struct ShapingFace {
    face: Shared<Face<'static>>,
}

impl ShapingFace {
    /// Face `face_index` of `source`.
    ///
    /// HarfBuzz itself never rejects bytes here: unparseable data or a bad
    /// index yield a face without glyphs. Validating the font is the caller's
    /// job, done against the same `ByteSource`.
    pub fn new(source: &ByteSource, face_index: u32) -> Result<Self, FontLoadError> {
        let blob = ShapingBlob::new(source)?;
        let face = Self::freeze(Face::new(blob.into_shared(), face_index));
        log::debug!(
            "HarfBuzz face {}: {} glyphs, {} units per em",
            face_index,
            face.glyph_count(),
            face.units_per_em()
        );
        Ok(face)
    }

    /// HarfBuzz's shared empty face; every call returns the same one
    pub fn empty() -> Self {
        // Static and inert, so already frozen
        let face = Self {
            face: Face::empty().into(),
        };
        face.hb_face();
        face
    }

    fn freeze(face: Owned<Face<'static>>) -> Self {
        // SAFETY: the pointer comes from a live face owned right here.
        unsafe { hb_face_make_immutable(face.as_raw()) };
        let face = Self { face: face.into() };
        face.hb_face();
        face
    }

    /// The HarfBuzz face, checked to be non-null and frozen
    pub fn hb_face(&self) -> &Face<'static> {
        let raw = self.face.as_raw();
        ensure_invariant!(!raw.is_null(), "HarfBuzz face handle is null");
        // SAFETY: non-null and kept alive by `self.face`.
        let frozen = unsafe { hb_face_is_immutable(raw) } != 0;
        ensure_invariant!(frozen, "HarfBuzz face lost its immutability");
        &self.face
    }

    pub(crate) fn shared(&self) -> Shared<Face<'static>> {
        self.hb_face();
        self.face.clone()
    }

    pub fn glyph_count(&self) -> u32 {
        self.hb_face().glyph_count()
    }

    pub fn units_per_em(&self) -> u32 {
        self.hb_face().upem()
    }

    pub fn index(&self) -> u32 {
        self.hb_face().index()
    }

    /// No glyphs: the empty face, or bytes HarfBuzz could not use
    pub fn is_empty(&self) -> bool {
        self.glyph_count() == 0
    }
}

// SAFETY: the HarfBuzz face is frozen before a `ShapingFace` exists and no API
// mutates it afterwards; HarfBuzz reference counts atomically.
unsafe impl Send for ShapingFace {}
// SAFETY: see `Send`.
unsafe impl Sync for ShapingFace {}

impl Default for ShapingFace {
    fn default() -> Self {
        Self::empty()
    }
}

impl PartialEq for ShapingFace {
    fn eq(&self, other: &Self) -> bool {
        self.face.as_raw() == other.face.as_raw()
    }
}

impl Eq for ShapingFace {}

impl fmt::Debug for ShapingFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShapingFace")
            .field("index", &self.index())
            .field("glyph_count", &self.glyph_count())
            .field("units_per_em", &self.units_per_em())
            .finish()
    }
}
