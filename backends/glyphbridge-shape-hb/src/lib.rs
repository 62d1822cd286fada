// this_file: backends/glyphbridge-shape-hb/src/lib.rs

//! HarfBuzz side of glyphbridge
//!
//! Owns every HarfBuzz object the bridge creates: the blob over the font
//! bytes, the face, the sized font, the text buffer. Faces and fonts are
//! frozen before anyone else can see them and are checked again on every
//! access, so a shared font can be used from any number of shaping calls.
//!
//! Positions come back in design units (the font's scale is left at its
//! units per em); [`shape`] turns them into a [`ShapedText`] with a box in
//! device units.
//!
//! [`ShapedText`]: glyphbridge_core::ShapedText

#[macro_use]
extern crate glyphbridge_core;

pub mod blob;
pub mod buffer;
pub mod face;
pub mod font;
pub mod shaping;

pub use blob::ShapingBlob;
pub use buffer::{SegmentProperties, ShapedGlyphs, ShapingBuffer};
pub use face::ShapingFace;
pub use font::ShapingFont;
pub use shaping::{shape, shape_with_face, shape_with_properties};

pub use harfbuzz_rs::{Direction, Tag};
