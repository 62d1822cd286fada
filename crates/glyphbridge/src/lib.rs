// this_file: crates/glyphbridge/src/lib.rs

//! Glyphbridge: text in, glyph runs out
//!
//! Load a font once, size it, and shape UTF-8 text with HarfBuzz into glyph
//! ids, per-glyph placements and a device-unit ink box. The glyph run is
//! what a rasterizer draws; the box is what a layout engine measures with.
//!
//! ```no_run
//! use glyphbridge::{create_face_from_file, create_font, shape};
//!
//! # fn main() -> glyphbridge::Result<()> {
//! let face = create_face_from_file("fonts/NotoSans-Regular.ttf", 0)?;
//! let font = create_font(&face, 18.0)?;
//! let shaped = shape("Hello", &font);
//!
//! let run = shaped.glyph_run();
//! let rect = shaped.bounding_rect();
//! println!("{} glyphs in {}x{}", run.len(), rect.width, rect.height);
//! # Ok(())
//! # }
//! ```
//!
//! Faces and fonts are immutable once created and can be shared freely,
//! across threads included. Every call to [`shape`] gets its own buffer.

pub mod face;
pub mod font;

pub use face::{create_face, create_face_from_file, FontFace};
pub use font::{create_font, FontInstance};

pub use glyphbridge_core::types::{
    BoundingBox, GlyphId, GlyphPlacement, GlyphRun, PlacementType, PointI, PositionedGlyph, Rect,
};
pub use glyphbridge_core::{
    BridgeError, ByteSource, FontInstantiationError, FontLoadError, Result, ShapedText,
};

/// Shape `text` left to right as Latin English.
///
/// An empty string gives an empty [`ShapedText`]. Shaping never fails once a
/// font exists; characters the font lacks come out as glyph 0.
pub fn shape(text: &str, font: &FontInstance) -> ShapedText {
    glyphbridge_shape_hb::shape(text, font.shaping_font())
}
