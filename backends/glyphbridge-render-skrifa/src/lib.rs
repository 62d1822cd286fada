// this_file: backends/glyphbridge-render-skrifa/src/lib.rs

//! Renderer side of glyphbridge
//!
//! Parses and validates font bytes with read-fonts, and answers metric
//! questions at exact fractional sizes with skrifa. A face fails to load here
//! before the shaping engine ever sees its bytes, which is where corrupt
//! data and bad collection indices are caught.

pub mod face;
pub mod font;

pub use face::RenderFace;
pub use font::RenderFont;
