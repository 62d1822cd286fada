// this_file: crates/glyphbridge-core/src/lib.rs

//! Glyphbridge Core: the engine-neutral half of the shaping bridge
//!
//! Text goes into a shaping engine and comes out as glyph ids with
//! offsets and advances. A rasterizer wants exactly that, plus a box it can
//! trust. This crate holds everything both sides agree on, without knowing
//! which engine produced the glyphs.
//!
//! ## What Lives Here
//!
//! - [`types`] - Glyph ids, placements, glyph runs, boxes
//! - [`ShapedText`] - One shaping call's output, immutable once built
//! - [`bbox`] - Pen-walking bounding box math over ink extents
//! - [`GlyphExtentsSource`] - What the box math needs from a sized font
//! - [`ByteSource`] - Font bytes shared by every consumer
//! - [`error`] - Failures caused by bad input
//! - [`invariant`] and [`narrow`] - Failures caused by bugs
//!
//! ## From Placements to a Box
//!
//! ```rust
//! use glyphbridge_core::types::{GlyphExtents, GlyphId, GlyphPlacement, PointI};
//! use glyphbridge_core::{bbox::calculate_bounding_box, GlyphExtentsSource};
//!
//! struct Mono;
//!
//! impl GlyphExtentsSource for Mono {
//!     fn glyph_extents(&self, _glyph: GlyphId) -> Option<GlyphExtents> {
//!         Some(GlyphExtents { x_bearing: 50, y_bearing: 700, width: 500, height: -700 })
//!     }
//!     fn scale(&self) -> (i32, i32) { (1000, 1000) }
//!     fn size(&self) -> f32 { 10.0 }
//! }
//!
//! let placements = [GlyphPlacement::new(PointI::default(), PointI::new(600, 0)); 2];
//! let bounds = calculate_bounding_box(&[2, 3], &placements, &Mono);
//! assert!((bounds.width() - 11.0).abs() < 1e-9);
//! ```

#[macro_use]
pub mod invariant;

pub mod bbox;
pub mod error;
pub mod narrow;
pub mod shaped;
pub mod source;
pub mod traits;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use error::{BridgeError, FontInstantiationError, FontLoadError, Result};
pub use shaped::ShapedText;
pub use source::ByteSource;
pub use traits::GlyphExtentsSource;

/// The data structures that cross the bridge
pub mod types {
    #[cfg(feature = "serde")]
    use serde::{Deserialize, Serialize};

    /// Post-shaping glyph index within a font (not a Unicode scalar)
    pub type GlyphId = u32;

    /// Integer point in font design units
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    pub struct PointI {
        pub x: i32,
        pub y: i32,
    }

    impl PointI {
        pub const fn new(x: i32, y: i32) -> Self {
            Self { x, y }
        }
    }

    /// Where one glyph sits relative to the pen, and how far the pen moves after it
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    pub struct GlyphPlacement {
        pub offset: PointI,
        pub advance: PointI,
    }

    impl GlyphPlacement {
        pub const fn new(offset: PointI, advance: PointI) -> Self {
            Self { offset, advance }
        }
    }

    /// How a renderer must interpret a glyph run's placements
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    #[non_exhaustive]
    pub enum PlacementType {
        /// Offset from the pen plus pen advance, in design units
        #[default]
        AdvanceOffset,
    }

    /// Borrowed view of glyphs and placements, ready for a rasterizer
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct GlyphRun<'a> {
        pub glyphs: &'a [GlyphId],
        pub placements: &'a [GlyphPlacement],
        pub placement_type: PlacementType,
    }

    impl<'a> GlyphRun<'a> {
        pub fn len(&self) -> usize {
            self.glyphs.len().min(self.placements.len())
        }

        pub fn is_empty(&self) -> bool {
            self.len() == 0
        }

        pub fn iter(&self) -> impl Iterator<Item = (GlyphId, &'a GlyphPlacement)> + 'a {
            self.glyphs.iter().copied().zip(self.placements.iter())
        }
    }

    /// Ink box of one glyph as reported by the shaping engine
    ///
    /// Font y grows upward, so `height` is negative for ordinary glyphs: the
    /// ink runs from `y_bearing` down to `y_bearing + height`.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct GlyphExtents {
        pub x_bearing: i32,
        pub y_bearing: i32,
        pub width: i32,
        pub height: i32,
    }

    /// Axis-aligned box in device units, y pointing down, baseline at y = 0
    #[derive(Debug, Clone, Copy, Default, PartialEq)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    pub struct BoundingBox {
        pub x0: f64,
        pub y0: f64,
        pub x1: f64,
        pub y1: f64,
    }

    impl BoundingBox {
        pub const fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
            Self { x0, y0, x1, y1 }
        }

        pub fn width(&self) -> f64 {
            self.x1 - self.x0
        }

        pub fn height(&self) -> f64 {
            self.y1 - self.y0
        }

        /// True when the box covers no area
        pub fn is_empty(&self) -> bool {
            !(self.width() > 0.0 && self.height() > 0.0)
        }

        /// Smallest box containing both
        pub fn union(&self, other: &BoundingBox) -> BoundingBox {
            BoundingBox {
                x0: self.x0.min(other.x0),
                y0: self.y0.min(other.y0),
                x1: self.x1.max(other.x1),
                y1: self.y1.max(other.y1),
            }
        }

        pub fn to_rect(&self) -> Rect {
            Rect {
                x: self.x0,
                y: self.y0,
                width: self.width(),
                height: self.height(),
            }
        }
    }

    /// Origin plus size, for renderers that stroke or fill rectangles
    #[derive(Debug, Clone, Copy, Default, PartialEq)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    pub struct Rect {
        pub x: f64,
        pub y: f64,
        pub width: f64,
        pub height: f64,
    }

    /// A glyph with its absolute device-unit position on the line
    #[derive(Debug, Clone, PartialEq)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    pub struct PositionedGlyph {
        pub id: GlyphId,
        pub x: f32,
        pub y: f32,
        pub advance: f32,
    }
}
