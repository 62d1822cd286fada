// this_file: crates/glyphbridge-core/src/error.rs

//! Error types for glyphbridge
//!
//! Only bad input is reported here. Defects inside the bridge itself go
//! through [`crate::invariant`] and terminate the process instead.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BridgeError>;

/// Main error type for glyphbridge
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("Font loading failed: {0}")]
    FontLoad(#[from] FontLoadError),

    #[error("Font instantiation failed: {0}")]
    FontInstantiation(#[from] FontInstantiationError),
}

/// The bytes could not be turned into a font face
#[derive(Debug, Error)]
pub enum FontLoadError {
    #[error("Unable to read font file {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid font data: {0}")]
    InvalidData(String),

    #[error("Face index {index} out of range (font contains {count} face(s))")]
    FaceIndexOutOfRange { index: u32, count: u32 },

    #[error("Shaping engine rejected font data: {0}")]
    EngineRejected(String),
}

/// A face could not be sized into a font instance
#[derive(Debug, Error)]
pub enum FontInstantiationError {
    #[error("Invalid font size: {0}")]
    InvalidSize(f32),

    #[error("Unable to read font metrics: {0}")]
    Metrics(String),
}
