// this_file: crates/glyphbridge-core/src/source.rs

//! Shared, immutable font bytes

use std::fmt;
use std::fs;
use std::ops::Deref;
use std::path::Path;
use std::sync::Arc;

use crate::error::FontLoadError;

/// Font bytes shared by the renderer side and the shaping engine.
///
/// Both sides must see the *same* buffer so that glyph ids agree; cloning a
/// `ByteSource` shares the allocation rather than copying it.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ByteSource(Arc<[u8]>);

impl ByteSource {
    pub fn new(bytes: impl Into<Arc<[u8]>>) -> Self {
        Self(bytes.into())
    }

    /// Reads a whole font file into memory, once.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, FontLoadError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| FontLoadError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Read {} bytes of font data from {}", bytes.len(), path.display());
        Ok(Self::new(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// The underlying allocation, for handing ownership to the engine.
    pub fn shared(&self) -> Arc<[u8]> {
        Arc::clone(&self.0)
    }

    /// Whether two sources are the same allocation, not just equal bytes.
    pub fn same_buffer(&self, other: &ByteSource) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Default for ByteSource {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Deref for ByteSource {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for ByteSource {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for ByteSource {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl From<&[u8]> for ByteSource {
    fn from(bytes: &[u8]) -> Self {
        Self::new(bytes)
    }
}

impl From<Arc<[u8]>> for ByteSource {
    fn from(bytes: Arc<[u8]>) -> Self {
        Self(bytes)
    }
}

impl fmt::Debug for ByteSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteSource").field("len", &self.0.len()).finish()
    }
}
