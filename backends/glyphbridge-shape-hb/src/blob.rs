// this_file: backends/glyphbridge-shape-hb/src/blob.rs

//! Font bytes as seen by HarfBuzz

use harfbuzz_rs::{Blob, HarfbuzzObject, Shared};
use harfbuzz_sys::{hb_blob_get_empty, hb_blob_get_length};

use glyphbridge_core::narrow::{narrow, try_narrow};
use glyphbridge_core::{ByteSource, FontLoadError};

/// HarfBuzz blob over a [`ByteSource`], without copying the bytes
///
/// The blob keeps its own clone of the shared allocation, so it stays valid
/// however long HarfBuzz keeps the blob alive. HarfBuzz's empty blob has no
/// data pointer, so the bytes are never read back through `harfbuzz_rs`.
pub struct ShapingBlob {
    blob: Shared<Blob<'static>>,
}

impl ShapingBlob {
    /// Empty input gives HarfBuzz's empty blob, which is still a valid blob.
    pub fn new(source: &ByteSource) -> Result<Self, FontLoadError> {
        let len = source.len();
        if try_narrow::<u32, _>(len).is_none() {
            return Err(FontLoadError::EngineRejected(format!(
                "{len} bytes of font data exceed HarfBuzz's blob length limit"
            )));
        }

        let blob: Shared<Blob<'static>> =
            Blob::with_bytes_owned(source.shared(), |bytes| &bytes[..]).into();
        // HarfBuzz hands out its empty blob when it cannot allocate one
        // SAFETY: returns a pointer to a static object.
        if len != 0 && blob.as_raw() == unsafe { hb_blob_get_empty() } {
            return Err(FontLoadError::EngineRejected(format!(
                "HarfBuzz could not wrap {len} bytes of font data"
            )));
        }

        Ok(Self { blob })
    }

    pub fn empty() -> Self {
        Self {
            blob: Blob::with_bytes(&[]).into(),
        }
    }

    /// Byte length as HarfBuzz reports it
    pub fn len(&self) -> usize {
        // SAFETY: the blob is alive for as long as `self`.
        let len = unsafe { hb_blob_get_length(self.blob.as_raw()) };
        narrow(len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn into_shared(self) -> Shared<Blob<'static>> {
        self.blob
    }
}

impl Default for ShapingBlob {
    fn default() -> Self {
        Self::empty()
    }
}
