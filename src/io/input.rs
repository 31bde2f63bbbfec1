//! Image input union resolved through a single materialization step
//!
//! A source or sub-image may be supplied as a filesystem path, a raw byte
//! buffer, or a readable stream. The mosaic core needs exactly one
//! capability from its caller: "materialize to bytes", resolved once per
//! image regardless of the supplied form.

use crate::io::error::{MosaicError, Result};
use std::io::Read;
use std::path::{Path, PathBuf};

/// One image supplied to the mosaic pipeline
pub enum ImageInput {
    /// Local filesystem path to an encoded image
    Path(PathBuf),
    /// Raw encoded image bytes
    Bytes(Vec<u8>),
    /// Readable stream yielding encoded image bytes
    Reader(Box<dyn Read + Send>),
}

impl ImageInput {
    /// Resolve this input to its encoded bytes, consuming it
    ///
    /// # Errors
    ///
    /// Returns a [`MosaicError::FileSystem`] if the path cannot be read or
    /// the stream fails mid-read.
    pub fn materialize(self) -> Result<Vec<u8>> {
        match self {
            Self::Path(path) => std::fs::read(&path).map_err(|e| MosaicError::FileSystem {
                path,
                operation: "read image",
                source: e,
            }),
            Self::Bytes(bytes) => Ok(bytes),
            Self::Reader(mut reader) => {
                let mut bytes = Vec::new();
                reader
                    .read_to_end(&mut bytes)
                    .map_err(|e| MosaicError::FileSystem {
                        path: PathBuf::from("<stream>"),
                        operation: "read stream",
                        source: e,
                    })?;
                Ok(bytes)
            }
        }
    }
}

impl std::fmt::Debug for ImageInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Path(path) => f.debug_tuple("Path").field(path).finish(),
            Self::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            Self::Reader(_) => f.debug_tuple("Reader").finish(),
        }
    }
}

impl From<PathBuf> for ImageInput {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

impl From<&Path> for ImageInput {
    fn from(path: &Path) -> Self {
        Self::Path(path.to_path_buf())
    }
}

impl From<Vec<u8>> for ImageInput {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

impl From<&[u8]> for ImageInput {
    fn from(bytes: &[u8]) -> Self {
        Self::Bytes(bytes.to_vec())
    }
}
