//! Bundle
//!
//! Concatenates partition files into a single readable in-memory buffer.

use std::fs;
use std::io::{self, BufRead, Cursor, Read, Seek, SeekFrom, Write};
use std::path::PathBuf;

use bytes::{Bytes, BytesMut};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::Result;

/// Name of the single entry inside zip bundles
pub const ARCHIVE_ENTRY_NAME: &str = "data.csv";

/// Packaging of a bundle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BundleFormat {
    /// Raw concatenated CSV bytes
    Plain,
    /// The same bytes as the only entry (`data.csv`) of a zip archive
    #[default]
    Zip,
}

/// Result of a lookup: a file-like buffer positioned at its start
///
/// Rows of every matched file follow each other with no separator, so
/// consumers rely on all files sharing one headerless row format.
#[derive(Debug, Clone)]
pub struct DataFile {
    format: BundleFormat,
    cursor: Cursor<Bytes>,
}

/// Read `paths` in order and package the concatenated bytes
pub fn bundle(paths: &[PathBuf], format: BundleFormat) -> Result<DataFile> {
    DataFile::load(paths, format)
}

impl DataFile {
    /// Read every file in `paths` (in order) into a new buffer
    pub fn load(paths: &[PathBuf], format: BundleFormat) -> Result<Self> {
        let mut data = BytesMut::new();
        for path in paths {
            data.extend_from_slice(&fs::read(path)?);
        }

        let bytes = match format {
            BundleFormat::Plain => data.freeze(),
            BundleFormat::Zip => Self::zip(&data)?,
        };

        tracing::debug!(
            "Bundled {} file(s) into {} bytes ({:?})",
            paths.len(),
            bytes.len(),
            format
        );

        Ok(Self::from_bytes(bytes, format))
    }

    /// Wrap an existing buffer
    pub fn from_bytes(bytes: Bytes, format: BundleFormat) -> Self {
        Self {
            format,
            cursor: Cursor::new(bytes),
        }
    }

    /// Packaging of this buffer
    pub fn format(&self) -> BundleFormat {
        self.format
    }

    /// Whole buffer, independent of the read position
    pub fn as_bytes(&self) -> &[u8] {
        self.cursor.get_ref()
    }

    pub fn into_bytes(self) -> Bytes {
        self.cursor.into_inner()
    }

    pub fn len(&self) -> usize {
        self.cursor.get_ref().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Store `data` as the single deflated entry of a new archive
    fn zip(data: &[u8]) -> Result<Bytes> {
        let mut archive = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        archive.start_file(ARCHIVE_ENTRY_NAME, options)?;
        archive.write_all(data)?;
        let cursor = archive.finish()?;

        Ok(Bytes::from(cursor.into_inner()))
    }
}

impl Read for DataFile {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.cursor.read(buf)
    }
}

impl BufRead for DataFile {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        self.cursor.fill_buf()
    }

    fn consume(&mut self, amt: usize) {
        self.cursor.consume(amt)
    }
}

impl Seek for DataFile {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.cursor.seek(pos)
    }
}
