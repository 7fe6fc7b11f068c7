use std::io::{self, Read, Seek, SeekFrom, Write};

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use log::debug;
use tempfile::SpooledTempFile;

use crate::error::BlipError;
use crate::result::Result;

/// compressed data above this size leaves memory and goes to a temporary file
pub const DEFAULT_SPOOL_THRESHOLD: usize = 1024 * 1024;

#[derive(Debug, Clone, Copy)]
pub struct CompressionOptions {
    /// gzip compression level
    pub level: Compression,

    /// bytes kept in memory before the spool rolls over to disk
    pub spool_threshold: usize,
}

impl Default for CompressionOptions {
    fn default() -> Self {
        Self {
            level: Compression::default(),
            spool_threshold: DEFAULT_SPOOL_THRESHOLD,
        }
    }
}

impl CompressionOptions {
    pub fn with_level(mut self, level: u32) -> Self {
        self.level = Compression::new(level.min(9));
        self
    }

    pub fn with_spool_threshold(mut self, spool_threshold: usize) -> Self {
        self.spool_threshold = spool_threshold;
        self
    }
}

/// gzip front end of the encoder
#[derive(Debug, Default, Clone, Copy)]
pub struct Compressor {
    options: CompressionOptions,
}

impl Compressor {
    pub fn new(options: CompressionOptions) -> Self {
        Self { options }
    }

    /// A scratch buffer for exactly one encode, removed when dropped
    pub fn spool(&self) -> SpooledTempFile {
        tempfile::spooled_tempfile(self.options.spool_threshold)
    }

    /// Compresses everything `payload` yields into `spool`.
    ///
    /// Returns the number of compressed bytes, `spool` is positioned at their start.
    /// A failing `payload` is reported as [`BlipError::ReadError`].
    pub fn compress_into<R, S>(&self, payload: &mut R, spool: &mut S) -> Result<u64>
    where
        R: Read + ?Sized,
        S: Write + Seek,
    {
        let start = spool.stream_position()?;
        let mut gz = GzEncoder::new(&mut *spool, self.options.level);
        let mut buf = [0u8; 8 * 1024];
        loop {
            let n = match payload.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(source) => return Err(BlipError::ReadError { source }),
            };
            gz.write_all(&buf[..n])
                .map_err(|source| BlipError::CompressionError { source })?;
        }
        gz.finish()
            .and_then(|spool| spool.flush())
            .map_err(|source| BlipError::CompressionError { source })?;

        let end = spool.stream_position()?;
        spool.seek(SeekFrom::Start(start))?;
        debug!("compressed payload to {} bytes", end - start);

        Ok(end - start)
    }
}

/// Inflates a gzip member, anything following the member is ignored
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    GzDecoder::new(data)
        .read_to_end(&mut out)
        .map_err(|source| BlipError::DecompressionError { source })?;
    Ok(out)
}
