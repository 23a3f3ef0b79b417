//! Deterministic gzip for embedded assets.
//!
//! The gzip header normally records a modification time and the original
//! file name. Both are left out (mtime 0, no name) so the compressed bytes
//! depend only on the input bytes and the level.

use std::io::{self, Write};

use flate2::{Compression, GzBuilder};

/// Compression level used for every asset (maximum).
pub const GZIP_LEVEL: u32 = 9;

/// Compress `raw` into a complete gzip stream.
pub fn gzip(raw: &[u8]) -> io::Result<Vec<u8>> {
    let buffer = Vec::with_capacity(raw.len() / 2 + 32);
    let mut encoder = GzBuilder::new()
        .mtime(0)
        .write(buffer, Compression::new(GZIP_LEVEL));
    encoder.write_all(raw)?;
    encoder.finish()
}
