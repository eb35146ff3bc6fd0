//! Input loading for the command-line host
//!
//! Reads the text to scan from a file or any reader (stdin), refusing input
//! larger than the configured limit and input that is not valid UTF-8.

use crate::error::{Error, Result};
use log::{debug, info};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Read all of `reader` as UTF-8, failing if it holds more than `limit` bytes.
pub fn read_input_from<R: Read>(reader: R, limit: usize) -> Result<String> {
    let mut bytes = Vec::new();
    // One byte past the limit is enough to know it was exceeded
    reader
        .take((limit as u64).saturating_add(1))
        .read_to_end(&mut bytes)?;

    if bytes.len() > limit {
        return Err(Error::InputTooLarge {
            size: bytes.len(),
            limit,
        });
    }

    let text = String::from_utf8(bytes)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    debug!("Read {} bytes of input", text.len());
    Ok(text)
}

/// On-disk length as `usize`, saturating where it does not fit.
fn file_size(len: u64) -> usize {
    usize::try_from(len).unwrap_or(usize::MAX)
}

/// Read a file as UTF-8 text, enforcing `limit`.
pub fn read_input_file(path: &Path, limit: usize) -> Result<String> {
    let file = File::open(path).map_err(|e| Error::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if let Ok(metadata) = file.metadata() {
        let size = file_size(metadata.len());
        if size > limit {
            return Err(Error::InputTooLarge { size, limit });
        }
    }

    let text = read_input_from(file, limit).map_err(|e| match e {
        Error::Io(source) => Error::FileRead {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })?;
    info!("Opened file: {}", path.display());
    Ok(text)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
