//! Reading the raw text of a parameter file.
//!
//! Responsibilities:
//! - Reject missing paths, non-file paths and oversized files before reading.
//! - Read the whole file and release it before any parsing happens.
//!
//! Does NOT handle:
//! - Comment stripping or tokenization (see `parse`).
//!
//! Invariants:
//! - The size check uses file metadata, so files known to be oversized are
//!   never read, and the read itself stops after `max_bytes + 1` bytes.
//! - Invalid UTF-8 is replaced rather than rejected; parsing is byte-oriented.

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use super::error::LoadError;

/// Raw text of a parameter file together with the number of bytes read.
#[derive(Debug, Clone)]
pub struct Source {
    pub text: String,
    pub bytes: u64,
}

/// Reads `path` if it is a regular file of at most `max_bytes` bytes.
pub fn read_source(path: &Path, max_bytes: u64) -> Result<Source, LoadError> {
    let read_error = |source: std::io::Error| LoadError::Read {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => LoadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => read_error(source),
    })?;
    let metadata = file.metadata().map_err(read_error)?;

    if !metadata.is_file() {
        return Err(LoadError::NotAFile {
            path: path.to_path_buf(),
        });
    }

    let size = metadata.len();
    if size > max_bytes {
        return Err(LoadError::TooLarge {
            path: path.to_path_buf(),
            size,
            limit: max_bytes,
        });
    }

    // Metadata can understate the size (growing files, pseudo-files reporting 0).
    let mut raw = Vec::new();
    file.take(max_bytes.saturating_add(1))
        .read_to_end(&mut raw)
        .map_err(read_error)?;

    let read = raw.len() as u64;
    if read > max_bytes {
        return Err(LoadError::TooLarge {
            path: path.to_path_buf(),
            size: read,
            limit: max_bytes,
        });
    }

    Ok(Source {
        text: String::from_utf8_lossy(&raw).into_owned(),
        bytes: read,
    })
}
