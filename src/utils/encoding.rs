//! File decoding helpers

use std::path::Path;

/// Read a file as UTF-8, replacing invalid sequences with U+FFFD.
///
/// Only I/O failures are reported; undecodable bytes never are.
pub fn read_file_lossy(path: &Path) -> std::io::Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    })
}
