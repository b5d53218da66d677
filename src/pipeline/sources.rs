//! Reading source files.

use std::io;
use std::path::Path;

/// Read a source file as text.
///
/// UTF-16 files (by byte order mark) are decoded; the result is written back
/// as UTF-8. A UTF-8 byte order mark is kept in the text, where the scanner
/// treats it as whitespace, so it survives conversion.
pub fn read_source_file(path: &Path) -> io::Result<String> {
    let bytes = std::fs::read(path)?;
    decode_source(bytes)
}

pub(crate) fn decode_source(bytes: Vec<u8>) -> io::Result<String> {
    match bytes.as_slice() {
        [0xFE, 0xFF, rest @ ..] => Ok(decode_utf16(rest, u16::from_be_bytes)),
        [0xFF, 0xFE, rest @ ..] => Ok(decode_utf16(rest, u16::from_le_bytes)),
        _ => String::from_utf8(bytes).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err)),
    }
}

fn decode_utf16(bytes: &[u8], word: fn([u8; 2]) -> u16) -> String {
    let words: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|chunk| word([chunk[0], chunk[1]]))
        .collect();
    String::from_utf16_lossy(&words)
}
