//! HL7 file input with encoding fallback

use crate::error::{Result, SiuError};
use std::borrow::Cow;
use std::fs;
use std::path::Path;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Decode file bytes as UTF-8, falling back to Latin-1.
///
/// A leading UTF-8 byte order mark is dropped.
pub fn decode_hl7_bytes(bytes: &[u8]) -> Cow<'_, str> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => {
            log::debug!("Input is not valid UTF-8, decoding as Latin-1");
            Cow::Owned(bytes.iter().map(|&b| char::from(b)).collect())
        }
    }
}

/// Read an HL7 file into text
pub fn read_hl7_file(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|err| SiuError::io(path.display().to_string(), &err))?;
    Ok(decode_hl7_bytes(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_decode_utf8_and_bom() {
        assert_eq!(decode_hl7_bytes(b"MSH|^~\\&"), "MSH|^~\\&");
        assert_eq!(decode_hl7_bytes(b"\xEF\xBB\xBFMSH|"), "MSH|");
        assert!(matches!(decode_hl7_bytes(b"PID"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_decode_latin1_fallback() {
        assert_eq!(decode_hl7_bytes(b"PID|||P1||M\xFCller^J"), "PID|||P1||Müller^J");
    }

    #[test]
    fn test_read_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"MSH|^~\\&|A\r\nPID|||1").unwrap();
        let text = read_hl7_file(file.path()).unwrap();
        assert_eq!(text, "MSH|^~\\&|A\r\nPID|||1");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_hl7_file(dir.path().join("missing.hl7")).unwrap_err();
        assert!(err.is_fatal());
    }
}
