//! File-to-base64 encoding.

use std::fs;
use std::path::Path;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::error::ToolError;

/// Encode raw bytes with standard (padded) base64.
pub fn bytes_to_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Read a file and encode its full contents with standard base64.
///
/// The whole file is loaded into memory; there is no chunking.
pub fn file_to_base64(path: &Path) -> Result<String, ToolError> {
    let bytes = fs::read(path)?;
    Ok(bytes_to_base64(&bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn encodes_known_vector() {
        assert_eq!(bytes_to_base64(b"hello"), "aGVsbG8=");
        assert_eq!(bytes_to_base64(b""), "");
    }

    #[test]
    fn encodes_file_contents() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("pixel.bin");
        let mut file = fs::File::create(&path).expect("create fixture");
        file.write_all(&[0x89, 0x50, 0x4E, 0x47]).expect("write fixture");
        drop(file);

        assert_eq!(file_to_base64(&path).unwrap(), "iVBORw==");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = file_to_base64(&dir.path().join("absent.png")).unwrap_err();
        assert!(matches!(err, ToolError::Io(_)));
    }
}
