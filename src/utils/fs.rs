use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{PatchError, Result};

/// Read a document as string
pub fn read_document(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    debug!("Reading document: {}", path.display());

    fs::read_to_string(path).map_err(|e| PatchError::io_error(e, path))
}

/// Overwrite a document in place
///
/// The target must already exist: a patch never creates files.
pub fn write_document(path: impl AsRef<Path>, content: &str) -> Result<()> {
    let path = path.as_ref();
    debug!("Writing {} bytes to {}", content.len(), path.display());

    if !path.is_file() {
        return Err(PatchError::io_error(
            std::io::Error::new(std::io::ErrorKind::NotFound, "target is not a regular file"),
            path,
        ));
    }

    fs::write(path, content).map_err(|e| PatchError::io_error(e, path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_document_round_trip() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("home.tsx");
        fs::write(&file_path, "<div />").unwrap();

        write_document(&file_path, "<span />").unwrap();
        assert_eq!(read_document(&file_path).unwrap(), "<span />");
    }

    #[test]
    fn test_missing_document_is_io_error() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("missing.tsx");

        assert!(matches!(read_document(&file_path), Err(PatchError::Io { .. })));
        assert!(matches!(
            write_document(&file_path, "x"),
            Err(PatchError::Io { .. })
        ));
        assert!(!file_path.exists());
    }
}
