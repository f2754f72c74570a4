//! Reading local inputs and saving service downloads.

use super::atomic::atomic_write;
use crate::error::{BdmError, Result};
use std::path::{Path, PathBuf};

/// Read a UTF-8 input file.
pub fn read_input(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        BdmError::IoError(format!("failed to read '{}': {}", path.display(), e))
    })
}

/// Read a binary input file, such as a spreadsheet to upload.
pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|e| {
        BdmError::IoError(format!("failed to read '{}': {}", path.display(), e))
    })
}

/// Save downloaded bytes and return the path written.
///
/// `out` wins when given; otherwise the file lands in `download_dir` under
/// `default_name`.
pub fn save_download(
    bytes: &[u8],
    out: Option<&Path>,
    download_dir: &Path,
    default_name: &str,
) -> Result<PathBuf> {
    let path = match out {
        Some(path) => path.to_path_buf(),
        None => download_dir.join(default_name),
    };

    atomic_write(&path, bytes)?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "saved download");
    Ok(path)
}
