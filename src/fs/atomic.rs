//! Atomic file writes.
//!
//! Content is written to a temporary file in the target directory, synced to
//! disk, then renamed over the target. Source and destination must be on the
//! same filesystem for the rename to be atomic. After a crash a temporary file
//! named `.{filename}.tmp` may remain.

use crate::error::{BdmError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write bytes to a file, creating parent directories as needed.
///
/// # Example
///
/// ```no_run
/// use bdm_client::fs::atomic_write;
/// use std::path::Path;
///
/// atomic_write(Path::new("bulk_documents.zip"), b"PK\x03\x04")?;
/// # Ok::<(), bdm_client::error::BdmError>(())
/// ```
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            BdmError::IoError(format!(
                "failed to create directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = generate_temp_path(path)?;
    write_and_sync(&temp_path, content)?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        BdmError::IoError(format!("failed to write '{}': {}", path.display(), e))
    })?;

    Ok(())
}

fn generate_temp_path(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            BdmError::IoError(format!("invalid output path '{}'", target.display()))
        })?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        BdmError::IoError(format!(
            "failed to create temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    let written = file.write_all(content).and_then(|()| file.sync_all());
    if let Err(e) = written {
        let _ = fs::remove_file(path);
        return Err(BdmError::IoError(format!(
            "failed to write temporary file '{}': {}",
            path.display(),
            e
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_atomic_write_new_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("out.pdf");

        atomic_write(&file_path, b"%PDF-1.7").unwrap();

        assert_eq!(fs::read(&file_path).unwrap(), b"%PDF-1.7");
    }

    #[test]
    fn test_atomic_write_replace_existing() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("out.zip");
        fs::write(&file_path, "old archive").unwrap();

        atomic_write(&file_path, b"new archive").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "new archive");
    }

    #[test]
    fn test_atomic_write_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("downloads").join("2024").join("a.zip");

        atomic_write(&file_path, b"nested").unwrap();

        assert_eq!(fs::read(&file_path).unwrap(), b"nested");
    }

    #[test]
    fn test_atomic_write_removes_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("a.zip");

        atomic_write(&file_path, b"content").unwrap();

        assert!(!temp_dir.path().join(".a.zip.tmp").exists());
    }

    #[test]
    fn test_atomic_write_binary_content() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("binary.bin");
        let binary_content: Vec<u8> = (0..=255u8).collect();

        atomic_write(&file_path, &binary_content).unwrap();

        assert_eq!(fs::read(&file_path).unwrap(), binary_content);
    }

    #[test]
    fn test_generate_temp_path() {
        let temp = generate_temp_path(Path::new("/some/path/file.zip")).unwrap();
        assert_eq!(temp, Path::new("/some/path/.file.zip.tmp"));
    }
}
