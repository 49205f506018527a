//! File system helpers
//!
//! Every function acquires and releases its handles within the call, so
//! no file stays open past an error return.

use std::fs;
use std::path::{Path, PathBuf};

/// Normalize a path lexically (`a/./b/../c` becomes `a/c`)
pub fn normalize_path(path: &Path) -> PathBuf {
    path_clean::clean(path)
}

/// Read a UTF-8 text file
///
/// Unlike `fs::read_to_string`, invalid UTF-8 is reported with the byte
/// offset of the first bad sequence instead of a bare `InvalidData`.
pub fn read_text_file(path: &Path) -> crate::Result<String> {
    let bytes = fs::read(path)?;
    String::from_utf8(bytes).map_err(|e| crate::UtilError::Encoding {
        path: path.display().to_string(),
        offset: e.utf8_error().valid_up_to(),
    })
}

/// Ensure directory exists, creating parents as needed
pub fn ensure_dir(path: &Path) -> crate::Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    } else if !path.is_dir() {
        return Err(crate::UtilError::PathOperation(
            format!("Path exists but is not a directory: {}", path.display())
        ));
    }
    Ok(())
}

/// Write a text file, creating its parent directory first
pub fn write_text_file(path: &Path, content: &str) -> crate::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}
