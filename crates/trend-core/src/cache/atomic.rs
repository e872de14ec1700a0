//! Atomic file operations for safe JSON persistence.
//!
//! Writes go to a temp file next to the target, are synced to disk, and are
//! then renamed over the target. A crash mid-write leaves the previous file
//! intact.

use crate::{Result, TrendError};
use serde::{de::DeserializeOwned, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::process;
use tracing::debug;

/// Read and parse a JSON file.
///
/// Returns `None` if the file doesn't exist, or an error if parsing fails.
pub fn atomic_read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|e| TrendError::Io {
        message: format!("Failed to read {}", path.display()),
        path: Some(path.to_path_buf()),
        source: Some(e),
    })?;

    let data: T = serde_json::from_str(&contents).map_err(|e| TrendError::Json {
        message: format!("Failed to parse {}: {}", path.display(), e),
        source: Some(e),
    })?;

    Ok(Some(data))
}

/// Write data to a JSON file atomically, pretty-printed.
///
/// Missing parent directories are created. Any previous content is replaced
/// in full.
pub fn atomic_write_json<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| TrendError::Io {
                message: format!("Failed to create directory {}", parent.display()),
                path: Some(parent.to_path_buf()),
                source: Some(e),
            })?;
        }
    }

    let temp_path = path.with_extension(format!("json.{}.tmp", process::id()));

    let serialized = serde_json::to_string_pretty(data).map_err(|e| TrendError::Json {
        message: format!("Failed to serialize data: {}", e),
        source: Some(e),
    })?;

    {
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .map_err(|e| TrendError::Io {
                message: format!("Failed to create temp file {}", temp_path.display()),
                path: Some(temp_path.clone()),
                source: Some(e),
            })?;

        file.write_all(serialized.as_bytes())
            .and_then(|_| file.sync_all())
            .map_err(|e| TrendError::Io {
                message: format!("Failed to write temp file {}", temp_path.display()),
                path: Some(temp_path.clone()),
                source: Some(e),
            })?;
    }

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(TrendError::Io {
            message: format!(
                "Failed to rename {} to {}",
                temp_path.display(),
                path.display()
            ),
            path: Some(path.to_path_buf()),
            source: Some(e),
        });
    }

    debug!("Atomically wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    #[test]
    fn test_atomic_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("trend.json");

        let mut data = BTreeMap::new();
        data.insert("p1".to_string(), "first".to_string());

        atomic_write_json(&path, &data).unwrap();
        assert!(path.exists());

        let read_back: Option<BTreeMap<String, String>> = atomic_read_json(&path).unwrap();
        assert_eq!(read_back, Some(data));
    }

    #[test]
    fn test_atomic_write_is_pretty_printed() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("trend.json");

        let mut data = BTreeMap::new();
        data.insert("p1".to_string(), 1);
        atomic_write_json(&path, &data).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert_eq!(raw, "{\n  \"p1\": 1\n}");
    }

    #[test]
    fn test_atomic_read_nonexistent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.json");

        let result: Option<BTreeMap<String, String>> = atomic_read_json(&path).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_atomic_read_rejects_garbage() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("trend.json");
        fs::write(&path, "not json").unwrap();

        let result: Result<Option<BTreeMap<String, String>>> = atomic_read_json(&path);
        assert!(matches!(result, Err(TrendError::Json { .. })));
    }

    #[test]
    fn test_atomic_write_creates_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".cache").join("trend.json");

        atomic_write_json(&path, &BTreeMap::<String, String>::new()).unwrap();
        assert!(path.exists());
        assert!(!temp_dir
            .path()
            .join(".cache")
            .join(format!("trend.json.{}.tmp", process::id()))
            .exists());
    }
}
