//! Directory scanning for input documents

use crate::domain::{MeasureError, Result};
use std::path::{Path, PathBuf};

/// List the regular files in `dir` whose extension matches `extension`
///
/// The comparison ignores ASCII case and the leading dot, so `"json"`
/// and `".JSON"` are equivalent. The directory is not searched
/// recursively. Paths are returned sorted by file name so that batch
/// output is deterministic.
///
/// # Errors
///
/// Returns [`MeasureError::Io`] if the directory cannot be read.
pub async fn scan_directory(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let wanted = extension.trim_start_matches('.');
    let mut entries = tokio::fs::read_dir(dir).await.map_err(|e| {
        MeasureError::Io(format!("Failed to read directory {}: {e}", dir.display()))
    })?;

    let mut paths = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if !entry.file_type().await?.is_file() {
            continue;
        }
        if has_extension(&path, wanted) {
            paths.push(path);
        }
    }

    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    tracing::debug!(
        directory = %dir.display(),
        extension = wanted,
        count = paths.len(),
        "Scanned input directory"
    );

    Ok(paths)
}

fn has_extension(path: &Path, wanted: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(wanted))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_scan_filters_and_sorts() {
        let dir = TempDir::new().unwrap();
        for name in ["b.json", "a.JSON", "notes.txt", "c.html"] {
            std::fs::write(dir.path().join(name), "{}").unwrap();
        }
        std::fs::create_dir(dir.path().join("nested.json")).unwrap();

        let paths = scan_directory(dir.path(), ".json").await.unwrap();
        let names: Vec<_> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, ["a.JSON", "b.json"]);
    }

    #[tokio::test]
    async fn test_scan_empty_directory() {
        let dir = TempDir::new().unwrap();
        assert!(scan_directory(dir.path(), "html").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_scan_missing_directory() {
        let dir = TempDir::new().unwrap();
        let result = scan_directory(&dir.path().join("absent"), "json").await;
        assert!(matches!(result, Err(MeasureError::Io(_))));
    }
}
