//! File system scanner for discovering asset files.
//!
//! Walks the scan root (optionally recursively) and returns every regular
//! file as a normalized path, in a stable order.

use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{GenError, Result};
use crate::naming::normalize_path;

use super::config::ProjectConfig;

/// Result of scanning a directory for assets.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// The directory that was scanned.
    pub root: PathBuf,
    /// Normalized file paths, prefixed by the root as given.
    pub files: Vec<String>,
    /// Number of files skipped by exclude patterns.
    pub excluded: usize,
}

impl ScanResult {
    /// Get the total number of discovered files.
    pub fn total(&self) -> usize {
        self.files.len()
    }

    /// Check if no files were discovered.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Scan a directory for asset files.
///
/// Only the root's direct children are visited unless `recursive` is set.
/// Entries are sorted by file name within each directory so the result is
/// the same on every platform. Paths matching the config's exclude
/// patterns are skipped.
pub fn scan_directory(root: &Path, recursive: bool, config: &ProjectConfig) -> Result<ScanResult> {
    if !root.is_dir() {
        return Err(GenError::io(
            root,
            "Scan root is not a readable directory",
            io::Error::new(io::ErrorKind::NotFound, "not a directory"),
        ));
    }

    let mut walker = WalkDir::new(root)
        .min_depth(1)
        .follow_links(true)
        .sort_by_file_name();
    if !recursive {
        walker = walker.max_depth(1);
    }

    let mut result = ScanResult {
        root: root.to_path_buf(),
        ..Default::default()
    };

    for entry in walker {
        let entry = entry.map_err(|e| {
            let path = e
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root.to_path_buf());
            GenError::io(path, "Failed to scan directory", io::Error::from(e))
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let Some(raw) = entry.path().to_str() else {
            return Err(GenError::io(
                entry.path(),
                "Cannot embed file name",
                io::Error::new(io::ErrorKind::InvalidData, "file name is not valid UTF-8"),
            ));
        };
        let path = normalize_path(raw);

        if config.is_excluded(&path) {
            result.excluded += 1;
            continue;
        }

        result.files.push(path);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn names(result: &ScanResult) -> Vec<String> {
        result
            .files
            .iter()
            .map(|p| p.rsplit('/').next().unwrap_or_default().to_string())
            .collect()
    }

    #[test]
    fn test_scan_empty_directory() {
        let dir = tempdir().unwrap();

        let result = scan_directory(dir.path(), false, &ProjectConfig::default()).unwrap();

        assert!(result.is_empty());
        assert_eq!(result.total(), 0);
    }

    #[test]
    fn test_scan_is_sorted() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("zombie.png"), "").unwrap();
        fs::write(dir.path().join("click.wav"), "").unwrap();
        fs::write(dir.path().join("hero.png"), "").unwrap();

        let result = scan_directory(dir.path(), false, &ProjectConfig::default()).unwrap();

        assert_eq!(names(&result), vec!["click.wav", "hero.png", "zombie.png"]);
    }

    #[test]
    fn test_scan_non_recursive_skips_subdirectories() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("music")).unwrap();
        fs::write(dir.path().join("hero.png"), "").unwrap();
        fs::write(dir.path().join("music/theme.wav"), "").unwrap();

        let result = scan_directory(dir.path(), false, &ProjectConfig::default()).unwrap();

        assert_eq!(names(&result), vec!["hero.png"]);
    }

    #[test]
    fn test_scan_recursive() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("music/loops")).unwrap();
        fs::write(dir.path().join("hero.png"), "").unwrap();
        fs::write(dir.path().join("music/theme.wav"), "").unwrap();
        fs::write(dir.path().join("music/loops/drums.wav"), "").unwrap();

        let result = scan_directory(dir.path(), true, &ProjectConfig::default()).unwrap();

        assert_eq!(result.total(), 3);
        assert!(result.files.iter().any(|p| p.ends_with("music/loops/drums.wav")));
    }

    #[test]
    fn test_scan_paths_are_normalized() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("music")).unwrap();
        fs::write(dir.path().join("music/theme.wav"), "").unwrap();

        let result = scan_directory(dir.path(), true, &ProjectConfig::default()).unwrap();

        assert!(!result.files[0].contains('\\'));
        assert!(result.files[0].ends_with("/music/theme.wav"));
    }

    #[test]
    fn test_scan_with_excludes() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("hero.png"), "").unwrap();
        fs::write(dir.path().join("hero.png.bak"), "").unwrap();

        let config = ProjectConfig {
            excludes: vec!["*.bak".to_string()],
            ..Default::default()
        };
        let result = scan_directory(dir.path(), false, &config).unwrap();

        assert_eq!(names(&result), vec!["hero.png"]);
        assert_eq!(result.excluded, 1);
    }

    #[test]
    fn test_scan_nonexistent_directory_fails() {
        let result = scan_directory(
            Path::new("/nonexistent/path"),
            false,
            &ProjectConfig::default(),
        );

        assert!(matches!(result, Err(GenError::Io { .. })));
    }
}
