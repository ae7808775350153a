//! Project config (jamgen.yaml) parsing.
//!
//! The config file can hold any of the command-line settings so a build
//! script only needs `jamgen -config=jamgen.yaml`. Values given on the
//! command line take precedence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GenError, Result};

/// Project config loaded from a YAML file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    /// Root directory to scan.
    pub dir: Option<PathBuf>,

    /// Name of the emitted initializer array.
    pub var: Option<String>,

    /// Name of the emitted struct type.
    #[serde(rename = "struct")]
    pub struct_name: Option<String>,

    /// Output header path.
    pub output: Option<PathBuf>,

    /// File copied verbatim before the generated code.
    pub header: Option<PathBuf>,

    /// File copied verbatim after the generated code.
    pub footer: Option<PathBuf>,

    /// Sprite map file.
    pub map: Option<PathBuf>,

    /// Descend into subdirectories when scanning.
    pub recursive: bool,

    /// Treat sprite sections without a matching scanned file as errors.
    pub strict: bool,

    /// Patterns to exclude from scanning.
    pub excludes: Vec<String>,
}

impl ProjectConfig {
    /// Load config from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| GenError::io(path, "Failed to read config", e))?;

        Self::parse(&content)
    }

    /// Parse config from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| GenError::Parse {
            message: format!("Invalid config: {}", e),
            help: Some("Check the config file's YAML syntax and key names".to_string()),
        })
    }

    /// Check if a normalized path should be excluded based on exclude patterns.
    pub fn is_excluded(&self, path: &str) -> bool {
        self.excludes
            .iter()
            .any(|pattern| Self::matches_pattern(path, pattern))
    }

    /// Simple glob pattern matching.
    fn matches_pattern(path: &str, pattern: &str) -> bool {
        if let Some(suffix) = pattern.strip_prefix("**/") {
            // **/dir/* matches anything inside dir anywhere in the path
            if let Some(dir) = suffix.strip_suffix("/*") {
                return path.starts_with(&format!("{}/", dir))
                    || path.contains(&format!("/{}/", dir));
            }
            return path.ends_with(suffix);
        }

        if let Some(suffix) = pattern.strip_prefix('*') {
            if !suffix.contains('/') {
                return path.ends_with(suffix);
            }
        }

        if let Some(prefix) = pattern.strip_suffix("/*") {
            return path.starts_with(&format!("{}/", prefix))
                || path.contains(&format!("/{}/", prefix));
        }

        path.contains(pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
dir: assets
var: g_assets
struct: Assets
output: src/Assets.h
header: tools/header.h
map: assets/sprites.ini
recursive: true
strict: true
excludes:
  - "*.bak"
"#;
        let config = ProjectConfig::parse(yaml).unwrap();

        assert_eq!(config.dir, Some(PathBuf::from("assets")));
        assert_eq!(config.var.as_deref(), Some("g_assets"));
        assert_eq!(config.struct_name.as_deref(), Some("Assets"));
        assert_eq!(config.output, Some(PathBuf::from("src/Assets.h")));
        assert_eq!(config.header, Some(PathBuf::from("tools/header.h")));
        assert!(config.footer.is_none());
        assert_eq!(config.map, Some(PathBuf::from("assets/sprites.ini")));
        assert!(config.recursive);
        assert!(config.strict);
        assert_eq!(config.excludes, vec!["*.bak"]);
    }

    #[test]
    fn test_parse_empty_config() {
        let config = ProjectConfig::parse("").unwrap();
        assert_eq!(config, ProjectConfig::default());
    }

    #[test]
    fn test_parse_rejects_unknown_keys() {
        let result = ProjectConfig::parse("drectory: assets\n");
        assert!(matches!(result, Err(GenError::Parse { .. })));
    }

    #[test]
    fn test_load_missing_file() {
        let result = ProjectConfig::load(Path::new("/nonexistent/jamgen.yaml"));
        assert!(matches!(result, Err(GenError::Io { .. })));
    }

    #[test]
    fn test_is_excluded_extension() {
        let config = ProjectConfig {
            excludes: vec!["*.bak".to_string()],
            ..Default::default()
        };

        assert!(config.is_excluded("hero.bak"));
        assert!(config.is_excluded("assets/hero.png.bak"));
        assert!(!config.is_excluded("assets/hero.png"));
    }

    #[test]
    fn test_is_excluded_directory() {
        let config = ProjectConfig {
            excludes: vec!["**/raw/*".to_string()],
            ..Default::default()
        };

        assert!(config.is_excluded("raw/hero.psd"));
        assert!(config.is_excluded("assets/raw/hero.psd"));
        assert!(!config.is_excluded("assets/hero.png"));
    }

    #[test]
    fn test_is_excluded_exact() {
        let config = ProjectConfig {
            excludes: vec!["Thumbs.db".to_string()],
            ..Default::default()
        };

        assert!(config.is_excluded("assets/Thumbs.db"));
        assert!(!config.is_excluded("assets/thumbs.png"));
    }
}
