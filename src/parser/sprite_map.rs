//! Sprite map parser.
//!
//! Parses ini-style sprite map files into an ordered list of sections:
//!
//! ```text
//! ; shared values
//! [DEFAULT]
//! frames = 4
//!
//! [assets/player.png]
//! w = 32
//! h = 32
//! delay = 0.1
//! ```
//!
//! Each section header names an asset path. Keys are case-folded, values
//! are kept as raw tokens. A `DEFAULT` section supplies fallbacks for the
//! other sections and is not itself a sprite.

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{GenError, Result};
use crate::types::{SpriteFields, SPRITE_KEYS};

/// Name of the section whose values apply to every other section.
pub const DEFAULT_SECTION: &str = "DEFAULT";

/// A named sprite map section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteSection {
    /// Section name (the sprite's asset path).
    pub name: String,
    /// 1-indexed line of the section header.
    pub line: usize,
    /// Key/value pairs in the order they were written.
    pub values: Vec<(String, String)>,
}

impl SpriteSection {
    fn new(name: impl Into<String>, line: usize) -> Self {
        Self {
            name: name.into(),
            line,
            values: Vec::new(),
        }
    }

    /// Look up a key in this section.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Keys that are not sprite fields.
    pub fn unknown_keys(&self) -> impl Iterator<Item = &str> {
        self.values
            .iter()
            .map(|(k, _)| k.as_str())
            .filter(|k| !SPRITE_KEYS.contains(k))
    }
}

/// A parsed sprite map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpriteMap {
    sections: Vec<SpriteSection>,
    defaults: BTreeMap<String, String>,
}

impl SpriteMap {
    /// An empty map, used when no sprite map file is given.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Sprite sections in file order (excluding `DEFAULT`).
    pub fn sections(&self) -> &[SpriteSection] {
        &self.sections
    }

    /// Number of sprite sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Values from the `DEFAULT` section.
    pub fn defaults(&self) -> &BTreeMap<String, String> {
        &self.defaults
    }

    /// Resolve the sprite fields of a section.
    ///
    /// Lookup order is the section itself, then `DEFAULT`, then the fixed
    /// field default.
    pub fn fields(&self, section: &SpriteSection) -> SpriteFields {
        SpriteFields::resolve(|key| {
            section
                .get(key)
                .or_else(|| self.defaults.get(key).map(String::as_str))
        })
    }
}

/// Read a sprite map file, or return an empty map when there is none.
///
/// A map that cannot be opened is a parse error, the same as one that
/// cannot be parsed.
pub fn read_sprite_map(path: Option<&Path>) -> Result<SpriteMap> {
    let Some(path) = path else {
        return Ok(SpriteMap::empty());
    };

    let source = std::fs::read_to_string(path).map_err(|e| GenError::Parse {
        message: format!("{}: cannot open sprite map: {}", path.display(), e),
        help: Some("Check the -map path".to_string()),
    })?;

    parse_sprite_map(&source).map_err(|e| match e {
        GenError::Parse { message, help } => GenError::Parse {
            message: format!("{}: {}", path.display(), message),
            help,
        },
        other => other,
    })
}

/// Parse sprite map source text.
pub fn parse_sprite_map(source: &str) -> Result<SpriteMap> {
    let mut sections: Vec<SpriteSection> = Vec::new();
    let mut defaults: Option<SpriteSection> = None;
    let mut in_default = false;

    for (index, raw) in source.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.trim();

        if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') {
            let name = parse_header(line, line_no)?;

            let existing = if name == DEFAULT_SECTION {
                defaults.as_ref().map(|s| s.line)
            } else {
                sections.iter().find(|s| s.name == name).map(|s| s.line)
            };
            if let Some(first) = existing {
                return Err(parse_error(
                    line_no,
                    format!("duplicate section [{}] (first defined on line {})", name, first),
                    "Merge the two sections into one",
                ));
            }

            if name == DEFAULT_SECTION {
                defaults = Some(SpriteSection::new(name, line_no));
                in_default = true;
            } else {
                sections.push(SpriteSection::new(name, line_no));
                in_default = false;
            }
            continue;
        }

        let (key, value) = parse_pair(line, line_no)?;

        let current = if in_default {
            defaults.as_mut()
        } else {
            sections.last_mut()
        };
        let Some(section) = current else {
            return Err(parse_error(
                line_no,
                format!("key '{}' appears before any section header", key),
                "Start the file with a section such as [assets/player.png]",
            ));
        };

        if section.get(&key).is_some() {
            return Err(parse_error(
                line_no,
                format!("duplicate key '{}' in section [{}]", key, section.name),
                "Each key may appear once per section",
            ));
        }
        section.values.push((key, value));
    }

    let defaults: BTreeMap<String, String> = defaults
        .map(|s| s.values.into_iter().collect())
        .unwrap_or_default();

    Ok(SpriteMap { sections, defaults })
}

fn parse_header(line: &str, line_no: usize) -> Result<String> {
    let Some(inner) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) else {
        return Err(parse_error(
            line_no,
            format!("malformed section header '{}'", line),
            "Section headers look like [assets/player.png]",
        ));
    };

    let name = inner.trim();
    if name.is_empty() {
        return Err(parse_error(
            line_no,
            "empty section name".to_string(),
            "Name the section after the sprite's asset path",
        ));
    }

    Ok(name.to_string())
}

fn parse_pair(line: &str, line_no: usize) -> Result<(String, String)> {
    let Some(split) = line.find(|c: char| c == '=' || c == ':') else {
        return Err(parse_error(
            line_no,
            format!("expected 'key = value', found '{}'", line),
            "Use key = value (or key: value) inside a section",
        ));
    };

    let key = line[..split].trim().to_lowercase();
    let value = line[split + 1..].trim().to_string();

    if key.is_empty() {
        return Err(parse_error(
            line_no,
            "missing key before delimiter".to_string(),
            "Use key = value (or key: value) inside a section",
        ));
    }

    Ok((key, value))
}

fn parse_error(line_no: usize, message: String, help: &str) -> GenError {
    GenError::Parse {
        message: format!("line {}: {}", line_no, message),
        help: Some(help.to_string()),
    }
}
