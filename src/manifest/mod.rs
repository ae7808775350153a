//! Manifest assembly.
//!
//! Merges scanned files and sprite map sections into one ordered list of
//! entries. Scanned files always come first, in scan order, followed by
//! sprite sections in file order. Every entry knows how to render its
//! three code fragments (see [`fragments`]).

pub mod fragments;

use serde::Serialize;

use crate::parser::SpriteMap;
use crate::types::{AssetEntry, Category};

pub use fragments::{builder_statement, initializer_row, member_declaration};

/// The ordered set of entries that drives code emission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    entries: Vec<AssetEntry>,
    /// Entries before this index came from the scan.
    scanned: usize,
}

impl Manifest {
    /// Build a manifest from normalized scanned paths and a sprite map.
    pub fn assemble(scanned: &[String], sprite_map: &SpriteMap) -> Self {
        let mut entries: Vec<AssetEntry> = scanned
            .iter()
            .map(|path| AssetEntry::file(path.as_str()))
            .collect();

        entries.extend(
            sprite_map
                .sections()
                .iter()
                .map(|section| AssetEntry::sprite(&section.name, sprite_map.fields(section))),
        );

        Self {
            entries,
            scanned: scanned.len(),
        }
    }

    /// All entries: scanned files first, then sprites.
    pub fn entries(&self) -> &[AssetEntry] {
        &self.entries
    }

    /// Entries that came from the directory scan.
    pub fn scanned_entries(&self) -> &[AssetEntry] {
        &self.entries[..self.scanned]
    }

    /// Entries that came from the sprite map.
    pub fn sprite_entries(&self) -> &[AssetEntry] {
        &self.entries[self.scanned..]
    }

    /// Number of scanned files.
    pub fn scanned_count(&self) -> usize {
        self.scanned
    }

    /// Number of sprite sections.
    pub fn sprite_count(&self) -> usize {
        self.entries.len() - self.scanned
    }

    /// Scanned files plus sprite sections; the size of the emitted array.
    pub fn total_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total_count() == 0
    }

    /// Number of entries of a given category.
    pub fn count_of(&self, category: Category) -> usize {
        self.entries
            .iter()
            .filter(|e| e.category() == category)
            .count()
    }

    /// Render the manifest as pretty JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        #[derive(Serialize)]
        struct JsonEntry<'a> {
            member: String,
            #[serde(flatten)]
            entry: &'a AssetEntry,
        }

        #[derive(Serialize)]
        struct JsonManifest<'a> {
            total: usize,
            scanned: usize,
            sprites: usize,
            entries: Vec<JsonEntry<'a>>,
        }

        let doc = JsonManifest {
            total: self.total_count(),
            scanned: self.scanned,
            sprites: self.sprite_count(),
            entries: self
                .entries
                .iter()
                .map(|entry| JsonEntry {
                    member: entry.member_name(),
                    entry,
                })
                .collect(),
        };

        serde_json::to_string_pretty(&doc)
    }
}
