//! Manifest line items.

use serde::Serialize;

use super::category::{classify, Category};
use crate::naming::member_identifier;

/// Sprite map keys, in emission order.
pub const SPRITE_KEYS: [&str; 8] = [
    "x", "y", "w", "h", "delay", "frames", "origin_x", "origin_y",
];

/// Sub-region and animation fields of a sprite entry.
///
/// Values are literal tokens copied from the sprite map. They are not
/// parsed as numbers; the C compiler gets the final say.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpriteFields {
    pub x: String,
    pub y: String,
    pub w: String,
    pub h: String,
    pub delay: String,
    pub frames: String,
    pub origin_x: String,
    pub origin_y: String,
}

impl Default for SpriteFields {
    fn default() -> Self {
        Self {
            x: "0".to_string(),
            y: "0".to_string(),
            w: "0".to_string(),
            h: "0".to_string(),
            delay: "0".to_string(),
            frames: "1".to_string(),
            origin_x: "0".to_string(),
            origin_y: "0".to_string(),
        }
    }
}

impl SpriteFields {
    /// Build fields from a key lookup, falling back to the fixed default
    /// for every key the lookup does not know.
    pub fn resolve<'a>(lookup: impl Fn(&str) -> Option<&'a str>) -> Self {
        let mut fields = Self::default();
        for key in SPRITE_KEYS {
            if let Some(value) = lookup(key) {
                *fields.slot_mut(key) = value.to_string();
            }
        }
        fields
    }

    /// Field values in emission order (`x, y, w, h, delay, frames, origin_x, origin_y`).
    pub fn values(&self) -> [&str; 8] {
        [
            self.x.as_str(),
            self.y.as_str(),
            self.w.as_str(),
            self.h.as_str(),
            self.delay.as_str(),
            self.frames.as_str(),
            self.origin_x.as_str(),
            self.origin_y.as_str(),
        ]
    }

    fn slot_mut(&mut self, key: &str) -> &mut String {
        match key {
            "x" => &mut self.x,
            "y" => &mut self.y,
            "w" => &mut self.w,
            "h" => &mut self.h,
            "delay" => &mut self.delay,
            "frames" => &mut self.frames,
            "origin_x" => &mut self.origin_x,
            _ => &mut self.origin_y,
        }
    }
}

/// One asset in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetEntry {
    path: String,
    identifier: String,
    category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    sprite: Option<SpriteFields>,
}

impl AssetEntry {
    /// Create an entry for a scanned file. `path` must already be normalized.
    pub fn file(path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            identifier: member_identifier(&path),
            category: classify(&path),
            sprite: None,
            path,
        }
    }

    /// Create a sprite entry for a sprite map section.
    pub fn sprite(path: impl Into<String>, fields: SpriteFields) -> Self {
        let path = path.into();
        Self {
            identifier: member_identifier(&path),
            category: Category::Sprite,
            sprite: Some(fields),
            path,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Sanitized identifier derived from the path.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Sprite fields; present only for [`Category::Sprite`].
    pub fn sprite_fields(&self) -> Option<&SpriteFields> {
        self.sprite.as_ref()
    }

    /// Struct member name: category prefix followed by the identifier.
    pub fn member_name(&self) -> String {
        format!("{}{}", self.category.prefix(), self.identifier)
    }
}
