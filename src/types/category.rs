//! Asset categories and the extension table that selects them.
//!
//! Each category decides the member type, member prefix and loader
//! accessor used when the asset is emitted.

use std::fmt;

use serde::Serialize;

use crate::naming::file_name;

/// The category of a manifest entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Texture,
    Audio,
    Font,
    Buffer,
    Sprite,
}

impl Category {
    /// Classify an extension (without the leading dot).
    ///
    /// Matching is case-sensitive: `PNG` is a buffer, not a texture.
    pub fn from_extension(extension: &str) -> Self {
        match extension {
            "png" | "jpg" | "jpeg" | "bmp" => Category::Texture,
            "wav" => Category::Audio,
            "jufnt" => Category::Font,
            _ => Category::Buffer,
        }
    }

    /// Prefix prepended to the identifier to form the struct member name.
    pub fn prefix(&self) -> &'static str {
        match self {
            Category::Texture => "tex",
            Category::Audio => "snd",
            Category::Font => "fnt",
            Category::Buffer => "buf",
            Category::Sprite => "spr",
        }
    }

    /// Runtime handle type of the struct member.
    pub fn c_type(&self) -> &'static str {
        match self {
            Category::Texture => "VK2DTexture",
            Category::Audio => "JUSound",
            Category::Font => "JUFont",
            Category::Buffer => "JUBuffer",
            Category::Sprite => "JUSprite",
        }
    }

    /// Loader function that fetches an asset of this category by path.
    pub fn accessor(&self) -> &'static str {
        match self {
            Category::Texture => "juLoaderGetTexture",
            Category::Audio => "juLoaderGetSound",
            Category::Font => "juLoaderGetFont",
            Category::Buffer => "juLoaderGetBuffer",
            Category::Sprite => "juLoaderGetSprite",
        }
    }

    /// Get the short name for this category.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Texture => "texture",
            Category::Audio => "audio",
            Category::Font => "font",
            Category::Buffer => "buffer",
            Category::Sprite => "sprite",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The extension of a normalized path: the text after the last `.` of the
/// file name, or an empty string when the file name has no dot.
pub fn extension_of(path: &str) -> &str {
    let name = file_name(path);
    match name.rfind('.') {
        Some(dot) => &name[dot + 1..],
        None => "",
    }
}

/// Classify a scanned file by the extension of its path.
///
/// Files without an extension are buffers.
pub fn classify(path: &str) -> Category {
    Category::from_extension(extension_of(path))
}
