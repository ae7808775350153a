//! Core domain types for jamgen.
//!
//! - `Category` - closed asset classification keyed by file extension
//! - `AssetEntry` - one manifest line item
//! - `SpriteFields` - sprite sub-region and animation values

mod category;
mod entry;

pub use category::{classify, extension_of, Category};
pub use entry::{AssetEntry, SpriteFields, SPRITE_KEYS};
