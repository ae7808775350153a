//! Parser modules for jamgen input files.
//!
//! The only structured input besides the scanned directory is the sprite
//! map, an ini-style file keyed by asset path.
//!
//! # Usage
//!
//! ```ignore
//! use jamgen::parser::parse_sprite_map;
//!
//! let map = parse_sprite_map("[assets/player.png]\nw = 32\nh = 32\n")?;
//! for section in map.sections() {
//!     println!("{} -> {:?}", section.name, map.fields(section).values());
//! }
//! ```

pub mod sprite_map;

pub use sprite_map::{parse_sprite_map, read_sprite_map, SpriteMap, SpriteSection, DEFAULT_SECTION};
