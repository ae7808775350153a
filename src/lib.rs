//! jamgen - Asset header generator
//!
//! A library for compiling a directory of game assets and an optional
//! sprite map into a C header that builds and destroys a struct of loaded
//! assets through the JamUtil runtime loader.

pub mod cli;
pub mod discovery;
pub mod emit;
pub mod error;
pub mod manifest;
pub mod naming;
pub mod output;
pub mod parser;
pub mod types;
pub mod validation;

pub use discovery::{scan_directory, ProjectConfig, ScanResult};
pub use emit::{emit, EmitOptions};
pub use error::{GenError, Result};
pub use manifest::Manifest;
pub use parser::{parse_sprite_map, read_sprite_map, SpriteMap, SpriteSection};
pub use types::{classify, AssetEntry, Category, SpriteFields};
pub use validation::{validate_manifest, Diagnostic, Diagnostics, Severity, ValidateOptions};
