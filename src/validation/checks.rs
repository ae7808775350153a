//! Individual manifest checks. Each returns its own [`Diagnostics`].

use std::collections::{HashMap, HashSet};

use crate::manifest::Manifest;
use crate::naming::is_c_identifier;
use crate::parser::{SpriteMap, DEFAULT_SECTION};
use crate::types::SPRITE_KEYS;

use super::diagnostic::{Diagnostic, Diagnostics};

const DUPLICATE_MEMBER: &str = "jamgen::validate::duplicate-member";
const UNSCANNED_SPRITE: &str = "jamgen::validate::unscanned-sprite";
const UNKNOWN_KEY: &str = "jamgen::validate::unknown-key";
const INVALID_NAME: &str = "jamgen::validate::invalid-name";
const EMPTY_VALUE: &str = "jamgen::validate::empty-value";

/// No two entries may produce the same struct member.
pub fn check_duplicate_members(manifest: &Manifest) -> Diagnostics {
    let mut first_seen: HashMap<String, &str> = HashMap::new();
    let mut diagnostics = Diagnostics::new();

    for entry in manifest.entries() {
        let member = entry.member_name();
        match first_seen.get(member.as_str()) {
            Some(first) => diagnostics.push(
                Diagnostic::error(
                    DUPLICATE_MEMBER,
                    format!(
                        "Member '{}' is derived from both '{}' and '{}'",
                        member,
                        first,
                        entry.path()
                    ),
                )
                .with_help("Rename one of the files; members are named after the file name without its extension"),
            ),
            None => {
                first_seen.insert(member, entry.path());
            }
        }
    }

    diagnostics
}

/// Sprite sections whose path was never scanned.
///
/// Sprites are independent rows, so this is a warning unless `strict`.
pub fn check_sprite_paths(manifest: &Manifest, strict: bool) -> Diagnostics {
    let scanned: HashSet<&str> = manifest.scanned_entries().iter().map(|e| e.path()).collect();

    manifest
        .sprite_entries()
        .iter()
        .filter(|sprite| !scanned.contains(sprite.path()))
        .map(|sprite| {
            let message = format!("Sprite '{}' does not match any scanned file", sprite.path());
            let diagnostic = if strict {
                Diagnostic::error(UNSCANNED_SPRITE, message)
            } else {
                Diagnostic::warning(UNSCANNED_SPRITE, message)
            };
            diagnostic.with_help(
                "Sprite section names must be paths as scanned, e.g. [assets/player.png]",
            )
        })
        .collect()
}

/// Keys that are not one of the eight sprite fields, including in `DEFAULT`.
pub fn check_unknown_sprite_keys(sprite_map: &SpriteMap) -> Diagnostics {
    let default_keys = sprite_map
        .defaults()
        .keys()
        .map(String::as_str)
        .filter(|k| !SPRITE_KEYS.contains(k))
        .map(|k| (DEFAULT_SECTION, k));
    let section_keys = sprite_map
        .sections()
        .iter()
        .flat_map(|s| s.unknown_keys().map(move |k| (s.name.as_str(), k)));

    default_keys
        .chain(section_keys)
        .map(|(section, key)| {
            Diagnostic::warning(
                UNKNOWN_KEY,
                format!("Unknown key '{}' in sprite section [{}] is ignored", key, section),
            )
            .with_help(format!("Recognized keys: {}", SPRITE_KEYS.join(", ")))
        })
        .collect()
}

/// Sprite fields written with no value (`w =`) leave a hole in the row.
pub fn check_empty_sprite_values(sprite_map: &SpriteMap) -> Diagnostics {
    let default_pairs = sprite_map
        .defaults()
        .iter()
        .map(|(k, v)| (DEFAULT_SECTION, k.as_str(), v.as_str()));
    let section_pairs = sprite_map.sections().iter().flat_map(|s| {
        s.values
            .iter()
            .map(move |(k, v)| (s.name.as_str(), k.as_str(), v.as_str()))
    });

    default_pairs
        .chain(section_pairs)
        .filter(|(_, key, value)| value.is_empty() && SPRITE_KEYS.contains(key))
        .map(|(section, key, _)| {
            Diagnostic::warning(
                EMPTY_VALUE,
                format!("Key '{}' in sprite section [{}] has no value", key, section),
            )
            .with_help("Give the key a value or remove it to use the default")
        })
        .collect()
}

/// The array and struct names must be distinct C identifiers.
pub fn check_names(var: &str, struct_name: &str) -> Diagnostics {
    let mut diagnostics: Diagnostics = [("-var", var), ("-struct", struct_name)]
        .into_iter()
        .filter(|(_, name)| !is_c_identifier(name))
        .map(|(flag, name)| {
            Diagnostic::error(
                INVALID_NAME,
                format!("{} value '{}' is not a valid C identifier", flag, name),
            )
            .with_help("Use letters, digits and underscores, not starting with a digit")
        })
        .collect();

    if var == struct_name {
        diagnostics.push(
            Diagnostic::error(INVALID_NAME, format!("-var and -struct are both '{}'", var))
                .with_help("The array and the struct type need different names"),
        );
    }

    diagnostics
}
