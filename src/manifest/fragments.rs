//! Per-entry code fragments.
//!
//! Each manifest entry contributes one line to each of the three emitted
//! blocks: a struct member, an initializer row and a builder statement.
//! Fragments carry no indentation or trailing newline.

use crate::naming::c_string_literal;
use crate::types::AssetEntry;

/// Struct member declaration, e.g. `VK2DTexture texhero;`.
pub fn member_declaration(entry: &AssetEntry) -> String {
    format!("{} {};", entry.category().c_type(), entry.member_name())
}

/// Initializer array row.
///
/// Plain assets carry only their path; sprites append their eight fields
/// in `x, y, w, h, delay, frames, origin_x, origin_y` order.
pub fn initializer_row(entry: &AssetEntry) -> String {
    let path = c_string_literal(entry.path());
    match entry.sprite_fields() {
        Some(fields) => format!("{{{}, {}}}", path, fields.values().join(", ")),
        None => format!("{{{}}}", path),
    }
}

/// Builder statement that fetches the entry from the loader into the
/// struct pointed to by `handle`.
pub fn builder_statement(entry: &AssetEntry, handle: &str) -> String {
    format!(
        "{handle}->{member} = {accessor}({handle}->loader, {path});",
        member = entry.member_name(),
        accessor = entry.category().accessor(),
        path = c_string_literal(entry.path()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SpriteFields;

    #[test]
    fn test_member_declaration() {
        assert_eq!(
            member_declaration(&AssetEntry::file("assets/hero.png")),
            "VK2DTexture texhero;"
        );
        assert_eq!(
            member_declaration(&AssetEntry::file("assets/click.wav")),
            "JUSound sndclick;"
        );
        assert_eq!(
            member_declaration(&AssetEntry::file("assets/mono.jufnt")),
            "JUFont fntmono;"
        );
        assert_eq!(
            member_declaration(&AssetEntry::file("assets/level1.bin")),
            "JUBuffer buflevel1;"
        );
    }

    #[test]
    fn test_initializer_row_plain() {
        assert_eq!(
            initializer_row(&AssetEntry::file("assets/hero.png")),
            "{\"assets/hero.png\"}"
        );
    }

    #[test]
    fn test_initializer_row_sprite_with_only_x() {
        let fields = SpriteFields::resolve(|key| (key == "x").then_some("10"));
        let entry = AssetEntry::sprite("path", fields);

        assert_eq!(
            initializer_row(&entry),
            "{\"path\", 10, 0, 0, 0, 0, 1, 0, 0}"
        );
    }

    #[test]
    fn test_builder_statement() {
        assert_eq!(
            builder_statement(&AssetEntry::file("assets/click.wav"), "s"),
            "s->sndclick = juLoaderGetSound(s->loader, \"assets/click.wav\");"
        );

        let sprite = AssetEntry::sprite("assets/walk.png", SpriteFields::default());
        assert_eq!(
            builder_statement(&sprite, "s"),
            "s->sprwalk = juLoaderGetSprite(s->loader, \"assets/walk.png\");"
        );
    }
}
