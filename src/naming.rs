//! Path and identifier helpers.
//!
//! Scanned paths are normalized to forward slashes before anything else
//! looks at them, and struct member names are derived from the file stem.

/// The canonical directory separator used in emitted paths.
pub const SEPARATOR: char = '/';

/// Convert platform separators to `/`.
///
/// No other transformation happens: case is preserved and repeated
/// separators are left alone.
pub fn normalize_path(raw: &str) -> String {
    raw.replace('\\', "/")
}

/// The final path component (everything after the last `/`).
pub fn file_name(path: &str) -> &str {
    match path.rfind(SEPARATOR) {
        Some(slash) => &path[slash + 1..],
        None => path,
    }
}

/// Extract the base name of a normalized path: the file name with its
/// last extension removed.
///
/// `assets/ui/hero.png` gives `hero`, `data` gives `data`, and `a.b.c`
/// gives `a.b`. The result is raw and may contain characters that are not
/// valid in an identifier; see [`sanitize_identifier`].
pub fn derive_identifier(path: &str) -> &str {
    let name = file_name(path);
    match name.rfind('.') {
        Some(dot) => &name[..dot],
        None => name,
    }
}

/// Map a raw base name onto the C identifier character set.
///
/// Every character outside `[A-Za-z0-9_]` becomes `_`, so `big-boss 2`
/// becomes `big_boss_2`. Identifiers are always used behind a category
/// prefix, so a leading digit is fine.
pub fn sanitize_identifier(raw: &str) -> String {
    raw.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

/// Identifier used in the struct member name for `path`.
///
/// This is the sanitized stem. A dotfile such as `.gitkeep` has an empty
/// stem, so its whole file name is sanitized instead (`_gitkeep`).
pub fn member_identifier(path: &str) -> String {
    match derive_identifier(path) {
        "" => sanitize_identifier(file_name(path)),
        stem => sanitize_identifier(stem),
    }
}

/// Whether `name` is usable as a standalone C identifier.
pub fn is_c_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Quote a string as a C string literal, escaping `\` and `"`.
pub fn c_string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}
