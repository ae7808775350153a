//! Validation for assembled manifests.
//!
//! Runs before anything is written. Member name clashes and invalid
//! array/struct names are errors; unscanned sprite paths are errors only in
//! strict mode. Everything else is a warning.

mod checks;
mod diagnostic;

pub use diagnostic::{Diagnostic, Diagnostics, Severity};

use crate::manifest::Manifest;
use crate::output::Printer;
use crate::parser::SpriteMap;

/// Inputs to validation besides the manifest itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateOptions<'a> {
    pub var: &'a str,
    pub struct_name: &'a str,
    /// Unscanned sprite paths become errors instead of warnings.
    pub strict: bool,
}

/// Run every check and collect the diagnostics.
pub fn validate_manifest(
    manifest: &Manifest,
    sprite_map: &SpriteMap,
    options: &ValidateOptions,
) -> Diagnostics {
    let mut diagnostics = checks::check_names(options.var, options.struct_name);
    diagnostics.extend(checks::check_duplicate_members(manifest));
    diagnostics.extend(checks::check_sprite_paths(manifest, options.strict));
    diagnostics.extend(checks::check_unknown_sprite_keys(sprite_map));
    diagnostics.extend(checks::check_empty_sprite_values(sprite_map));
    diagnostics
}

pub fn print_diagnostics(diagnostics: &Diagnostics, printer: &Printer) {
    for d in diagnostics {
        let line = format!("{} {}", printer.dim(&format!("[{}]", d.code)), d.message);
        let verb = d.severity.to_string();
        match d.severity {
            Severity::Error => printer.error(&verb, &line),
            Severity::Warning => printer.warning(&verb, &line),
        }
        if let Some(help) = &d.help {
            printer.info("help", help);
        }
    }
}
