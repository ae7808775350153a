//! Header emission.
//!
//! Renders a [`Manifest`] into a single C header laid out as:
//!
//! 1. banner comment and `#include "JamUtil.h"`
//! 2. optional user header, verbatim
//! 3. `extern` declaration of the initializer array
//! 4. declaration block (include guard, always active)
//! 5. definition block (only with `<STRUCT>_IMPLEMENTATION` defined)
//! 6. optional user footer, verbatim
//!
//! Any number of translation units may include the header; exactly one
//! defines the implementation symbol first.

mod blocks;

pub use blocks::{declaration_block, definition_block};

use crate::error::{GenError, Result};
use crate::manifest::Manifest;

/// Header of the runtime loader the generated code calls into.
pub const LOADER_INCLUDE: &str = "JamUtil.h";

/// Names and verbatim blocks for one emitted header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmitOptions {
    /// Name of the initializer array.
    pub var_name: String,
    /// Name of the struct type; also the builder/destroyer suffix.
    pub struct_name: String,
    /// Text copied before the generated code.
    pub header: Option<String>,
    /// Text copied after the generated code.
    pub footer: Option<String>,
}

impl EmitOptions {
    pub fn new(var_name: impl Into<String>, struct_name: impl Into<String>) -> Self {
        Self {
            var_name: var_name.into(),
            struct_name: struct_name.into(),
            header: None,
            footer: None,
        }
    }

    pub fn with_header(mut self, header: Option<String>) -> Self {
        self.header = header;
        self
    }

    pub fn with_footer(mut self, footer: Option<String>) -> Self {
        self.footer = footer;
        self
    }

    /// Include guard around the prototypes, e.g. `JAMGEN_ASSETS_H`.
    pub fn declaration_guard(&self) -> String {
        format!("JAMGEN_{}_H", self.struct_name.to_ascii_uppercase())
    }

    /// Symbol a translation unit defines to get the definitions,
    /// e.g. `ASSETS_IMPLEMENTATION`.
    pub fn implementation_symbol(&self) -> String {
        format!("{}_IMPLEMENTATION", self.struct_name.to_ascii_uppercase())
    }
}

/// Render the complete header.
///
/// Fails when the manifest is empty, since a zero-length array is not
/// valid C.
pub fn emit(manifest: &Manifest, options: &EmitOptions) -> Result<String> {
    if manifest.is_empty() {
        return Err(GenError::Build {
            message: "No assets to emit".to_string(),
            help: Some(
                "The scan root has no files and no sprite map sections were given; \
                 check -dir, -recursive and -map"
                    .to_string(),
            ),
        });
    }

    let mut out = String::new();
    out.push_str("/// THIS FILE IS AUTO-GENERATED BY jamgen. DO NOT EDIT BY HAND.\n");
    out.push_str(&format!(
        "/// Define {} in exactly one source file before including it.\n",
        options.implementation_symbol()
    ));
    out.push_str(&format!("#include \"{}\"\n\n", LOADER_INCLUDE));

    if let Some(header) = &options.header {
        push_verbatim(&mut out, header);
    }

    out.push_str(&format!(
        "extern JULoadedAsset {}[{}];\n\n",
        options.var_name,
        manifest.total_count()
    ));

    out.push_str(&declaration_block(options));
    out.push('\n');
    out.push_str(&definition_block(manifest, options));

    if let Some(footer) = &options.footer {
        out.push('\n');
        push_verbatim(&mut out, footer);
    }

    Ok(out)
}

/// Append user text unchanged, followed by a blank line.
fn push_verbatim(out: &mut String, text: &str) {
    out.push_str(text);
    if !text.ends_with('\n') {
        out.push('\n');
    }
    out.push('\n');
}
