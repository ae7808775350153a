//! The two guarded blocks of the generated header.
//!
//! The declaration block is visible to every includer. The definition
//! block only compiles in the one translation unit that defines the
//! implementation symbol.

use crate::manifest::{builder_statement, initializer_row, member_declaration, Manifest};

use super::EmitOptions;

/// Name of the struct pointer inside the builder and destroyer.
const HANDLE: &str = "s";

/// Render the declaration block: forward typedef and function prototypes.
pub fn declaration_block(options: &EmitOptions) -> String {
    let guard = options.declaration_guard();
    let name = &options.struct_name;

    let mut out = String::new();
    out.push_str(&format!("#ifndef {}\n", guard));
    out.push_str(&format!("#define {}\n", guard));
    out.push_str(&format!("typedef struct {name} {name};\n"));
    out.push_str(&format!("{name} *build{name}(void);\n"));
    out.push_str(&format!("void destroy{name}({name} *{HANDLE});\n"));
    out.push_str(&format!("#endif // {}\n", guard));
    out
}

/// Render the definition block: array initializer, struct definition,
/// builder and destroyer bodies.
///
/// The builder and destroyer call `malloc`/`free`, and the loader header
/// does not pull in `<stdlib.h>`, so the block includes it itself.
pub fn definition_block(manifest: &Manifest, options: &EmitOptions) -> String {
    let symbol = options.implementation_symbol();
    let name = &options.struct_name;
    let total = manifest.total_count();

    let mut out = String::new();
    out.push_str(&format!("#ifdef {}\n", symbol));
    out.push_str("#include <stdlib.h>\n\n");

    out.push_str(&format!("JULoadedAsset {}[{}] = {{\n", options.var_name, total));
    for entry in manifest.entries() {
        out.push_str(&format!("\t{},\n", initializer_row(entry)));
    }
    out.push_str("};\n\n");

    out.push_str(&format!("struct {} {{\n", name));
    out.push_str("\tJULoader loader;\n");
    for entry in manifest.entries() {
        out.push_str(&format!("\t{}\n", member_declaration(entry)));
    }
    out.push_str("};\n\n");

    out.push_str(&format!("{name} *build{name}(void) {{\n"));
    out.push_str(&format!("\t{name} *{HANDLE} = malloc(sizeof(struct {name}));\n"));
    out.push_str(&format!(
        "\t{HANDLE}->loader = juLoaderCreate({}, {});\n",
        options.var_name, total
    ));
    for entry in manifest.entries() {
        out.push_str(&format!("\t{}\n", builder_statement(entry, HANDLE)));
    }
    out.push_str(&format!("\treturn {HANDLE};\n"));
    out.push_str("}\n\n");

    out.push_str(&format!("void destroy{name}({name} *{HANDLE}) {{\n"));
    out.push_str(&format!("\tjuLoaderFree({HANDLE}->loader);\n"));
    out.push_str(&format!("\tfree({HANDLE});\n"));
    out.push_str("}\n");

    out.push_str(&format!("#endif // {}\n", symbol));
    out
}
