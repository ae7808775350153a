pub mod generate;

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

/// jamgen - Asset header generator for the JamUtil loader
///
/// Scans a directory of game assets (and an optional sprite map) and writes
/// a C header declaring a struct of loaded assets plus build/destroy
/// functions.
#[derive(Parser, Debug, Default)]
#[command(name = "jamgen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Root directory to scan
    #[arg(long, value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// Name of the emitted initializer array
    #[arg(long, value_name = "NAME")]
    pub var: Option<String>,

    /// Name of the emitted struct type (and build/destroy function suffix)
    #[arg(long = "struct", value_name = "NAME")]
    pub struct_name: Option<String>,

    /// Output header path
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// File copied verbatim before the generated code
    #[arg(long, value_name = "PATH")]
    pub header: Option<PathBuf>,

    /// File copied verbatim after the generated code
    #[arg(long, value_name = "PATH")]
    pub footer: Option<PathBuf>,

    /// Descend into subdirectories when scanning
    #[arg(long)]
    pub recursive: bool,

    /// Sprite map (ini) file
    #[arg(long, value_name = "PATH")]
    pub map: Option<PathBuf>,

    /// YAML project config supplying defaults for any of the above
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Fail when a sprite section does not match a scanned file
    #[arg(long)]
    pub strict: bool,

    /// Print the assembled manifest as JSON on stdout
    #[arg(long)]
    pub json: bool,

    /// Only print warnings and errors
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

impl Cli {
    /// Parse arguments, accepting single-dash long flags (`-dir=assets`).
    pub fn parse_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::parse_from(normalize_args(args))
    }
}

/// Rewrite single-dash long flags to their double-dash form.
///
/// `-dir=assets` becomes `--dir=assets` and `-recursive` becomes
/// `--recursive`. Short flags (`-o=out.h`, `-q`), double-dash flags and
/// non-flag arguments pass through untouched, as does the program name.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut iter = args.into_iter().map(Into::into);
    let mut out: Vec<OsString> = iter.next().into_iter().collect();

    for arg in iter {
        let rewritten = arg.to_str().and_then(|s| {
            let rest = s.strip_prefix('-')?;
            if rest.starts_with('-') {
                return None;
            }
            let name = rest.split('=').next().unwrap_or_default();
            (name.chars().count() > 1).then(|| OsString::from(format!("-{}", s)))
        });
        out.push(rewritten.unwrap_or(arg));
    }

    out
}
