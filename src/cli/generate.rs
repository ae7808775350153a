//! Generate command implementation.
//!
//! Scans the asset directory, reads the sprite map, assembles the manifest
//! and writes the header. Every input is read before the output is
//! touched, and the output is replaced atomically.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use tempfile::NamedTempFile;

use crate::discovery::{scan_directory, ProjectConfig};
use crate::emit::{emit, EmitOptions};
use crate::error::{GenError, Result};
use crate::manifest::Manifest;
use crate::output::{counted, display_path, Printer};
use crate::parser::read_sprite_map;
use crate::validation::{print_diagnostics, validate_manifest, ValidateOptions};

use super::Cli;

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub dir: PathBuf,
    pub var: String,
    pub struct_name: String,
    pub output: PathBuf,
    pub header: Option<PathBuf>,
    pub footer: Option<PathBuf>,
    pub map: Option<PathBuf>,
    pub recursive: bool,
    pub strict: bool,
    pub config: ProjectConfig,
}

impl Settings {
    /// Merge command-line values over the project config (if any).
    ///
    /// Fails with [`GenError::Usage`] when a required setting is missing
    /// from both.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let config = match &cli.config {
            Some(path) => ProjectConfig::load(path)?,
            None => ProjectConfig::default(),
        };

        let dir = cli.dir.clone().or_else(|| config.dir.clone());
        let var = cli.var.clone().or_else(|| config.var.clone());
        let struct_name = cli.struct_name.clone().or_else(|| config.struct_name.clone());
        let output = cli.output.clone().or_else(|| config.output.clone());

        let missing: Vec<&'static str> = [
            ("-dir", dir.is_none()),
            ("-var", var.is_none()),
            ("-struct", struct_name.is_none()),
            ("-o", output.is_none()),
        ]
        .into_iter()
        .filter_map(|(flag, absent)| absent.then_some(flag))
        .collect();

        match (dir, var, struct_name, output) {
            (Some(dir), Some(var), Some(struct_name), Some(output)) => Ok(Self {
                dir,
                var,
                struct_name,
                output,
                header: cli.header.clone().or_else(|| config.header.clone()),
                footer: cli.footer.clone().or_else(|| config.footer.clone()),
                map: cli.map.clone().or_else(|| config.map.clone()),
                recursive: cli.recursive || config.recursive,
                strict: cli.strict || config.strict,
                config,
            }),
            _ => Err(GenError::Usage { missing }),
        }
    }
}

pub fn run(cli: Cli, printer: &Printer) -> Result<()> {
    let settings = match Settings::resolve(&cli) {
        Ok(settings) => settings,
        Err(e @ GenError::Usage { .. }) => {
            if let Err(io_err) = write_usage(&mut io::stdout()) {
                printer.warning("warning", &format!("Failed to print usage: {}", io_err));
            }
            return Err(e);
        }
        Err(e) => return Err(e),
    };

    let manifest = generate(&settings, printer)?;

    if cli.json {
        let json = manifest.to_json().map_err(|e| GenError::Build {
            message: format!("Failed to serialize manifest: {}", e),
            help: None,
        })?;
        println!("{}", json);
    }

    Ok(())
}

/// Write the help text, shown when required settings are missing.
fn write_usage<W: Write>(out: &mut W) -> io::Result<()> {
    Cli::command().write_help(out)?;
    out.flush()
}

/// Run the whole pipeline for resolved settings and write the header.
///
/// Returns the manifest that was emitted.
pub fn generate(settings: &Settings, printer: &Printer) -> Result<Manifest> {
    printer.status("Scanning", &display_path(&settings.dir));
    let scan = scan_directory(&settings.dir, settings.recursive, &settings.config)?;
    if scan.excluded > 0 {
        printer.info("Excluded", &counted(scan.excluded, "file", "files"));
    }

    if let Some(map) = &settings.map {
        printer.status("Reading", &display_path(map));
    }
    let sprite_map = read_sprite_map(settings.map.as_deref())?;

    let header = read_optional(settings.header.as_deref(), "header")?;
    let footer = read_optional(settings.footer.as_deref(), "footer")?;

    let manifest = Manifest::assemble(&scan.files, &sprite_map);

    let diagnostics = validate_manifest(
        &manifest,
        &sprite_map,
        &ValidateOptions {
            var: &settings.var,
            struct_name: &settings.struct_name,
            strict: settings.strict,
        },
    );
    print_diagnostics(&diagnostics, printer);
    diagnostics.into_result()?;

    let options = EmitOptions::new(&settings.var, &settings.struct_name)
        .with_header(header)
        .with_footer(footer);
    let text = emit(&manifest, &options)?;

    write_atomic(&settings.output, &text)?;

    printer.status(
        "Generated",
        &format!(
            "{} ({}, {})",
            display_path(&settings.output),
            counted(manifest.scanned_count(), "file", "files"),
            counted(manifest.sprite_count(), "sprite", "sprites"),
        ),
    );

    Ok(manifest)
}

/// Read an optional verbatim block.
///
/// No path means no block. A path that cannot be read is an error rather
/// than an empty block.
fn read_optional(path: Option<&Path>, what: &str) -> Result<Option<String>> {
    path.map(|path| {
        fs::read_to_string(path)
            .map_err(|e| GenError::io(path, format!("Failed to read {} file", what), e))
    })
    .transpose()
}

/// Write `contents` to a temp file next to `path`, then rename it into place.
fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(parent)
        .map_err(|e| GenError::io(parent, "Failed to create temporary output file", e))?;
    file.write_all(contents.as_bytes())
        .map_err(|e| GenError::io(path, "Failed to write output", e))?;
    file.persist(path)
        .map_err(|e| GenError::io(path, "Failed to replace output", e.error))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn cli(dir: &Path, output: &Path) -> Cli {
        Cli {
            dir: Some(dir.to_path_buf()),
            var: Some("g_assets".to_string()),
            struct_name: Some("Assets".to_string()),
            output: Some(output.to_path_buf()),
            ..Default::default()
        }
    }

    #[test]
    fn test_resolve_reports_every_missing_flag() {
        let args = Cli {
            dir: Some(PathBuf::from("assets")),
            ..Default::default()
        };

        match Settings::resolve(&args) {
            Err(GenError::Usage { missing }) => {
                assert_eq!(missing, vec!["-var", "-struct", "-o"]);
            }
            other => panic!("expected usage error, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_merges_config() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("jamgen.yaml");
        fs::write(
            &config_path,
            "dir: assets\nvar: g_cfg\nstruct: CfgAssets\noutput: cfg.h\nrecursive: true\n",
        )
        .unwrap();

        let args = Cli {
            var: Some("g_cli".to_string()),
            config: Some(config_path),
            ..Default::default()
        };
        let settings = Settings::resolve(&args).unwrap();

        assert_eq!(settings.dir, PathBuf::from("assets"));
        assert_eq!(settings.var, "g_cli");
        assert_eq!(settings.struct_name, "CfgAssets");
        assert_eq!(settings.output, PathBuf::from("cfg.h"));
        assert!(settings.recursive);
    }

    #[test]
    fn test_run_missing_flags_writes_nothing() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("out.h");

        let mut args = cli(dir.path(), &output);
        args.var = None;

        let result = run(args, &Printer::new().quiet(true));
        assert!(matches!(result, Err(GenError::Usage { .. })));
        assert!(!output.exists());
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_usage() {
        let mut out = Vec::new();
        write_usage(&mut out).unwrap();
        assert!(String::from_utf8_lossy(&out).contains("Usage"));
    }

    #[test]
    fn test_write_usage_reports_write_failure() {
        let err = write_usage(&mut BrokenPipe).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn test_run_writes_header() {
        let dir = tempdir().unwrap();
        let assets = dir.path().join("assets");
        fs::create_dir_all(&assets).unwrap();
        fs::write(assets.join("hero.png"), "").unwrap();
        let output = dir.path().join("out.h");

        run(cli(&assets, &output), &Printer::new().quiet(true)).unwrap();

        let text = fs::read_to_string(&output).unwrap();
        assert!(text.contains("VK2DTexture texhero;"));
        assert!(text.contains("extern JULoadedAsset g_assets[1];"));
    }

    #[test]
    fn test_missing_header_file_is_fatal() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("hero.png"), "").unwrap();
        let output = dir.path().join("out").join("out.h");

        let mut args = cli(dir.path(), &output);
        args.header = Some(dir.path().join("missing.h"));

        let result = run(args, &Printer::new().quiet(true));
        assert!(matches!(result, Err(GenError::Io { .. })));
        assert!(!output.exists());
    }

    #[test]
    fn test_dotfiles_do_not_clash() {
        let dir = tempdir().unwrap();
        let assets = dir.path().join("assets");
        fs::create_dir_all(&assets).unwrap();
        fs::write(assets.join("hero.png"), "").unwrap();
        fs::write(assets.join(".gitkeep"), "").unwrap();
        fs::write(assets.join(".DS_Store"), "").unwrap();
        let output = dir.path().join("out.h");

        run(cli(&assets, &output), &Printer::new().quiet(true)).unwrap();

        let text = fs::read_to_string(&output).unwrap();
        assert!(text.contains("JUBuffer buf_gitkeep;"));
        assert!(text.contains("JUBuffer buf_DS_Store;"));
        assert!(text.contains("extern JULoadedAsset g_assets[3];"));
    }

    #[test]
    fn test_validation_error_keeps_existing_output() {
        let dir = tempdir().unwrap();
        let assets = dir.path().join("assets");
        fs::create_dir_all(assets.join("old")).unwrap();
        fs::write(assets.join("hero.png"), "").unwrap();
        fs::write(assets.join("old/hero.png"), "").unwrap();
        let output = dir.path().join("out.h");
        fs::write(&output, "previous").unwrap();

        let mut args = cli(&assets, &output);
        args.recursive = true;

        let result = run(args, &Printer::new().quiet(true));
        assert!(matches!(result, Err(GenError::Validation { .. })));
        assert_eq!(fs::read_to_string(&output).unwrap(), "previous");
    }

    #[test]
    fn test_write_atomic_replaces_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.h");
        fs::write(&path, "old").unwrap();

        write_atomic(&path, "new").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_write_atomic_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope").join("out.h");

        assert!(matches!(write_atomic(&path, "x"), Err(GenError::Io { .. })));
    }
}
