use std::io;
use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Everything that can stop a jamgen run.
///
/// Every variant is raised before the output file is touched.
#[derive(Error, Diagnostic, Debug)]
pub enum GenError {
    #[error("Missing required setting(s): {}", missing.join(", "))]
    #[diagnostic(
        code(jamgen::usage),
        help("Pass -dir, -var, -struct and -o on the command line or in a -config file")
    )]
    Usage { missing: Vec<&'static str> },

    #[error("{context}: {}", path.display())]
    #[diagnostic(code(jamgen::io))]
    Io {
        path: PathBuf,
        context: String,
        #[source]
        source: io::Error,
    },

    /// Malformed sprite map or config file.
    #[error("Parse error: {message}")]
    #[diagnostic(code(jamgen::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Validation error: {message}")]
    #[diagnostic(code(jamgen::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },

    /// The manifest cannot be rendered.
    #[error("Build error: {message}")]
    #[diagnostic(code(jamgen::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl GenError {
    pub fn io(path: impl Into<PathBuf>, context: impl Into<String>, source: io::Error) -> Self {
        GenError::Io {
            path: path.into(),
            context: context.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, GenError>;
