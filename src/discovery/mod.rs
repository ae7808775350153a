//! Asset discovery for jamgen.
//!
//! Finds the files under the scan root and loads the optional project
//! config that supplies defaults for the command-line settings.
//!
//! # Example
//!
//! ```ignore
//! use jamgen::discovery::{scan_directory, ProjectConfig};
//!
//! let scan = scan_directory(Path::new("assets"), true, &ProjectConfig::default())?;
//! println!("Found {} files", scan.total());
//! ```

mod config;
mod scanner;

pub use config::ProjectConfig;
pub use scanner::{scan_directory, ScanResult};
