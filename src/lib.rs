//! Generates `__init__.gd` preload indices for nested Godot module directories.

pub mod cli;
pub mod config;
pub mod emit;
pub mod error;
pub mod generate;
pub mod scan;
pub mod types;

pub use config::GeneratorConfig;
pub use error::{Error, Result};
pub use scan::parse_directory;
pub use types::{DirectoryOutcome, RunReport, Warning, WarningAction};

use std::path::Path;

/// Regenerate every index under `root` and return the aggregated report.
pub fn run(root: &Path, config: &GeneratorConfig) -> Result<RunReport> {
    let mut report = RunReport::new(root);
    parse_directory(root, None, config, &mut report)?;
    Ok(report)
}
