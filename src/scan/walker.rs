//! Leaf-first directory walk.
//!
//! Children are always processed before their parent so the parent knows
//! which subdirectories ended up with an index.

use std::fs;
use std::path::{Path, PathBuf};

use super::listing::{list_directory, DirectoryListing};
use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::generate::generate_init_file;
use crate::types::{ChildDirectory, DirectoryOutcome, RunReport};

/// Walk `root` (or `root/<subdirectory>`) and regenerate every index below it.
///
/// When the visited directory contains the configured source directory, only
/// that directory is walked and the current level gets no index.
pub fn parse_directory(
    root: &Path,
    subdirectory: Option<&str>,
    config: &GeneratorConfig,
    report: &mut RunReport,
) -> Result<DirectoryOutcome> {
    let mut ancestors = Vec::new();
    visit(root, subdirectory, config, report, &mut ancestors)
}

/// `ancestors` holds the canonical paths of the directories currently being
/// walked. Symlinked directories are followed, so a directory that resolves
/// to one of its own ancestors is skipped instead of recursed into.
fn visit(
    root: &Path,
    subdirectory: Option<&str>,
    config: &GeneratorConfig,
    report: &mut RunReport,
    ancestors: &mut Vec<PathBuf>,
) -> Result<DirectoryOutcome> {
    let path: PathBuf = match subdirectory {
        Some(name) if !name.is_empty() => root.join(name),
        _ => root.to_path_buf(),
    };

    let canonical = fs::canonicalize(&path).unwrap_or_else(|_| path.clone());
    if ancestors.contains(&canonical) {
        report.cycles_skipped.push(path);
        return Ok(DirectoryOutcome::skipped());
    }

    let listing = list_directory(&path)?;
    report.directories_visited += 1;

    ancestors.push(canonical);
    let outcome = visit_listed(&path, listing, config, report, ancestors);
    ancestors.pop();
    outcome
}

fn visit_listed(
    path: &Path,
    listing: DirectoryListing,
    config: &GeneratorConfig,
    report: &mut RunReport,
    ancestors: &mut Vec<PathBuf>,
) -> Result<DirectoryOutcome> {
    // Module directory: the real content lives one level deeper
    if listing
        .directories
        .iter()
        .any(|d| *d == config.source_directory)
    {
        visit(
            path,
            Some(config.source_directory.as_str()),
            config,
            report,
            ancestors,
        )?;
        return Ok(DirectoryOutcome::skipped());
    }

    let mut children = Vec::with_capacity(listing.directories.len());
    for name in listing.directories {
        let has_index = if config.is_ignored_directory(&name) {
            false
        } else {
            visit(path, Some(name.as_str()), config, report, ancestors)?.index_written
        };
        children.push(ChildDirectory::new(name, has_index));
    }

    let files: Vec<String> = listing
        .files
        .into_iter()
        .filter(|f| !config.is_ignored_file(f))
        .collect();

    Ok(generate_init_file(path, &children, &files, config, report))
}
