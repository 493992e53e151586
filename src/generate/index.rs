//! Index file content assembly.
//!
//! Layout of a generated index:
//! - a leading blank line
//! - one preload per subdirectory that has its own index, then a blank line
//!   (only when the directory has subdirectories)
//! - one preload per qualifying file

use std::collections::HashSet;
use std::path::Path;

use super::preload::{directory_symbol, file_symbol, preload_statement};
use super::writer::write_index;
use crate::config::GeneratorConfig;
use crate::types::{ChildDirectory, DirectoryOutcome, RunReport};

/// Build the index content for one directory.
///
/// Returns `None` when the directory gets no index: no qualifying file, and
/// in pass-through mode also no child index to link.
pub fn render_index(
    directories: &[ChildDirectory],
    files: &[String],
    config: &GeneratorConfig,
) -> Option<String> {
    let qualifying: Vec<(&str, &str)> = files
        .iter()
        .filter_map(|file| {
            config
                .matching_extension(file)
                .map(|ext| (file.as_str(), file_symbol(file, ext)))
        })
        .collect();

    let links_children = config.pass_through && directories.iter().any(|d| d.has_index);
    if qualifying.is_empty() && !links_children {
        return None;
    }

    let taken: HashSet<&str> = qualifying.iter().map(|(_, symbol)| *symbol).collect();

    let mut content = String::from("\n");

    if !directories.is_empty() {
        for directory in directories.iter().filter(|d| d.has_index) {
            let symbol = directory_symbol(&directory.name, &taken, &config.collision_suffix);
            let path = format!("{}/{}", directory.name, config.index_file_name);
            content.push_str(&preload_statement(&symbol, &path));
        }
        content.push('\n');
    }

    for (file, symbol) in &qualifying {
        if symbol.is_empty() {
            continue;
        }
        content.push_str(&preload_statement(symbol, file));
    }

    Some(content)
}

/// Regenerate the index of `path` from its already-processed children.
pub fn generate_init_file(
    path: &Path,
    directories: &[ChildDirectory],
    files: &[String],
    config: &GeneratorConfig,
    report: &mut RunReport,
) -> DirectoryOutcome {
    if !config.generate {
        return DirectoryOutcome::skipped();
    }

    let Some(content) = render_index(directories, files, config) else {
        return DirectoryOutcome::skipped();
    };

    let index_path = path.join(&config.index_file_name);
    if write_index(&index_path, &content, report) {
        report.written.push(index_path);
        DirectoryOutcome::written()
    } else {
        DirectoryOutcome::skipped()
    }
}
