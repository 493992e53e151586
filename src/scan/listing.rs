use std::path::Path;
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Immediate children of one directory, sorted by name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryListing {
    pub directories: Vec<String>,
    pub files: Vec<String>,
}

/// Single-level listing of `path`.
///
/// Symlinks to directories are listed as directories; the walker guards
/// against cycles. Entries whose names are not valid UTF-8 are skipped since
/// they cannot be written into a preload path.
pub fn list_directory(path: &Path) -> Result<DirectoryListing> {
    let mut listing = DirectoryListing::default();

    let walker = WalkDir::new(path)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry.map_err(|source| Error::Walk {
            path: path.to_path_buf(),
            source,
        })?;

        let Some(name) = entry.file_name().to_str() else {
            continue;
        };

        let file_type = entry.file_type();
        if file_type.is_dir() || (file_type.is_symlink() && entry.path().is_dir()) {
            listing.directories.push(name.to_string());
        } else {
            listing.files.push(name.to_string());
        }
    }

    Ok(listing)
}
