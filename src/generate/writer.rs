//! Delete-then-create of a single index file.
//!
//! Failures never abort the run; they land in the report as warnings.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use crate::types::{RunReport, WarningAction};

/// Replace the index at `path` with `content`. Returns true if it was written.
pub fn write_index(path: &Path, content: &str, report: &mut RunReport) -> bool {
    if let Err(e) = remove_old_index(path) {
        report.warn(path, WarningAction::Remove, &e);
    }

    match create_new_index(path, content) {
        Ok(()) => true,
        Err(e) => {
            report.warn(path, WarningAction::Create, &e);
            false
        }
    }
}

/// Remove a previous index. A missing file is not an error.
pub fn remove_old_index(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        other => other,
    }
}

/// Create the index as a new file. If one reappeared since the removal it is
/// removed again and creation is retried once.
pub fn create_new_index(path: &Path, content: &str) -> io::Result<()> {
    let mut file = match open_new(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            fs::remove_file(path)?;
            open_new(path)?
        }
        Err(e) => return Err(e),
    };
    file.write_all(content.as_bytes())?;
    file.flush()
}

fn open_new(path: &Path) -> io::Result<fs::File> {
    OpenOptions::new().write(true).create_new(true).open(path)
}
