use serde::Serialize;
use std::path::{Path, PathBuf};

/// What happened to a single directory's index during the walk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DirectoryOutcome {
    /// True when `<dir>/<index_file_name>` was written in this run.
    pub index_written: bool,
}

impl DirectoryOutcome {
    pub fn written() -> Self {
        Self {
            index_written: true,
        }
    }

    pub fn skipped() -> Self {
        Self::default()
    }
}

/// A subdirectory as seen by its parent's generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildDirectory {
    pub name: String,
    pub has_index: bool,
}

impl ChildDirectory {
    pub fn new(name: impl Into<String>, has_index: bool) -> Self {
        Self {
            name: name.into(),
            has_index,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WarningAction {
    Remove,
    Create,
}

impl WarningAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningAction::Remove => "remove",
            WarningAction::Create => "create",
        }
    }
}

/// Non-fatal index file failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Warning {
    pub path: PathBuf,
    pub action: WarningAction,
    pub message: String,
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Failed to {} file {}: {}",
            self.action.as_str(),
            self.path.display(),
            self.message
        )
    }
}

/// Everything a run produced, collected across the recursion
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunReport {
    pub root: PathBuf,
    pub directories_visited: usize,
    pub written: Vec<PathBuf>,
    /// Symlinked directories that lead back into their own ancestry.
    pub cycles_skipped: Vec<PathBuf>,
    pub warnings: Vec<Warning>,
}

impl RunReport {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            ..Default::default()
        }
    }

    pub fn warn(&mut self, path: &Path, action: WarningAction, error: &std::io::Error) {
        self.warnings.push(Warning {
            path: path.to_path_buf(),
            action,
            message: error.to_string(),
        });
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_display() {
        let mut report = RunReport::new(Path::new("/game"));
        let err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        report.warn(
            Path::new("/game/src/__init__.gd"),
            WarningAction::Create,
            &err,
        );

        assert!(report.has_warnings());
        assert_eq!(
            report.warnings[0].to_string(),
            "Failed to create file /game/src/__init__.gd: denied"
        );
    }
}
