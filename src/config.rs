//! Generator configuration.
//!
//! Built once at startup from defaults, an optional `initgen.toml` and CLI
//! overrides, then passed by reference to the walker and the generator.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// File looked up in the root path when no explicit config is given
pub const CONFIG_FILE_NAME: &str = "initgen.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Master toggle. When false, no index is removed or written.
    pub generate: bool,

    /// Suffixes of files that get a preload line.
    pub extensions: Vec<String>,

    /// Name of the generated index in every directory.
    pub index_file_name: String,

    /// Directory that replaces its parent as the traversal target.
    pub source_directory: String,

    /// Directory names that are never visited.
    pub ignore_directories: Vec<String>,

    /// Extra file names that are never indexed.
    pub ignore_files: Vec<String>,

    /// Appended to a directory symbol that collides with a file symbol.
    pub collision_suffix: String,

    /// Also index directories that only contain child indices.
    pub pass_through: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            generate: true,
            extensions: vec![".gd".to_string(), ".gdns".to_string()],
            index_file_name: "__init__.gd".to_string(),
            source_directory: "src".to_string(),
            ignore_directories: Vec::new(),
            ignore_files: Vec::new(),
            collision_suffix: "D".to_string(),
            pass_through: false,
        }
    }
}

impl GeneratorConfig {
    /// Load `initgen.toml` from `root` if present, defaults otherwise.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE_NAME);
        if !path.is_file() {
            return Ok(Self::default());
        }
        Self::from_file(&path)
    }

    /// Load an explicit config file. The file must exist.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content, path)
    }

    fn from_toml(content: &str, path: &Path) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|source| Error::Config {
            path: PathBuf::from(path),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.extensions.is_empty() {
            return Err(Error::InvalidConfig(
                "at least one extension is required".to_string(),
            ));
        }
        if let Some(ext) = self.extensions.iter().find(|e| !e.starts_with('.') || e.len() < 2) {
            return Err(Error::InvalidConfig(format!(
                "extension '{}' must start with '.'",
                ext
            )));
        }
        check_plain_name("index_file_name", &self.index_file_name)?;
        check_plain_name("source_directory", &self.source_directory)?;
        if self.collision_suffix.is_empty() {
            return Err(Error::InvalidConfig(
                "collision_suffix must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// File names the walker never hands to the generator.
    pub fn is_ignored_file(&self, name: &str) -> bool {
        name == self.index_file_name || self.ignore_files.iter().any(|f| f == name)
    }

    pub fn is_ignored_directory(&self, name: &str) -> bool {
        self.ignore_directories.iter().any(|d| d == name)
    }

    /// Matching extension for a file name, if it qualifies.
    pub fn matching_extension(&self, file_name: &str) -> Option<&str> {
        self.extensions
            .iter()
            .map(String::as_str)
            .find(|ext| file_name.ends_with(ext))
    }
}

fn check_plain_name(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::InvalidConfig(format!("{} must not be empty", field)));
    }
    if value.contains(['/', '\\']) || value == "." || value == ".." {
        return Err(Error::InvalidConfig(format!(
            "{} '{}' must be a plain file name",
            field, value
        )));
    }
    Ok(())
}
