use clap::Parser;
use std::path::PathBuf;

use crate::config::GeneratorConfig;

#[derive(Parser, Debug)]
#[command(name = "initgen")]
#[command(version)]
#[command(about = "Generate __init__.gd preload indices for Godot module directories")]
pub struct Args {
    /// Module or project root. Nothing happens when omitted.
    pub path: Option<PathBuf>,

    /// Config file (defaults to initgen.toml in the target path if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory name to skip (repeatable)
    #[arg(long = "ignore-dir", value_name = "NAME")]
    pub ignore_dirs: Vec<String>,

    /// Name of the module source directory
    #[arg(long, value_name = "NAME")]
    pub source_dir: Option<String>,

    /// Walk the tree without touching any index file
    #[arg(long)]
    pub no_generate: bool,

    /// Also index directories that only contain child indices
    #[arg(long)]
    pub pass_through: bool,

    /// Print the run report as JSON
    #[arg(long)]
    pub json: bool,

    /// List every written index
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Apply command-line overrides on top of a loaded config.
    pub fn apply_overrides(&self, config: &mut GeneratorConfig) {
        config
            .ignore_directories
            .extend(self.ignore_dirs.iter().cloned());
        if let Some(source_dir) = &self.source_dir {
            config.source_directory = source_dir.clone();
        }
        if self.no_generate {
            config.generate = false;
        }
        if self.pass_through {
            config.pass_through = true;
        }
    }
}
