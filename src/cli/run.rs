use anyhow::{bail, Context, Result};
use std::env;
use std::path::{Path, PathBuf};

use super::args::Args;
use super::output::print_report;
use crate::config::GeneratorConfig;
use crate::emit::render_json;

pub fn run_generate(args: &Args) -> Result<()> {
    let Some(path) = &args.path else {
        return Ok(());
    };

    let root = absolute(path)?;
    if !root.is_dir() {
        bail!("Not a directory: {}", root.display());
    }

    let config = resolve_config(args, &root)?;

    let report = crate::run(&root, &config)
        .with_context(|| format!("Failed to generate indices under {}", root.display()))?;

    if args.json {
        println!("{}", render_json(&report)?);
    } else {
        print_report(&report, args.verbose);
    }

    Ok(())
}

fn resolve_config(args: &Args, root: &Path) -> Result<GeneratorConfig> {
    let mut config = match &args.config {
        Some(config_path) => GeneratorConfig::from_file(config_path)?,
        None => GeneratorConfig::load(root)?,
    };
    args.apply_overrides(&mut config);
    config.validate()?;
    Ok(config)
}

fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = env::current_dir().context("Failed to resolve current directory")?;
    Ok(cwd.join(path))
}
