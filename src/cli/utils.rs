//! Shared helpers for the walking subcommands

use anyhow::{Context, Result};
use clap::Args;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::{load_config, merge_cli_with_config, CliOverrides};
use crate::domain::{Config, OutputMode};
use crate::render::build_renderer;
use crate::scan::{IgnoreResolver, TreeWalker, Visitor};
use crate::utils::canonical_or_self;

/// Arguments every walking subcommand accepts
#[derive(Args, Debug, Clone)]
pub struct WalkArgs {
    /// Directories to walk (defaults to the current directory)
    #[arg(value_name = "DIRS")]
    pub dirs: Vec<PathBuf>,

    /// Sort entries by name instead of filesystem order
    #[arg(long)]
    pub sort: bool,

    /// Do not apply the home-directory ignore file
    #[arg(long)]
    pub no_home_ignore: bool,

    /// Name of the per-directory ignore file (default: .aitkignore)
    #[arg(long, value_name = "NAME")]
    pub ignore_file: Option<String>,

    /// Ignore file applied in every directory (default: ~/.aitkignore)
    #[arg(long, value_name = "FILE")]
    pub home_ignore: Option<PathBuf>,
}

impl WalkArgs {
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            ignore_file_name: self.ignore_file.clone(),
            home_ignore_file: self.home_ignore.clone(),
            use_home_ignore: if self.no_home_ignore { Some(false) } else { None },
            sort_entries: if self.sort { Some(true) } else { None },
            ..CliOverrides::default()
        }
    }
}

pub fn parse_csv(value: &Option<String>) -> Option<Vec<String>> {
    value.as_ref().map(|s| {
        s.split(',').map(|part| part.trim().to_string()).filter(|part| !part.is_empty()).collect()
    })
}

/// Current directory, canonicalized so displayed paths line up with walked ones.
pub fn working_dir() -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("Failed to read the current directory")?;
    Ok(canonical_or_self(&cwd))
}

pub fn load_merged_config(
    cwd: &Path,
    config_path: Option<&Path>,
    overrides: CliOverrides,
) -> Result<Config> {
    let file_config = load_config(cwd, config_path).context("Failed to load configuration")?;
    Ok(merge_cli_with_config(file_config, overrides))
}

/// Walk `dirs` (or `cwd` when empty) and render them in `mode` into `out`.
pub fn render_roots(
    mode: OutputMode,
    config: &Config,
    cwd: &Path,
    dirs: &[PathBuf],
    out: &mut dyn Write,
) -> Result<()> {
    let mut renderer = build_renderer(mode, config, out);
    walk_into(config, cwd, dirs, renderer.as_mut())?;
    drop(renderer);

    out.flush().context("Failed to flush output")?;
    Ok(())
}

/// Walk `dirs` (or `cwd` when empty) into `visitor`.
///
/// Invalid roots are reported on stderr and skipped.
pub fn walk_into(
    config: &Config,
    cwd: &Path,
    dirs: &[PathBuf],
    visitor: &mut dyn Visitor,
) -> Result<()> {
    let resolver = IgnoreResolver::from_config(config, cwd);
    debug!("Home ignore patterns: {}", resolver.home_patterns().len());
    let walker = TreeWalker::new(&resolver, cwd).sort_entries(config.sort_entries);
    let roots = if dirs.is_empty() { vec![cwd.to_path_buf()] } else { dirs.to_vec() };

    walker
        .walk_roots(&roots, visitor, |err| eprintln!("Error: {err}"))
        .context("Failed to render output")
}
