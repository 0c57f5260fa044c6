//! `types`: print JS/TS signatures of visible sources

use anyhow::Result;
use clap::Args;
use std::io::{self, BufWriter};
use std::path::Path;

use super::utils::{load_merged_config, parse_csv, render_roots, working_dir, WalkArgs};
use crate::config::CliOverrides;
use crate::domain::OutputMode;

#[derive(Args)]
pub struct TypesArgs {
    #[command(flatten)]
    pub walk: WalkArgs,

    /// Extensions to extract from (comma-separated, e.g., 'ts,tsx')
    #[arg(short, long, value_name = "EXTS")]
    pub ext: Option<String>,
}

pub fn run(args: TypesArgs, config_path: Option<&Path>) -> Result<()> {
    let cwd = working_dir()?;
    let extensions = parse_csv(&args.ext).map(|exts| {
        exts.into_iter().map(|e| e.trim_start_matches('.').to_ascii_lowercase()).collect::<Vec<_>>()
    });
    let overrides = CliOverrides { signature_extensions: extensions, ..args.walk.overrides() };
    let config = load_merged_config(&cwd, config_path, overrides)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    render_roots(OutputMode::Signatures, &config, &cwd, &args.walk.dirs, &mut out)
}
