//! `cat`: dump visible files under their paths

use anyhow::{Context, Result};
use clap::Args;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use super::utils::{load_merged_config, render_roots, walk_into, working_dir, WalkArgs};
use crate::domain::OutputMode;
use crate::render::DumpRenderer;
use crate::utils::{absolutize, canonical_or_self};

#[derive(Args)]
pub struct CatArgs {
    #[command(flatten)]
    pub walk: WalkArgs,

    /// Write the dump to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

pub fn run(args: CatArgs, config_path: Option<&Path>) -> Result<()> {
    let cwd = working_dir()?;
    let config = load_merged_config(&cwd, config_path, args.walk.overrides())?;

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            // The dump file may sit inside a walked root; never dump it into itself.
            let own_path = canonical_or_self(&absolutize(path, &cwd));
            let mut out = BufWriter::new(file);
            let mut renderer = DumpRenderer::new(&mut out).skip_file(own_path);
            walk_into(&config, &cwd, &args.walk.dirs, &mut renderer)?;
            drop(renderer);
            out.flush().context("Failed to flush output")?;
            println!("File contents dumped to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            render_roots(OutputMode::Dump, &config, &cwd, &args.walk.dirs, &mut out)?;
        }
    }
    Ok(())
}
