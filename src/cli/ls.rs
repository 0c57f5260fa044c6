//! `ls`: list visible entries

use anyhow::Result;
use clap::Args;
use std::io::{self, BufWriter};
use std::path::Path;

use super::utils::{load_merged_config, render_roots, working_dir, WalkArgs};
use crate::config::CliOverrides;
use crate::domain::{ListingStyle, OutputMode};

#[derive(Args)]
pub struct LsArgs {
    #[command(flatten)]
    pub walk: WalkArgs,

    /// Listing style: tree|flat
    #[arg(short, long, value_name = "STYLE")]
    pub style: Option<String>,
}

pub fn run(args: LsArgs, config_path: Option<&Path>) -> Result<()> {
    let cwd = working_dir()?;
    let style = args.style.as_deref().map(parse_style).transpose()?;
    let overrides = CliOverrides { listing_style: style, ..args.walk.overrides() };
    let config = load_merged_config(&cwd, config_path, overrides)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    render_roots(
        OutputMode::Listing(config.listing_style),
        &config,
        &cwd,
        &args.walk.dirs,
        &mut out,
    )
}

fn parse_style(style: &str) -> Result<ListingStyle> {
    match style.to_ascii_lowercase().as_str() {
        "tree" => Ok(ListingStyle::Tree),
        "flat" | "list" => Ok(ListingStyle::Flat),
        invalid => anyhow::bail!("Invalid style '{invalid}'. Use: tree|flat"),
    }
}
