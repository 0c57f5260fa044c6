//! Command-line interface for aitk
//!
//! Provides `ls`, `cat`, and `types` subcommands.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod cat;
mod ls;
mod types;
mod utils;

/// Walk project trees into LLM-friendly listings, dumps and signatures
#[derive(Parser)]
#[command(name = "aitk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to an extra config file (TOML)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the files and directories that survive the ignore rules
    Ls(ls::LsArgs),

    /// Dump every visible file as a fenced block under its path
    Cat(cat::CatArgs),

    /// Print function, class and type signatures of JS/TS sources
    Types(types::TypesArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let filter = log_filter(cli.verbose, std::env::var(EnvFilter::DEFAULT_ENV).ok());
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let config = cli.config.as_deref();
    match cli.command {
        Commands::Ls(args) => ls::run(args, config),
        Commands::Cat(args) => cat::run(args, config),
        Commands::Types(args) => types::run(args, config),
    }
}

/// A non-empty `RUST_LOG` wins outright; otherwise `--verbose` picks DEBUG over WARN.
fn log_filter(verbose: bool, rust_log: Option<String>) -> EnvFilter {
    let fallback = if verbose { Level::DEBUG } else { Level::WARN };
    match rust_log.filter(|spec| !spec.trim().is_empty()) {
        Some(spec) => EnvFilter::try_new(&spec).unwrap_or_else(|err| {
            eprintln!("Ignoring invalid {}: {err}", EnvFilter::DEFAULT_ENV);
            EnvFilter::default().add_directive(fallback.into())
        }),
        None => EnvFilter::default().add_directive(fallback.into()),
    }
}
