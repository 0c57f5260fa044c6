//! Error types for the walk, render and configuration layers

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AitkError {
    /// Root argument does not exist or is not a directory
    #[error("\"{}\" is not a valid directory.", path.display())]
    InvalidRoot { path: PathBuf },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(#[from] Box<figment::Error>),

    /// Writing rendered output failed
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AitkError>;
