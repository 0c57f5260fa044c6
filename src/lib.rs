//! aitk: walk project trees into text an LLM can read
//!
//! Directories are walked depth-first under layered `.aitkignore` rules and
//! rendered as a listing, a dump of file contents, or the signatures of
//! JavaScript/TypeScript sources.

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod render;
pub mod scan;
pub mod signatures;
pub mod utils;

pub use error::{AitkError, Result};
