//! Dump mode: path header plus fenced file content

use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, warn};

use crate::domain::TraversalNode;
use crate::error::Result;
use crate::scan::Visitor;
use crate::utils::{canonical_or_self, read_file_lossy};

pub const FENCE: &str = "```";

pub struct DumpRenderer<W: Write> {
    out: W,
    skip: Option<PathBuf>,
}

impl<W: Write> DumpRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, skip: None }
    }

    /// Leave out the file at `path` (canonical), e.g. the dump's own output file.
    pub fn skip_file(mut self, path: PathBuf) -> Self {
        self.skip = Some(path);
        self
    }

    fn is_skipped(&self, node: &TraversalNode) -> bool {
        self.skip.as_deref().is_some_and(|skip| {
            skip.file_name() == node.path.file_name() && canonical_or_self(&node.path) == skip
        })
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Visitor for DumpRenderer<W> {
    fn visit(&mut self, node: &TraversalNode) -> Result<()> {
        if node.is_dir() {
            return Ok(());
        }
        if self.is_skipped(node) {
            debug!("Skipping dump output file {}", node.path.display());
            return Ok(());
        }

        writeln!(self.out, "# {}", node.relative_path)?;
        writeln!(self.out, "{FENCE}")?;
        match read_file_lossy(&node.path) {
            Ok(content) => writeln!(self.out, "{content}")?,
            Err(err) => {
                warn!("Cannot read {}: {err}", node.path.display());
                writeln!(self.out, "Error reading file: {err}")?;
            }
        }
        writeln!(self.out, "{FENCE}")?;
        writeln!(self.out)?;
        Ok(())
    }
}
