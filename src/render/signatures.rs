//! Signature mode: per-file header followed by extracted declarations

use std::io::Write;

use crate::domain::TraversalNode;
use crate::error::Result;
use crate::scan::Visitor;
use crate::signatures::SignatureExtractor;

pub struct SignatureRenderer<W: Write> {
    out: W,
    extractor: SignatureExtractor,
}

impl<W: Write> SignatureRenderer<W> {
    pub fn new(out: W, extractor: SignatureExtractor) -> Self {
        Self { out, extractor }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Visitor for SignatureRenderer<W> {
    fn visit(&mut self, node: &TraversalNode) -> Result<()> {
        if node.is_dir() || !self.extractor.supports(&node.path) {
            return Ok(());
        }
        let Some(signatures) = self.extractor.extract_file(&node.path) else {
            return Ok(());
        };

        writeln!(self.out, "# {}", node.relative_path)?;
        if !signatures.trim().is_empty() {
            write!(self.out, "{signatures}")?;
            writeln!(self.out)?;
        }
        Ok(())
    }
}
