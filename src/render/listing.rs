//! Listing mode: one line per visible entry

use std::io::Write;

use crate::domain::{ListingStyle, TraversalNode};
use crate::error::Result;
use crate::scan::Visitor;

/// Indentation and branch glyph for an entry at `depth`.
///
/// Depth zero has no prefix; deeper entries get two spaces per extra level
/// and `├─ ` or `└─ ` for the last sibling.
pub fn tree_prefix(depth: usize, is_last: bool) -> String {
    if depth == 0 {
        return String::new();
    }
    let glyph = if is_last { "└─ " } else { "├─ " };
    format!("{}{glyph}", "  ".repeat(depth - 1))
}

pub struct ListingRenderer<W: Write> {
    out: W,
    style: ListingStyle,
}

impl<W: Write> ListingRenderer<W> {
    pub fn new(out: W, style: ListingStyle) -> Self {
        Self { out, style }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Visitor for ListingRenderer<W> {
    fn visit(&mut self, node: &TraversalNode) -> Result<()> {
        let suffix = if node.is_dir() { "/" } else { "" };
        match self.style {
            ListingStyle::Tree => {
                let prefix = tree_prefix(node.depth, node.is_last);
                writeln!(self.out, "{prefix}{}{suffix}", node.name)?
            }
            ListingStyle::Flat => writeln!(self.out, "- {}{suffix}", node.relative_path)?,
        }
        Ok(())
    }
}
