//! Output rendering
//!
//! Each renderer is a [`Visitor`] that writes fragments for the entries the
//! walker hands it into a caller-provided sink.

mod dump;
mod listing;
mod signatures;

use std::io::Write;

pub use dump::{DumpRenderer, FENCE};
pub use listing::{tree_prefix, ListingRenderer};
pub use signatures::SignatureRenderer;

use crate::domain::{Config, OutputMode};
use crate::scan::Visitor;
use crate::signatures::SignatureExtractor;

/// Build the renderer for `mode`, writing into `out`.
pub fn build_renderer<'w>(
    mode: OutputMode,
    config: &Config,
    out: &'w mut dyn Write,
) -> Box<dyn Visitor + 'w> {
    match mode {
        OutputMode::Listing(style) => Box::new(ListingRenderer::new(out, style)),
        OutputMode::Dump => Box::new(DumpRenderer::new(out)),
        OutputMode::Signatures => Box::new(SignatureRenderer::new(
            out,
            SignatureExtractor::new(config.signature_extensions.clone()),
        )),
    }
}
