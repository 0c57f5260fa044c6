//! Utility functions

pub mod encoding;
pub mod paths;

pub use encoding::read_file_lossy;
pub use paths::{absolutize, canonical_or_self, is_directory, relative_display};
