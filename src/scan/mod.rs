//! Directory scanning: ignore rule resolution and tree traversal

pub mod rules;
pub mod walker;

pub use rules::{find_nearest_ignore_file, load_patterns, IgnoreResolver, IgnoreRuleSet};
pub use walker::{TreeWalker, Visitor};
