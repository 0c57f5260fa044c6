//! Depth-first directory traversal
//!
//! Entries are visited in native enumeration order unless sorting is
//! requested. Each directory's entries are checked against the rule set
//! resolved for that directory; ignored entries are neither emitted nor
//! descended into.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::domain::{EntryKind, TraversalNode};
use crate::error::{AitkError, Result};
use crate::scan::rules::IgnoreResolver;
use crate::utils::{absolutize, is_directory, relative_display};

/// Receives every non-ignored entry in walk order.
pub trait Visitor {
    fn visit(&mut self, node: &TraversalNode) -> Result<()>;
}

pub struct TreeWalker<'a> {
    resolver: &'a IgnoreResolver,
    base_dir: PathBuf,
    sort_entries: bool,
}

struct RawEntry {
    name: String,
    path: PathBuf,
    kind: EntryKind,
}

impl<'a> TreeWalker<'a> {
    /// `base_dir` is what displayed paths are relative to.
    pub fn new(resolver: &'a IgnoreResolver, base_dir: impl Into<PathBuf>) -> Self {
        Self { resolver, base_dir: base_dir.into(), sort_entries: false }
    }

    pub fn sort_entries(mut self, sort: bool) -> Self {
        self.sort_entries = sort;
        self
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Resolve `root` against the base directory and check it is a directory.
    ///
    /// The returned path is lexical: a symlinked root is walked, and
    /// displayed, under its own name.
    pub fn validate_root(&self, root: &Path) -> Result<PathBuf> {
        let resolved = absolutize(root, &self.base_dir);
        if is_directory(&resolved) {
            Ok(resolved)
        } else {
            Err(AitkError::InvalidRoot { path: root.to_path_buf() })
        }
    }

    /// Walk one root, handing each visible entry to `visitor`.
    pub fn walk<V: Visitor + ?Sized>(&self, root: &Path, visitor: &mut V) -> Result<()> {
        let root = self.validate_root(root)?;
        debug!("Walking {}", root.display());
        self.walk_dir(&root, 0, visitor)
    }

    /// Walk each root in order into the same visitor.
    ///
    /// Invalid roots are handed to `on_invalid` and contribute nothing; any
    /// other error stops the walk.
    pub fn walk_roots<V, F>(
        &self,
        roots: &[PathBuf],
        visitor: &mut V,
        mut on_invalid: F,
    ) -> Result<()>
    where
        V: Visitor + ?Sized,
        F: FnMut(&AitkError),
    {
        for root in roots {
            match self.walk(root, visitor) {
                Err(err @ AitkError::InvalidRoot { .. }) => on_invalid(&err),
                other => other?,
            }
        }
        Ok(())
    }

    fn walk_dir<V: Visitor + ?Sized>(
        &self,
        dir: &Path,
        depth: usize,
        visitor: &mut V,
    ) -> Result<()> {
        let rules = self.resolver.resolve(dir);
        let visible: Vec<RawEntry> = self
            .read_entries(dir)
            .into_iter()
            .filter(|entry| {
                let ignored = rules.is_ignored(&entry.path, entry.kind == EntryKind::Directory);
                if ignored {
                    debug!("Ignoring {}", entry.path.display());
                }
                !ignored
            })
            .collect();

        let count = visible.len();
        for (index, entry) in visible.into_iter().enumerate() {
            let node = TraversalNode {
                relative_path: relative_display(&entry.path, &self.base_dir),
                name: entry.name,
                kind: entry.kind,
                path: entry.path,
                depth,
                is_last: index + 1 == count,
            };
            visitor.visit(&node)?;
            if node.is_dir() {
                self.walk_dir(&node.path, depth + 1, visitor)?;
            }
        }
        Ok(())
    }

    fn read_entries(&self, dir: &Path) -> Vec<RawEntry> {
        let read_dir = match fs::read_dir(dir) {
            Ok(read_dir) => read_dir,
            Err(err) => {
                warn!("Cannot read directory {}: {err}", dir.display());
                return Vec::new();
            }
        };

        let mut entries: Vec<RawEntry> = read_dir
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(err) => {
                    warn!("Skipping unreadable entry in {}: {err}", dir.display());
                    None
                }
            })
            .filter_map(|entry| {
                // Symlinks are not followed: only real directories recurse.
                let kind = match entry.file_type() {
                    Ok(file_type) if file_type.is_dir() => EntryKind::Directory,
                    Ok(_) => EntryKind::File,
                    Err(err) => {
                        warn!("Cannot stat {}: {err}", entry.path().display());
                        return None;
                    }
                };
                Some(RawEntry {
                    name: entry.file_name().to_string_lossy().into_owned(),
                    path: entry.path(),
                    kind,
                })
            })
            .collect();

        if self.sort_entries {
            entries.sort_by(|a, b| a.name.cmp(&b.name));
        }
        entries
    }
}
