//! Ignore rule resolution
//!
//! Every visited directory gets its own rule set: the patterns of the nearest
//! ignore file found walking upward from that directory, followed by the
//! patterns of the home ignore file. Matching follows gitignore semantics via
//! the `ignore` crate, so the last matching pattern wins and home rules can
//! re-include (`!pattern`) what a local rule excluded.

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::domain::Config;

/// Find `file_name` in `dir` or the closest ancestor that has it.
pub fn find_nearest_ignore_file(dir: &Path, file_name: &str) -> Option<PathBuf> {
    dir.ancestors().map(|ancestor| ancestor.join(file_name)).find(|candidate| candidate.is_file())
}

/// Load non-blank lines from an ignore file.
///
/// A missing file yields no patterns. An unreadable one is logged and also
/// yields no patterns.
pub fn load_patterns(path: &Path) -> Vec<String> {
    match fs::read_to_string(path) {
        Ok(contents) => parse_patterns(&contents),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Vec::new(),
        Err(err) => {
            warn!("Error reading ignore file {}: {err}", path.display());
            Vec::new()
        }
    }
}

fn parse_patterns(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

/// Default home ignore file: `~/<ignore_file_name>`.
pub fn default_home_ignore_file(file_name: &str) -> Option<PathBuf> {
    directories::BaseDirs::new().map(|dirs| dirs.home_dir().join(file_name))
}

/// Resolves the active rule set for any directory of a walk.
///
/// Built once per process; the home patterns are read here and never again.
#[derive(Debug, Clone)]
pub struct IgnoreResolver {
    file_name: String,
    home_patterns: Vec<String>,
    home_source: Option<PathBuf>,
    fallback_root: PathBuf,
}

impl IgnoreResolver {
    /// `fallback_root` anchors `/patterns` when no local ignore file exists.
    pub fn new(file_name: impl Into<String>, fallback_root: impl Into<PathBuf>) -> Self {
        Self {
            file_name: file_name.into(),
            home_patterns: Vec::new(),
            home_source: None,
            fallback_root: fallback_root.into(),
        }
    }

    /// Load the home ignore file from `path`.
    pub fn with_home_file(mut self, path: &Path) -> Self {
        self.home_patterns = load_patterns(path);
        debug!("Loaded {} home ignore patterns from {}", self.home_patterns.len(), path.display());
        self.home_source = Some(path.to_path_buf());
        self
    }

    pub fn with_home_patterns(mut self, patterns: Vec<String>) -> Self {
        self.home_patterns = patterns;
        self
    }

    pub fn from_config(config: &Config, base_dir: &Path) -> Self {
        let resolver = Self::new(config.ignore_file_name.clone(), base_dir);
        if !config.use_home_ignore {
            return resolver;
        }
        let home_file = config
            .home_ignore_file
            .clone()
            .or_else(|| default_home_ignore_file(&config.ignore_file_name));
        match home_file {
            Some(path) => resolver.with_home_file(&path),
            None => {
                debug!("No home directory; skipping home ignore file");
                resolver
            }
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn home_patterns(&self) -> &[String] {
        &self.home_patterns
    }

    /// Build the rule set that applies to entries of `dir`.
    pub fn resolve(&self, dir: &Path) -> IgnoreRuleSet {
        let (root, local_source, local_patterns) =
            match find_nearest_ignore_file(dir, &self.file_name) {
                Some(path) => {
                    let root = path.parent().map(Path::to_path_buf).unwrap_or_else(|| dir.into());
                    let patterns = load_patterns(&path);
                    (root, Some(path), patterns)
                }
                None => (self.fallback_root.clone(), None, Vec::new()),
            };

        debug!(
            "Rules for {}: {} local ({}), {} home",
            dir.display(),
            local_patterns.len(),
            local_source.as_deref().map(|p| p.display().to_string()).unwrap_or_default(),
            self.home_patterns.len()
        );

        let mut builder = GitignoreBuilder::new(&root);
        add_patterns(&mut builder, local_source.as_deref(), &local_patterns);
        add_patterns(&mut builder, self.home_source.as_deref(), &self.home_patterns);

        let matcher = builder.build().unwrap_or_else(|err| {
            warn!("Failed to build ignore rules for {}: {err}", dir.display());
            Gitignore::empty()
        });

        let mut patterns = local_patterns;
        patterns.extend(self.home_patterns.iter().cloned());
        IgnoreRuleSet { root, patterns, matcher }
    }
}

fn add_patterns(builder: &mut GitignoreBuilder, source: Option<&Path>, patterns: &[String]) {
    for pattern in patterns {
        if let Err(err) = builder.add_line(source.map(Path::to_path_buf), pattern) {
            warn!("Skipping invalid ignore pattern '{pattern}': {err}");
        }
    }
}

/// Combined `local ++ home` patterns compiled for one directory.
#[derive(Debug, Clone)]
pub struct IgnoreRuleSet {
    root: PathBuf,
    patterns: Vec<String>,
    matcher: Gitignore,
}

impl IgnoreRuleSet {
    /// Directory anchored patterns are relative to.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// `path` should be absolute; it is matched relative to [`Self::root`].
    pub fn is_ignored(&self, path: &Path, is_dir: bool) -> bool {
        self.matcher.matched(path, is_dir).is_ignore()
    }
}
