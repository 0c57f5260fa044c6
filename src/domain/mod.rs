//! Core domain types and models
//!
//! Defines the walk configuration, the nodes produced by traversal and the
//! output shapes the renderers understand.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default name of the project-local ignore file.
pub const DEFAULT_IGNORE_FILE_NAME: &str = ".aitkignore";

/// How listing mode lays out entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ListingStyle {
    /// Indented names with `├─`/`└─` branch glyphs
    #[default]
    Tree,
    /// One `- <relative path>` line per entry
    Flat,
}

/// What the walk renders for each visited entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Listing(ListingStyle),
    Dump,
    Signatures,
}

/// Kind of a filesystem entry as seen by the walker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// A single non-ignored entry discovered during traversal.
#[derive(Debug, Clone)]
pub struct TraversalNode {
    /// Bare file name
    pub name: String,

    pub kind: EntryKind,

    /// Absolute path on disk
    pub path: PathBuf,

    /// Path relative to the walk's base directory, `/`-separated
    pub relative_path: String,

    /// Zero for direct children of a root
    pub depth: usize,

    /// Whether this is the last visible entry among its siblings
    pub is_last: bool,
}

impl TraversalNode {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Custom deserializer for extensions: strips leading dots and whitespace.
///
/// Accepts a comma-separated string (handy for `AITK_SIGNATURE_EXTENSIONS`)
/// or an array.
fn deserialize_extensions<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    fn normalize(raw: &str) -> Option<String> {
        let trimmed = raw.trim().trim_start_matches('.');
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_ascii_lowercase())
        }
    }

    struct ExtensionsVisitor;

    impl<'de> Visitor<'de> for ExtensionsVisitor {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or array of extensions")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value.split(',').filter_map(normalize).collect())
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
            A: de::SeqAccess<'de>,
        {
            let mut result = Vec::new();
            while let Some(ext) = seq.next_element::<String>()? {
                if let Some(normalized) = normalize(&ext) {
                    result.push(normalized);
                }
            }
            Ok(result)
        }
    }

    deserializer.deserialize_any(ExtensionsVisitor)
}

/// Main configuration for aitk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// File name searched for in each visited directory and its ancestors
    #[serde(default = "default_ignore_file_name")]
    pub ignore_file_name: String,

    /// Home ignore file; `None` means `~/.aitkignore`
    #[serde(default)]
    pub home_ignore_file: Option<PathBuf>,

    #[serde(default = "default_true")]
    pub use_home_ignore: bool,

    #[serde(default)]
    pub listing_style: ListingStyle,

    /// Sort entries by name instead of keeping native enumeration order
    #[serde(default)]
    pub sort_entries: bool,

    /// Extensions (without the dot) the `types` command parses
    #[serde(
        default = "default_signature_extensions",
        alias = "types_ext",
        deserialize_with = "deserialize_extensions"
    )]
    pub signature_extensions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ignore_file_name: default_ignore_file_name(),
            home_ignore_file: None,
            use_home_ignore: true,
            listing_style: ListingStyle::Tree,
            sort_entries: false,
            signature_extensions: default_signature_extensions(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_ignore_file_name() -> String {
    DEFAULT_IGNORE_FILE_NAME.to_string()
}

pub fn default_signature_extensions() -> Vec<String> {
    ["js", "jsx", "ts", "tsx"].iter().map(|s| s.to_string()).collect()
}
