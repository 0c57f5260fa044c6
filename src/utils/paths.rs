//! Path helpers for displaying walked entries

use std::path::{Component, Path, PathBuf};

/// Resolve `path` against `base` without touching the filesystem.
///
/// `.` and `..` are folded lexically; symlinks are left in place so displayed
/// paths keep the name the user typed.
pub fn absolutize(path: &Path, base: &Path) -> PathBuf {
    let joined = if path.is_absolute() { path.to_path_buf() } else { base.join(path) };
    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() {
                    normalized.push(component);
                }
            }
            other => normalized.push(other),
        }
    }
    normalized
}

/// Whether `path` resolves, through symlinks, to a directory.
///
/// `dunce` keeps Windows paths free of the `\\?\` prefix.
pub fn is_directory(path: &Path) -> bool {
    dunce::canonicalize(path).map(|resolved| resolved.is_dir()).unwrap_or(false)
}

/// Canonical form of `path`, or `path` itself when it cannot be resolved.
pub fn canonical_or_self(path: &Path) -> PathBuf {
    dunce::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Render `path` relative to `base` with `/` separators.
///
/// Entries outside `base` climb out with `..` components, the way a shell
/// user would type them from `base`. Both paths are expected to be absolute.
pub fn relative_display(path: &Path, base: &Path) -> String {
    if let Ok(stripped) = path.strip_prefix(base) {
        return join_components(stripped.components());
    }

    let path_parts: Vec<Component<'_>> = path.components().collect();
    let base_parts: Vec<Component<'_>> = base.components().collect();
    let common = path_parts.iter().zip(base_parts.iter()).take_while(|(a, b)| a == b).count();

    if common == 0 {
        // Different roots (e.g. another drive): nothing sensible to climb to.
        return join_components(path.components());
    }

    let mut parts: Vec<String> = Vec::new();
    for _ in common..base_parts.len() {
        parts.push("..".to_string());
    }
    for component in &path_parts[common..] {
        parts.push(component.as_os_str().to_string_lossy().into_owned());
    }
    parts.join("/")
}

fn join_components<'a>(components: impl Iterator<Item = Component<'a>>) -> String {
    let mut out = String::new();
    for component in components {
        match component {
            Component::RootDir => out.push('/'),
            Component::Prefix(prefix) => out.push_str(&prefix.as_os_str().to_string_lossy()),
            Component::CurDir => {}
            other => {
                if !out.is_empty() && !out.ends_with('/') {
                    out.push('/');
                }
                out.push_str(&other.as_os_str().to_string_lossy());
            }
        }
    }
    out
}
