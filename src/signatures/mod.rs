//! Type and function signature extraction for JavaScript/TypeScript sources
//!
//! Sources are parsed with tree-sitter. The extractor walks the whole syntax
//! tree and emits, in source order:
//!
//! - `name(params): returnType` for functions, generators, methods and arrow
//!   functions (return type `any` when unannotated),
//! - the full text of interfaces and type aliases,
//! - `class Name { ... }` with every method and field member verbatim.
//!
//! Each fragment is followed by a blank line.

use std::path::Path;
use tracing::{debug, warn};
use tree_sitter::{Language, Node, Parser};

use crate::utils::read_file_lossy;

const FUNCTION_KINDS: &[&str] = &[
    "function_declaration",
    "generator_function_declaration",
    "function_signature",
    "method_definition",
    "abstract_method_signature",
    "arrow_function",
];

const DECLARATION_KINDS: &[&str] = &["interface_declaration", "type_alias_declaration"];

const CLASS_KINDS: &[&str] = &["class_declaration", "abstract_class_declaration"];

const CLASS_MEMBER_KINDS: &[&str] = &[
    "method_definition",
    "field_definition",
    "public_field_definition",
    "abstract_method_signature",
];

/// Grammar used to parse a source file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceDialect {
    JavaScript,
    TypeScript,
    Tsx,
}

impl SourceDialect {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "js" | "jsx" | "mjs" | "cjs" => Some(Self::JavaScript),
            "ts" | "mts" | "cts" => Some(Self::TypeScript),
            "tsx" => Some(Self::Tsx),
            _ => None,
        }
    }

    fn language(self) -> Language {
        match self {
            Self::JavaScript => tree_sitter_javascript::LANGUAGE.into(),
            Self::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            Self::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
        }
    }
}

pub struct SignatureExtractor {
    extensions: Vec<String>,
}

impl Default for SignatureExtractor {
    fn default() -> Self {
        Self::new(crate::domain::default_signature_extensions())
    }
}

impl SignatureExtractor {
    /// `extensions` are matched case-insensitively, without the leading dot.
    pub fn new(extensions: Vec<String>) -> Self {
        Self { extensions: extensions.into_iter().map(|e| e.to_ascii_lowercase()).collect() }
    }

    /// Whether `path` has one of the configured extensions.
    pub fn supports(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
            .unwrap_or(false)
    }

    /// Extract signatures from a file on disk.
    ///
    /// `None` means the file must produce no output at all: it could not be
    /// read, has no known grammar, or failed to parse cleanly.
    pub fn extract_file(&self, path: &Path) -> Option<String> {
        let dialect =
            path.extension().and_then(|ext| ext.to_str()).and_then(SourceDialect::from_extension);
        let Some(dialect) = dialect else {
            warn!("No grammar for {}; skipping", path.display());
            return None;
        };

        let source = match read_file_lossy(path) {
            Ok(source) => source,
            Err(err) => {
                warn!("Cannot read {}: {err}", path.display());
                return None;
            }
        };

        let extracted = extract_source(&source, dialect);
        if extracted.is_none() {
            warn!("Failed to parse {}; skipping", path.display());
        }
        extracted
    }
}

/// Extract signatures from in-memory source.
pub fn extract_source(source: &str, dialect: SourceDialect) -> Option<String> {
    let mut parser = Parser::new();
    parser.set_language(&dialect.language()).ok()?;
    let tree = parser.parse(source, None)?;
    let root = tree.root_node();
    if root.has_error() {
        debug!("Syntax errors in {dialect:?} source");
        return None;
    }

    let mut output = String::new();
    visit(root, source.as_bytes(), &mut output);
    Some(output)
}

fn visit(node: Node<'_>, source: &[u8], output: &mut String) {
    let kind = node.kind();
    if FUNCTION_KINDS.contains(&kind) {
        output.push_str(&function_signature(node, source));
        output.push_str("\n\n");
    } else if DECLARATION_KINDS.contains(&kind) {
        output.push_str(&declaration_modifiers(node));
        output.push_str(text(node, source));
        output.push_str("\n\n");
    } else if CLASS_KINDS.contains(&kind) {
        output.push_str(&class_shape(node, source));
        output.push_str("\n\n");
    }

    let mut cursor = node.walk();
    let children: Vec<Node<'_>> = node.named_children(&mut cursor).collect();
    for child in children {
        visit(child, source, output);
    }
}

fn text<'s>(node: Node<'_>, source: &'s [u8]) -> &'s str {
    node.utf8_text(source).unwrap_or_default()
}

/// `export ` and `declare ` keywords held by wrapping nodes, outermost first.
fn declaration_modifiers(node: Node<'_>) -> String {
    let mut modifiers = String::new();
    let mut current = node.parent();
    while let Some(parent) = current {
        let keyword = match parent.kind() {
            "export_statement" => "export ",
            "ambient_declaration" => "declare ",
            _ => break,
        };
        modifiers.insert_str(0, keyword);
        current = parent.parent();
    }
    modifiers
}

fn function_signature(node: Node<'_>, source: &[u8]) -> String {
    let name = node
        .child_by_field_name("name")
        .map(|n| text(n, source).to_string())
        .or_else(|| assigned_name(node, source))
        .unwrap_or_else(|| "anonymous".to_string());

    let params = if let Some(list) = node.child_by_field_name("parameters") {
        let mut cursor = list.walk();
        let params: Vec<&str> = list
            .named_children(&mut cursor)
            .filter(|p| p.kind() != "comment")
            .map(|p| text(p, source))
            .collect();
        params.join(", ")
    } else if let Some(single) = node.child_by_field_name("parameter") {
        text(single, source).to_string()
    } else {
        String::new()
    };

    let return_type = node
        .child_by_field_name("return_type")
        .map(|n| text(n, source).trim_start().trim_start_matches(':').trim().to_string())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| "any".to_string());

    format!("{name}({params}): {return_type}")
}

/// Name of the binding an arrow function is assigned to, if any.
fn assigned_name(node: Node<'_>, source: &[u8]) -> Option<String> {
    let parent = node.parent()?;
    let target = match parent.kind() {
        "variable_declarator" | "public_field_definition" => parent.child_by_field_name("name"),
        "field_definition" => parent.child_by_field_name("property"),
        "pair" => parent.child_by_field_name("key"),
        "assignment_expression" => parent.child_by_field_name("left"),
        _ => None,
    }?;
    Some(text(target, source).to_string())
}

fn class_shape(node: Node<'_>, source: &[u8]) -> String {
    let name = node.child_by_field_name("name").map(|n| text(n, source)).unwrap_or("anonymous");
    let mut shape = format!("class {name} {{\n");
    if let Some(body) = node.child_by_field_name("body") {
        let mut cursor = body.walk();
        for member in body.named_children(&mut cursor) {
            if CLASS_MEMBER_KINDS.contains(&member.kind()) {
                shape.push_str("  ");
                shape.push_str(text(member, source));
                shape.push('\n');
            }
        }
    }
    shape.push('}');
    shape
}
