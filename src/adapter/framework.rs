//! Core adapter framework
//!
//! Defines the language variant type and the capability trait that all
//! language adapters implement. Dispatch is static and exhaustive: every
//! `LanguageKind` maps to exactly one adapter, and unrecognized languages map
//! to a no-op adapter whose every capability reports "unsupported".

use crate::signature::FunctionSignature;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use tree_sitter::{Language, Node};

/// Closed set of language variants the pipeline can serve.
///
/// `Other` is the explicit "unsupported" case: its adapter recognizes no
/// function nodes and builds no comments, so the pipeline degrades to a
/// silent no-op instead of guessing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageKind {
    Java,
    Kotlin,
    Other,
}

impl LanguageKind {
    /// Get the display name of the language
    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageKind::Java => "Java",
            LanguageKind::Kotlin => "Kotlin",
            LanguageKind::Other => "unknown",
        }
    }

    /// Name of the documentation dialect used in completion prompts
    pub fn dialect(&self) -> &'static str {
        match self {
            LanguageKind::Java => "JavaDoc",
            LanguageKind::Kotlin => "KDoc",
            LanguageKind::Other => "documentation",
        }
    }

    /// The tree-sitter grammar for this language, if one is bundled
    pub fn grammar(&self) -> Option<Language> {
        match self {
            LanguageKind::Java => Some(tree_sitter_java::language()),
            LanguageKind::Kotlin => Some(tree_sitter_kotlin::language()),
            LanguageKind::Other => None,
        }
    }

    /// Detect the language from a file path's extension
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("java") => LanguageKind::Java,
            Some("kt") | Some("kts") => LanguageKind::Kotlin,
            _ => LanguageKind::Other,
        }
    }
}

impl FromStr for LanguageKind {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.to_lowercase().as_str() {
            "java" => Ok(LanguageKind::Java),
            "kotlin" | "kt" => Ok(LanguageKind::Kotlin),
            "other" | "unknown" => Ok(LanguageKind::Other),
            _ => Err(crate::Error::Adapter(format!("Unknown language: {}", s))),
        }
    }
}

impl std::fmt::Display for LanguageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Capability set for one language variant.
///
/// Each adapter is responsible for:
/// 1. Recognizing function definition nodes in its grammar
/// 2. Extracting a structural signature from a recognized node
/// 3. Building a syntactically valid doc comment block from final text
pub trait LanguageAdapter: Send + Sync {
    /// The language this adapter serves
    fn language(&self) -> LanguageKind;

    /// Whether `node` is a complete function/method definition
    fn is_function_node(&self, node: Node<'_>) -> bool;

    /// Extract the structural signature of a function node.
    ///
    /// Returns `None` when the node is not one this adapter recognizes;
    /// callers that already checked [`is_function_node`](Self::is_function_node)
    /// must treat `None` as an invariant violation.
    fn signature_of(&self, node: Node<'_>, source: &str) -> Option<FunctionSignature>;

    /// Build the source text of a doc comment node from final comment text.
    ///
    /// Returns `None` for the unsupported language - the pipeline turns that
    /// into a silent no-op rather than an error.
    fn build_comment(&self, text: &str) -> Option<String>;
}

/// No-op adapter backing `LanguageKind::Other`
struct UnsupportedAdapter;

impl LanguageAdapter for UnsupportedAdapter {
    fn language(&self) -> LanguageKind {
        LanguageKind::Other
    }

    fn is_function_node(&self, _node: Node<'_>) -> bool {
        false
    }

    fn signature_of(&self, _node: Node<'_>, _source: &str) -> Option<FunctionSignature> {
        None
    }

    fn build_comment(&self, _text: &str) -> Option<String> {
        None
    }
}

static JAVA: super::java::JavaAdapter = super::java::JavaAdapter;
static KOTLIN: super::kotlin::KotlinAdapter = super::kotlin::KotlinAdapter;
static UNSUPPORTED: UnsupportedAdapter = UnsupportedAdapter;

/// Select the adapter for a language variant.
///
/// Exhaustive by construction - there is no fallthrough case to forget.
pub fn adapter_for(language: LanguageKind) -> &'static dyn LanguageAdapter {
    match language {
        LanguageKind::Java => &JAVA,
        LanguageKind::Kotlin => &KOTLIN,
        LanguageKind::Other => &UNSUPPORTED,
    }
}

/// Normalize comment text into a `/** ... */` block.
///
/// Text that already forms a complete block (the usual case for extracted
/// completion output) passes through trimmed; anything else is wrapped one
/// source line per comment line.
pub(crate) fn wrap_block_comment(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.starts_with("/**") && trimmed.ends_with("*/") && trimmed.len() >= 5 {
        return trimmed.to_string();
    }

    let mut block = String::from("/**\n");
    for line in trimmed.lines() {
        block.push_str("* ");
        // An interior close token would terminate the block early
        let line = line.replace("*/", "*\\/");
        block.push_str(&line);
        block.push('\n');
    }
    block.push_str("*/");
    block
}
