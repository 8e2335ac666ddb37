//! Function locator
//!
//! Walks the ancestor chain from a starting node to the nearest node the
//! active adapter recognizes as a function definition. The adapter is always
//! selected by the *starting* node's language tag, never an ancestor's -
//! mixed-language embeddings resolve against the fragment under the cursor.
//!
//! The walk is bounded by tree depth; ancestor chains are finite and acyclic
//! by construction.

use crate::adapter::{LanguageKind, adapter_for};
use tree_sitter::Node;

/// Find the nearest enclosing function definition, starting at the node
/// itself and walking parents to the root.
pub fn nearest_function<'tree>(start: Node<'tree>, language: LanguageKind) -> Option<Node<'tree>> {
    let adapter = adapter_for(language);
    let mut current = Some(start);
    while let Some(node) = current {
        if adapter.is_function_node(node) {
            return Some(node);
        }
        current = node.parent();
    }
    None
}

/// Availability predicate: whether a doc comment can be generated at `start`.
///
/// Equivalent to "the locator would return Some". False for any node whose
/// ancestor chain contains no function, and for unsupported language tags.
pub fn is_available(start: Node<'_>, language: LanguageKind) -> bool {
    nearest_function(start, language).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::SourceDocument;

    const NESTED_JAVA: &str = r#"class Outer {
    int outer() {
        return 1;
    }

    class Inner {
        int inner(int x) {
            return x;
        }
    }
}
"#;

    #[test]
    fn test_nearest_function_minimality() {
        let doc = SourceDocument::parse(LanguageKind::Java, NESTED_JAVA).unwrap();
        let offset = NESTED_JAVA.find("return x").unwrap();
        let start = doc.node_at(offset);

        let function = nearest_function(start, LanguageKind::Java).unwrap();
        let text = function.utf8_text(doc.text().as_bytes()).unwrap();
        // The inner method, not the outer one
        assert!(text.starts_with("int inner"));
    }

    #[test]
    fn test_no_enclosing_function() {
        let doc = SourceDocument::parse(LanguageKind::Java, NESTED_JAVA).unwrap();
        // "class Outer" - nothing above it is a function
        let start = doc.node_at(0);

        assert!(nearest_function(start, LanguageKind::Java).is_none());
        assert!(!is_available(start, LanguageKind::Java));
    }

    #[test]
    fn test_cursor_inside_method_is_available() {
        let doc = SourceDocument::parse(LanguageKind::Java, NESTED_JAVA).unwrap();
        let offset = NESTED_JAVA.find("return 1").unwrap();
        assert!(is_available(doc.node_at(offset), LanguageKind::Java));
    }

    #[test]
    fn test_unsupported_tag_never_available() {
        let doc = SourceDocument::parse(LanguageKind::Java, NESTED_JAVA).unwrap();
        let offset = NESTED_JAVA.find("return x").unwrap();
        let start = doc.node_at(offset);

        // Same tree, same node - but an Other tag selects the no-op adapter
        assert!(!is_available(start, LanguageKind::Other));
    }

    #[test]
    fn test_kotlin_function_located() {
        let source = "fun greet(name: String): String = \"Hello, \" + name\n";
        let doc = SourceDocument::parse(LanguageKind::Kotlin, source).unwrap();
        let offset = source.find("name").unwrap();

        let function = nearest_function(doc.node_at(offset), LanguageKind::Kotlin).unwrap();
        assert_eq!(function.kind(), "function_declaration");
    }
}
