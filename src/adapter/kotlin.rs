//! Kotlin language adapter
//!
//! Recognizes `function_declaration` nodes from the tree-sitter Kotlin
//! grammar. The grammar exposes no `name` field on functions, so extraction
//! falls back to the first `simple_identifier` child; the return type is the
//! first type node following the parameter list (a receiver type on an
//! extension function sits before the list and is ignored).

use super::framework::{LanguageAdapter, LanguageKind, wrap_block_comment};
use crate::signature::{FunctionSignature, Parameter, UNNAMED_PARAMETER};
use tree_sitter::Node;

/// Kotlin language adapter
pub struct KotlinAdapter;

const TYPE_KINDS: &[&str] = &[
    "user_type",
    "nullable_type",
    "function_type",
    "parenthesized_type",
];

impl KotlinAdapter {
    /// Extract one (name, type) pair from a `parameter` node.
    fn extract_parameter(&self, node: Node<'_>, source: &str) -> Parameter {
        let bytes = source.as_bytes();
        let mut name = None;
        let mut type_name = None;

        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            let kind = child.kind();
            if kind == "simple_identifier" && name.is_none() {
                name = child.utf8_text(bytes).ok().map(str::to_string);
            } else if TYPE_KINDS.contains(&kind) {
                type_name = child.utf8_text(bytes).ok().map(str::to_string);
            }
        }

        Parameter::new(
            name.unwrap_or_else(|| UNNAMED_PARAMETER.to_string()),
            type_name.unwrap_or_else(|| "Any".to_string()),
        )
    }
}

impl LanguageAdapter for KotlinAdapter {
    fn language(&self) -> LanguageKind {
        LanguageKind::Kotlin
    }

    fn is_function_node(&self, node: Node<'_>) -> bool {
        node.kind() == "function_declaration"
    }

    fn signature_of(&self, node: Node<'_>, source: &str) -> Option<FunctionSignature> {
        if !self.is_function_node(node) {
            return None;
        }
        let bytes = source.as_bytes();

        // No name field in this grammar; take the first simple_identifier
        let name = node
            .child_by_field_name("name")
            .or_else(|| {
                let mut cursor = node.walk();
                node.named_children(&mut cursor)
                    .find(|c| c.kind() == "simple_identifier")
            })?
            .utf8_text(bytes)
            .ok()?
            .to_string();

        let mut parameters = Vec::new();
        let mut return_type = None;
        let mut past_parameters = false;

        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            let kind = child.kind();
            if kind == "function_value_parameters" {
                past_parameters = true;
                let mut params_cursor = child.walk();
                for param in child.named_children(&mut params_cursor) {
                    if param.kind() == "parameter" {
                        parameters.push(self.extract_parameter(param, source));
                    }
                }
            } else if past_parameters && return_type.is_none() && TYPE_KINDS.contains(&kind) {
                return_type = child.utf8_text(bytes).ok().map(str::to_string);
            }
        }

        Some(FunctionSignature {
            name,
            parameters,
            return_type: return_type.unwrap_or_else(|| "Unit".to_string()),
        })
    }

    fn build_comment(&self, text: &str) -> Option<String> {
        Some(wrap_block_comment(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tree_sitter::{Parser, Tree};

    fn parse_kotlin(source: &str) -> Tree {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_kotlin::language())
            .expect("load kotlin grammar");
        parser.parse(source, None).expect("parse kotlin source")
    }

    fn find_kind<'t>(node: Node<'t>, kind: &str) -> Option<Node<'t>> {
        if node.kind() == kind {
            return Some(node);
        }
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if let Some(found) = find_kind(child, kind) {
                return Some(found);
            }
        }
        None
    }

    #[test]
    fn test_function_signature() {
        let source = r#"
fun greet(name: String): String {
    return "Hello, " + name
}
"#;
        let tree = parse_kotlin(source);
        let function = find_kind(tree.root_node(), "function_declaration").unwrap();

        let adapter = KotlinAdapter;
        assert!(adapter.is_function_node(function));

        let sig = adapter.signature_of(function, source).unwrap();
        assert_eq!(sig.name, "greet");
        assert_eq!(sig.return_type, "String");
        assert_eq!(sig.parameters, vec![Parameter::new("name", "String")]);
    }

    #[test]
    fn test_unit_return_default() {
        let source = r#"
fun log(message: String) {
    println(message)
}
"#;
        let tree = parse_kotlin(source);
        let function = find_kind(tree.root_node(), "function_declaration").unwrap();

        let sig = KotlinAdapter.signature_of(function, source).unwrap();
        assert_eq!(sig.name, "log");
        assert_eq!(sig.return_type, "Unit");
    }

    #[test]
    fn test_nullable_return_type() {
        let source = r#"
fun find(key: String): Int? = null
"#;
        let tree = parse_kotlin(source);
        let function = find_kind(tree.root_node(), "function_declaration").unwrap();

        let sig = KotlinAdapter.signature_of(function, source).unwrap();
        assert_eq!(sig.return_type, "Int?");
    }

    #[test]
    fn test_non_function_node_rejected() {
        let source = "class Empty";
        let tree = parse_kotlin(source);
        let class = find_kind(tree.root_node(), "class_declaration").unwrap();

        let adapter = KotlinAdapter;
        assert!(!adapter.is_function_node(class));
        assert!(adapter.signature_of(class, source).is_none());
    }
}
