//! Java language adapter
//!
//! Recognizes method and constructor declarations and extracts their
//! structural signature using the tree-sitter Java grammar. Constructors
//! count as function nodes; their absent return type renders as `void`.

use super::framework::{LanguageAdapter, LanguageKind, wrap_block_comment};
use crate::signature::{FunctionSignature, Parameter, UNNAMED_PARAMETER};
use tree_sitter::Node;

/// Java language adapter
pub struct JavaAdapter;

impl JavaAdapter {
    /// Extract one (name, type) pair from a `formal_parameter` or
    /// `spread_parameter` node.
    fn extract_parameter(&self, node: Node<'_>, source: &str) -> Parameter {
        let bytes = source.as_bytes();

        // spread_parameter carries its name inside a variable_declarator
        let name = node
            .child_by_field_name("name")
            .or_else(|| {
                let mut cursor = node.walk();
                node.named_children(&mut cursor)
                    .find(|c| c.kind() == "variable_declarator")
                    .and_then(|d| d.child_by_field_name("name"))
            })
            .and_then(|n| n.utf8_text(bytes).ok())
            .map(str::to_string)
            .unwrap_or_else(|| UNNAMED_PARAMETER.to_string());

        let type_name = node
            .child_by_field_name("type")
            .or_else(|| node.named_child(0))
            .and_then(|n| n.utf8_text(bytes).ok())
            .map(str::to_string)
            .unwrap_or_else(|| "Object".to_string());

        Parameter::new(name, type_name)
    }
}

impl LanguageAdapter for JavaAdapter {
    fn language(&self) -> LanguageKind {
        LanguageKind::Java
    }

    fn is_function_node(&self, node: Node<'_>) -> bool {
        matches!(node.kind(), "method_declaration" | "constructor_declaration")
    }

    fn signature_of(&self, node: Node<'_>, source: &str) -> Option<FunctionSignature> {
        if !self.is_function_node(node) {
            return None;
        }
        let bytes = source.as_bytes();

        let name = node
            .child_by_field_name("name")?
            .utf8_text(bytes)
            .ok()?
            .to_string();

        let return_type = node
            .child_by_field_name("type")
            .and_then(|n| n.utf8_text(bytes).ok())
            .unwrap_or("void")
            .to_string();

        let mut signature = FunctionSignature {
            name,
            parameters: Vec::new(),
            return_type,
        };

        if let Some(params) = node.child_by_field_name("parameters") {
            let mut cursor = params.walk();
            for child in params.named_children(&mut cursor) {
                if matches!(child.kind(), "formal_parameter" | "spread_parameter") {
                    signature.parameters.push(self.extract_parameter(child, source));
                }
            }
        }

        Some(signature)
    }

    fn build_comment(&self, text: &str) -> Option<String> {
        Some(wrap_block_comment(text))
    }
}
