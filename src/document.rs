//! Source document - owned source text plus its syntax tree
//!
//! `SourceDocument` is the unit the pipeline operates on. The tree owns its
//! nodes; a node never outlives the document that produced it. Mutation is
//! all-or-nothing: an insertion composes the new text, reparses it, verifies
//! the result, and only then swaps both text and tree.

use crate::adapter::LanguageKind;
use crate::{Error, Result};
use tree_sitter::{Node, Parser, Tree};

/// A parsed source file with its language tag.
pub struct SourceDocument {
    language: LanguageKind,
    text: String,
    tree: Tree,
}

fn parse_source(language: LanguageKind, text: &str) -> Result<Tree> {
    let grammar = language
        .grammar()
        .ok_or_else(|| Error::Parse(format!("no grammar bundled for {}", language)))?;

    let mut parser = Parser::new();
    parser
        .set_language(&grammar)
        .map_err(|e| Error::Parse(format!("Failed to set language: {}", e)))?;

    parser
        .parse(text, None)
        .ok_or_else(|| Error::Parse("Failed to parse source".to_string()))
}

impl SourceDocument {
    /// Parse source text with the grammar for `language`.
    pub fn parse(language: LanguageKind, text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        let tree = parse_source(language, &text)?;
        Ok(Self {
            language,
            text,
            tree,
        })
    }

    /// Retag the document with a different language.
    ///
    /// The tree is kept as parsed. This models embedded fragments whose
    /// declared language differs from the host grammar - the locator selects
    /// its adapter by this tag, not by how the text happened to parse.
    pub fn with_language(mut self, language: LanguageKind) -> Self {
        self.language = language;
        self
    }

    /// Language tag of this document
    pub fn language(&self) -> LanguageKind {
        self.language
    }

    /// Full source text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Root node of the syntax tree
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// The smallest node containing the byte offset.
    pub fn node_at(&self, offset: usize) -> Node<'_> {
        let root = self.tree.root_node();
        root.descendant_for_byte_range(offset, offset).unwrap_or(root)
    }

    /// Convert a 1-indexed (line, column) position to a byte offset.
    pub fn offset_at(&self, line: u32, column: u32) -> Option<usize> {
        let line = line.checked_sub(1)? as usize;
        let column = column.checked_sub(1)? as usize;

        let mut offset = 0usize;
        for (i, text_line) in self.text.split('\n').enumerate() {
            if i == line {
                if column > text_line.len() {
                    return None;
                }
                return Some(offset + column);
            }
            offset += text_line.len() + 1;
        }
        None
    }

    /// Splice a doc comment block immediately before the node starting at
    /// `function_start`, reindented to the node's column.
    ///
    /// The mutation is atomic: the new text is parsed and the spliced span
    /// verified to be a comment node before anything is swapped in. On any
    /// failure the document is left byte-identical to before.
    pub fn insert_doc_comment(&mut self, function_start: usize, comment: &str) -> Result<()> {
        if function_start > self.text.len() || !self.text.is_char_boundary(function_start) {
            return Err(Error::Insertion(format!(
                "offset {} is not a valid insertion point",
                function_start
            )));
        }

        let line_start = self.text[..function_start]
            .rfind('\n')
            .map(|i| i + 1)
            .unwrap_or(0);
        let prefix = &self.text[line_start..function_start];
        let indent = if prefix.chars().all(|c| c == ' ' || c == '\t') {
            prefix
        } else {
            ""
        };

        let mut block = String::new();
        for (i, line) in comment.lines().enumerate() {
            if i > 0 {
                block.push('\n');
                block.push_str(indent);
            }
            block.push_str(line);
        }
        block.push('\n');
        block.push_str(indent);

        let mut updated = String::with_capacity(self.text.len() + block.len());
        updated.push_str(&self.text[..function_start]);
        updated.push_str(&block);
        updated.push_str(&self.text[function_start..]);

        let tree = parse_source(self.language, &updated)?;

        // The spliced span must parse as a comment, otherwise the edit would
        // have corrupted the tree and must not land.
        let comment_end = function_start + comment.lines().next().map(str::len).unwrap_or(0);
        let spliced = tree
            .root_node()
            .descendant_for_byte_range(function_start, comment_end)
            .filter(|node| node.kind().contains("comment"));
        if spliced.is_none() {
            return Err(Error::Insertion(
                "spliced text did not parse as a comment node".to_string(),
            ));
        }

        self.text = updated;
        self.tree = tree;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JAVA_SOURCE: &str = r#"class Calculator {
    int add(int a, int b) {
        return a + b;
    }
}
"#;

    #[test]
    fn test_node_at_offset() {
        let doc = SourceDocument::parse(LanguageKind::Java, JAVA_SOURCE).unwrap();
        let offset = JAVA_SOURCE.find("return").unwrap();
        let node = doc.node_at(offset);
        assert!(node.byte_range().contains(&offset));
    }

    #[test]
    fn test_offset_at_line_column() {
        let doc = SourceDocument::parse(LanguageKind::Java, JAVA_SOURCE).unwrap();
        assert_eq!(doc.offset_at(1, 1), Some(0));

        let offset = doc.offset_at(2, 5).unwrap();
        assert_eq!(&doc.text()[offset..offset + 3], "int");

        assert_eq!(doc.offset_at(99, 1), None);
        assert_eq!(doc.offset_at(0, 1), None);
    }

    #[test]
    fn test_insert_doc_comment_atomic_success() {
        let mut doc = SourceDocument::parse(LanguageKind::Java, JAVA_SOURCE).unwrap();
        let function_start = JAVA_SOURCE.find("int add").unwrap();

        doc.insert_doc_comment(function_start, "/** Adds two numbers. */")
            .unwrap();

        // Everything around the insertion is unchanged
        assert!(doc.text().starts_with(&JAVA_SOURCE[..function_start]));
        assert!(doc.text().ends_with(&JAVA_SOURCE[function_start..]));
        assert!(doc.text().contains("/** Adds two numbers. */"));

        // The comment sits right before the method, at its indentation
        assert!(doc.text().contains("/** Adds two numbers. */\n    int add"));
    }

    #[test]
    fn test_insert_multiline_comment_reindents() {
        let mut doc = SourceDocument::parse(LanguageKind::Java, JAVA_SOURCE).unwrap();
        let function_start = JAVA_SOURCE.find("int add").unwrap();

        doc.insert_doc_comment(function_start, "/**\n* Adds.\n*/").unwrap();
        assert!(doc.text().contains("/**\n    * Adds.\n    */\n    int add"));
    }

    #[test]
    fn test_insert_invalid_offset_leaves_document_unchanged() {
        let mut doc = SourceDocument::parse(LanguageKind::Java, JAVA_SOURCE).unwrap();
        let before = doc.text().to_string();

        let result = doc.insert_doc_comment(JAVA_SOURCE.len() + 10, "/** nope */");
        assert!(result.is_err());
        assert_eq!(doc.text(), before);
    }

    #[test]
    fn test_retag_keeps_tree() {
        let doc = SourceDocument::parse(LanguageKind::Java, JAVA_SOURCE)
            .unwrap()
            .with_language(LanguageKind::Other);
        assert_eq!(doc.language(), LanguageKind::Other);
        assert!(doc.root().child_count() > 0);
    }
}
