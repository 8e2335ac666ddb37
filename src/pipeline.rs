//! Doc synthesis pipeline
//!
//! One user-triggered invocation runs: locate the enclosing function,
//! extract what the generator needs, produce comment text (stub or
//! completion-backed), build the language comment block, and insert it
//! atomically. The pipeline owns the document exclusively for the duration
//! of the run and takes no lock.

use crate::adapter::{LanguageKind, adapter_for};
use crate::completion::{self, CompletionClient};
use crate::document::SourceDocument;
use crate::{Error, Result, locate, stub};

/// Generation strategy for one invocation.
///
/// Closed set: either the deterministic stub generator or a
/// completion-backed run against an injected client.
pub enum DocPipeline<'c> {
    /// Deterministic, network-free synthesis from the structural signature
    Stub,
    /// Completion-backed synthesis over the function's literal source text
    Completion {
        client: &'c dyn CompletionClient,
        model: String,
    },
}

/// What one pipeline run did to the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocOutcome {
    /// The comment was built and spliced in front of the function
    Inserted { comment: String },
    /// No enclosing function at the cursor; nothing was touched
    NoFunction,
    /// Unsupported language; nothing was touched
    Unsupported,
}

/// Availability predicate for the host: whether invoking the pipeline at
/// `offset` could produce a comment. Equivalent to "the locator would
/// return Some" for the document's language tag.
pub fn is_available(document: &SourceDocument, offset: usize) -> bool {
    locate::is_available(document.node_at(offset), document.language())
}

impl<'c> DocPipeline<'c> {
    /// Stub-generation pipeline
    pub fn stub() -> Self {
        DocPipeline::Stub
    }

    /// Completion-backed pipeline over `client`
    pub fn completion(client: &'c dyn CompletionClient, model: impl Into<String>) -> Self {
        DocPipeline::Completion {
            client,
            model: model.into(),
        }
    }

    /// Run the pipeline for the function nearest `offset`.
    ///
    /// Any fatal condition aborts without modifying the document; no partial
    /// comment is ever left behind.
    pub fn document_at(&self, document: &mut SourceDocument, offset: usize) -> Result<DocOutcome> {
        let language = document.language();
        if language == LanguageKind::Other {
            tracing::debug!("Unsupported language tag; skipping");
            return Ok(DocOutcome::Unsupported);
        }
        let adapter = adapter_for(language);

        // Everything needed after this block is owned, so the node borrow on
        // the document ends before the mutation below.
        let located = {
            let start = document.node_at(offset);
            locate::nearest_function(start, language).map(|node| {
                let source = document.text();
                let function_text = node.utf8_text(source.as_bytes()).unwrap_or("").to_string();
                (node.start_byte(), function_text, adapter.signature_of(node, source))
            })
        };
        let Some((function_start, function_text, signature)) = located else {
            tracing::debug!("No enclosing function at offset {}", offset);
            return Ok(DocOutcome::NoFunction);
        };

        let comment_text = match self {
            DocPipeline::Stub => {
                // The locator only returns nodes the adapter recognizes, so a
                // missing signature is an invariant violation, not a miss.
                let signature = signature.ok_or_else(|| {
                    Error::Adapter("located function node yielded no signature".to_string())
                })?;
                tracing::debug!("Generating stub doc for {}", signature);
                stub::render(&signature)
            }
            DocPipeline::Completion { client, model } => {
                let request = completion::build_request(&function_text, language, model);
                let response = client.complete(&request)?;
                let raw = response.first_text().ok_or_else(|| {
                    Error::Completion("response contained no choices".to_string())
                })?;
                completion::extract_comment(raw)
            }
        };

        let Some(comment) = adapter.build_comment(&comment_text) else {
            return Ok(DocOutcome::Unsupported);
        };

        document.insert_doc_comment(function_start, &comment)?;
        tracing::info!("Inserted doc comment at byte {}", function_start);
        Ok(DocOutcome::Inserted { comment })
    }
}
