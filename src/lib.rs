//! # Docsmith - AST-native documentation comment synthesis
//!
//! Docsmith locates the function definition nearest a cursor position inside
//! a source file's syntax tree and writes a structured documentation comment
//! for it.
//!
//! Docsmith provides:
//! - Tree-sitter based parsing with pluggable language adapters (Java, Kotlin)
//! - Ancestor-chain function location from any starting node
//! - A deterministic stub generator driven by the function's signature
//! - A completion-backed generator that extracts a doc block from
//!   text-completion output
//! - Atomic comment insertion - the tree is either fully updated or untouched

pub mod adapter;
pub mod completion;
pub mod config;
pub mod document;
pub mod locate;
pub mod pipeline;
pub mod signature;
pub mod stub;

// Re-exports for convenient access
pub use adapter::{LanguageAdapter, LanguageKind, adapter_for};
pub use config::DocConfig;
pub use document::SourceDocument;
pub use pipeline::{DocOutcome, DocPipeline};
pub use signature::{FunctionSignature, Parameter};

/// Result type alias for Docsmith operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Docsmith operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Adapter error: {0}")]
    Adapter(String),

    #[error("Missing completion credential (set OPENAI_API_KEY)")]
    MissingCredential,

    #[error("Completion error: {0}")]
    Completion(String),

    #[error("Insertion error: {0}")]
    Insertion(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
