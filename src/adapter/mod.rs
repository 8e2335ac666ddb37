//! Language Adapter Framework
//!
//! Each supported language provides a Tree-sitter grammar and a capability
//! set: recognize function nodes, extract signatures, build comment blocks.
//! The core pipeline never sees language-specific logic.
//!
//! Unrecognized languages map to a no-op adapter whose every capability
//! reports "unsupported".

pub mod framework;
pub mod java;
pub mod kotlin;

pub use framework::{LanguageAdapter, LanguageKind, adapter_for};
pub use java::JavaAdapter;
pub use kotlin::KotlinAdapter;
