//! Completion-backed generation
//!
//! Builds the text-completion request for a function's source text, sends it
//! through a [`CompletionClient`], and extracts a doc comment block from the
//! raw response. No retries and no prompt truncation: a prompt near token
//! limits surfaces as a client error from the service.

pub mod client;
pub mod extract;

pub use client::{CompletionClient, DEFAULT_BASE_URL, OpenAiClient};
pub use extract::{NO_COMMENT, extract_comment};

use crate::adapter::LanguageKind;
use serde::{Deserialize, Serialize};

/// Model requested when no other is configured
pub const DEFAULT_MODEL: &str = "code-cushman-001";

/// One immutable completion request, built once per invocation.
#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub prompt: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub top_p: f32,
    pub frequency_penalty: f32,
    pub presence_penalty: f32,
}

/// Completion service response; only the first choice is consumed.
#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    pub choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
pub struct CompletionChoice {
    pub text: String,
}

impl CompletionResponse {
    /// Text of the first choice, if any
    pub fn first_text(&self) -> Option<&str> {
        self.choices.first().map(|choice| choice.text.as_str())
    }
}

/// Build the completion request for a function's source text.
///
/// The prompt names the documentation dialect for the language and embeds
/// the function verbatim in a fenced code block. Sampling parameters are
/// fixed.
pub fn build_request(function_text: &str, language: LanguageKind, model: &str) -> CompletionRequest {
    let prompt = format!(
        "Return only the {dialect} for the function below that has been written in {language}\n\
         ```{language}\n\
         {function_text}\n\
         ```",
        dialect = language.dialect(),
        language = language.as_str(),
        function_text = function_text,
    );

    CompletionRequest {
        model: model.to_string(),
        prompt,
        temperature: 0.7,
        max_tokens: 256,
        top_p: 1.0,
        frequency_penalty: 0.0,
        presence_penalty: 0.0,
    }
}
