// Export modules for library usage
pub mod analyzers;
pub mod catalog;
pub mod chat;
pub mod cli;
pub mod common;
pub mod completion;
pub mod config;
pub mod core;
pub mod engine;
pub mod formatting;
pub mod observability;

// Re-export commonly used types
pub use crate::core::{
    CompletionEntry, Diagnostic, Error, Language, Marker, Report, Result, Severity,
};

pub use crate::analyzers::{
    Analyzer, IndentationCheck, IssueDetector, LineClassifier, RefactorAdvisor,
};

pub use crate::catalog::{RuleCatalog, SymbolRegistry};

pub use crate::completion::{prefix_at, CompletionIndex};

pub use crate::config::{load_config, load_config_from, CodecatConfig};

pub use crate::engine::{Action, CodeAssistant};

pub use crate::formatting::{ColorMode, EmojiMode, FormattingConfig};

use once_cell::sync::Lazy;

static DEFAULT_ASSISTANT: Lazy<CodeAssistant> = Lazy::new(CodeAssistant::new);

/// Narrate `text` line by line using the built-in tables.
pub fn explain(text: &str) -> String {
    DEFAULT_ASSISTANT.explain(text)
}

/// Probable defects in `text`, or a single "no issues" line.
pub fn find_issues(text: &str) -> String {
    DEFAULT_ASSISTANT.find_issues(text)
}

/// Documentation skeleton for the header at the start of `header_or_selection`.
pub fn synthesize_docstring(header_or_selection: &str) -> String {
    DEFAULT_ASSISTANT.synthesize_docstring(header_or_selection)
}

/// Structural refactor hints for `text`, or a single "well-structured" line.
pub fn suggest_refactors(text: &str) -> String {
    DEFAULT_ASSISTANT.suggest_refactors(text)
}

/// At most 15 completion candidates for `prefix`.
pub fn complete(prefix: &str) -> Vec<CompletionEntry> {
    DEFAULT_ASSISTANT.complete(prefix)
}

/// Canned answer for a free-form question.
pub fn chat(message: &str) -> String {
    DEFAULT_ASSISTANT.chat(message)
}
