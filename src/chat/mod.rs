//! Canned answers for free-form questions, chosen by keyword intent.

use crate::catalog::RuleCatalog;
use crate::core::{Diagnostic, Marker, Severity};

/// Answer `message` with the first intent whose triggers match, or the
/// fallback answer when none does.
pub fn chat(catalog: &RuleCatalog, message: &str) -> Diagnostic {
    let lowered = message.to_lowercase();

    match catalog.intents().iter().find(|intent| intent.matches(&lowered)) {
        Some(intent) => {
            tracing::debug!(intent = intent.name, "chat intent matched");
            let answer = Diagnostic::new(Severity::Info, intent.answer);
            match intent.marker {
                Some(marker) => answer.with_marker(marker),
                None => answer,
            }
        }
        None => {
            tracing::debug!("no chat intent matched");
            Diagnostic::new(Severity::Info, catalog.fallback_answer()).with_marker(Marker::Thinking)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ask(message: &str) -> String {
        chat(&RuleCatalog::builtin(), message).render(true)
    }

    #[test]
    fn test_greeting() {
        assert_eq!(
            ask("Hello there"),
            "Hey! 🐱 I'm your local AI assistant. Ask me about code!"
        );
    }

    #[test]
    fn test_greeting_needs_whole_word() {
        assert!(ask("what is this").starts_with("🤔 "));
    }

    #[test]
    fn test_help_lists_capabilities() {
        let answer = ask("HELP me");
        assert!(answer.starts_with("🤖 I can help with:"));
    }

    #[test]
    fn test_list_creation_requires_qualifier() {
        assert!(ask("how do I create a list?").starts_with("Create a list:"));
        assert!(ask("what is a list").starts_with("🤔 "));
    }

    #[test]
    fn test_earlier_intent_wins() {
        // both "list" and "loop" intents match; list-creation is declared first
        assert!(ask("make a list in a loop").starts_with("Create a list:"));
    }

    #[test]
    fn test_file_io_and_error_handling() {
        assert!(ask("how to read a file").starts_with("File operations:"));
        assert!(ask("catch an Exception").starts_with("Exception handling:"));
    }

    #[test]
    fn test_empty_message_falls_back() {
        let answer = chat(&RuleCatalog::builtin(), "");
        assert_eq!(answer.marker, Some(Marker::Thinking));
        assert!(answer.text.starts_with("I'm a local assistant"));
    }
}
