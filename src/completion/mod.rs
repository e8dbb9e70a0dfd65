//! Prefix completion over catalog templates, reserved words and built-ins.

use crate::catalog::{RuleCatalog, SymbolRegistry};
use crate::config::MAX_COMPLETIONS;
use crate::core::CompletionEntry;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use std::sync::Arc;

static TRAILING_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\w+)$").unwrap());

/// The run of word characters immediately before the cursor, if any.
pub fn prefix_at(line_before_cursor: &str) -> Option<&str> {
    TRAILING_WORD
        .captures(line_before_cursor)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Ranked prefix lookup.
///
/// Candidates come from catalog templates (declaration order), then
/// reserved words, then built-in names; keys never repeat and the list is
/// cut at the configured limit, itself capped at [`MAX_COMPLETIONS`].
#[derive(Debug, Clone)]
pub struct CompletionIndex {
    catalog: Arc<RuleCatalog>,
    registry: SymbolRegistry,
    limit: usize,
}

impl CompletionIndex {
    pub fn new(catalog: Arc<RuleCatalog>, registry: SymbolRegistry) -> Self {
        Self {
            catalog,
            registry,
            limit: MAX_COMPLETIONS,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit.min(MAX_COMPLETIONS);
        self
    }

    pub fn complete(&self, prefix: &str) -> Vec<CompletionEntry> {
        let prefix = prefix.trim().to_lowercase();
        let mut seen: HashSet<String> = HashSet::new();
        let mut entries = Vec::new();

        let templates = self
            .catalog
            .templates()
            .iter()
            .filter(|t| t.key.starts_with(&prefix))
            .map(|t| CompletionEntry::new(t.key, t.template));
        let keywords = self
            .registry
            .keywords()
            .iter()
            .filter(|k| k.starts_with(&prefix))
            .map(|k| CompletionEntry::new(k.as_str(), k.as_str()));
        let builtins = self
            .registry
            .builtins()
            .iter()
            .filter(|b| b.starts_with(&prefix))
            .map(|b| CompletionEntry::new(b.as_str(), format!("{b}()")));

        for entry in templates.chain(keywords).chain(builtins) {
            if entries.len() == self.limit {
                break;
            }
            if seen.insert(entry.key.clone()) {
                entries.push(entry);
            }
        }

        tracing::trace!(prefix = %prefix, candidates = entries.len(), "completion");
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> CompletionIndex {
        CompletionIndex::new(RuleCatalog::builtin(), SymbolRegistry::python())
    }

    fn keys(entries: &[CompletionEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.key.as_str()).collect()
    }

    #[test]
    fn test_class_template_comes_first() {
        let entries = index().complete("cla");
        assert_eq!(keys(&entries), vec!["class", "classmethod"]);
        assert!(entries[0].template.starts_with("class ClassName:"));
    }

    #[test]
    fn test_keywords_follow_templates_without_duplicates() {
        let entries = index().complete("wh");
        assert_eq!(keys(&entries), vec!["while"]);
    }

    #[test]
    fn test_builtins_get_call_syntax() {
        let entries = index().complete("enu");
        assert_eq!(entries, vec![CompletionEntry::new("enumerate", "enumerate()")]);
    }

    #[test]
    fn test_prefix_is_case_folded_and_trimmed() {
        let entries = index().complete("  RAN ");
        assert_eq!(keys(&entries), vec!["range"]);
    }

    #[test]
    fn test_empty_prefix_is_capped() {
        let entries = index().complete("");
        assert_eq!(entries.len(), MAX_COMPLETIONS);
        assert_eq!(entries[0].key, "def");
    }

    #[test]
    fn test_with_limit_never_exceeds_cap() {
        assert_eq!(index().with_limit(3).complete("").len(), 3);
        assert_eq!(index().with_limit(99).complete("").len(), MAX_COMPLETIONS);
    }

    #[test]
    fn test_unknown_prefix_is_empty() {
        assert!(index().complete("zzzz").is_empty());
    }

    #[test]
    fn test_prefix_at_cursor() {
        assert_eq!(prefix_at("    result = enum"), Some("enum"));
        assert_eq!(prefix_at("print("), None);
        assert_eq!(prefix_at(""), None);
    }
}
