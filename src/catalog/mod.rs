//! Immutable rule tables shared by every analyzer.
//!
//! A [`RuleCatalog`] is built once (the built-in tables are compiled on first
//! use of [`RuleCatalog::builtin`]) and only ever read afterwards, so one
//! catalog can serve any number of concurrent callers.

pub mod constructs;
pub mod defects;
pub mod intents;
pub mod registry;
pub mod rules;
pub mod templates;

pub use registry::SymbolRegistry;
pub use rules::{
    CompletionTemplate, ConstructKind, ConstructRule, IntentRule, PatternRule, TriggerMatch,
};

use crate::core::Result;
use once_cell::sync::Lazy;
use std::sync::Arc;

static BUILTIN: Lazy<Arc<RuleCatalog>> = Lazy::new(|| {
    Arc::new(RuleCatalog::compile(&[]).expect("built-in defect patterns are valid regexes"))
});

#[derive(Debug, Clone)]
pub struct RuleCatalog {
    constructs: &'static [ConstructRule],
    defects: Vec<PatternRule>,
    templates: &'static [CompletionTemplate],
    intents: &'static [IntentRule],
    fallback_answer: &'static str,
}

impl RuleCatalog {
    /// The shared catalog built from the built-in tables.
    pub fn builtin() -> Arc<RuleCatalog> {
        Arc::clone(&BUILTIN)
    }

    /// Build a catalog whose defect table is the built-in one followed by
    /// `extra` `(pattern, message)` rules.
    pub fn with_extra_defects<'a, I>(extra: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let extra: Vec<_> = extra.into_iter().collect();
        Self::compile(&extra)
    }

    fn compile(extra: &[(&str, &str)]) -> Result<Self> {
        let mut defects = Vec::with_capacity(defects::DEFECT_PATTERNS.len() + extra.len());
        for &(pattern, message) in defects::DEFECT_PATTERNS {
            defects.push(PatternRule::new(pattern, message)?);
        }
        for &(pattern, message) in extra {
            defects.push(PatternRule::new(pattern, message)?);
        }

        Ok(Self {
            constructs: constructs::CONSTRUCTS,
            defects,
            templates: templates::COMPLETION_TEMPLATES,
            intents: intents::INTENTS,
            fallback_answer: intents::FALLBACK_ANSWER,
        })
    }

    pub fn constructs(&self) -> &[ConstructRule] {
        self.constructs
    }

    pub fn defects(&self) -> &[PatternRule] {
        &self.defects
    }

    pub fn templates(&self) -> &[CompletionTemplate] {
        self.templates
    }

    pub fn intents(&self) -> &[IntentRule] {
        self.intents
    }

    pub fn fallback_answer(&self) -> &str {
        self.fallback_answer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Error;

    #[test]
    fn test_builtin_catalog_is_shared() {
        let a = RuleCatalog::builtin();
        let b = RuleCatalog::builtin();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a.defects().len(), defects::DEFECT_PATTERNS.len());
    }

    #[test]
    fn test_extra_defects_are_appended() {
        let catalog =
            RuleCatalog::with_extra_defects([(r"eval\(", "Avoid eval() on untrusted input")])
                .unwrap();
        let last = catalog.defects().last().unwrap();
        assert_eq!(last.message(), "Avoid eval() on untrusted input");
        assert_eq!(catalog.defects().len(), defects::DEFECT_PATTERNS.len() + 1);
    }

    #[test]
    fn test_invalid_extra_defect_is_rejected() {
        let err = RuleCatalog::with_extra_defects([("(unclosed", "bad")]).unwrap_err();
        assert!(matches!(err, Error::Pattern { ref pattern, .. } if pattern == "(unclosed"));
    }
}
