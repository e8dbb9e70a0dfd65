use crate::core::{Error, Marker, Result};
use regex::Regex;

/// A compiled defect pattern paired with the warning it produces.
///
/// Keeping pattern and message in one record means the table can never drift
/// out of step with itself.
#[derive(Debug, Clone)]
pub struct PatternRule {
    pattern: Regex,
    message: String,
}

impl PatternRule {
    pub fn new(pattern: &str, message: impl Into<String>) -> Result<Self> {
        let compiled = Regex::new(pattern).map_err(|e| Error::pattern(pattern, e))?;
        Ok(Self {
            pattern: compiled,
            message: message.into(),
        })
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Whether a construct names something the explain report should quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructKind {
    /// `def`/`class` headers: the defined name is extracted and quoted.
    Definition,
    Statement,
}

/// A literal line prefix mapped to a description of the statement it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstructRule {
    pub prefix: &'static str,
    pub description: &'static str,
    pub kind: ConstructKind,
}

impl ConstructRule {
    pub const fn statement(prefix: &'static str, description: &'static str) -> Self {
        Self {
            prefix,
            description,
            kind: ConstructKind::Statement,
        }
    }

    pub const fn definition(prefix: &'static str, description: &'static str) -> Self {
        Self {
            prefix,
            description,
            kind: ConstructKind::Definition,
        }
    }

    pub fn matches(&self, trimmed_line: &str) -> bool {
        trimmed_line.starts_with(self.prefix)
    }
}

/// A completion keyword and the snippet inserted for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionTemplate {
    pub key: &'static str,
    pub template: &'static str,
}

/// How an intent's trigger words are tested against a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerMatch {
    /// Trigger must appear as a whole word.
    Word,
    /// Trigger may appear anywhere, including inside longer words.
    Substring,
}

/// A chat intent: fires when any trigger matches and, if qualifiers are
/// listed, at least one qualifier also appears in the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntentRule {
    pub name: &'static str,
    pub triggers: &'static [&'static str],
    pub qualifiers: &'static [&'static str],
    pub trigger_match: TriggerMatch,
    pub marker: Option<Marker>,
    pub answer: &'static str,
}

impl IntentRule {
    /// `message` must already be lower-cased.
    pub fn matches(&self, message: &str) -> bool {
        let triggered = match self.trigger_match {
            TriggerMatch::Substring => self.triggers.iter().any(|t| message.contains(t)),
            TriggerMatch::Word => message
                .split(|c: char| !c.is_alphanumeric())
                .any(|word| self.triggers.contains(&word)),
        };
        triggered
            && (self.qualifiers.is_empty() || self.qualifiers.iter().any(|q| message.contains(q)))
    }
}
