//! Common type definitions used across the codebase

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity levels for findings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Suggestion,
    Todo,
    Fixme,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Suggestion => "suggestion",
            Severity::Todo => "todo",
            Severity::Fixme => "fixme",
        };
        write!(f, "{name}")
    }
}

/// Pictogram printed in front of a report line.
///
/// Every marker has an emoji and an ASCII fallback; the fallback is used
/// when emoji output is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Marker {
    Warning,
    Idea,
    Note,
    Docstring,
    Fix,
    Ok,
    Stats,
    Length,
    Nesting,
    Numbers,
    Duplicate,
    Sparkle,
    Robot,
    Thinking,
}

impl Marker {
    pub fn emoji(&self) -> &'static str {
        match self {
            Marker::Warning => "⚠️",
            Marker::Idea => "💡",
            Marker::Note | Marker::Docstring => "📝",
            Marker::Fix => "🔧",
            Marker::Ok => "✅",
            Marker::Stats => "📊",
            Marker::Length => "📏",
            Marker::Nesting => "🔄",
            Marker::Numbers => "🔢",
            Marker::Duplicate => "📋",
            Marker::Sparkle => "✨",
            Marker::Robot => "🤖",
            Marker::Thinking => "🤔",
        }
    }

    pub fn fallback(&self) -> &'static str {
        match self {
            Marker::Warning => "[WARN]",
            Marker::Idea => "[IDEA]",
            Marker::Note => "[TODO]",
            Marker::Docstring => "[DOC]",
            Marker::Fix => "[FIX]",
            Marker::Ok => "[OK]",
            Marker::Stats => "[STATS]",
            Marker::Length => "[LENGTH]",
            Marker::Nesting => "[NESTING]",
            Marker::Numbers => "[NUMBERS]",
            Marker::Duplicate => "[DUPLICATE]",
            Marker::Sparkle => "[CLEAN]",
            Marker::Robot => "[BOT]",
            Marker::Thinking => "[HMM]",
        }
    }

    pub fn render(&self, use_emoji: bool) -> &'static str {
        if use_emoji {
            self.emoji()
        } else {
            self.fallback()
        }
    }
}

/// One reported finding.
///
/// `line` is 1-based and relative to the text handed to the analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub line: Option<usize>,
    pub severity: Severity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
    pub text: String,
}

impl Diagnostic {
    pub fn new(severity: Severity, text: impl Into<String>) -> Self {
        Self {
            line: None,
            severity,
            marker: None,
            text: text.into(),
        }
    }

    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = Some(marker);
        self
    }

    pub fn render(&self, use_emoji: bool) -> String {
        let body = match self.line {
            Some(line) => format!("Line {line}: {}", self.text),
            None => self.text.clone(),
        };
        match self.marker {
            Some(marker) => format!("{} {body}", marker.render(use_emoji)),
            None => body,
        }
    }
}

/// Ordered findings plus an optional trailing summary line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub lines: Vec<Diagnostic>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<Diagnostic>,
}

impl Report {
    pub fn new(lines: Vec<Diagnostic>) -> Self {
        Self {
            lines,
            summary: None,
        }
    }

    pub fn with_summary(mut self, summary: Diagnostic) -> Self {
        self.summary = Some(summary);
        self
    }

    /// All lines, summary last.
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.lines.iter().chain(self.summary.iter())
    }

    pub fn render(&self, use_emoji: bool) -> String {
        self.diagnostics()
            .map(|diagnostic| diagnostic.render(use_emoji))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A completion candidate: the key matched against the prefix and the text
/// the host inserts in place of the prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionEntry {
    pub key: String,
    pub template: String,
}

impl CompletionEntry {
    pub fn new(key: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            template: template.into(),
        }
    }
}
