use crate::core::{Report, Severity};
use colored::*;
use serde::{Deserialize, Serialize};
use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Auto,   // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmojiMode {
    Auto,   // Use emoji if terminal supports Unicode
    Always, // Always use emoji
    Never,  // Never use emoji
}

impl EmojiMode {
    pub fn should_use_emoji(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_emoji_support(),
        }
    }
}

/// How report text is decorated.
///
/// The library default keeps emoji and never colours, because hosts display
/// the returned strings verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormattingConfig {
    pub color: ColorMode,
    pub emoji: EmojiMode,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Never,
            emoji: EmojiMode::Always,
        }
    }
}

impl FormattingConfig {
    pub fn new(color: ColorMode, emoji: EmojiMode) -> Self {
        Self { color, emoji }
    }

    /// Start from `self` and apply the terminal colour conventions.
    pub fn with_env_overrides(mut self) -> Self {
        // Check NO_COLOR environment variable (per no-color.org standard)
        if env::var("NO_COLOR").is_ok() {
            self.color = ColorMode::Never;
        }

        if let Ok(val) = env::var("CLICOLOR") {
            if val == "0" {
                self.color = ColorMode::Never;
            }
        }

        if let Ok(val) = env::var("CLICOLOR_FORCE") {
            if val == "1" {
                self.color = ColorMode::Always;
            }
        }

        self
    }

    /// Create a plain output configuration (ASCII-only, no colors, no emoji)
    pub fn plain() -> Self {
        Self {
            color: ColorMode::Never,
            emoji: EmojiMode::Never,
        }
    }

    pub fn use_emoji(&self) -> bool {
        self.emoji.should_use_emoji()
    }
}

pub trait OutputFormatter {
    /// Decorate one rendered report line according to its severity.
    fn severity(&self, severity: Severity, text: &str) -> String;
    fn bold(&self, text: &str) -> String;

    /// Render a whole report, one decorated line per diagnostic.
    fn report(&self, report: &Report, use_emoji: bool) -> String {
        let mut lines: Vec<String> = report
            .lines
            .iter()
            .map(|d| self.severity(d.severity, &d.render(use_emoji)))
            .collect();
        if let Some(summary) = &report.summary {
            lines.push(self.bold(&summary.render(use_emoji)));
        }
        lines.join("\n")
    }
}

pub struct ColoredFormatter {
    config: FormattingConfig,
}

impl ColoredFormatter {
    pub fn new(config: FormattingConfig) -> Self {
        // Set colored control based on configuration
        colored::control::set_override(config.color.should_use_color());
        Self { config }
    }
}

impl OutputFormatter for ColoredFormatter {
    fn severity(&self, severity: Severity, text: &str) -> String {
        if !self.config.color.should_use_color() {
            return text.to_string();
        }
        match severity {
            Severity::Warning => text.yellow().to_string(),
            Severity::Fixme => text.red().to_string(),
            Severity::Todo => text.cyan().to_string(),
            Severity::Suggestion => text.green().to_string(),
            Severity::Info => text.to_string(),
        }
    }

    fn bold(&self, text: &str) -> String {
        if self.config.color.should_use_color() {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }
}

/// Leaves every line undecorated. Used for `--plain` output.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn severity(&self, _severity: Severity, text: &str) -> String {
        text.to_string()
    }

    fn bold(&self, text: &str) -> String {
        text.to_string()
    }
}

fn detect_color_support() -> bool {
    // Check if we're in a dumb terminal
    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    std::io::stdout().is_terminal()
}

fn detect_emoji_support() -> bool {
    // Same detection as colour; locale sniffing is not worth it
    detect_color_support()
}
