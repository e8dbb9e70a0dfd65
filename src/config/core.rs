use serde::{Deserialize, Serialize};

use super::thresholds::{CompletionConfig, ThresholdsConfig};
use crate::core::Result;
use crate::formatting::{ColorMode, EmojiMode};

/// Root configuration structure, read from `.codecat.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CodecatConfig {
    /// Refactor-advisor thresholds
    #[serde(default)]
    pub thresholds: Option<ThresholdsConfig>,

    /// Completion settings
    #[serde(default)]
    pub completion: Option<CompletionConfig>,

    /// Issue-detector settings
    #[serde(default)]
    pub issues: Option<IssuesConfig>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

impl CodecatConfig {
    pub fn thresholds(&self) -> ThresholdsConfig {
        self.thresholds.clone().unwrap_or_default()
    }

    pub fn completion(&self) -> CompletionConfig {
        self.completion.clone().unwrap_or_default()
    }

    pub fn issues(&self) -> IssuesConfig {
        self.issues.clone().unwrap_or_default()
    }

    pub fn output(&self) -> OutputConfig {
        self.output.clone().unwrap_or_default()
    }

    pub fn validate(&self) -> Result<()> {
        self.thresholds().validate()
    }
}

/// Issue-detector configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuesConfig {
    /// Flag every indented, non-comment line as mixed indentation. When
    /// false only leading whitespace that mixes tabs and spaces (or uses
    /// other whitespace characters) is flagged.
    #[serde(default = "default_flag_all_indented_lines")]
    pub flag_all_indented_lines: bool,

    /// Project-specific defect patterns, appended after the built-in ones
    #[serde(default)]
    pub extra_rules: Vec<CustomRule>,
}

impl Default for IssuesConfig {
    fn default() -> Self {
        Self {
            flag_all_indented_lines: default_flag_all_indented_lines(),
            extra_rules: Vec::new(),
        }
    }
}

fn default_flag_all_indented_lines() -> bool {
    true
}

/// A user-declared defect pattern
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomRule {
    pub pattern: String,
    pub message: String,
}

/// Output configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_emoji")]
    pub emoji: EmojiMode,

    #[serde(default = "default_color")]
    pub color: ColorMode,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            emoji: default_emoji(),
            color: default_color(),
        }
    }
}

fn default_emoji() -> EmojiMode {
    EmojiMode::Always
}

fn default_color() -> ColorMode {
    ColorMode::Auto
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_sections_fall_back_to_defaults() {
        let config = CodecatConfig::default();
        assert_eq!(config.thresholds(), ThresholdsConfig::default());
        assert!(config.issues().flag_all_indented_lines);
        assert_eq!(config.output().emoji, EmojiMode::Always);
    }

    #[test]
    fn test_parse_partial_config() {
        let config: CodecatConfig = toml::from_str(
            r#"
            [thresholds]
            max_function_lines = 50

            [output]
            emoji = "never"
            "#,
        )
        .unwrap();

        let thresholds = config.thresholds();
        assert_eq!(thresholds.max_function_lines, 50);
        assert_eq!(thresholds.max_indent_width, 16);
        assert_eq!(config.output().emoji, EmojiMode::Never);
        assert_eq!(config.output().color, ColorMode::Auto);
    }

    #[test]
    fn test_parse_extra_rules() {
        let config: CodecatConfig = toml::from_str(
            r#"
            [issues]
            flag_all_indented_lines = false

            [[issues.extra_rules]]
            pattern = 'eval\('
            message = "Avoid eval()"
            "#,
        )
        .unwrap();

        let issues = config.issues();
        assert!(!issues.flag_all_indented_lines);
        assert_eq!(issues.extra_rules.len(), 1);
        assert_eq!(issues.extra_rules[0].message, "Avoid eval()");
    }
}
