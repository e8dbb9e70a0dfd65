use crate::core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Hard ceiling on completion results, whatever the configuration says.
pub const MAX_COMPLETIONS: usize = 15;

/// Refactor-advisor thresholds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdsConfig {
    /// Header-to-header span at which a function is reported as too long
    #[serde(default = "default_max_function_lines")]
    pub max_function_lines: usize,

    /// Leading-whitespace width above which nesting is reported as deep
    #[serde(default = "default_max_indent_width")]
    pub max_indent_width: usize,

    /// Trimmed lines must be longer than this to count towards duplication
    #[serde(default = "default_duplicate_min_length")]
    pub duplicate_min_length: usize,

    /// How many distinct magic numbers are quoted in the suggestion
    #[serde(default = "default_magic_number_preview")]
    pub magic_number_preview: usize,
}

impl Default for ThresholdsConfig {
    fn default() -> Self {
        Self {
            max_function_lines: default_max_function_lines(),
            max_indent_width: default_max_indent_width(),
            duplicate_min_length: default_duplicate_min_length(),
            magic_number_preview: default_magic_number_preview(),
        }
    }
}

impl ThresholdsConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_function_lines == 0 {
            return Err(Error::Config(
                "thresholds.max_function_lines must be at least 1".to_string(),
            ));
        }
        if self.magic_number_preview == 0 {
            return Err(Error::Config(
                "thresholds.magic_number_preview must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_max_function_lines() -> usize {
    30
}

fn default_max_indent_width() -> usize {
    16
}

fn default_duplicate_min_length() -> usize {
    20
}

fn default_magic_number_preview() -> usize {
    3
}

/// Completion settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionConfig {
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
        }
    }
}

impl CompletionConfig {
    /// Configured limit clamped to [`MAX_COMPLETIONS`].
    pub fn effective_limit(&self) -> usize {
        self.max_results.min(MAX_COMPLETIONS)
    }
}

fn default_max_results() -> usize {
    MAX_COMPLETIONS
}
