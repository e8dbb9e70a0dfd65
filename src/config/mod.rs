//! `.codecat.toml` configuration

mod core;
mod loader;
mod thresholds;

pub use self::core::{CodecatConfig, CustomRule, IssuesConfig, OutputConfig};
pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from,
    parse_and_validate_config, CONFIG_FILE_NAME,
};
pub use thresholds::{CompletionConfig, ThresholdsConfig, MAX_COMPLETIONS};
