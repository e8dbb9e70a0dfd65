use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "codecat")]
#[command(about = "Offline heuristic code assistant for Python sources", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Configuration file (defaults to the nearest .codecat.toml)
    #[arg(short, long, global = true, env = "CODECAT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Plain output (ASCII markers, no colours)
    #[arg(long, global = true)]
    pub plain: bool,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Describe each line of the code
    Explain {
        /// Source file (reads stdin when omitted)
        file: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,
    },

    /// Look for probable bugs
    Debug {
        /// Source file (reads stdin when omitted)
        file: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,
    },

    /// Suggest refactors
    Refactor {
        /// Source file (reads stdin when omitted)
        file: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,
    },

    /// Generate a docstring skeleton
    Docstring {
        /// Source file (reads stdin when omitted)
        file: Option<PathBuf>,

        /// 1-based line of the function or class header
        #[arg(short, long, conflicts_with = "module")]
        line: Option<usize>,

        /// Generate a module-level docstring instead
        #[arg(long)]
        module: bool,

        /// Author recorded in a module docstring
        #[arg(long, default_value = "Unknown")]
        author: String,

        /// Description recorded in a module docstring
        #[arg(long, default_value = "Module description.")]
        description: String,
    },

    /// Complete a prefix
    Complete {
        /// Prefix to complete
        #[arg(required_unless_present = "line_text")]
        prefix: Option<String>,

        /// Text of the line up to the cursor; the trailing word is completed
        #[arg(long = "line-text", conflicts_with = "prefix")]
        line_text: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,
    },

    /// Ask a coding question
    Chat {
        /// The question
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Terminal,
}
