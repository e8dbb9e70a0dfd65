use anyhow::{Context, Result};
use clap::Parser;
use codecat::cli::{Cli, Commands, OutputFormat};
use codecat::config::{load_config, load_config_from, CodecatConfig};
use codecat::formatting::{ColoredFormatter, FormattingConfig, OutputFormatter, PlainFormatter};
use codecat::{CodeAssistant, CompletionEntry, Language, Report};
use std::io::Read;
use std::path::Path;

// Main orchestrator function
fn main() -> Result<()> {
    let cli = Cli::parse();
    codecat::observability::init_tracing(cli.verbosity);

    let config = resolve_config(cli.config.as_deref())?;
    let formatting = create_formatting_config(cli.plain, &config);
    let assistant = CodeAssistant::from_config(&config)
        .context("failed to build code assistant from configuration")?
        .with_formatting(formatting);
    let formatter = create_formatter(cli.plain, formatting);
    let formatter = formatter.as_ref();

    match cli.command {
        Commands::Explain { file, format } => {
            let source = read_source(file.as_deref())?;
            print_report(&assistant.explain_report(&source), format, formatter, formatting)
        }
        Commands::Debug { file, format } => {
            let source = read_source(file.as_deref())?;
            print_report(
                &assistant.find_issues_report(&source),
                format,
                formatter,
                formatting,
            )
        }
        Commands::Refactor { file, format } => {
            let source = read_source(file.as_deref())?;
            print_report(
                &assistant.suggest_refactors_report(&source),
                format,
                formatter,
                formatting,
            )
        }
        Commands::Docstring {
            file,
            line,
            module,
            author,
            description,
        } => {
            if module {
                let date = chrono::Local::now().format("%Y-%m-%d").to_string();
                println!("{}", assistant.module_docstring(&description, &author, &date));
                return Ok(());
            }
            let source = read_source(file.as_deref())?;
            let selection = match line {
                Some(line) => header_block(&source, line)
                    .with_context(|| format!("line {line} is outside the input"))?,
                None => source,
            };
            println!("{}", assistant.synthesize_docstring(&selection));
            Ok(())
        }
        Commands::Complete {
            prefix,
            line_text,
            format,
        } => {
            let entries = match (prefix, line_text) {
                (Some(prefix), _) => assistant.complete(&prefix),
                (None, Some(line_text)) => assistant.complete_at(&line_text),
                (None, None) => Vec::new(),
            };
            print_completions(&entries, format)
        }
        Commands::Chat { message } => {
            println!("{}", assistant.chat(&message.join(" ")));
            Ok(())
        }
    }
}

fn resolve_config(explicit: Option<&Path>) -> Result<CodecatConfig> {
    match explicit {
        Some(path) => load_config_from(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(load_config()),
    }
}

// Pure function to create formatting configuration
fn create_formatting_config(plain: bool, config: &CodecatConfig) -> FormattingConfig {
    if plain {
        FormattingConfig::plain()
    } else {
        let output = config.output();
        FormattingConfig::new(output.color, output.emoji).with_env_overrides()
    }
}

fn create_formatter(plain: bool, formatting: FormattingConfig) -> Box<dyn OutputFormatter> {
    if plain {
        Box::new(PlainFormatter)
    } else {
        Box::new(ColoredFormatter::new(formatting))
    }
}

fn read_source(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => {
            let language = Language::from_path(path);
            if !language.is_python() {
                tracing::warn!(
                    path = %path.display(),
                    language = language.display_name(),
                    "rules target Python; results for this file may be noisy"
                );
            }
            std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))
        }
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read source from stdin")?;
            Ok(buffer)
        }
    }
}

/// The header at 1-based `line` plus the indented body below it, the span an
/// editor selection of that definition would cover.
fn header_block(source: &str, line: usize) -> Option<String> {
    let lines: Vec<&str> = source.split('\n').collect();
    let header = *lines.get(line.checked_sub(1)?)?;
    let header_indent = codecat::common::indent_width(header);

    let body = lines[line..]
        .iter()
        .take_while(|l| l.trim().is_empty() || codecat::common::indent_width(l) > header_indent);

    let block: Vec<&str> = std::iter::once(header).chain(body.copied()).collect();
    Some(block.join("\n"))
}

fn print_report(
    report: &Report,
    format: OutputFormat,
    formatter: &dyn OutputFormatter,
    formatting: FormattingConfig,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(report).context("failed to serialize report")?;
            println!("{json}");
        }
        OutputFormat::Terminal => println!("{}", formatter.report(report, formatting.use_emoji())),
    }
    Ok(())
}

fn print_completions(entries: &[CompletionEntry], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(entries).context("failed to serialize completions")?;
            println!("{json}");
        }
        OutputFormat::Terminal => {
            for entry in entries {
                println!("{}", entry.key);
            }
        }
    }
    Ok(())
}
