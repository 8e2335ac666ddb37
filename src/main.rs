//! Docsmith CLI - Command-line interface for doc comment synthesis

use anyhow::Context;
use clap::{Parser, Subcommand};
use docsmith::completion::OpenAiClient;
use docsmith::pipeline::{self, DocOutcome, DocPipeline};
use docsmith::{DocConfig, LanguageKind, SourceDocument, config};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "docsmith")]
#[command(version = "0.0.1")]
#[command(about = "AST-native documentation comment synthesis for Java and Kotlin")]
#[command(long_about = r#"
Docsmith locates the function definition nearest a cursor position and writes
a structured doc comment for it, either from the function's signature (stub
mode) or from a text-completion service (openai mode).

Example usage:
  docsmith check --file src/Calculator.java --line 3 --column 9
  docsmith document --file src/Calculator.java --line 3 --column 9
  docsmith document --file src/App.kt --line 10 --column 5 --mode openai --write
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether a doc comment can be generated at a position
    Check {
        /// Source file
        #[arg(short, long)]
        file: PathBuf,

        /// Cursor line (1-indexed)
        #[arg(short, long)]
        line: u32,

        /// Cursor column (1-indexed)
        #[arg(short, long)]
        column: u32,
    },

    /// Generate and insert a doc comment for the function at a position
    Document {
        /// Source file
        #[arg(short, long)]
        file: PathBuf,

        /// Cursor line (1-indexed)
        #[arg(short, long)]
        line: u32,

        /// Cursor column (1-indexed)
        #[arg(short, long)]
        column: u32,

        /// Generation mode; defaults to stub unless OPENAI_ENABLED is set
        #[arg(short, long, value_parser = ["stub", "openai"])]
        mode: Option<String>,

        /// Rewrite the file in place instead of printing to stdout
        #[arg(short, long)]
        write: bool,

        /// Path to a docsmith.toml (defaults to ./docsmith.toml if present)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match cli.command {
        Commands::Check { file, line, column } => {
            let language = LanguageKind::from_path(&file);
            if language == LanguageKind::Other {
                println!("✗ Unsupported language: {}", file.display());
                return Ok(());
            }

            let content = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let doc = SourceDocument::parse(language, content)?;
            let offset = doc
                .offset_at(line, column)
                .with_context(|| format!("Position {}:{} is out of range", line, column))?;

            if pipeline::is_available(&doc, offset) {
                println!("✓ A doc comment can be generated at {}:{}", line, column);
            } else {
                println!("✗ No enclosing function at {}:{}", line, column);
            }
        }

        Commands::Document {
            file,
            line,
            column,
            mode,
            write,
            config: config_path,
        } => {
            let language = LanguageKind::from_path(&file);
            if language == LanguageKind::Other {
                anyhow::bail!("Unsupported language: {}", file.display());
            }

            let mut doc_config = DocConfig::from_env();
            if let Some(file_config) = config::load_config_file(config_path.as_deref())? {
                doc_config = doc_config.apply_file(file_config);
            }

            let use_completion = match mode.as_deref() {
                Some("openai") => true,
                Some(_) => false,
                None => doc_config.enabled,
            };

            let content = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let mut doc = SourceDocument::parse(language, content)?;
            let offset = doc
                .offset_at(line, column)
                .with_context(|| format!("Position {}:{} is out of range", line, column))?;

            let client;
            let pipeline = if use_completion {
                tracing::info!("Using completion-backed generation ({})", doc_config.model);
                client = OpenAiClient::with_base_url(
                    doc_config.require_api_key()?,
                    doc_config.base_url.as_str(),
                    doc_config.timeout(),
                )?;
                DocPipeline::completion(&client, doc_config.model.clone())
            } else {
                tracing::info!("Using stub generation");
                DocPipeline::stub()
            };

            match pipeline.document_at(&mut doc, offset)? {
                DocOutcome::Inserted { comment } => {
                    if write {
                        std::fs::write(&file, doc.text())
                            .with_context(|| format!("Failed to write {}", file.display()))?;
                        println!("✅ Inserted doc comment into {}", file.display());
                    } else {
                        print!("{}", doc.text());
                    }
                    tracing::debug!("Inserted comment:\n{}", comment);
                }
                DocOutcome::NoFunction => {
                    println!("✗ No enclosing function at {}:{}", line, column);
                }
                DocOutcome::Unsupported => {
                    println!("✗ Unsupported language: {}", file.display());
                }
            }
        }
    }

    Ok(())
}
