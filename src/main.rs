//! Mentor: code feedback CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use mentor::config::load_config;
use mentor::reporter::{ConsoleReporter, JsonReporter};
use mentor::service::AnalysisService;
use mentor::Language;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Mentor: heuristic and AI code feedback for JavaScript and Python snippets
#[derive(Parser, Debug)]
#[command(name = "mentor")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Source file to analyze, or `-` for stdin (omit when using a subcommand)
    path: Option<PathBuf>,

    /// Language of the snippet (default: inferred from the file extension,
    /// falling back to javascript)
    #[arg(long, short)]
    language: Option<String>,

    /// Output as JSON
    #[arg(long, short)]
    json: bool,

    /// Pretty-print JSON output (implies --json)
    #[arg(long)]
    pretty: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Skip the remote model even when a credential is configured
    #[arg(long)]
    no_ai: bool,

    /// Path to config file (default: search .mentorrc.json in current dir and parents)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run MCP server for editor/agent integration (stdio JSON-RPC)
    Mcp,

    /// Explain a programming concept
    Explain {
        /// Concept to explain (e.g. "closures")
        concept: String,

        /// Extra context for the explanation
        #[arg(long, default_value = "")]
        context: String,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<ExitCode> {
    let args = Args::parse();

    let work_dir = std::env::current_dir().context("Failed to resolve current directory")?;

    if let Some(cmd) = args.command {
        let config = load_config(&work_dir, None)?.apply_env();
        let service = AnalysisService::from_config(&config);
        match cmd {
            Commands::Mcp => {
                mentor::mcp::run_server(&service)?;
                return Ok(ExitCode::SUCCESS);
            }
            Commands::Explain { concept, context } => {
                println!("{}", service.explain_concept(&concept, &context));
                return Ok(ExitCode::SUCCESS);
            }
        }
    }

    let Some(path) = args.path else {
        anyhow::bail!("No input path given");
    };

    let code = read_code(&path)?;
    if code.trim().is_empty() {
        anyhow::bail!("No code provided");
    }

    let language = match args.language.as_deref() {
        Some(name) => Language::parse(name),
        None => match Language::from_extension(&path) {
            Language::Unknown => Language::JavaScript,
            lang => lang,
        },
    };

    let config = load_config(&work_dir, args.config.as_deref())?.apply_env();
    let service = if args.no_ai {
        AnalysisService::heuristic_only()
    } else {
        AnalysisService::from_config(&config)
    };

    let result = service.analyze_code(&code, language);

    if args.json || args.pretty {
        let reporter = if args.pretty {
            JsonReporter::new().pretty()
        } else {
            JsonReporter::new()
        };
        println!("{}", reporter.report(&result));
    } else {
        let reporter = if args.no_color {
            ConsoleReporter::new().without_colors()
        } else {
            ConsoleReporter::new()
        };
        reporter.report(&result);
    }

    Ok(ExitCode::SUCCESS)
}

fn read_code(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut code = String::new();
        std::io::stdin()
            .read_to_string(&mut code)
            .context("Failed to read from stdin")?;
        Ok(code)
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))
    }
}
