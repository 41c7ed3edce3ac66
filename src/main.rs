//! Lexitrie - Main entrypoint.
//!
//! Loads configuration, initializes logging, then reads the dictionary into a
//! trie and prints a `word : count` line for every query word.

use clap::{Parser, Subcommand};
use lexitrie_lib::config::{ConfigLoader, LexiconConfig, LogConfig, ENV_PREFIX};
use lexitrie_lib::error::{
    report_error, set_error_reporter, ErrorContext, LexiconError, LexiconResult,
    TracingErrorReporter,
};
use lexitrie_lib::session::run_session;
use lexitrie_lib::VERSION;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments for Lexitrie.
#[derive(Parser, Debug)]
#[command(name = "lexitrie", version, author, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Dictionary file, overriding the configured one
    #[arg(short, long)]
    dictionary: Option<PathBuf>,

    /// Command to execute
    #[command(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Load the dictionary and report the configured queries
    Run,

    /// Load the dictionary and report the given words instead
    Query {
        /// Words to look up
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[arg(short, long)]
        output: PathBuf,
    },
}

/// Initialize the logging system. Logs go to stderr; stdout carries the report.
fn init_logging(log: &LogConfig) -> LexiconResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.pretty().finish())
    };

    result.map_err(|e| LexiconError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

fn run(
    mut config: LexiconConfig,
    dictionary: Option<PathBuf>,
    queries: Option<Vec<String>>,
) -> LexiconResult<()> {
    if let Some(path) = dictionary {
        config.dictionary.path = path;
    }

    info!(
        version = VERSION,
        dictionary = %config.dictionary.path.display(),
        "Starting lexitrie"
    );
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let outcome = run_session(&config, queries.as_deref(), &mut out)?;

    info!(
        inserted = outcome.load.inserted,
        queries = outcome.report.entries().len(),
        "Run complete"
    );
    Ok(())
}

fn gen_config(output: &Path) -> LexiconResult<()> {
    info!("Generating default configuration");

    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let toml = toml::to_string_pretty(&LexiconConfig::default())
        .map_err(|e| LexiconError::Custom(format!("Failed to serialize config: {e}")))?;
    std::fs::write(output, toml)?;

    info!("Default configuration written to {:?}", output);
    Ok(())
}

fn execute(args: Args) -> LexiconResult<()> {
    let loaded = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX).load();

    // Log with the configured settings when they load, defaults otherwise
    let log_config = loaded
        .as_ref()
        .map(|config| config.log.clone())
        .unwrap_or_default();
    init_logging(&log_config)?;
    set_error_reporter(Arc::new(TracingErrorReporter));

    match args.command.unwrap_or(Command::Run) {
        Command::Run => run(loaded?, args.dictionary, None),
        Command::Query { words } => run(loaded?, args.dictionary, Some(words)),
        Command::Validate => {
            loaded?;
            info!("Configuration validated successfully");
            println!("Configuration is valid");
            Ok(())
        }
        Command::GenConfig { output } => gen_config(&output),
    }
}

/// Main entry point for the application.
fn main() -> ExitCode {
    let args = Args::parse();
    let settings = match &args.config {
        Some(path) => format!("settings file {}", path.display()),
        None => "built-in settings".to_string(),
    };

    match execute(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(
                ErrorContext::new(e, "lexitrie")
                    .with_details(format!("lexitrie {VERSION} using {settings}")),
            );
            ExitCode::FAILURE
        }
    }
}
