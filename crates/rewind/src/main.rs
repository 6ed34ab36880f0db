use std::io::{Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rewind_config::AppConfig;

mod script;
mod session;

use session::Session;

/// Replays an editing script against a bounded undo/redo history.
#[derive(Parser, Debug)]
#[command(name = "rewind", version, about)]
struct Cli {
    /// Script to run (one command per line). Reads standard input when omitted.
    script: Option<PathBuf>,

    /// Initial snapshot of the edited text.
    #[arg(long, default_value = "")]
    initial: String,

    /// Max retained states, overriding the config file.
    #[arg(long = "max-history")]
    max_history: Option<usize>,

    /// Config file to use instead of the default location.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the final history as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging on stderr so script output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli.config.clone().unwrap_or_else(AppConfig::config_path);
    let mut config = AppConfig::load_or_create(&config_path);
    if let Some(max_history) = cli.max_history {
        config.max_history = max_history;
        config.sanitize();
    }
    tracing::info!(
        config = %config_path.display(),
        max_history = config.max_history,
        "Starting rewind"
    );

    let source = match &cli.script {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?,
        None => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .context("Failed to read script from stdin")?;
            source
        }
    };
    let commands = script::parse_script(&source).context("Invalid script")?;

    let mut session = Session::new(cli.initial, config);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for command in &commands {
        for line in session.apply(command) {
            writeln!(out, "{line}")?;
        }
        writeln!(out, "{}", session.status_line())?;
    }
    if cli.json {
        writeln!(out, "{}", session.history_json()?)?;
    }

    Ok(())
}
