use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_NOTIFY_TIMEOUT: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input commands CSV file
    pub input: PathBuf,

    /// Format of the final account snapshot written to stdout
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    pub output: OutputFormat,

    /// Upper bound for a single notification call, in milliseconds
    #[arg(long, default_value_t = 500)]
    pub notify_timeout_ms: u64,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,
}

/// Tunables of the transfer engine.
#[derive(Debug, Clone)]
pub struct LedgerConfig {
    /// How long the engine waits on one notification before giving up on it.
    pub notify_timeout: Duration,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            notify_timeout: DEFAULT_NOTIFY_TIMEOUT,
        }
    }
}

impl From<&Cli> for LedgerConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            notify_timeout: Duration::from_millis(cli.notify_timeout_ms),
        }
    }
}
