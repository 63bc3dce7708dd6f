use clap::Parser;
use ledger_transfer::application::engine::TransferEngine;
use ledger_transfer::config::{Cli, LedgerConfig, OutputFormat};
use ledger_transfer::domain::ports::{AccountStoreBox, NotifierBox};
use ledger_transfer::infrastructure::in_memory::InMemoryAccountStore;
use ledger_transfer::infrastructure::notifier::LogNotifier;
use ledger_transfer::interfaces::csv::account_writer::AccountWriter;
use ledger_transfer::interfaces::csv::command_reader::{Command, CommandReader};
use ledger_transfer::interfaces::json;
use ledger_transfer::logging;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose, cli.json_logs);

    let account_store: AccountStoreBox = Box::new(InMemoryAccountStore::new());
    let notifier: NotifierBox = Box::new(LogNotifier::new());
    let engine = TransferEngine::with_config(account_store, notifier, LedgerConfig::from(&cli));

    // Apply commands in order; a rejected command never stops the batch
    let file = File::open(&cli.input).into_diagnostic()?;
    let reader = CommandReader::new(file);
    for (line, command) in reader.commands().enumerate() {
        let outcome = match command {
            Ok(Command::Create(account)) => engine.create_account(account).await,
            Ok(Command::Transfer(request)) => engine.transfer(request).await.map(|_| ()),
            Err(e) => Err(e),
        };
        if let Err(e) = outcome {
            tracing::error!(row = line + 1, "command rejected: {e}");
        }
    }

    let accounts = engine.accounts().await.into_diagnostic()?;

    let stdout = io::stdout();
    match cli.output {
        OutputFormat::Csv => {
            let mut writer = AccountWriter::new(stdout.lock());
            writer.write_accounts(accounts).into_diagnostic()?;
        }
        OutputFormat::Json => {
            json::write_accounts(stdout.lock(), &accounts).into_diagnostic()?;
        }
    }

    Ok(())
}
