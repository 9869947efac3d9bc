use std::io;

use anyhow::Result;
use clap::Parser;
use ti_core::config::AppConfig;
use ti_core::error::CoreError;
use ti_history::FileHistory;

pub mod cli;
pub mod commands;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Charger la config
    let config = resolve_config(&cli)?;

    // 4. Exécuter la commande (l'historique n'est ouvert que si utilisé)
    let mut stdout = io::stdout().lock();
    match &cli.command {
        cli::Command::Convert(args) => {
            commands::run_convert(args, &config, open_history, &mut stdout)?;
        }
        cli::Command::History { action } => {
            let mut history = open_history()?;
            commands::run_history(*action, &mut history, &mut stdout)?;
        }
    }
    Ok(())
}

/// History file at its fixed location beside the executable.
fn open_history() -> Result<FileHistory, CoreError> {
    let history = FileHistory::beside_executable()?;
    log::debug!("Historique : {}", history.path().display());
    Ok(history)
}

/// Load the config file, or fall back to defaults when it is absent.
fn resolve_config(cli: &cli::Cli) -> Result<AppConfig> {
    if cli.config.exists() {
        ti_core::config::load_config(&cli.config)
    } else {
        log::warn!(
            "Config introuvable : {}. Utilisation des défauts.",
            cli.config.display()
        );
        Ok(AppConfig::default())
    }
}
