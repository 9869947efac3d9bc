use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// textimg — convertisseur image → art ASCII avec historique.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Fichier de configuration TOML. Défaut : config/default.toml.
    #[arg(short, long, global = true, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convertir une image en art ASCII et l'afficher.
    Convert(ConvertArgs),
    /// Consulter ou vider l'historique des rendus sauvegardés.
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },
}

/// Arguments of `convert`.
///
/// Dimensions stay raw text here; they are validated into a
/// `ConversionRequest` so bad input maps to the core's own errors.
#[derive(Args, Debug, Default)]
pub struct ConvertArgs {
    /// Image source (PNG, JPEG, BMP).
    #[arg(long)]
    pub image: Option<PathBuf>,

    /// Largeur en caractères. Défaut : valeur de la config.
    #[arg(long, allow_hyphen_values = true)]
    pub width: Option<String>,

    /// Hauteur en caractères. Défaut : valeur de la config.
    #[arg(long, allow_hyphen_values = true)]
    pub height: Option<String>,

    /// Ajouter le résultat à l'historique.
    #[arg(long, default_value_t = false)]
    pub save: bool,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryAction {
    /// Afficher tout l'historique.
    Show,
    /// Vider l'historique.
    Clear,
}
