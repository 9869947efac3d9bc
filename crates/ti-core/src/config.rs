use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Borne haute des dimensions de grille (ligne de commande, config, convertisseur).
pub const MAX_GRID_DIMENSION: u32 = 1000;

/// Configuration de l'application.
///
/// Chargée depuis TOML. Chaque champ a une valeur par défaut saine.
///
/// # Example
/// ```
/// use ti_core::config::AppConfig;
/// let config = AppConfig::default();
/// assert_eq!(config.default_width, 80);
/// assert!(!config.auto_save);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Largeur utilisée quand `--width` est omis.
    pub default_width: u32,
    /// Hauteur utilisée quand `--height` est omis.
    pub default_height: u32,
    /// Ajouter chaque conversion à l'historique sans `--save`.
    pub auto_save: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_width: 80,
            default_height: 40,
            auto_save: false,
        }
    }
}

impl AppConfig {
    /// Clamp all numeric fields to their valid ranges.
    /// Called after TOML deserialization to prevent out-of-range values.
    pub fn clamp_all(&mut self) {
        self.default_width = self.default_width.clamp(1, MAX_GRID_DIMENSION);
        self.default_height = self.default_height.clamp(1, MAX_GRID_DIMENSION);
    }
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
struct ConfigFile {
    convert: Option<ConvertSection>,
}

/// Convert section of the TOML config, all fields optional for partial override.
#[derive(Deserialize)]
struct ConvertSection {
    width: Option<u32>,
    height: Option<u32>,
    auto_save: Option<bool>,
}

/// Parse un document TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the document is not valid TOML for this schema.
///
/// # Example
/// ```
/// use ti_core::config::parse_config;
/// let config = parse_config("[convert]\nwidth = 120\n").unwrap();
/// assert_eq!(config.default_width, 120);
/// assert_eq!(config.default_height, 40);
/// ```
pub fn parse_config(content: &str) -> Result<AppConfig> {
    let file: ConfigFile = toml::from_str(content).context("Erreur de parsing TOML")?;

    let mut config = AppConfig::default();
    if let Some(c) = file.convert {
        if let Some(v) = c.width {
            config.default_width = v;
        }
        if let Some(v) = c.height {
            config.default_height = v;
        }
        if let Some(v) = c.auto_save {
            config.auto_save = v;
        }
    }

    config.clamp_all();
    Ok(config)
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
/// ```no_run
/// use ti_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("config/default.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;
    let config =
        parse_config(&content).with_context(|| format!("Config invalide : {}", path.display()))?;
    log::debug!("Config chargée depuis {} : {config:?}", path.display());
    Ok(config)
}
