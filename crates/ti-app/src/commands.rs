use std::io::Write;

use anyhow::{Context, Result};
use ti_core::config::AppConfig;
use ti_core::error::CoreError;
use ti_core::frame::AsciiGrid;
use ti_core::request::ConversionRequest;
use ti_core::traits::HistoryLog;

use crate::cli::{ConvertArgs, HistoryAction};

/// Construit la demande depuis les arguments, en complétant avec la config.
///
/// # Errors
/// Returns the core validation error (no image, bad width, bad height).
pub fn build_request(args: &ConvertArgs, config: &AppConfig) -> Result<ConversionRequest> {
    let width = args
        .width
        .clone()
        .unwrap_or_else(|| config.default_width.to_string());
    let height = args
        .height
        .clone()
        .unwrap_or_else(|| config.default_height.to_string());
    let request = ConversionRequest::parse(args.image.as_deref(), &width, &height)?;
    Ok(request)
}

/// `convert` : conversion, affichage, puis sauvegarde éventuelle.
///
/// The art is written to `out` in full before anything is persisted; a
/// failed conversion writes nothing and saves nothing. `open_history` is
/// only called when the art is saved.
///
/// # Errors
/// Returns an error on invalid input, unreadable image, output failure, or
/// history persistence failure.
pub fn run_convert<H: HistoryLog>(
    args: &ConvertArgs,
    config: &AppConfig,
    open_history: impl FnOnce() -> Result<H, CoreError>,
    out: &mut impl Write,
) -> Result<AsciiGrid> {
    let request = build_request(args, config)?;
    let art = ti_ascii::convert_request(&request)?;

    write!(out, "{art}").context("Impossible d'écrire le rendu")?;
    out.flush()?;

    if args.save || config.auto_save {
        open_history()?
            .append(&art)
            .context("Impossible de sauvegarder le rendu dans l'historique")?;
    }
    Ok(art)
}

/// `history show` / `history clear`.
///
/// # Errors
/// Returns an error if the history cannot be read, cleared, or printed.
pub fn run_history(
    action: HistoryAction,
    history: &mut impl HistoryLog,
    out: &mut impl Write,
) -> Result<()> {
    match action {
        HistoryAction::Show => {
            let text = history.read_all()?;
            if text.is_empty() {
                log::info!("Historique vide.");
            }
            out.write_all(text.as_bytes())?;
            out.flush()?;
        }
        HistoryAction::Clear => history.clear()?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};
    use std::path::PathBuf;
    use ti_history::MemoryHistory;

    fn black_image(dir: &tempfile::TempDir) -> PathBuf {
        let path = dir.path().join("black.png");
        GrayImage::from_pixel(8, 8, Luma([0])).save(&path).unwrap();
        path
    }

    fn args(image: Option<PathBuf>, width: &str, height: &str, save: bool) -> ConvertArgs {
        ConvertArgs {
            image,
            width: Some(width.into()),
            height: Some(height.into()),
            save,
        }
    }

    fn opened<'a>(
        history: &'a mut MemoryHistory,
    ) -> impl FnOnce() -> Result<&'a mut MemoryHistory, CoreError> + 'a {
        move || Ok(history)
    }

    fn core_error(err: &anyhow::Error) -> Option<&CoreError> {
        err.downcast_ref::<CoreError>()
    }

    #[test]
    fn convert_prints_and_saves_on_request() {
        let dir = tempfile::tempdir().unwrap();
        let mut history = MemoryHistory::default();
        let mut out = Vec::new();

        run_convert(
            &args(Some(black_image(&dir)), "3", "2", true),
            &AppConfig::default(),
            opened(&mut history),
            &mut out,
        )
        .unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "@@@\n@@@\n");
        assert_eq!(history.read_all().unwrap(), "@@@\n@@@\n\n");
    }

    #[test]
    fn convert_without_save_leaves_history_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let mut history = MemoryHistory::default();
        let mut out = Vec::new();
        run_convert(
            &args(Some(black_image(&dir)), "1", "1", false),
            &AppConfig::default(),
            opened(&mut history),
            &mut out,
        )
        .unwrap();
        assert_eq!(history.entries(), 0);
    }

    #[test]
    fn auto_save_config_persists_every_conversion() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            auto_save: true,
            ..AppConfig::default()
        };
        let mut history = MemoryHistory::default();
        run_convert(
            &args(Some(black_image(&dir)), "2", "1", false),
            &config,
            opened(&mut history),
            &mut Vec::new(),
        )
        .unwrap();
        assert_eq!(history.entries(), 1);
    }

    #[test]
    fn missing_dimensions_fall_back_to_config() {
        let config = AppConfig {
            default_width: 7,
            default_height: 3,
            auto_save: false,
        };
        let convert_args = ConvertArgs {
            image: Some(PathBuf::from("x.png")),
            ..ConvertArgs::default()
        };
        let request = build_request(&convert_args, &config).unwrap();
        assert_eq!((request.width, request.height), (7, 3));
    }

    #[test]
    fn no_image_is_reported_first() {
        let mut out = Vec::new();
        let err = run_convert(
            &args(None, "0", "0", true),
            &AppConfig::default(),
            || Ok(MemoryHistory::default()),
            &mut out,
        )
        .unwrap_err();
        assert!(matches!(core_error(&err), Some(CoreError::NoImageSelected)));
        assert!(out.is_empty());
    }

    #[test]
    fn invalid_dimension_produces_no_output() {
        let dir = tempfile::tempdir().unwrap();
        let mut history = MemoryHistory::default();
        let mut out = Vec::new();
        let err = run_convert(
            &args(Some(black_image(&dir)), "10", "abc", true),
            &AppConfig::default(),
            opened(&mut history),
            &mut out,
        )
        .unwrap_err();
        assert!(matches!(
            core_error(&err),
            Some(CoreError::InvalidDimension { axis: "height", .. })
        ));
        assert!(out.is_empty());
        assert_eq!(history.entries(), 0);
    }

    #[test]
    fn unreadable_image_is_surfaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"not really a png").unwrap();
        let err = run_convert(
            &args(Some(path), "4", "4", false),
            &AppConfig::default(),
            || Ok(MemoryHistory::default()),
            &mut Vec::new(),
        )
        .unwrap_err();
        assert!(matches!(
            core_error(&err),
            Some(CoreError::UnreadableImage(_))
        ));
    }

    #[test]
    fn history_is_opened_only_when_saving() {
        let dir = tempfile::tempdir().unwrap();
        let image = black_image(&dir);
        let unavailable = || -> Result<MemoryHistory, CoreError> {
            Err(CoreError::Persistence {
                path: "history.txt".into(),
                source: std::io::Error::other("exécutable introuvable"),
            })
        };

        let mut out = Vec::new();
        run_convert(
            &args(Some(image.clone()), "2", "2", false),
            &AppConfig::default(),
            unavailable,
            &mut out,
        )
        .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "@@\n@@\n");

        let err = run_convert(
            &args(Some(image), "2", "2", true),
            &AppConfig::default(),
            unavailable,
            &mut Vec::new(),
        )
        .unwrap_err();
        assert!(matches!(
            core_error(&err),
            Some(CoreError::Persistence { .. })
        ));
    }

    #[test]
    fn history_show_and_clear() {
        let mut history = MemoryHistory::default();
        let mut grid = AsciiGrid::new(2, 1);
        grid.set(0, 0, '#');
        history.append(&grid).unwrap();

        let mut out = Vec::new();
        run_history(HistoryAction::Show, &mut history, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "# \n\n");

        run_history(HistoryAction::Clear, &mut history, &mut Vec::new()).unwrap();
        let mut out = Vec::new();
        run_history(HistoryAction::Show, &mut history, &mut out).unwrap();
        assert!(out.is_empty());
    }
}
