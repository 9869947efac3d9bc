use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use ti_core::error::CoreError;
use ti_core::frame::AsciiGrid;
use ti_core::traits::HistoryLog;

/// Nom du fichier d'historique, placé à côté de l'exécutable.
pub const HISTORY_FILE_NAME: &str = "history.txt";

/// Historique stocké dans un fichier texte plat.
///
/// Every operation opens the file, does its work and drops the handle
/// before returning. There is no locking: one process, one user.
///
/// # Example
/// ```no_run
/// use ti_history::FileHistory;
/// use ti_core::traits::HistoryLog;
/// let history = FileHistory::beside_executable().unwrap();
/// print!("{}", history.read_all().unwrap());
/// ```
#[derive(Clone, Debug)]
pub struct FileHistory {
    path: PathBuf,
}

impl FileHistory {
    /// History file at an explicit path.
    #[must_use]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `history.txt` in the directory of the running executable.
    ///
    /// # Errors
    /// [`CoreError::Persistence`] if the executable path cannot be resolved.
    pub fn beside_executable() -> Result<Self, CoreError> {
        let exe = std::env::current_exe().map_err(|e| CoreError::Persistence {
            path: HISTORY_FILE_NAME.into(),
            source: e,
        })?;
        let dir = exe.parent().map_or_else(|| PathBuf::from("."), Path::to_path_buf);
        Ok(Self::at(dir.join(HISTORY_FILE_NAME)))
    }

    /// Location of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persistence(&self, source: io::Error) -> CoreError {
        CoreError::Persistence {
            path: self.path.display().to_string(),
            source,
        }
    }
}

impl HistoryLog for FileHistory {
    fn append(&mut self, art: &AsciiGrid) -> Result<(), CoreError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.persistence(e))?;
        for row in art.rows() {
            writeln!(file, "{row}").map_err(|e| self.persistence(e))?;
        }
        file.write_all(b"\n").map_err(|e| self.persistence(e))?;
        file.flush().map_err(|e| self.persistence(e))?;
        log::info!("Rendu {}×{} ajouté à {}", art.width, art.height, self.path.display());
        Ok(())
    }

    fn read_all(&self) -> Result<String, CoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("Pas d'historique à {}", self.path.display());
                Ok(String::new())
            }
            Err(e) => Err(self.persistence(e)),
        }
    }

    fn clear(&mut self) -> Result<(), CoreError> {
        match OpenOptions::new().write(true).truncate(true).open(&self.path) {
            Ok(_) => {
                log::info!("Historique vidé : {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.persistence(e)),
        }
    }
}
