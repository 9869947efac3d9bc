use crate::error::CoreError;
use crate::frame::AsciiGrid;

/// Journal append-only des rendus ASCII passés.
///
/// Implémenté par : `FileHistory` (fichier texte à côté de l'exécutable),
/// `MemoryHistory` (tests).
///
/// Each entry is the art's rows verbatim followed by one blank line.
/// Entries carry no metadata and cannot be told apart once written.
///
/// # Example
/// ```
/// use ti_core::traits::HistoryLog;
/// use ti_core::frame::AsciiGrid;
/// use ti_core::error::CoreError;
///
/// struct NullLog;
/// impl HistoryLog for NullLog {
///     fn append(&mut self, _art: &AsciiGrid) -> Result<(), CoreError> { Ok(()) }
///     fn read_all(&self) -> Result<String, CoreError> { Ok(String::new()) }
///     fn clear(&mut self) -> Result<(), CoreError> { Ok(()) }
/// }
/// ```
pub trait HistoryLog {
    /// Ajoute un rendu à la fin du journal, suivi d'une ligne vide.
    ///
    /// # Errors
    /// [`CoreError::Persistence`] if the underlying storage rejects the write.
    fn append(&mut self, art: &AsciiGrid) -> Result<(), CoreError>;

    /// Retourne le contenu complet du journal.
    ///
    /// A journal that was never written reads as the empty string.
    ///
    /// # Errors
    /// [`CoreError::Persistence`] on storage failure other than absence.
    fn read_all(&self) -> Result<String, CoreError>;

    /// Vide le journal. No-op if it does not exist yet.
    ///
    /// # Errors
    /// [`CoreError::Persistence`] if truncation fails.
    fn clear(&mut self) -> Result<(), CoreError>;
}

impl<T: HistoryLog + ?Sized> HistoryLog for &mut T {
    fn append(&mut self, art: &AsciiGrid) -> Result<(), CoreError> {
        (**self).append(art)
    }

    fn read_all(&self) -> Result<String, CoreError> {
        (**self).read_all()
    }

    fn clear(&mut self) -> Result<(), CoreError> {
        (**self).clear()
    }
}
