use ti_core::error::CoreError;
use ti_core::frame::AsciiGrid;
use ti_core::traits::HistoryLog;

/// Historique en mémoire, même format que le fichier. Utile pour les tests.
///
/// # Example
/// ```
/// use ti_history::MemoryHistory;
/// use ti_core::frame::AsciiGrid;
/// use ti_core::traits::HistoryLog;
///
/// let mut history = MemoryHistory::default();
/// history.append(&AsciiGrid::new(2, 1)).unwrap();
/// assert_eq!(history.read_all().unwrap(), "  \n\n");
/// ```
#[derive(Clone, Debug, Default)]
pub struct MemoryHistory {
    text: String,
    entries: usize,
}

impl MemoryHistory {
    /// Number of entries appended since the last clear.
    #[must_use]
    pub fn entries(&self) -> usize {
        self.entries
    }
}

impl HistoryLog for MemoryHistory {
    fn append(&mut self, art: &AsciiGrid) -> Result<(), CoreError> {
        self.text.push_str(&art.to_string());
        self.text.push('\n');
        self.entries += 1;
        Ok(())
    }

    fn read_all(&self) -> Result<String, CoreError> {
        Ok(self.text.clone())
    }

    fn clear(&mut self) -> Result<(), CoreError> {
        self.text.clear();
        self.entries = 0;
        Ok(())
    }
}
