/// Persistence of past conversions: an append-only text log.

pub mod file;
pub mod memory;

pub use file::{FileHistory, HISTORY_FILE_NAME};
pub use memory::MemoryHistory;
