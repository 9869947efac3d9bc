/// Types, configuration, and shared structures for textimg.
///
/// This crate contains the ramp, the luminance frame and ASCII grid types,
/// the conversion request, the error enum and the history log trait shared
/// across the textimg workspace.

pub mod charset;
pub mod config;
pub mod error;
pub mod frame;
pub mod request;
pub mod traits;

pub use charset::Ramp;
pub use config::AppConfig;
pub use error::CoreError;
pub use frame::{AsciiGrid, LumaFrame};
pub use request::ConversionRequest;
pub use traits::HistoryLog;
