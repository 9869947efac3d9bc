/// ASCII conversion engine for textimg.
///
/// Converts luminance frames to character grids over a fixed ramp.
pub mod convert;
pub mod luminance;

pub use convert::{convert, convert_request};
