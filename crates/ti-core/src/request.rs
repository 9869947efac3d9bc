use std::path::{Path, PathBuf};

use crate::config::MAX_GRID_DIMENSION;
use crate::error::CoreError;

/// Une demande de conversion complète : image + dimensions de la grille.
///
/// Built from raw user input by [`ConversionRequest::parse`]; once built,
/// both dimensions lie in `[1, MAX_GRID_DIMENSION]`.
///
/// # Example
/// ```
/// use std::path::Path;
/// use ti_core::request::ConversionRequest;
/// let req = ConversionRequest::parse(Some(Path::new("cat.png")), "80", "40").unwrap();
/// assert_eq!((req.width, req.height), (80, 40));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConversionRequest {
    /// Image to convert.
    pub image_path: PathBuf,
    /// Target columns.
    pub width: u32,
    /// Target rows.
    pub height: u32,
}

impl ConversionRequest {
    /// Validate raw inputs in order: image, then width, then height.
    ///
    /// # Errors
    /// [`CoreError::NoImageSelected`] if `image_path` is `None` or empty,
    /// [`CoreError::InvalidDimension`] if a dimension is empty, not a
    /// number, zero, or negative.
    pub fn parse(image_path: Option<&Path>, width: &str, height: &str) -> Result<Self, CoreError> {
        let image_path = match image_path {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => return Err(CoreError::NoImageSelected),
        };
        let width = parse_dimension("width", width)?;
        let height = parse_dimension("height", height)?;
        Ok(Self {
            image_path,
            width,
            height,
        })
    }
}

/// Parse a positive grid dimension from user text.
///
/// # Errors
/// Returns [`CoreError::InvalidDimension`] on empty, non-numeric, zero,
/// negative or oversized input. Only ASCII digits are accepted; surrounding
/// whitespace is rejected.
///
/// # Example
/// ```
/// use ti_core::request::parse_dimension;
/// assert_eq!(parse_dimension("width", "12").unwrap(), 12);
/// assert!(parse_dimension("width", "0").is_err());
/// assert!(parse_dimension("width", " 12 ").is_err());
/// ```
pub fn parse_dimension(axis: &'static str, raw: &str) -> Result<u32, CoreError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CoreError::invalid_dimension(axis, raw));
    }
    match raw.parse::<u32>() {
        Ok(v) if (1..=MAX_GRID_DIMENSION).contains(&v) => Ok(v),
        _ => Err(CoreError::invalid_dimension(axis, raw)),
    }
}
