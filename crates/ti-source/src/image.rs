use std::path::Path;

use ti_core::error::CoreError;
use ti_core::frame::LumaFrame;

/// Extensions image proposées à l'utilisateur.
pub const IMAGE_EXTS: &[&str] = &["jpg", "jpeg", "png", "bmp"];

/// True if the path carries one of [`IMAGE_EXTS`] (case-insensitive).
///
/// Decoding goes by content, so this is only used for an advisory warning.
///
/// # Example
/// ```
/// use ti_source::image::has_image_extension;
/// use std::path::Path;
/// assert!(has_image_extension(Path::new("photo.JPG")));
/// assert!(!has_image_extension(Path::new("notes.txt")));
/// ```
#[must_use]
pub fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| IMAGE_EXTS.contains(&ext.to_lowercase().as_str()))
}

/// Décode des octets d'image (PNG, JPEG, BMP, GIF) en luminance 8 bits.
///
/// The format is guessed from the content. Color images are reduced with
/// the Rec. 709 luma weights; alpha is discarded.
///
/// # Errors
/// Returns [`CoreError::UnreadableImage`] if the bytes are not a supported,
/// well-formed image.
///
/// # Example
/// ```
/// use ti_source::image::decode_luma;
/// assert!(decode_luma(b"not an image").is_err());
/// ```
pub fn decode_luma(bytes: &[u8]) -> Result<LumaFrame, CoreError> {
    let img =
        image::load_from_memory(bytes).map_err(|e| CoreError::UnreadableImage(e.to_string()))?;
    let luma = img.to_luma8();
    let (width, height) = luma.dimensions();
    log::debug!("Image décodée : {width}×{height}");
    LumaFrame::from_raw(width, height, luma.into_raw())
        .ok_or_else(|| CoreError::UnreadableImage("buffer de luminance incohérent".into()))
}

/// Lit un fichier image depuis le disque.
///
/// # Errors
/// Returns [`CoreError::UnreadableImage`] if the file cannot be read.
///
/// # Example
/// ```no_run
/// use ti_source::image::read_image_bytes;
/// use std::path::Path;
/// let bytes = read_image_bytes(Path::new("test.png")).unwrap();
/// ```
pub fn read_image_bytes(path: &Path) -> Result<Vec<u8>, CoreError> {
    if !has_image_extension(path) {
        log::warn!(
            "Extension inattendue pour {} (attendu : {})",
            path.display(),
            IMAGE_EXTS.join(", ")
        );
    }
    std::fs::read(path).map_err(|e| {
        CoreError::UnreadableImage(format!("Impossible de charger {} : {e}", path.display()))
    })
}

/// Convenance : lecture + décodage.
///
/// # Errors
/// Returns [`CoreError::UnreadableImage`] if the file cannot be read or decoded.
pub fn load_luma(path: &Path) -> Result<LumaFrame, CoreError> {
    decode_luma(&read_image_bytes(path)?)
}
