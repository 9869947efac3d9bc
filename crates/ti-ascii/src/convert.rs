use ti_core::charset::Ramp;
use ti_core::error::CoreError;
use ti_core::frame::AsciiGrid;
use ti_core::request::ConversionRequest;
use ti_source::image::{decode_luma, read_image_bytes};

/// Convertit des octets d'image en art ASCII avec la rampe standard.
///
/// Dimensions are checked before decoding; nothing is produced unless the
/// whole conversion succeeds.
///
/// # Errors
/// [`CoreError::InvalidDimension`] if `width` or `height` is zero or above
/// `MAX_GRID_DIMENSION`,
/// [`CoreError::UnreadableImage`] if the bytes do not decode.
///
/// # Example
/// ```
/// use ti_ascii::convert::convert;
/// assert!(convert(b"garbage", 10, 10).is_err());
/// ```
pub fn convert(image_bytes: &[u8], width: u32, height: u32) -> Result<AsciiGrid, CoreError> {
    convert_with_ramp(image_bytes, width, height, &Ramp::standard())
}

/// Same as [`convert`] with an explicit ramp.
///
/// # Errors
/// See [`convert`].
pub fn convert_with_ramp(
    image_bytes: &[u8],
    width: u32,
    height: u32,
    ramp: &Ramp,
) -> Result<AsciiGrid, CoreError> {
    crate::luminance::check_grid_dimensions(width, height)?;
    let frame = decode_luma(image_bytes)?;
    crate::luminance::process_luminance(&frame, width, height, ramp)
}

/// Exécute une demande de conversion validée : lecture du fichier + conversion.
///
/// # Errors
/// [`CoreError::UnreadableImage`] if the file cannot be read or decoded.
///
/// # Example
/// ```no_run
/// use std::path::Path;
/// use ti_core::request::ConversionRequest;
/// use ti_ascii::convert::convert_request;
/// let req = ConversionRequest::parse(Some(Path::new("cat.png")), "80", "40").unwrap();
/// let art = convert_request(&req).unwrap();
/// print!("{art}");
/// ```
pub fn convert_request(request: &ConversionRequest) -> Result<AsciiGrid, CoreError> {
    log::info!(
        "Conversion de {} en {}×{}",
        request.image_path.display(),
        request.width,
        request.height
    );
    let bytes = read_image_bytes(&request.image_path)?;
    convert(&bytes, request.width, request.height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, GrayImage, ImageFormat, Luma};
    use std::io::Cursor;

    fn png_bytes(img: GrayImage) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        DynamicImage::ImageLuma8(img)
            .write_to(&mut buf, ImageFormat::Png)
            .unwrap();
        buf.into_inner()
    }

    #[test]
    fn black_png_becomes_darkest_block() {
        let bytes = png_bytes(GrayImage::from_pixel(16, 8, Luma([0])));
        let art = convert(&bytes, 4, 3).unwrap();
        assert_eq!(art.to_string(), "@@@@\n@@@@\n@@@@\n");
    }

    #[test]
    fn white_png_becomes_lightest_block() {
        let bytes = png_bytes(GrayImage::from_pixel(16, 8, Luma([255])));
        let art = convert(&bytes, 3, 2).unwrap();
        assert_eq!(art.to_string(), "   \n   \n");
    }

    #[test]
    fn checkerboard_png_with_two_glyph_ramp() {
        let img = GrayImage::from_fn(4, 4, |x, y| Luma([if (x + y) % 2 == 0 { 0 } else { 255 }]));
        let ramp = Ramp::new(".#").unwrap();
        let art = convert_with_ramp(&png_bytes(img), 2, 2, &ramp).unwrap();
        assert_eq!(art.to_string(), "##\n##\n");
    }

    #[test]
    fn grid_larger_than_image_keeps_requested_shape() {
        let img = GrayImage::from_fn(2, 2, |x, _| Luma([(x * 255) as u8]));
        let art = convert(&png_bytes(img), 9, 5).unwrap();
        let text = art.to_string();
        assert_eq!(text.lines().count(), 5);
        assert!(text.lines().all(|l| l.chars().count() == 9));
    }

    #[test]
    fn zero_dimension_checked_before_decoding() {
        let err = convert(b"garbage", 0, 3).unwrap_err();
        assert!(matches!(err, CoreError::InvalidDimension { axis: "width", .. }));
        let err = convert(b"garbage", 3, 0).unwrap_err();
        assert!(matches!(err, CoreError::InvalidDimension { axis: "height", .. }));
    }

    #[test]
    fn oversized_dimension_checked_before_decoding() {
        let err = convert(b"garbage", u32::MAX, u32::MAX).unwrap_err();
        assert!(matches!(err, CoreError::InvalidDimension { axis: "width", .. }));
        let bytes = png_bytes(GrayImage::from_pixel(4, 4, Luma([0])));
        let err = convert(&bytes, 8, 1001).unwrap_err();
        assert!(matches!(err, CoreError::InvalidDimension { axis: "height", .. }));
    }

    #[test]
    fn undecodable_bytes_are_unreadable() {
        assert!(matches!(
            convert(b"definitely not a png", 2, 2),
            Err(CoreError::UnreadableImage(_))
        ));
    }

    #[test]
    fn conversion_is_deterministic() {
        let img = GrayImage::from_fn(13, 7, |x, y| Luma([((x * 31 + y * 17) % 256) as u8]));
        let bytes = png_bytes(img);
        assert_eq!(convert(&bytes, 5, 3).unwrap(), convert(&bytes, 5, 3).unwrap());
    }
}
