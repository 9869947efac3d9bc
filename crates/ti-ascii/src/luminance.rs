use std::ops::Range;

use ti_core::charset::Ramp;
use ti_core::config::MAX_GRID_DIMENSION;
use ti_core::error::CoreError;
use ti_core::frame::{AsciiGrid, LumaFrame};

/// Pixel span of band `index` when `extent` pixels are split into `count`
/// bands.
///
/// Stride is `extent / count`, at least 1. The last band runs to the image
/// edge. Bands starting past the edge (more bands than pixels) collapse onto
/// the last pixel so every band covers at least one pixel.
///
/// # Example
/// ```
/// use ti_ascii::luminance::band;
/// assert_eq!(band(10, 3, 0), 0..3);
/// assert_eq!(band(10, 3, 2), 6..10);
/// assert_eq!(band(2, 4, 3), 1..2);
/// ```
#[must_use]
pub fn band(extent: u32, count: u32, index: u32) -> Range<u32> {
    let stride = (extent / count.max(1)).max(1);
    let start = index.saturating_mul(stride);
    if start >= extent {
        let last = extent.saturating_sub(1);
        return last..extent;
    }
    let end = if index + 1 >= count {
        extent
    } else {
        start.saturating_add(stride).min(extent)
    };
    start..end
}

/// Reject grid dimensions outside `[1, MAX_GRID_DIMENSION]`.
///
/// The grid is allocated up front, so the bound is checked before any work.
///
/// # Errors
/// Returns [`CoreError::InvalidDimension`] naming the first offending axis.
pub fn check_grid_dimensions(width: u32, height: u32) -> Result<(), CoreError> {
    let bounds = 1..=MAX_GRID_DIMENSION;
    if !bounds.contains(&width) {
        return Err(CoreError::invalid_dimension("width", width.to_string()));
    }
    if !bounds.contains(&height) {
        return Err(CoreError::invalid_dimension("height", height.to_string()));
    }
    Ok(())
}

/// Process a luminance frame into an ASCII grid.
///
/// Each cell takes the mean luminance of its pixel band and maps it to a
/// ramp glyph, darker pixels picking denser glyphs.
///
/// # Errors
/// Returns [`CoreError::InvalidDimension`] if `width` or `height` is zero
/// or above `MAX_GRID_DIMENSION`, and [`CoreError::UnreadableImage`] if the
/// frame holds no pixel.
///
/// # Example
/// ```
/// use ti_core::frame::LumaFrame;
/// use ti_core::charset::Ramp;
/// use ti_ascii::luminance::process_luminance;
///
/// let frame = LumaFrame::filled(10, 10, 0);
/// let grid = process_luminance(&frame, 4, 2, &Ramp::standard()).unwrap();
/// assert_eq!(grid.to_string(), "@@@@\n@@@@\n");
/// ```
pub fn process_luminance(
    frame: &LumaFrame,
    width: u32,
    height: u32,
    ramp: &Ramp,
) -> Result<AsciiGrid, CoreError> {
    check_grid_dimensions(width, height)?;
    if frame.width == 0 || frame.height == 0 {
        return Err(CoreError::UnreadableImage("image vide".into()));
    }

    log::debug!(
        "Conversion {}×{} px → {width}×{height} cellules (pas {}×{})",
        frame.width,
        frame.height,
        (frame.width / width).max(1),
        (frame.height / height).max(1),
    );

    let mut grid = AsciiGrid::new(width, height);
    for cy in 0..height {
        let rows = band(frame.height, height, cy);
        for cx in 0..width {
            let cols = band(frame.width, width, cx);
            let mean = frame.region_mean(cols.start, rows.start, cols.end, rows.end);
            grid.set(cx, cy, ramp.glyph(mean));
        }
    }
    Ok(grid)
}
