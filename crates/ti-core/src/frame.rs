use std::fmt;

/// Image en niveaux de gris, immuable après chargement.
///
/// Stocke la luminance en row-major, 1 byte par pixel.
///
/// # Example
/// ```
/// use ti_core::frame::LumaFrame;
/// let frame = LumaFrame::filled(4, 2, 200);
/// assert_eq!(frame.data.len(), 8);
/// assert_eq!(frame.luminance(3, 1), 200);
/// ```
#[derive(Clone, Debug)]
pub struct LumaFrame {
    /// Luminance samples, row-major.
    pub data: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl LumaFrame {
    /// Wrap raw luminance samples.
    ///
    /// Returns `None` if `data.len() != width * height`.
    ///
    /// # Example
    /// ```
    /// use ti_core::frame::LumaFrame;
    /// assert!(LumaFrame::from_raw(2, 2, vec![0, 255, 255, 0]).is_some());
    /// assert!(LumaFrame::from_raw(2, 2, vec![0]).is_none());
    /// ```
    #[must_use]
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Option<Self> {
        if data.len() == width as usize * height as usize {
            Some(Self {
                data,
                width,
                height,
            })
        } else {
            None
        }
    }

    /// Frame uniforme, pratique pour les tests.
    #[must_use]
    pub fn filled(width: u32, height: u32, value: u8) -> Self {
        Self {
            data: vec![value; width as usize * height as usize],
            width,
            height,
        }
    }

    /// Luminance at (x, y).
    #[inline(always)]
    #[must_use]
    pub fn luminance(&self, x: u32, y: u32) -> u8 {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        self.data[y as usize * self.width as usize + x as usize]
    }

    /// Moyenne arithmétique de la luminance sur `[x0, x1) × [y0, y1)`.
    ///
    /// Returns 0.0 for an empty region.
    ///
    /// # Example
    /// ```
    /// use ti_core::frame::LumaFrame;
    /// let frame = LumaFrame::from_raw(2, 1, vec![0, 255]).unwrap();
    /// assert_eq!(frame.region_mean(0, 0, 2, 1), 127.5);
    /// ```
    #[must_use]
    pub fn region_mean(&self, x0: u32, y0: u32, x1: u32, y1: u32) -> f64 {
        let x1 = x1.min(self.width);
        let y1 = y1.min(self.height);
        if x0 >= x1 || y0 >= y1 {
            return 0.0;
        }
        let stride = self.width as usize;
        let mut sum = 0u64;
        for y in y0..y1 {
            let row = &self.data[y as usize * stride..(y as usize + 1) * stride];
            sum += row[x0 as usize..x1 as usize]
                .iter()
                .map(|&v| u64::from(v))
                .sum::<u64>();
        }
        let count = u64::from(x1 - x0) * u64::from(y1 - y0);
        sum as f64 / count as f64
    }
}

/// Grille de sortie ASCII : une ligne par rangée de la grille.
///
/// Rendered as text, each row is followed by `\n`.
///
/// # Example
/// ```
/// use ti_core::frame::AsciiGrid;
/// let mut grid = AsciiGrid::new(2, 1);
/// grid.set(0, 0, '@');
/// grid.set(1, 0, '.');
/// assert_eq!(grid.to_string(), "@.\n");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AsciiGrid {
    /// Flat array of glyphs, row-major.
    pub cells: Vec<char>,
    /// Width in characters.
    pub width: u32,
    /// Height in characters.
    pub height: u32,
}

impl AsciiGrid {
    /// Crée une grille remplie d'espaces.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            cells: vec![' '; width as usize * height as usize],
            width,
            height,
        }
    }

    /// Set the glyph at position (x, y).
    #[inline(always)]
    pub fn set(&mut self, x: u32, y: u32, ch: char) {
        self.cells[y as usize * self.width as usize + x as usize] = ch;
    }

    /// Glyph at position (x, y).
    #[inline(always)]
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> char {
        self.cells[y as usize * self.width as usize + x as usize]
    }

    /// Iterate rows top to bottom, without line terminators.
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.cells
            .chunks(self.width.max(1) as usize)
            .take(self.height as usize)
            .map(|row| row.iter().collect())
    }
}

impl fmt::Display for AsciiGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            f.write_str(&row)?;
            f.write_str("\n")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_mean_clamps_to_frame() {
        let frame = LumaFrame::filled(3, 3, 90);
        assert!((frame.region_mean(1, 1, 10, 10) - 90.0).abs() < f64::EPSILON);
        assert_eq!(frame.region_mean(3, 0, 4, 1), 0.0);
    }

    #[test]
    fn grid_rows_match_dimensions() {
        let mut grid = AsciiGrid::new(3, 2);
        grid.set(2, 1, '#');
        let rows: Vec<String> = grid.rows().collect();
        assert_eq!(rows, vec!["   ".to_string(), "  #".to_string()]);
        assert_eq!(grid.get(2, 1), '#');
        assert_eq!(grid.to_string(), "   \n  #\n");
    }
}
