use crate::error::CoreError;

/// 92 caractères, du plus clair au plus dense.
pub const RAMP_STANDARD: &str = " `.-':_,^=;><+!rc*/z?sLTv)J7(|Fi{C}fI31tlu[neoZ5Yxjya]2ESwqkP6h9d4VpOGbUAKXHm8RD#$Bg0MNWQ%&@";

/// Ordered glyph table mapping mean luminance to a character.
///
/// Index 0 is the lightest glyph, the last index the darkest.
///
/// # Example
/// ```
/// use ti_core::charset::Ramp;
/// let ramp = Ramp::standard();
/// assert_eq!(ramp.len(), 92);
/// assert_eq!(ramp.glyph(255.0), ' ');
/// assert_eq!(ramp.glyph(0.0), '@');
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ramp {
    chars: Vec<char>,
}

impl Ramp {
    /// The fixed 92-glyph ramp used for every conversion.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            chars: RAMP_STANDARD.chars().collect(),
        }
    }

    /// Build a ramp from glyphs ordered lightest→darkest.
    ///
    /// # Errors
    /// Returns [`CoreError::Config`] if `glyphs` is empty.
    ///
    /// # Example
    /// ```
    /// use ti_core::charset::Ramp;
    /// let ramp = Ramp::new(".#").unwrap();
    /// assert_eq!(ramp.glyph(127.5), '#');
    /// ```
    pub fn new(glyphs: &str) -> Result<Self, CoreError> {
        let chars: Vec<char> = glyphs.chars().collect();
        if chars.is_empty() {
            return Err(CoreError::Config("rampe vide".into()));
        }
        Ok(Self { chars })
    }

    /// Number of glyphs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false: a ramp holds at least one glyph.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Darkness index for a mean luminance in [0, 255].
    ///
    /// `floor((1 - mean/255) * N)` clamped to `[0, N-1]`; pure black lands
    /// exactly on `N` and is pulled back by the clamp.
    #[inline]
    #[must_use]
    pub fn index_for(&self, mean: f64) -> usize {
        let n = self.chars.len();
        let darkness = (1.0 - mean / 255.0) * n as f64;
        if darkness <= 0.0 {
            return 0;
        }
        (darkness.floor() as usize).min(n - 1)
    }

    /// Glyph for a mean luminance in [0, 255].
    #[inline]
    #[must_use]
    pub fn glyph(&self, mean: f64) -> char {
        self.chars[self.index_for(mean)]
    }

    /// True if `ch` belongs to this ramp.
    #[must_use]
    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }

    /// Lightest glyph.
    #[must_use]
    pub fn lightest(&self) -> char {
        self.chars[0]
    }

    /// Darkest glyph.
    #[must_use]
    pub fn darkest(&self) -> char {
        self.chars[self.chars.len() - 1]
    }
}

impl Default for Ramp {
    fn default() -> Self {
        Self::standard()
    }
}
