//! Per-vector color palette.
//!
//! A [`Palette`] is a fixed, non-empty, ordered list of colors. The first
//! entry is the neutral color every vector uses when coloring is disabled.
//! A [`PaletteCursor`] walks the palette during one render pass and wraps
//! back to the first entry after the last one.
//!
//! # Example
//!
//! ```
//! # use phasor_core::palette::Palette;
//! let palette = Palette::default();
//! let mut cursor = palette.cursor();
//!
//! let first = cursor.current();
//! for _ in 0..palette.len() {
//!     cursor.advance();
//! }
//! assert_eq!(cursor.current(), first);
//! ```

use log::trace;

use crate::color::Color;

/// The default palette, darkest (neutral) entry first.
pub const DEFAULT_PALETTE: [&str; 7] = [
    "#222222", "#cc4444", "#44cc44", "#4444cc", "#44cccc", "#cccc44", "#cc44cc",
];

/// An ordered, non-empty set of colors cycled through per vector.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Creates a palette from the given colors.
    ///
    /// # Errors
    ///
    /// Returns an error if `colors` is empty.
    pub fn new(colors: Vec<Color>) -> Result<Self, String> {
        if colors.is_empty() {
            return Err("palette must contain at least one color".to_string());
        }
        Ok(Self { colors })
    }

    /// Parses a palette from CSS color strings.
    ///
    /// # Errors
    ///
    /// Returns an error if any entry is not a valid color or the list is empty.
    pub fn parse<S: AsRef<str>>(colors: &[S]) -> Result<Self, String> {
        let colors = colors
            .iter()
            .map(|color| Color::new(color.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(colors)
    }

    /// Returns the neutral color used when coloring is disabled.
    pub fn neutral(&self) -> Color {
        self.colors[0]
    }

    /// Returns the color at `index`, wrapping modulo the palette length.
    pub fn get(&self, index: usize) -> Color {
        self.colors[index % self.colors.len()]
    }

    /// Returns the number of colors in the palette.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`; palettes cannot be empty.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Returns a fresh cursor positioned on the first color.
    pub fn cursor(&self) -> PaletteCursor<'_> {
        PaletteCursor {
            palette: self,
            index: 0,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::parse(&DEFAULT_PALETTE).expect("default palette colors are valid")
    }
}

/// A position in a [`Palette`], local to one render pass.
#[derive(Debug, Clone)]
pub struct PaletteCursor<'a> {
    palette: &'a Palette,
    index: usize,
}

impl PaletteCursor<'_> {
    /// Returns the color under the cursor.
    pub fn current(&self) -> Color {
        self.palette.colors[self.index]
    }

    /// Returns the current index into the palette.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Moves to the next color, wrapping to the first after the last.
    pub fn advance(&mut self) {
        self.index += 1;
        if self.index == self.palette.len() {
            trace!(len = self.palette.len(); "Palette cursor wrapped");
            self.index = 0;
        }
    }
}
