//! Color palette: turns the opaque indices stored on the board into RGB.

use crate::fb::Rgb;
use crate::types::ColorIndex;

/// Fixed table of colors indexed by [`ColorIndex`].
///
/// Index 0 is the light background color and index 1 the dark one; pieces
/// use the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    colors: [Rgb; ColorIndex::PALETTE_LEN as usize],
}

impl Palette {
    pub const CLASSIC: Palette = Palette {
        colors: [
            Rgb::new(255, 255, 255),
            Rgb::new(0, 0, 0),
            Rgb::new(120, 37, 179),
            Rgb::new(100, 179, 179),
            Rgb::new(80, 34, 22),
            Rgb::new(255, 68, 51),
            Rgb::new(80, 134, 22),
            Rgb::new(180, 34, 22),
            Rgb::new(180, 34, 122),
        ],
    };

    pub const fn new(colors: [Rgb; ColorIndex::PALETTE_LEN as usize]) -> Self {
        Self { colors }
    }

    /// Panics on an index past the end of the palette.
    pub fn rgb(&self, color: ColorIndex) -> Rgb {
        self.colors[color.index()]
    }

    pub fn light(&self) -> Rgb {
        self.colors[0]
    }

    pub fn dark(&self) -> Rgb {
        self.colors[1]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::CLASSIC
    }
}
