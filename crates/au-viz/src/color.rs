//! Color indices of the standard HEP color table.

use au_core::ColorIndex;
use rand::Rng;

pub const WHITE: ColorIndex = 0;
pub const BLACK: ColorIndex = 1;
pub const RED: ColorIndex = 2;
pub const GREEN: ColorIndex = 3;
pub const BLUE: ColorIndex = 4;
pub const YELLOW: ColorIndex = 5;
pub const MAGENTA: ColorIndex = 6;
pub const CYAN: ColorIndex = 7;

/// Draw a color index uniformly from `[1, 1000)`.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> ColorIndex {
    rng.random_range(1..1000)
}
