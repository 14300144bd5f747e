//! Test fixtures and constants.

use image::{Rgb, RgbImage};

/// Sample nfp documents
pub mod nfp {
    /// Every code once, left to right
    pub const ALL_CODES: &str = "0123456789abcdef";

    /// Red border around a black centre
    pub const FRAME: &str = "eeeee\nefffe\neeeee";

    /// Rows of unequal length
    pub const RAGGED: &str = "fff\nf\nff";

    /// Contains a character outside the palette on line 2
    pub const INVALID: &str = "000\n0x0";
}

/// ComputerCraft colours used by the fixtures
pub mod colors {
    use image::Rgb;

    pub const WHITE: Rgb<u8> = Rgb([240, 240, 240]);
    pub const RED: Rgb<u8> = Rgb([204, 76, 76]);
    pub const BLUE: Rgb<u8> = Rgb([51, 102, 204]);
    pub const BLACK: Rgb<u8> = Rgb([17, 17, 17]);
}

/// Single-colour image
pub fn solid(width: u32, height: u32, color: Rgb<u8>) -> RgbImage {
    RgbImage::from_pixel(width, height, color)
}

/// Left half red, right half blue
pub fn split(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, _| {
        if x < width / 2 {
            colors::RED
        } else {
            colors::BLUE
        }
    })
}

/// Horizontal grey ramp from black to white
pub fn gradient(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, _| {
        let v = (x * 255 / (width - 1).max(1)) as u8;
        Rgb([v, v, v])
    })
}
