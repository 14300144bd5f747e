//! Palette struct with code lookup and nearest-color matching.
//!
//! The nfp format has exactly 16 cell codes, `0`-`9` then `a`-`f`. Each code
//! names one palette entry by index; the colors themselves come from the
//! terminal's palette, which for ComputerCraft defaults to [`COMPUTERCRAFT`].

use std::collections::HashSet;

use image::Rgb;

use super::error::PaletteError;

/// Number of entries in every nfp palette.
pub const PALETTE_SIZE: usize = 16;

/// Cell codes in palette order. Index `i` is written as `CODES[i]`.
pub const CODES: [char; PALETTE_SIZE] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f',
];

/// Index of the background entry used to pad short rows.
pub const BACKGROUND_INDEX: usize = 0;

/// ComputerCraft's default terminal palette.
///
/// ```text
///  0 white       4 yellow      8 light gray  c brown
///  1 orange      5 lime        9 cyan        d green
///  2 magenta     6 pink        a purple      e red
///  3 light blue  7 gray        b blue        f black
/// ```
pub static COMPUTERCRAFT: Palette = Palette {
    colors: [
        Rgb([240, 240, 240]),
        Rgb([242, 178, 51]),
        Rgb([229, 127, 216]),
        Rgb([153, 178, 242]),
        Rgb([222, 222, 108]),
        Rgb([127, 204, 25]),
        Rgb([242, 178, 204]),
        Rgb([76, 76, 76]),
        Rgb([153, 153, 153]),
        Rgb([76, 153, 178]),
        Rgb([178, 102, 229]),
        Rgb([51, 102, 204]),
        Rgb([127, 102, 76]),
        Rgb([87, 166, 78]),
        Rgb([204, 76, 76]),
        Rgb([17, 17, 17]),
    ],
};

/// An nfp palette: one RGB color per cell code.
///
/// Codes are fixed by the format; only the colors vary. Matching uses squared
/// Euclidean distance in RGB channel space with ties going to the lowest
/// index, so quantizing a color that is already in the palette always
/// returns that entry.
///
/// # Example
///
/// ```
/// use image::Rgb;
/// use nfp_codec::palette::COMPUTERCRAFT;
///
/// assert_eq!(COMPUTERCRAFT.nearest_code(Rgb([0, 0, 0])), 'f');
/// assert_eq!(COMPUTERCRAFT.color_for_code('e').unwrap(), Rgb([204, 76, 76]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: [Rgb<u8>; PALETTE_SIZE],
}

impl Palette {
    /// Create a palette from 16 colors in code order.
    ///
    /// # Errors
    ///
    /// - [`PaletteError::WrongLength`] unless exactly 16 colors are given
    /// - [`PaletteError::DuplicateColor`] if two entries share a color, which
    ///   would make nearest-color matching ambiguous
    pub fn new(colors: &[Rgb<u8>]) -> Result<Self, PaletteError> {
        let colors: [Rgb<u8>; PALETTE_SIZE] =
            colors.try_into().map_err(|_| PaletteError::WrongLength {
                expected: PALETTE_SIZE,
                actual: colors.len(),
            })?;

        let mut seen = HashSet::new();
        for (i, color) in colors.iter().enumerate() {
            if !seen.insert(color.0) {
                return Err(PaletteError::DuplicateColor { index: i });
            }
        }

        Ok(Self { colors })
    }

    /// Number of palette entries (always 16).
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 16`.
    #[inline]
    pub fn color(&self, index: usize) -> Rgb<u8> {
        self.colors[index]
    }

    /// Code character for `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 16`.
    #[inline]
    pub fn code(&self, index: usize) -> char {
        CODES[index]
    }

    /// Palette index named by a code character.
    ///
    /// Codes are the same for every palette, so this needs no instance.
    pub fn index_of(code: char) -> Result<usize, PaletteError> {
        CODES
            .iter()
            .position(|&c| c == code)
            .ok_or(PaletteError::InvalidCode { code })
    }

    /// Color named by a code character.
    pub fn color_for_code(&self, code: char) -> Result<Rgb<u8>, PaletteError> {
        Self::index_of(code).map(|i| self.colors[i])
    }

    /// The background code, used for cells missing from short rows.
    #[inline]
    pub fn background_code(&self) -> char {
        CODES[BACKGROUND_INDEX]
    }

    /// The background color.
    #[inline]
    pub fn background_color(&self) -> Rgb<u8> {
        self.colors[BACKGROUND_INDEX]
    }

    /// Find the nearest palette entry to a (possibly out-of-range) color.
    ///
    /// Channels are on the 0..=255 scale but may fall outside it when
    /// carrying diffused error. Returns `(index, squared_distance)`.
    pub fn find_nearest(&self, color: [f32; 3]) -> (usize, f32) {
        let mut best_idx = 0;
        let mut best_dist = f32::INFINITY;

        for (i, entry) in self.colors.iter().enumerate() {
            let dr = color[0] - entry.0[0] as f32;
            let dg = color[1] - entry.0[1] as f32;
            let db = color[2] - entry.0[2] as f32;
            let dist = dr * dr + dg * dg + db * db;
            // strict less-than keeps the lowest index on ties
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
            }
        }

        (best_idx, best_dist)
    }

    /// Index of the palette entry nearest to an 8-bit color.
    #[inline]
    pub fn nearest_index(&self, color: Rgb<u8>) -> usize {
        let [r, g, b] = color.0;
        self.find_nearest([r as f32, g as f32, b as f32]).0
    }

    /// Code of the palette entry nearest to an 8-bit color.
    #[inline]
    pub fn nearest_code(&self, color: Rgb<u8>) -> char {
        CODES[self.nearest_index(color)]
    }
}

impl Default for Palette {
    fn default() -> Self {
        COMPUTERCRAFT.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn grey_palette() -> Palette {
        let colors: Vec<Rgb<u8>> = (0..16u8).map(|i| Rgb([i * 17, i * 17, i * 17])).collect();
        Palette::new(&colors).unwrap()
    }

    #[test]
    fn test_codes_are_unique_lowercase_hex() {
        let unique: HashSet<char> = CODES.iter().copied().collect();
        assert_eq!(unique.len(), PALETTE_SIZE);
        for (i, &code) in CODES.iter().enumerate() {
            assert_eq!(code.to_digit(16), Some(i as u32));
            assert!(!code.is_ascii_uppercase());
        }
    }

    #[test]
    fn test_computercraft_round_trips_every_code() {
        for (i, &code) in CODES.iter().enumerate() {
            let color = COMPUTERCRAFT.color_for_code(code).unwrap();
            assert_eq!(COMPUTERCRAFT.nearest_index(color), i);
            assert_eq!(COMPUTERCRAFT.nearest_code(color), code);
        }
    }

    #[test]
    fn test_background_is_white_entry() {
        assert_eq!(COMPUTERCRAFT.background_code(), '0');
        assert_eq!(COMPUTERCRAFT.background_color(), Rgb([240, 240, 240]));
    }

    #[test]
    fn test_pure_black_and_white_map_to_extremes() {
        assert_eq!(COMPUTERCRAFT.nearest_code(Rgb([255, 255, 255])), '0');
        assert_eq!(COMPUTERCRAFT.nearest_code(Rgb([0, 0, 0])), 'f');
    }

    #[test]
    fn test_invalid_code() {
        assert_eq!(
            COMPUTERCRAFT.color_for_code('g'),
            Err(PaletteError::InvalidCode { code: 'g' })
        );
        // codes are lowercase only
        assert_eq!(
            Palette::index_of('A'),
            Err(PaletteError::InvalidCode { code: 'A' })
        );
        assert_eq!(
            Palette::index_of(' '),
            Err(PaletteError::InvalidCode { code: ' ' })
        );
    }

    #[test]
    fn test_tie_breaks_to_lowest_index() {
        let palette = grey_palette();
        // 8.5 is equidistant from entries 0 and 1
        let (idx, _) = palette.find_nearest([8.5, 8.5, 8.5]);
        assert_eq!(idx, 0);
        let (idx, _) = palette.find_nearest([25.5, 25.5, 25.5]);
        assert_eq!(idx, 1);
    }

    #[test]
    fn test_find_nearest_accepts_out_of_range() {
        let palette = grey_palette();
        assert_eq!(palette.find_nearest([-40.0, -40.0, -40.0]).0, 0);
        assert_eq!(palette.find_nearest([400.0, 400.0, 400.0]).0, 15);
    }

    #[test]
    fn test_new_wrong_length() {
        let colors = [Rgb([0, 0, 0]), Rgb([255, 255, 255])];
        assert_eq!(
            Palette::new(&colors),
            Err(PaletteError::WrongLength {
                expected: 16,
                actual: 2
            })
        );
    }

    #[test]
    fn test_new_duplicate_color() {
        let mut colors: Vec<Rgb<u8>> = (0..16u8).map(|i| Rgb([i, 0, 0])).collect();
        colors[9] = colors[4];
        assert_eq!(
            Palette::new(&colors),
            Err(PaletteError::DuplicateColor { index: 9 })
        );
    }

    #[test]
    fn test_default_is_computercraft() {
        assert_eq!(Palette::default(), COMPUTERCRAFT);
        assert_eq!(Palette::default().len(), 16);
        assert!(!Palette::default().is_empty());
    }
}
