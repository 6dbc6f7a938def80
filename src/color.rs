use egui::Color32;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::error::ColorParseError;

/// Source of fallback colors for palette slots nobody configured.
#[derive(Debug, Clone)]
pub struct ColorGenerator {
    rng: StdRng,
}

impl ColorGenerator {
    pub fn from_entropy() -> Self {
        ColorGenerator {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        ColorGenerator {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// A random fully opaque color. RGB is drawn from `0x000000..0xFFFFFF`,
    /// so pure white is never produced.
    pub fn next_color(&mut self) -> Color32 {
        let rgb: u32 = self.rng.gen_range(0..0x00FF_FFFF);
        let [_, r, g, b] = rgb.to_be_bytes();
        Color32::from_rgb(r, g, b)
    }
}

impl Default for ColorGenerator {
    fn default() -> Self {
        ColorGenerator::from_entropy()
    }
}

pub fn parse_hex(s: &str) -> Result<Color32, ColorParseError> {
    let digits = s
        .trim()
        .strip_prefix('#')
        .ok_or_else(|| ColorParseError::MissingHash(s.to_owned()))?;

    let value = u32::from_str_radix(digits, 16)
        .map_err(|_| ColorParseError::InvalidDigits(s.to_owned()))?;

    let [a, r, g, b] = match digits.len() {
        6 => (0xFF00_0000 | value).to_be_bytes(),
        8 => value.to_be_bytes(),
        len => return Err(ColorParseError::InvalidLength(s.to_owned(), len)),
    };

    Ok(Color32::from_rgba_unmultiplied(r, g, b, a))
}
