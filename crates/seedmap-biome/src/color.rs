//! RGB color used for biome map rendering.

use std::fmt;

use serde::{Deserialize, Serialize};

/// 8-bit-per-channel RGB color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BiomeColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl BiomeColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Packs the color as `0x00RRGGBB`.
    pub const fn to_rgb_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

/// Formats as a `#rrggbb` hex string.
impl fmt::Display for BiomeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_rgb() {
        assert_eq!(BiomeColor::new(0x12, 0x34, 0x56).to_rgb_u32(), 0x0012_3456);
        assert_eq!(BiomeColor::new(255, 255, 255).to_rgb_u32(), 0x00FF_FFFF);
    }

    #[test]
    fn test_display_hex() {
        assert_eq!(BiomeColor::new(141, 179, 96).to_string(), "#8db360");
        assert_eq!(BiomeColor::default().to_string(), "#000000");
    }
}
