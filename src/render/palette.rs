//! Priority colors.
//!
//! An 11-step diverging palette, hottest first. Index `10 - priority`, so
//! the most urgent elements are deep red and unclassified ones are grey.

use crate::priority::Priority;

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// `#rrggbb`, dropping alpha.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

pub const PRIORITY_COLORS: [Rgba; 11] = [
    Rgba::rgb(0x9e, 0x01, 0x42),
    Rgba::rgb(0xd5, 0x3e, 0x4f),
    Rgba::rgb(0xf4, 0x6d, 0x43),
    Rgba::rgb(0xfd, 0xae, 0x61),
    Rgba::rgb(0xfe, 0xe0, 0x8b),
    Rgba::rgb(0xe6, 0xf5, 0x98),
    Rgba::rgb(0xab, 0xdd, 0xa4),
    Rgba::rgb(0x66, 0xc2, 0xa5),
    Rgba::rgb(0x32, 0x88, 0xbd),
    Rgba::rgb(0x5e, 0x4f, 0xa2),
    Rgba::rgb(0xcc, 0xcc, 0xcc),
];

#[inline]
pub fn color_for(priority: Priority) -> Rgba {
    PRIORITY_COLORS[priority.palette_index()]
}
